use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

use api::{AuthClient, ContentClient, MemoryTokenStore};

/// One judgment the mock library serves, with an optional response delay.
#[derive(Clone)]
pub struct Entry {
    pub record: Value,
    pub delay: Duration,
}

#[derive(Clone, Default)]
pub struct Library {
    entries: Arc<Mutex<HashMap<i64, Entry>>>,
    lookups: Arc<Mutex<Vec<i64>>>,
}

impl Library {
    pub fn insert(&self, id: i64, record: Value) {
        self.insert_delayed(id, record, Duration::ZERO);
    }

    pub fn insert_delayed(&self, id: i64, record: Value, delay: Duration) {
        self.entries
            .lock()
            .unwrap()
            .insert(id, Entry { record, delay });
    }

    /// Ids looked up so far, in arrival order.
    pub fn lookups(&self) -> Vec<i64> {
        self.lookups.lock().unwrap().clone()
    }
}

pub fn judgment(id: i64, appellant: &str, respondent: &str) -> Value {
    json!({
        "id": id,
        "citation": format!("({id}) SCC 1"),
        "court": "High Court of Kerala",
        "appellant": appellant,
        "respondent": respondent,
        "caseNo": format!("W.P.(C) {id}/2022"),
        "date": "2023-01-17",
        "issue": "Whether the acquisition lapsed.",
        "lawPoints": "Section 24(2), RFCTLARR Act",
        "held": "Acquisition deemed to have lapsed.",
        "facts": "   ",
        "disposition": "Writ petition allowed."
    })
}

async fn lookup(State(library): State<Library>, Json(body): Json<Value>) -> Response {
    let id = body["id"].as_i64().unwrap_or_default();
    library.lookups.lock().unwrap().push(id);
    let entry = library.entries.lock().unwrap().get(&id).cloned();
    match entry {
        Some(entry) => {
            tokio::time::sleep(entry.delay).await;
            Json(json!({ "results": [entry.record], "total": 1 })).into_response()
        }
        None => Json(json!({ "results": [], "total": 0 })).into_response(),
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    if body["password"] != "open-sesame" {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "kind": "Unauthorized", "message": "Invalid email or password" })),
        )
            .into_response();
    }
    Json(json!({
        "access_token": format!("at-{email}"),
        "refresh_token": format!("rt-{email}"),
        "user": { "name": "Ravi Iyer", "email": email }
    }))
    .into_response()
}

pub struct TestSite {
    pub library: Library,
    pub base_url: String,
}

impl TestSite {
    pub fn content(&self) -> ContentClient {
        ContentClient::new(self.base_url.clone(), Duration::from_secs(5))
    }

    pub fn auth(&self) -> AuthClient<MemoryTokenStore> {
        AuthClient::new(
            self.base_url.clone(),
            Duration::from_secs(5),
            MemoryTokenStore::new(),
        )
    }
}

pub async fn spawn_site() -> TestSite {
    let library = Library::default();
    let router = Router::new()
        .route("/judgments/lookup", post(lookup))
        .route("/auth/login", post(login))
        .with_state(library.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    TestSite {
        library,
        base_url: format!("http://{addr}"),
    }
}
