use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// Judgment id the mock service answers with an empty page.
#[allow(dead_code)]
pub const MISSING_ID: i64 = 404;
/// Judgment id whose record comes back without its key field.
#[allow(dead_code)]
pub const KEYLESS_ID: i64 = 410;
/// Judgment id that makes the mock service fail with a 500.
#[allow(dead_code)]
pub const BROKEN_ID: i64 = 500;
/// Judgment id answered only after `SLOW_DELAY`.
#[allow(dead_code)]
pub const SLOW_ID: i64 = 7;
#[allow(dead_code)]
pub const SLOW_DELAY: Duration = Duration::from_millis(1500);

/// Request bodies the mock service has received, in order.
#[derive(Clone, Default)]
pub struct Recorded {
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
    #[allow(dead_code)]
    pub fn all(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn push(&self, body: &Value) {
        self.bodies.lock().unwrap().push(body.clone());
    }
}

/// A running mock of the content and authentication services.
pub struct MockService {
    pub base_url: String,
    pub recorded: Recorded,
}

#[allow(dead_code)]
pub fn sample_record(id: i64) -> Value {
    json!({
        "id": id,
        "citation": format!("(2021) {id} SCC 1"),
        "court": "Supreme Court of India",
        "appellant": "State of Kerala",
        "respondent": "N. M. Thomas",
        "caseNo": format!("Civil Appeal No. {id} of 2020"),
        "date": "2021-03-04",
        "issue": "Whether reservation extends to promotions.",
        "lawPoints": "Article 16(4)",
        "headnotes": "",
        "held": "Appeal allowed.",
        "facts": null,
        "partiesContentions": "The State contended ...",
        "disposition": "Allowed",
        "judgment": "J U D G M E N T",
        "summary": "."
    })
}

async fn lookup(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.push(&body);
    let id = body.get("id").and_then(Value::as_i64).unwrap_or_default();
    match id {
        MISSING_ID => Json(json!({ "results": [], "total": 0 })).into_response(),
        KEYLESS_ID => {
            let mut record = sample_record(id);
            record.as_object_mut().unwrap().remove("id");
            Json(json!({ "results": [record], "total": 1 })).into_response()
        }
        BROKEN_ID => (StatusCode::INTERNAL_SERVER_ERROR, "database unavailable").into_response(),
        SLOW_ID => {
            tokio::time::sleep(SLOW_DELAY).await;
            Json(json!({ "results": [sample_record(id)], "total": 1 })).into_response()
        }
        _ => Json(json!({ "results": [sample_record(id)], "total": 1 })).into_response(),
    }
}

fn auth_ok(name: &str, email: &str) -> Response {
    Json(json!({
        "access_token": format!("access-{email}"),
        "refresh_token": format!("refresh-{email}"),
        "user": { "name": name, "email": email }
    }))
    .into_response()
}

async fn register(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.push(&body);
    let email = body["email"].as_str().unwrap_or_default().to_string();
    if email.starts_with("taken@") {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "kind": "ValidationError",
                "message": "Invalid input",
                "field_errors": { "email": "An account with this email already exists" }
            })),
        )
            .into_response();
    }
    auth_ok(body["name"].as_str().unwrap_or_default(), &email)
}

async fn login(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.push(&body);
    if body["password"] == "correct-horse" {
        auth_ok("Asha Menon", body["email"].as_str().unwrap_or_default())
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "kind": "Unauthorized", "message": "Invalid email or password" })),
        )
            .into_response()
    }
}

async fn contact(State(recorded): State<Recorded>, Json(body): Json<Value>) -> Response {
    recorded.push(&body);
    Json(json!({ "ok": true })).into_response()
}

/// Bind the mock on an ephemeral port and serve it in the background.
pub async fn spawn_mock_service() -> MockService {
    let recorded = Recorded::default();
    let router = Router::new()
        .route("/judgments/lookup", post(lookup))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/contact", post(contact))
        .with_state(recorded.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockService {
        base_url: format!("http://{addr}"),
        recorded,
    }
}
