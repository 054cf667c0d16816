use pretty_assertions::assert_eq;
use api::TokenStore;
use shared_types::{AppErrorKind, LoginRequest, ACCESS_TOKEN_KEY, SESSION_USER_KEY};

use crate::common::spawn_site;

fn credentials(password: &str) -> LoginRequest {
    LoginRequest {
        email: "ravi@example.com".into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn sign_in_survives_a_reload_of_the_store() {
    let site = spawn_site().await;
    let client = site.auth();

    client.login(&credentials("open-sesame")).await.unwrap();

    // A second client over the same store sees the session.
    let reloaded = api::AuthClient::new(
        site.base_url.clone(),
        std::time::Duration::from_secs(5),
        client.store().clone(),
    );
    let user = reloaded.session().unwrap();
    assert_eq!(user.name, "Ravi Iyer");
    assert_eq!(
        reloaded.access_token().as_deref(),
        Some("at-ravi@example.com")
    );

    reloaded.logout();
    assert_eq!(client.session(), None);
    assert_eq!(client.store().get(ACCESS_TOKEN_KEY), None);
}

#[tokio::test]
async fn failed_sign_in_leaves_store_empty() {
    let site = spawn_site().await;
    let client = site.auth();

    let err = client.login(&credentials("guess")).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert_eq!(err.message, "Invalid email or password");
    assert!(client.store().is_empty());
}

#[tokio::test]
async fn corrupt_stored_user_is_treated_as_signed_out() {
    let site = spawn_site().await;
    let client = site.auth();
    client.store().set(ACCESS_TOKEN_KEY, "at-x");
    client.store().set(SESSION_USER_KEY, "{not json");
    assert_eq!(client.session(), None);
}
