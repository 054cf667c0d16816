use shared_types::{
    ApiConfig, AppError, AuthResponse, LoginRequest, RegisterRequest, SessionUser,
    ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, SESSION_KEYS, SESSION_USER_KEY,
};
use std::time::Duration;

use crate::http::ApiClient;
use crate::storage::TokenStore;

const REGISTER_PATH: &str = "/auth/register";
const LOGIN_PATH: &str = "/auth/login";

/// Client for the authentication service. Successful calls persist the
/// session in `store`.
#[derive(Debug, Clone)]
pub struct AuthClient<S: TokenStore> {
    api: ApiClient,
    store: S,
}

impl<S: TokenStore> AuthClient<S> {
    pub fn new(base_url: impl Into<String>, timeout: Duration, store: S) -> Self {
        Self {
            api: ApiClient::new(base_url, timeout),
            store,
        }
    }

    pub fn from_config(config: &ApiConfig, store: S) -> Self {
        Self::new(
            config.auth_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
            store,
        )
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, AppError> {
        let response: AuthResponse = self.api.post_json(REGISTER_PATH, request).await?;
        self.persist(&response)?;
        tracing::info!("account registered");
        Ok(response)
    }

    #[tracing::instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, AppError> {
        let response: AuthResponse = self.api.post_json(LOGIN_PATH, request).await?;
        self.persist(&response)?;
        tracing::info!("signed in");
        Ok(response)
    }

    /// Clear every session key. Local only; the service is not notified.
    pub fn logout(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
        tracing::info!("signed out");
    }

    /// The persisted user, if a session exists.
    pub fn session(&self) -> Option<SessionUser> {
        self.store.get(ACCESS_TOKEN_KEY)?;
        let raw = self.store.get(SESSION_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY)
    }

    fn persist(&self, response: &AuthResponse) -> Result<(), AppError> {
        let user = serde_json::to_string(&response.user)
            .map_err(|e| AppError::internal(format!("Could not store session: {e}")))?;
        self.store.set(ACCESS_TOKEN_KEY, &response.access_token);
        self.store.set(REFRESH_TOKEN_KEY, &response.refresh_token);
        self.store.set(SESSION_USER_KEY, &user);
        Ok(())
    }
}
