use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::AppError;
use std::time::Duration;

/// JSON-over-HTTP client bound to one service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POST `body` as JSON to `path` and decode a JSON reply.
    ///
    /// Non-2xx replies are parsed as a structured `AppError` when the body
    /// carries one, otherwise mapped from the status code.
    pub async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, AppError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        let request = self.http.post(&url).json(body);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request.send().await.map_err(|e| map_transport_error(&url, e))?;
        let status = response.status();
        let text = response.text().await.map_err(|e| map_transport_error(&url, e))?;

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "service returned an error");
            return Err(error_from_response(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| {
            tracing::warn!(url = %url, error = %e, "could not decode service response");
            AppError::decode(format!("Unexpected response from {url}: {e}"))
        })
    }
}

fn map_transport_error(url: &str, err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        tracing::warn!(url = %url, "request timed out");
        AppError::timeout(format!("Request to {url} timed out"))
    } else if err.is_decode() {
        AppError::decode(err.to_string())
    } else {
        tracing::warn!(url = %url, error = %err, "request failed");
        AppError::transport(err.to_string())
    }
}

/// Build an `AppError` from a non-2xx reply.
pub fn error_from_response(status: u16, body: &str) -> AppError {
    if let Some(err) = AppError::from_server_error(body) {
        return err;
    }
    let message = match body.trim() {
        "" => format!("Service responded with status {status}"),
        text => text.to_string(),
    };
    AppError::from_status(status, message)
}
