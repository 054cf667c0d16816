//! Clients for the two services the site talks to: the content lookup
//! service and the authentication service.

pub mod auth;
pub mod config;
pub mod content;
pub mod http;
pub mod storage;

pub use auth::AuthClient;
pub use content::ContentClient;
pub use http::ApiClient;
pub use storage::{MemoryTokenStore, TokenStore};
