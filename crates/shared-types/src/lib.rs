pub mod auth;
pub mod config;
pub mod contact;
pub mod error;
pub mod feature_flags;
pub mod judgment;

pub use auth::*;
pub use config::*;
pub use contact::*;
pub use error::*;
pub use feature_flags::*;
pub use judgment::*;
