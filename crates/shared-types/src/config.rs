use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Endpoints of the two external services the site talks to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the content service (`/judgments/lookup` is appended).
    #[serde(default = "default_base_url")]
    pub content_base_url: String,
    /// Base URL of the authentication service (`/auth/...` is appended).
    #[serde(default = "default_base_url")]
    pub auth_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            content_base_url: default_base_url(),
            auth_base_url: default_base_url(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Display copy for one brand the site is served under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrandProfile {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    /// Hostnames (exact match, case-insensitive) that select this brand.
    #[serde(default)]
    pub hosts: Vec<String>,
}

impl Default for BrandProfile {
    fn default() -> Self {
        Self {
            key: "casefinder".to_string(),
            name: "CaseFinder".to_string(),
            tagline: "Every judgment, one search away.".to_string(),
            hosts: Vec::new(),
        }
    }
}

/// Top-level structure of `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub features: FeatureFlags,
    /// First entry is the fallback brand when no host matches.
    #[serde(default)]
    pub brands: Vec<BrandProfile>,
}

impl SiteConfig {
    /// Pick the brand for a hostname. Port suffixes are ignored.
    pub fn brand_for_host(&self, host: &str) -> BrandProfile {
        let host = host.split(':').next().unwrap_or_default().to_lowercase();
        self.brands
            .iter()
            .find(|b| b.hosts.iter().any(|h| h.eq_ignore_ascii_case(&host)))
            .or_else(|| self.brands.first())
            .cloned()
            .unwrap_or_default()
    }
}
