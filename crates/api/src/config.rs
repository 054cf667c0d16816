use shared_types::SiteConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// `config.toml` from the workspace root, embedded so the web build needs no
/// filesystem access.
const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse a config document. Falls back to defaults if it does not parse.
pub fn parse_config(contents: &str) -> SiteConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse config.toml, using defaults");
        SiteConfig::default()
    })
}

/// Replace both service base URLs, e.g. from `API_BASE_URL` at build time.
pub fn with_base_url_override(mut config: SiteConfig, base_url: Option<&str>) -> SiteConfig {
    if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
        let url = url.trim_end_matches('/').to_string();
        config.api.content_base_url = url.clone();
        config.api.auth_base_url = url;
    }
    config
}

/// The site configuration, parsed on first use.
pub fn site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(|| {
        let config = with_base_url_override(
            parse_config(EMBEDDED_CONFIG),
            option_env!("API_BASE_URL"),
        );
        tracing::info!(
            content = %config.api.content_base_url,
            auth = %config.api.auth_base_url,
            brands = config.brands.len(),
            "site config loaded"
        );
        config
    })
}
