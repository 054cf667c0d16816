use api::ContentClient;
use dioxus::prelude::*;
use shared_types::BrandProfile;

mod auth;
mod routes;
mod session;

use auth::{AuthState, SiteAuthClient};
use routes::Route;
use session::BrowserTokenStore;

/// Brand the site is currently rendered as. Resolved from the page host
/// once at startup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrandState {
    pub profile: Signal<BrandProfile>,
}

const SITE_CSS: Asset = asset!("/assets/site.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = api::config::site_config();

    use_context_provider(|| config.features.clone());
    use_context_provider(|| ContentClient::from_config(&config.api));

    let store = use_hook(BrowserTokenStore::default);
    let auth_client = use_context_provider(|| SiteAuthClient::from_config(&config.api, store));
    let mut auth = use_context_provider(AuthState::new);

    let brand = use_context_provider(|| BrandState {
        profile: Signal::new(config.brand_for_host("")),
    });

    // Resolve the brand from the page host and restore any saved session.
    use_hook(move || {
        let mut profile = brand.profile;
        spawn(async move {
            match document::eval("return window.location.host;").join::<String>().await {
                Ok(host) => {
                    let resolved = config.brand_for_host(&host);
                    tracing::info!(host = %host, brand = %resolved.key, "brand resolved");
                    profile.set(resolved);
                }
                Err(e) => tracing::debug!(error = ?e, "page host unavailable, keeping default brand"),
            }

            auth_client.store().hydrate().await;
            if let Some(user) = auth_client.session() {
                tracing::info!(email = %user.email, "session restored");
                auth.set_user(user);
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_CSS }
        document::Title { "{brand.profile.read().name}" }
        Router::<Route> {}
    }
}
