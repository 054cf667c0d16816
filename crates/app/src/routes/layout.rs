use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMail, LdPhone, LdScale};
use dioxus_free_icons::Icon;

use crate::auth::{sign_out, use_auth, use_auth_client};
use crate::routes::Route;
use crate::BrandState;

/// Header, page body and footer shared by every route.
#[component]
pub fn SiteLayout() -> Element {
    let brand: BrandState = use_context();
    let mut auth = use_auth();
    let client = use_auth_client();
    let profile = brand.profile.read().clone();
    let user = auth.current_user.read().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand",
                Icon::<LdScale> { icon: LdScale, width: 22, height: 22 }
                span { "{profile.name}" }
            }
            nav { class: "site-nav",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Contact {}, "Contact" }
                if let Some(user) = user {
                    span { class: "site-user", "{user.name}" }
                    button {
                        class: "site-nav-button",
                        r#type: "button",
                        onclick: move |_| {
                            sign_out(&client, &mut auth);
                            navigator().push(Route::Home {});
                        },
                        "Sign out"
                    }
                } else {
                    Link { to: Route::Login {}, "Sign in" }
                    Link { to: Route::Register {}, class: "site-nav-cta", "Get started" }
                }
            }
        }
        main { class: "site-main", Outlet::<Route> {} }
        Footer { brand_name: profile.name.clone(), tagline: profile.tagline.clone() }
    }
}

#[component]
fn Footer(brand_name: String, tagline: String) -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-brand",
                p { class: "footer-name", "{brand_name}" }
                p { class: "footer-tagline", "{tagline}" }
            }
            div { class: "footer-links",
                Link { to: Route::Home {}, "Search judgments" }
                Link { to: Route::Contact {}, "Contact sales" }
                Link { to: Route::Register {}, "Create an account" }
            }
            div { class: "footer-contact",
                p { Icon::<LdMail> { icon: LdMail, width: 14, height: 14 } " support@casefinder.in" }
                p { Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 } " +91 484 400 1200" }
            }
        }
    }
}
