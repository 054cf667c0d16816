use dioxus::prelude::*;

use crate::routes::Route;
use crate::BrandState;

#[component]
pub fn Hero() -> Element {
    let brand: BrandState = use_context();
    let profile = brand.profile.read().clone();

    rsx! {
        section { class: "hero",
            div { class: "container hero-inner",
                p { class: "hero-eyebrow", "Legal research for Indian courts" }
                h1 { class: "hero-title", "{profile.tagline}" }
                p { class: "hero-lead",
                    "{profile.name} indexes judgments from the Supreme Court, every High Court and the major tribunals, "
                    "with headnotes, held points and case notes written by practising advocates."
                }
                div { class: "hero-actions",
                    Link { to: Route::Register {}, class: "hero-cta", "Start free trial" }
                    Link { to: Route::Contact {}, class: "hero-secondary", "Book a demo" }
                }
                dl { class: "hero-stats",
                    for (value, label) in HERO_STATS {
                        div { key: "{label}",
                            dt { "{value}" }
                            dd { "{label}" }
                        }
                    }
                }
            }
        }
    }
}

const HERO_STATS: [(&str, &str); 3] = [
    ("4.2 lakh+", "judgments indexed"),
    ("25", "High Courts covered"),
    ("Daily", "updates from the registry"),
];
