use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBookOpen, LdBriefcase, LdFileText, LdScale, LdSearch,
};
use dioxus_free_icons::Icon;
use shared_ui::Card;

struct Offering {
    title: &'static str,
    summary: &'static str,
}

const SERVICES: &[Offering] = &[
    Offering {
        title: "Case law search",
        summary: "Full-text and citation search across reported and unreported judgments.",
    },
    Offering {
        title: "Editorial headnotes",
        summary: "Issue, held and law points drafted for every reportable decision.",
    },
    Offering {
        title: "Practice alerts",
        summary: "Follow a court, a statute or a bench and get new rulings the same day.",
    },
];

const FEATURES: &[Offering] = &[
    Offering {
        title: "Citator",
        summary: "See which later judgments followed, distinguished or overruled a case.",
    },
    Offering {
        title: "Statute linking",
        summary: "Every section cited in a judgment links to the bare act as amended.",
    },
    Offering {
        title: "Print-ready copies",
        summary: "Download certified-style copies with paragraph numbers for filing.",
    },
];

#[component]
pub fn Services() -> Element {
    rsx! {
        section { class: "section", id: "services",
            div { class: "container",
                h2 { class: "section-heading", "What we do" }
                p { class: "section-lead", "Research tools built around how advocates actually prepare a brief." }
                div { class: "card-grid",
                    for (i, service) in SERVICES.iter().enumerate() {
                        Card { key: "{service.title}", title: service.title,
                            span { class: "card-icon", {service_icon(i)} }
                            p { "{service.summary}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Features() -> Element {
    rsx! {
        section { class: "section section-muted", id: "features",
            div { class: "container",
                h2 { class: "section-heading", "Built for the courtroom" }
                div { class: "card-grid",
                    for (i, feature) in FEATURES.iter().enumerate() {
                        Card { key: "{feature.title}", title: feature.title,
                            span { class: "card-icon", {feature_icon(i)} }
                            p { "{feature.summary}" }
                        }
                    }
                }
            }
        }
    }
}

fn service_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdSearch> { icon: LdSearch, width: 24, height: 24 } },
        1 => rsx! { Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdBell> { icon: LdBell, width: 24, height: 24 } },
    }
}

fn feature_icon(index: usize) -> Element {
    match index {
        0 => rsx! { Icon::<LdScale> { icon: LdScale, width: 24, height: 24 } },
        1 => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 24, height: 24 } },
        _ => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 24, height: 24 } },
    }
}
