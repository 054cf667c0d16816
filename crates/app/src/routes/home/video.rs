use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlay;
use dioxus_free_icons::Icon;
use shared_ui::Modal;

const TOUR_VIDEO_URL: &str = "https://www.youtube-nocookie.com/embed/casefinder-tour";

/// Product tour teaser. The player opens in a scroll-locked modal.
#[component]
pub fn VideoSection() -> Element {
    let mut playing = use_signal(|| false);

    rsx! {
        section { class: "section section-muted", id: "tour",
            div { class: "container video-teaser",
                div {
                    h2 { class: "section-heading", "See it in two minutes" }
                    p { class: "section-lead", "A walk through search, headnotes and the citator." }
                }
                button {
                    class: "video-play",
                    r#type: "button",
                    "aria-label": "Play product tour",
                    onclick: move |_| playing.set(true),
                    Icon::<LdPlay> { icon: LdPlay, width: 56, height: 56 }
                }
            }
        }
        if playing() {
            Modal { title: "Product tour", on_close: move |_| playing.set(false),
                div { class: "video-frame",
                    iframe {
                        src: TOUR_VIDEO_URL,
                        title: "Product tour",
                        allow: "autoplay; encrypted-media",
                        "allowfullscreen": "true",
                    }
                }
            }
        }
    }
}
