use dioxus::prelude::*;

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    (
        "The headnotes save me an hour on every brief. I read the held points first and only open the full text when I need it.",
        "Adv. Meera Nair",
        "Kerala High Court",
    ),
    (
        "Our chambers moved off printed reporters entirely. Citation search is faster than the library index ever was.",
        "Adv. Rohit Kulkarni",
        "Bombay High Court",
    ),
    (
        "Alerts on tribunal orders mean our tax team hears about a ruling before the client calls.",
        "S. Iyer",
        "Partner, Iyer & Associates",
    ),
];

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        section { class: "section", id: "testimonials",
            div { class: "container",
                h2 { class: "section-heading", "Trusted by the bar" }
                div { class: "card-grid",
                    for (quote, name, role) in TESTIMONIALS {
                        figure { key: "{name}", class: "testimonial",
                            blockquote { "\u{201C}{quote}\u{201D}" }
                            figcaption {
                                strong { "{name}" }
                                span { "{role}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
