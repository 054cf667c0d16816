use dioxus::prelude::*;
use shared_ui::Card;

struct Post {
    title: &'static str,
    date: &'static str,
    excerpt: &'static str,
}

const POSTS: &[Post] = &[
    Post {
        title: "Reading a headnote in two minutes",
        date: "12 Sep 2026",
        excerpt: "How our editors structure issue, held and law points, and what to skip.",
    },
    Post {
        title: "Tracking a bench across High Courts",
        date: "28 Aug 2026",
        excerpt: "Set up a follow on a judge and see every reported order as it lands.",
    },
    Post {
        title: "What changed in the citator this quarter",
        date: "02 Aug 2026",
        excerpt: "Treatment labels now distinguish 'doubted' from 'not followed'.",
    },
];

#[component]
pub fn BlogTeaser() -> Element {
    rsx! {
        section { class: "section section-muted", id: "blog",
            div { class: "container",
                h2 { class: "section-heading", "From the blog" }
                div { class: "card-grid",
                    for post in POSTS {
                        Card { key: "{post.title}", title: post.title, subtitle: post.date,
                            p { "{post.excerpt}" }
                        }
                    }
                }
            }
        }
    }
}
