use dioxus::prelude::*;

const TEAM: [(&str, &str); 4] = [
    ("Anand Varma", "Founder, former law clerk"),
    ("Lakshmi Pillai", "Head of editorial"),
    ("Farhan Qureshi", "Engineering lead"),
    ("Divya Rao", "Customer success"),
];

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn Team() -> Element {
    rsx! {
        section { class: "section", id: "team",
            div { class: "container",
                h2 { class: "section-heading", "The team" }
                div { class: "team-grid",
                    for (name, role) in TEAM {
                        div { key: "{name}", class: "team-member",
                            span { class: "team-avatar", "{initials(name)}" }
                            p { class: "team-name", "{name}" }
                            p { class: "team-role", "{role}" }
                        }
                    }
                }
            }
        }
    }
}
