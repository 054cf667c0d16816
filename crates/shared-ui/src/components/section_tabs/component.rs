use dioxus::prelude::*;

use crate::detail::{scroll_script, BodySection, SectionNav, BODY_SECTIONS};

/// Tab strip over the seven judgment body sections. Clicking a tab
/// highlights it and smooth-scrolls to the section; the highlight does not
/// follow manual scrolling.
#[component]
pub fn SectionTabs(#[props(default)] initial: Option<BodySection>) -> Element {
    let mut tabs = use_signal(|| {
        let mut tabs = SectionNav::default();
        if let Some(section) = initial {
            tabs.select(section);
        }
        tabs
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        nav { class: "section-tabs", role: "tablist",
            for section in BODY_SECTIONS {
                button {
                    key: "{section.anchor()}",
                    class: "section-tab",
                    role: "tab",
                    r#type: "button",
                    "aria-selected": if tabs.read().is_active(section) { "true" } else { "false" },
                    "data-active": tabs.read().is_active(section),
                    "aria-controls": section.anchor(),
                    onclick: move |_| {
                        let anchor = tabs.write().select(section);
                        document::eval(&scroll_script(anchor));
                    },
                    "{section.title()}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_all_tabs_with_issue_active() {
        fn app() -> Element {
            rsx! { SectionTabs {} }
        }
        let html = render(app);
        for section in BODY_SECTIONS {
            assert!(html.contains(section.title()), "{}", section.title());
        }
        let issue = html.find("Issue").unwrap();
        let active = html.find(r#"data-active="true""#).unwrap();
        assert!(active < issue);
        assert_eq!(html.matches(r#"data-active="true""#).count(), 1);
    }

    #[test]
    fn initial_section_is_highlighted() {
        fn app() -> Element {
            rsx! { SectionTabs { initial: BodySection::Facts } }
        }
        let html = render(app);
        let active = html.find(r#"data-active="true""#).unwrap();
        let facts = html.find(">Facts<").unwrap();
        let held = html.find(">Held<").unwrap();
        assert!(held < active && active < facts);
    }
}
