use dioxus::prelude::*;
use shared_types::parse_judgment_id;
use shared_ui::{Button, MultiSelect, ResultsFilter, SearchableSelect, TextField};

use crate::routes::Route;

const COURTS: &[&str] = &[
    "Supreme Court of India",
    "Allahabad High Court",
    "Bombay High Court",
    "Calcutta High Court",
    "Delhi High Court",
    "Karnataka High Court",
    "Kerala High Court",
    "Madras High Court",
    "National Company Law Appellate Tribunal",
    "Income Tax Appellate Tribunal",
];

const SORT_OPTIONS: &[&str] = &["Relevance", "Newest first", "Oldest first"];

const FIRST_YEAR: u16 = 1950;
const LAST_YEAR: u16 = 2026;

fn courts() -> Vec<String> {
    COURTS.iter().map(|c| c.to_string()).collect()
}

fn years() -> Vec<String> {
    (FIRST_YEAR..=LAST_YEAR).rev().map(|y| y.to_string()).collect()
}

fn sort_options() -> Vec<String> {
    SORT_OPTIONS.iter().map(|s| s.to_string()).collect()
}

/// One-line description of the active filters.
fn filter_summary(court: Option<&str>, years: &[String], sort: Option<&str>) -> String {
    let court = court.unwrap_or("All courts");
    let years = match years {
        [] => "any year".to_string(),
        [one] => one.clone(),
        many => format!("{} years", many.len()),
    };
    let sort = sort.unwrap_or(SORT_OPTIONS[0]).to_lowercase();
    format!("{court} \u{00B7} {years} \u{00B7} sorted by {sort}")
}

/// Home-page search box: filter dropdowns plus a direct jump to a judgment
/// by its number.
#[component]
pub fn SearchTeaser() -> Element {
    let mut court = use_signal(|| Option::<String>::None);
    let mut selected_years = use_signal(Vec::<String>::new);
    let mut sort = use_signal(|| Option::<String>::None);
    let mut number = use_signal(String::new);
    let mut number_error = use_signal(|| Option::<String>::None);

    let summary = filter_summary(
        court.read().as_deref(),
        &selected_years.read(),
        sort.read().as_deref(),
    );

    let open_judgment = move |evt: FormEvent| {
        evt.prevent_default();
        match parse_judgment_id(&number()) {
            Ok(id) => {
                tracing::debug!(id, "opening judgment from search teaser");
                navigator().push(Route::JudgmentDetail { id: id.to_string() });
            }
            Err(err) => number_error.set(Some(err.message)),
        }
    };

    rsx! {
        section { class: "section search-teaser", id: "search",
            div { class: "container",
                h2 { class: "section-heading", "Find a judgment" }
                div { class: "search-filters",
                    SearchableSelect {
                        id: "search-court".to_string(),
                        items: courts(),
                        value: court(),
                        label: "Courts",
                        placeholder: "All courts",
                        on_change: move |next| court.set(next),
                    }
                    MultiSelect {
                        id: "search-years".to_string(),
                        items: years(),
                        value: selected_years(),
                        label: "Years",
                        placeholder: "Any year",
                        on_change: move |next| selected_years.set(next),
                    }
                    ResultsFilter {
                        id: "search-sort".to_string(),
                        items: sort_options(),
                        value: sort(),
                        label: "Sort",
                        placeholder: SORT_OPTIONS[0].to_string(),
                        on_change: move |next| sort.set(next),
                    }
                }
                p { class: "search-summary", "{summary}" }
                form { class: "search-jump", onsubmit: open_judgment,
                    TextField {
                        name: "judgment-number",
                        label: "Judgment number",
                        placeholder: "e.g. 4521",
                        value: number(),
                        error: number_error(),
                        on_input: move |value: String| {
                            number.set(value);
                            number_error.set(None);
                        },
                    }
                    Button { button_type: "submit", "Open judgment" }
                }
            }
        }
    }
}
