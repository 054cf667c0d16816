use api::ContentClient;
use dioxus::core::Task;
use dioxus::prelude::*;
use shared_types::{parse_judgment_id, Judgment};
use shared_ui::detail::{
    body_sections, case_title, header_fields, trailing_sections, FetchState, FetchTracker,
};
use shared_ui::{Alert, Card, SectionCard, SectionTabs, Skeleton};

use crate::routes::Route;

/// Detail page for one judgment. Each change of `id` starts a new fetch;
/// responses for an earlier id are dropped by the tracker.
#[component]
pub fn JudgmentDetail(id: String) -> Element {
    let content: ContentClient = use_context();
    let mut tracker = use_signal(FetchTracker::<Judgment>::default);
    let mut inflight = use_signal(|| Option::<Task>::None);

    use_effect(use_reactive!(|id| {
        if let Some(previous) = inflight.write().take() {
            previous.cancel();
        }
        match parse_judgment_id(&id) {
            Ok(judgment_id) => {
                let ticket = tracker.write().begin(judgment_id);
                let client = content.clone();
                let task = spawn(async move {
                    let result = client.fetch_judgment(judgment_id).await;
                    tracker.write().settle(ticket, result);
                });
                inflight.set(Some(task));
            }
            Err(err) => {
                let ticket = tracker.write().begin(0);
                tracker.write().settle(ticket, Err(err));
            }
        }
    }));

    use_drop(move || {
        if let Ok(mut tracker) = tracker.try_write() {
            tracker.retire();
        }
    });

    let state = tracker.read().state().clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./judgment.css") }
        div { class: "container judgment-page",
            Link { to: Route::Home {}, class: "judgment-back", "\u{2190} Back to search" }
            match state {
                FetchState::Idle | FetchState::Loading => rsx! {
                    div { class: "judgment-loading",
                        Skeleton { lines: 2, class: "judgment-title-skeleton" }
                        Skeleton { lines: 6 }
                    }
                },
                FetchState::Failed(message) => rsx! {
                    Alert {
                        title: "Unable to load judgment",
                        message,
                        action_label: "Back to search".to_string(),
                        on_action: move |_| {
                            navigator().push(Route::Home {});
                        },
                    }
                },
                FetchState::Loaded(judgment) => rsx! {
                    JudgmentView { judgment }
                },
            }
        }
    }
}

#[component]
fn JudgmentView(judgment: Judgment) -> Element {
    let title = case_title(&judgment);
    let header = header_fields(&judgment.record);
    let body = body_sections(&judgment.record);
    let trailing = trailing_sections(&judgment.record);

    rsx! {
        h1 { class: "judgment-title", "{title}" }
        Card { class: "judgment-header",
            dl { class: "judgment-facts",
                for (label, value) in header {
                    div { key: "{label}",
                        dt { "{label}" }
                        dd { "{value}" }
                    }
                }
            }
        }
        SectionTabs {}
        div { class: "judgment-sections",
            for section in body.into_iter().chain(trailing) {
                SectionCard {
                    key: "{section.anchor}",
                    anchor: section.anchor,
                    title: section.title,
                    body: section.body,
                    available: section.available,
                }
            }
        }
    }
}
