use crate::api::{HttpBackend, MedicalBackend};
use crate::models::LogConsole;
use crate::types::LogLevel;
use crate::views::shared::{BrowserNavigator, use_pane_scroller};
use dioxus::prelude::*;

pub const LOG_PANE_ID: &str = "log-pane";

#[component]
pub fn LogsView() -> Element {
    let backend = use_context::<Signal<HttpBackend>>();
    let mut console = use_signal(LogConsole::new);
    let mut limit_text = use_signal(String::new);
    let mut limit_invalid = use_signal(|| false);
    let scroller = use_pane_scroller();

    let mut refresh = move || {
        let query = console.with_mut(|c| c.begin_fetch());
        let client = backend.peek().clone();
        spawn(async move {
            let outcome = client.fetch_logs(&query).await;
            console.with_mut(|c| c.settle_fetch(outcome));
        });
    };

    // Initial load, unfiltered. Nothing in here is subscribed, so it runs once.
    use_effect(move || refresh());

    use_effect(move || {
        let _ = console.read();
        scroller.pin_to_bottom(LOG_PANE_ID);
    });

    let snapshot = console();
    let level_tag = snapshot.filters().level.map(LogLevel::as_str).unwrap_or("");
    let search_text = snapshot.filters().search.clone().unwrap_or_default();
    let limit_class = if limit_invalid() { "field-input narrow invalid" } else { "field-input narrow" };

    rsx! {
        div { class: "page logs-page",
            header { class: "page-header",
                h1 { class: "page-title", "📜 System Logs" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| refresh(),
                    "Refresh"
                }
            }
            div { class: "filters",
                div { class: "field",
                    label { class: "field-label", "Limit" }
                    input {
                        class: limit_class,
                        r#type: "number",
                        min: "0",
                        placeholder: "e.g., 100",
                        value: "{limit_text}",
                        oninput: move |ev| {
                            let raw = ev.value();
                            let parsed = console.with_mut(|c| c.set_limit(&raw));
                            limit_invalid.set(parsed.is_err());
                            limit_text.set(raw);
                        },
                    }
                }
                div { class: "field",
                    label { class: "field-label", "Level" }
                    select {
                        class: "field-input",
                        value: level_tag,
                        onchange: move |ev| console.with_mut(|c| c.set_level_tag(&ev.value())),
                        option { value: "", selected: level_tag.is_empty(), "All" }
                        for level in LogLevel::PICKER_ORDER {
                            option { value: level.as_str(), selected: level_tag == level.as_str(), "{level}" }
                        }
                    }
                }
                div { class: "field grow",
                    label { class: "field-label", "Search" }
                    input {
                        class: "field-input",
                        r#type: "text",
                        placeholder: "Search text...",
                        value: "{search_text}",
                        oninput: move |ev| console.with_mut(|c| c.set_search(ev.value())),
                    }
                }
                button {
                    class: "btn btn-download",
                    r#type: "button",
                    onclick: move |_| {
                        console.with(|c| c.download(&*backend.peek(), &BrowserNavigator));
                    },
                    "Download Logs"
                }
            }
            div { id: LOG_PANE_ID, class: "scroll-pane log-pane hide-scrollbar",
                pre { class: "log-text", "{snapshot.display_text()}" }
            }
        }
    }
}
