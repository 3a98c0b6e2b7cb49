use crate::api::HttpBackend;
use crate::config::ApiConfig;
use crate::views::{ChatView, LogsView};
use dioxus::prelude::*;

const APP_CSS: Asset = asset!("/assets/app.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AppTab {
    Chat,
    Logs,
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(HttpBackend::new(ApiConfig::load())));
    let active_tab = use_signal(|| AppTab::Chat);

    rsx! {
        document::Link { rel: "stylesheet", href: APP_CSS }
        AppHeader { active_tab }
        TabPanels { active_tab }
    }
}

#[component]
fn AppHeader(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "header",
            div { class: "header-content",
                span { class: "header-wordmark", "MedAssist" }
                TabNavigation { active_tab }
            }
        }
    }
}

/// Both panels stay mounted so switching tabs keeps transcript and log text.
#[component]
fn TabPanels(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tab-panels",
            TabPanel {
                active_tab,
                tab: AppTab::Chat,
                children: rsx!( ChatView {} ),
            }
            TabPanel {
                active_tab,
                tab: AppTab::Logs,
                children: rsx!( LogsView {} ),
            }
        }
    }
}

#[component]
fn TabPanel(active_tab: Signal<AppTab>, tab: AppTab, children: Element) -> Element {
    let is_active = active_tab() == tab;
    let class_suffix = if is_active { "active" } else { "" };
    rsx! {
        div {
            class: format_args!("tab-panel {}", class_suffix),
            aria_hidden: (!is_active).to_string(),
            {children}
        }
    }
}

#[component]
fn TabNavigation(active_tab: Signal<AppTab>) -> Element {
    rsx! {
        div { class: "tabs",
            TabButton { active_tab, tab: AppTab::Chat, label: "Chat" }
            TabButton { active_tab, tab: AppTab::Logs, label: "Logs" }
        }
    }
}

#[component]
fn TabButton(active_tab: Signal<AppTab>, tab: AppTab, label: &'static str) -> Element {
    let mut active_tab = active_tab;
    let class = if active_tab() == tab {
        "tab active"
    } else {
        "tab"
    };
    rsx! {
        button {
            class: class,
            r#type: "button",
            onclick: move |_| active_tab.set(tab),
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;

    #[component]
    fn NavigationHarness(start: AppTab) -> Element {
        let active_tab = use_signal(|| start);
        rsx! {
            TabNavigation { active_tab }
        }
    }

    fn render_navigation(start: AppTab) -> String {
        let mut dom =
            VirtualDom::new_with_props(NavigationHarness, NavigationHarnessProps { start });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn tabs_are_keyboard_reachable_buttons() {
        let html = render_navigation(AppTab::Logs);
        assert!(!html.contains("<h1"));
        assert_eq!(html.matches("<button").count(), 2);
        assert_eq!(html.matches(r#"type="button""#).count(), 2);
        assert!(html.contains(">Chat</button>"));
        assert!(html.contains(">Logs</button>"));
    }

    #[test]
    fn only_the_active_tab_is_highlighted() {
        let html = render_navigation(AppTab::Logs);
        assert_eq!(html.matches(r#"class="tab active""#).count(), 1);
        assert_eq!(html.matches(r#"class="tab""#).count(), 1);
    }
}
