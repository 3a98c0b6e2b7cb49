use crate::api::{HttpBackend, MedicalBackend};
use crate::models::ChatSession;
use crate::types::{ChatMessage, Role};
use crate::views::shared::use_pane_scroller;
use dioxus::events::Key;
use dioxus::prelude::*;

pub const CHAT_WINDOW_ID: &str = "chat-window";

fn avatar(role: Role) -> &'static str {
    match role {
        Role::User => "🧑",
        Role::Assistant => "🤖",
    }
}

/// Transcript signal plus the backend it sends to.
#[derive(Clone, Copy, PartialEq)]
pub struct ChatController {
    session: Signal<ChatSession>,
    backend: Signal<HttpBackend>,
}

impl ChatController {
    pub fn session(&self) -> Signal<ChatSession> {
        self.session
    }

    /// Starts one ask cycle. Blank text changes nothing and returns `false`.
    pub fn send(mut self, text: &str) -> bool {
        let Some(question) = self.session.with_mut(|s| s.begin(text)) else {
            return false;
        };

        let client = self.backend.peek().clone();
        let mut session = self.session;
        spawn(async move {
            let outcome = client.ask(&question).await;
            session.with_mut(|s| s.settle(outcome));
        });
        true
    }
}

/// Chat state for one page, talking to the backend in context.
pub fn use_chat() -> ChatController {
    let backend = use_context::<Signal<HttpBackend>>();
    let session = use_signal(ChatSession::new);
    ChatController { session, backend }
}

#[component]
pub fn ChatView() -> Element {
    let chat = use_chat();
    rsx! {
        ChatPane { chat }
    }
}

#[component]
pub fn ChatPane(chat: ChatController) -> Element {
    let session = chat.session();
    let mut input = use_signal(String::new);
    let scroller = use_pane_scroller();

    use_effect(move || {
        let _ = session.read();
        scroller.pin_to_bottom(CHAT_WINDOW_ID);
    });

    let mut send_input = move || {
        let text = input.peek().clone();
        if chat.send(&text) {
            input.set(String::new());
        }
    };

    let snapshot = session();

    rsx! {
        div { class: "page chat-page",
            header { class: "page-header",
                h1 { class: "page-title", "🩺 Medical AI Assistant" }
            }
            div { id: CHAT_WINDOW_ID, class: "scroll-pane chat-window hide-scrollbar",
                for (i, msg) in snapshot.messages().iter().enumerate() {
                    MessageRow { key: "{i}", message: msg.clone() }
                }
                if snapshot.is_busy() {
                    div { class: "message-row assistant typing",
                        span { class: "avatar", "{avatar(Role::Assistant)}" }
                        div { class: "bubble assistant", "Typing..." }
                    }
                }
            }
            div { class: "composer",
                input {
                    r#type: "text",
                    placeholder: "Ask a medical question...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter {
                            ev.prevent_default();
                            send_input();
                        }
                    },
                    autofocus: true,
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| send_input(),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let side = message.role.as_str();
    rsx! {
        div { class: format_args!("message-row {side}"),
            span { class: "avatar", "{avatar(message.role)}" }
            div { class: format_args!("bubble {side}"),
                pre { class: "bubble-text", "{message.content}" }
            }
        }
    }
}
