use crate::api::{ApiResult, AskReply, MedicalBackend};
use crate::types::ChatMessage;

/// Shown when the service answered without an `answer` field.
pub const NO_RESPONSE: &str = "No response from backend.";
/// Shown when the request or the response body failed.
pub const BACKEND_UNREACHABLE: &str = "⚠️ Backend not reachable.";

/// Transcript plus the busy flag of the chat page.
///
/// A request cycle is [`ChatSession::begin`] followed by
/// [`ChatSession::settle`]. Cycles may overlap; assistant turns land in the
/// order their requests resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    busy: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            busy: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Appends the user turn and marks the session busy. Returns the question
    /// to send, or `None` for blank input (nothing changes and nothing should
    /// be sent).
    pub fn begin(&mut self, question: &str) -> Option<String> {
        if question.trim().is_empty() {
            return None;
        }
        self.push(ChatMessage::user(question));
        self.busy = true;
        Some(question.to_string())
    }

    /// Appends the assistant turn for a finished request and clears the busy flag.
    pub fn settle(&mut self, outcome: ApiResult<AskReply>) {
        let content = match outcome {
            Ok(reply) => reply.answer.unwrap_or_else(|| NO_RESPONSE.to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "question failed");
                BACKEND_UNREACHABLE.to_string()
            }
        };
        self.push(ChatMessage::assistant(content));
        self.busy = false;
    }

    /// Runs one full cycle against `backend`. Returns `false` when the
    /// question was blank and no request was made.
    pub async fn submit<B>(&mut self, backend: &B, question: &str) -> bool
    where
        B: MedicalBackend + ?Sized,
    {
        let Some(question) = self.begin(question) else {
            return false;
        };
        let outcome = backend.ask(&question).await;
        self.settle(outcome);
        true
    }

    fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }
}
