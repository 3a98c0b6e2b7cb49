//! Chat and log view models driven by in-process stub backends
//!
//! No network: every request is answered by the stub, which also counts calls.

use async_trait::async_trait;
use futures::channel::oneshot;
use futures::future::{Either, select};
use medassist::api::{ApiError, ApiResult, AskReply, LogQuery, MedicalBackend};
use medassist::models::{
    BACKEND_UNREACHABLE, ChatSession, LOGS_UNAVAILABLE, LogConsole, NO_RESPONSE, Navigator,
};
use medassist::types::{ChatMessage, LogLevel, Role};
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

const LOGS_ENDPOINT: &str = "http://127.0.0.1:5000/logs";

fn decode_error() -> ApiError {
    ApiError::Decode(serde_json::from_str::<serde_json::Value>("not json").unwrap_err())
}

/// Answers every call with a canned outcome and records what was asked.
#[derive(Default)]
struct StubBackend {
    answer: Option<String>,
    fail: bool,
    logs_body: String,
    questions: Mutex<Vec<String>>,
    log_queries: Mutex<Vec<LogQuery>>,
}

impl StubBackend {
    fn answering(answer: &str) -> Self {
        Self {
            answer: Some(answer.to_string()),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn with_logs(body: &str) -> Self {
        Self {
            logs_body: body.to_string(),
            ..Self::default()
        }
    }

    fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }

    fn log_queries(&self) -> Vec<LogQuery> {
        self.log_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl MedicalBackend for StubBackend {
    async fn ask(&self, question: &str) -> ApiResult<AskReply> {
        self.questions.lock().unwrap().push(question.to_string());
        if self.fail {
            return Err(decode_error());
        }
        Ok(AskReply {
            answer: self.answer.clone(),
        })
    }

    async fn fetch_logs(&self, query: &LogQuery) -> ApiResult<String> {
        self.log_queries.lock().unwrap().push(query.clone());
        if self.fail {
            return Err(decode_error());
        }
        Ok(self.logs_body.clone())
    }

    fn download_url(&self, query: &LogQuery) -> Url {
        query.download_url(&Url::parse(LOGS_ENDPOINT).unwrap())
    }
}

#[derive(Default)]
struct RecordingNavigator {
    opened: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn open_in_new_tab(&self, url: &Url) {
        self.opened.lock().unwrap().push(url.to_string());
    }
}

mod chat_tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_question_sends_nothing() {
        let backend = StubBackend::answering("unused");
        let mut session = ChatSession::new();

        assert!(!session.submit(&backend, "").await);
        assert!(!session.submit(&backend, "   \t").await);

        assert!(session.messages().is_empty());
        assert!(backend.questions().is_empty());
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_successful_cycle_adds_two_turns() {
        let backend = StubBackend::answering("X");
        let mut session = ChatSession::new();

        assert!(session.submit(&backend, "what is fever?").await);

        assert_eq!(
            session.messages(),
            &[
                ChatMessage::user("what is fever?"),
                ChatMessage::assistant("X"),
            ]
        );
        assert_eq!(backend.questions(), vec!["what is fever?".to_string()]);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_missing_answer_falls_back() {
        let backend = StubBackend::default();
        let mut session = ChatSession::new();

        session.submit(&backend, "hello").await;

        assert_eq!(session.messages()[1].content, NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_failure_yields_unreachable_notice() {
        let backend = StubBackend::failing();
        let mut session = ChatSession::new();

        session.submit(&backend, "what is fever?").await;

        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "⚠️ Backend not reachable.");
        assert_eq!(last.content, BACKEND_UNREACHABLE);
        assert!(!session.is_busy());
    }

    #[tokio::test]
    async fn test_session_stays_usable_after_failure() {
        let mut session = ChatSession::new();
        session.submit(&StubBackend::failing(), "one").await;
        session.submit(&StubBackend::answering("two"), "again").await;

        assert_eq!(session.messages().len(), 4);
        assert_eq!(session.messages()[3].content, "two");
    }
}

mod race_tests {
    use super::*;

    /// Holds each answer until the test releases it.
    #[derive(Default)]
    struct GatedBackend {
        gates: Mutex<HashMap<String, oneshot::Receiver<String>>>,
    }

    impl GatedBackend {
        fn gate(&self, question: &str) -> oneshot::Sender<String> {
            let (tx, rx) = oneshot::channel();
            self.gates.lock().unwrap().insert(question.to_string(), rx);
            tx
        }
    }

    #[async_trait]
    impl MedicalBackend for GatedBackend {
        async fn ask(&self, question: &str) -> ApiResult<AskReply> {
            let gate = self.gates.lock().unwrap().remove(question);
            let answer = match gate {
                Some(rx) => rx.await.ok(),
                None => None,
            };
            Ok(AskReply { answer })
        }

        async fn fetch_logs(&self, _query: &LogQuery) -> ApiResult<String> {
            Ok(String::new())
        }

        fn download_url(&self, query: &LogQuery) -> Url {
            query.download_url(&Url::parse(LOGS_ENDPOINT).unwrap())
        }
    }

    #[tokio::test]
    async fn test_replies_land_in_resolution_order() {
        let backend = GatedBackend::default();
        let first_gate = backend.gate("first");
        let second_gate = backend.gate("second");

        let mut session = ChatSession::new();
        let first = session.begin("first").unwrap();
        let second = session.begin("second").unwrap();
        let first_call = backend.ask(&first);
        let second_call = backend.ask(&second);

        second_gate.send("reply to second".to_string()).unwrap();
        match select(first_call, second_call).await {
            Either::Right((outcome, first_call)) => {
                session.settle(outcome);
                assert!(!session.is_busy());
                first_gate.send("reply to first".to_string()).unwrap();
                session.settle(first_call.await);
            }
            Either::Left(_) => panic!("first request resolved before it was released"),
        }

        let contents: Vec<_> = session
            .messages()
            .iter()
            .map(|msg| msg.content.as_str())
            .collect();
        assert_eq!(
            contents,
            ["first", "second", "reply to second", "reply to first"]
        );
    }
}

mod log_tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_console_fetches_without_filters() {
        let backend = StubBackend::with_logs("INFO boot\nINFO ready");
        let mut console = LogConsole::new();

        console.fetch(&backend).await;

        let queries = backend.log_queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0], LogQuery::default());
        assert_eq!(queries[0].to_query_string(), "");
        assert_eq!(console.display_text(), "INFO boot\nINFO ready");
    }

    #[tokio::test]
    async fn test_filters_shape_the_query() {
        let backend = StubBackend::with_logs("ERROR timeout");
        let mut console = LogConsole::new();
        console.set_limit("50").unwrap();
        console.set_level_tag("ERROR");
        console.set_search("timeout");

        console.fetch(&backend).await;

        let sent = backend.log_queries().pop().unwrap();
        assert_eq!(sent.to_query_string(), "limit=50&level=ERROR&search=timeout");
        assert!(!sent.to_query_string().contains("download"));
        assert_eq!(sent.level, Some(LogLevel::Error));
    }

    #[tokio::test]
    async fn test_failure_shows_notice() {
        let backend = StubBackend::failing();
        let mut console = LogConsole::new();

        console.fetch(&backend).await;

        assert_eq!(console.text(), "⚠️ Unable to load logs from backend.");
        assert_eq!(console.display_text(), LOGS_UNAVAILABLE);
        assert!(!console.is_busy());
    }

    #[test]
    fn test_download_opens_navigation_without_fetching() {
        let backend = StubBackend::default();
        let navigator = RecordingNavigator::default();
        let mut console = LogConsole::new();
        console.set_limit("50").unwrap();
        console.set_level(Some(LogLevel::Error));
        console.set_search("timeout");

        let url = console.download(&backend, &navigator);

        assert_eq!(
            url.query(),
            Some("limit=50&level=ERROR&search=timeout&download=1")
        );
        assert_eq!(*navigator.opened.lock().unwrap(), vec![url.to_string()]);
        assert!(backend.log_queries().is_empty());
        assert_eq!(console.text(), "");
    }
}
