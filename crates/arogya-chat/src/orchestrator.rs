//! Chat orchestrator: routes each user turn to a map redirect or the
//! remote chat endpoint.
//!
//! Per-turn state machine:
//! `Idle -> AwaitingClassification -> {Redirecting | AwaitingServerResponse} -> Idle`.
//! Turns are serialized: `submit` takes `&mut self`, so a second submit
//! cannot interleave with a pending one and the transcript keeps submission
//! order.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use arogya_client::{ApiClient, ApiError};
use arogya_core::types::{Coordinate, HistoryEntry, Message, Specialty};
use arogya_geo::Locator;

use crate::classifier::classify;
use crate::error::ChatError;
use crate::session::ConversationSession;

/// Assistant text shown when no response was received at all.
const NETWORK_ERROR_TEXT: &str = "Network Error";

/// Prefix for server-reported failures, distinct from transport failures.
const SERVER_ERROR_PREFIX: &str = "Error: ";

/// The remote chat capability, decoupled from the HTTP client for tests.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn chat(&self, message: &str, position: Coordinate) -> Result<String, ApiError>;
}

#[async_trait]
impl ChatBackend for ApiClient {
    async fn chat(&self, message: &str, position: Coordinate) -> Result<String, ApiError> {
        ApiClient::chat(self, message, position).await
    }
}

/// Where the orchestrator is within the current turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    AwaitingClassification,
    Redirecting,
    AwaitingServerResponse,
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Navigate to the map after `delay`, so the user can read the redirect
    /// message first. No network call was made.
    Redirect {
        route: String,
        specialty: Specialty,
        delay: Duration,
    },
    /// The transcript gained an assistant message (response or error text).
    Answered,
}

/// Central coordinator owning the transcript for the current session.
pub struct ChatOrchestrator {
    session: ConversationSession,
    locator: Locator,
    backend: Box<dyn ChatBackend>,
    redirect_delay: Duration,
    state: TurnState,
}

impl ChatOrchestrator {
    pub fn new(
        session: ConversationSession,
        locator: Locator,
        backend: Box<dyn ChatBackend>,
        redirect_delay: Duration,
    ) -> Self {
        Self {
            session,
            locator,
            backend,
            redirect_delay,
            state: TurnState::Idle,
        }
    }

    /// Run one user turn.
    ///
    /// Appends the user message, then either synthesizes a map redirect (no
    /// network call) or asks the remote endpoint and appends its response.
    /// Every failure shape degrades to a visible assistant message; the
    /// state is `Idle` again on every exit path.
    pub async fn submit(&mut self, text: &str) -> Result<TurnOutcome, ChatError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.session.append(Message::user(trimmed));
        self.state = TurnState::AwaitingClassification;

        if let Some(intent) = classify(trimmed) {
            self.state = TurnState::Redirecting;
            let specialty = intent.specialty;
            info!(specialty = %specialty, "Location intent; redirecting to map");
            self.session
                .append(Message::map_redirect(redirect_text(specialty), specialty));
            self.state = TurnState::Idle;
            return Ok(TurnOutcome::Redirect {
                route: map_route(specialty),
                specialty,
                delay: self.redirect_delay,
            });
        }

        self.state = TurnState::AwaitingServerResponse;
        let position = self.locator.current().await;
        match self.backend.chat(trimmed, position).await {
            Ok(response) => {
                self.session.append(Message::assistant(response));
            }
            Err(ApiError::Server(message)) => {
                debug!(error = %message, "Chat endpoint reported failure");
                self.session
                    .append(Message::assistant(format!("{}{}", SERVER_ERROR_PREFIX, message)));
            }
            Err(e) => {
                debug!(error = %e, "Chat request failed in transit");
                self.session.append(Message::assistant(NETWORK_ERROR_TEXT));
            }
        }
        self.state = TurnState::Idle;
        Ok(TurnOutcome::Answered)
    }

    /// Append a stored consultation pair to the live transcript
    /// (the history-click behavior).
    pub fn import_history(&mut self, entry: &HistoryEntry) {
        self.session.append(Message::user(entry.message.clone()));
        self.session.append(Message::assistant(entry.response.clone()));
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    /// Wipe the session, reinstating the welcome message.
    pub fn clear(&mut self) {
        self.session.clear();
    }
}

/// The redirect announcement shown before navigating.
fn redirect_text(specialty: Specialty) -> String {
    match specialty {
        Specialty::All => {
            "I'll help you find hospitals near you! Redirecting to the map...".to_string()
        }
        other => format!(
            "I'll help you find hospitals for {} near you! Redirecting to the map...",
            other
        ),
    }
}

/// Map route for a specialty; the generic tag omits the query parameter.
fn map_route(specialty: Specialty) -> String {
    match specialty {
        Specialty::All => "/map".to_string(),
        other => format!("/map?specialty={}", other),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::session::MemoryStore;
    use arogya_geo::{FixedPosition, NoPosition, DEFAULT_POSITION};

    const WELCOME: &str = "Hello! I'm Arogya.";

    /// Scripted reply for the fake backend. `ApiError` is not `Clone`, so
    /// replies are described and materialized per call.
    enum Reply {
        Ok(&'static str),
        ServerError(&'static str),
        Unreachable,
    }

    /// In-memory backend recording every call.
    struct FakeBackend {
        replies: Mutex<VecDeque<Reply>>,
        calls: Mutex<Vec<(String, Coordinate)>>,
        delay: Option<Duration>,
    }

    impl FakeBackend {
        fn new(replies: Vec<Reply>) -> Self {
            Self {
                replies: Mutex::new(replies.into()),
                calls: Mutex::new(Vec::new()),
                delay: None,
            }
        }

        fn slow(replies: Vec<Reply>, delay: Duration) -> Self {
            Self {
                delay: Some(delay),
                ..Self::new(replies)
            }
        }
    }

    #[async_trait]
    impl ChatBackend for &'static FakeBackend {
        async fn chat(&self, message: &str, position: Coordinate) -> Result<String, ApiError> {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.calls
                .lock()
                .unwrap()
                .push((message.to_string(), position));
            match self.replies.lock().unwrap().pop_front() {
                Some(Reply::Ok(text)) => Ok(text.to_string()),
                Some(Reply::ServerError(msg)) => Err(ApiError::Server(msg.to_string())),
                Some(Reply::Unreachable) | None => {
                    Err(ApiError::Decode("connection refused".to_string()))
                }
            }
        }
    }

    fn orchestrator(backend: &'static FakeBackend) -> ChatOrchestrator {
        let session = ConversationSession::new(Box::new(MemoryStore::new()), WELCOME);
        let locator = Locator::with_defaults(Box::new(NoPosition));
        ChatOrchestrator::new(session, locator, Box::new(backend), Duration::from_millis(0))
    }

    fn leak(backend: FakeBackend) -> &'static FakeBackend {
        Box::leak(Box::new(backend))
    }

    // ---- Redirect path ----

    #[tokio::test]
    async fn test_location_intent_redirects_without_network_call() {
        let backend = leak(FakeBackend::new(vec![]));
        let mut orch = orchestrator(backend);

        let outcome = orch.submit("orthopedic hospital near me").await.unwrap();
        match outcome {
            TurnOutcome::Redirect {
                route, specialty, ..
            } => {
                assert_eq!(route, "/map?specialty=orthopaedic");
                assert_eq!(specialty, Specialty::Orthopaedic);
            }
            other => panic!("expected redirect, got {:?}", other),
        }

        // Exactly one synthetic assistant message, flagged as a redirect.
        let redirects: Vec<&Message> = orch
            .messages()
            .iter()
            .filter(|m| m.is_map_redirect)
            .collect();
        assert_eq!(redirects.len(), 1);
        assert_eq!(redirects[0].specialty, Some(Specialty::Orthopaedic));
        assert!(redirects[0].text.contains("orthopaedic"));

        // No network call was made.
        assert!(backend.calls.lock().unwrap().is_empty());
        assert_eq!(orch.state(), TurnState::Idle);
    }

    #[tokio::test]
    async fn test_generic_intent_redirects_to_bare_map_route() {
        let backend = leak(FakeBackend::new(vec![]));
        let mut orch = orchestrator(backend);

        let outcome = orch.submit("diabetic clinic near me").await.unwrap();
        match outcome {
            TurnOutcome::Redirect {
                route, specialty, ..
            } => {
                assert_eq!(route, "/map");
                assert_eq!(specialty, Specialty::All);
            }
            other => panic!("expected redirect, got {:?}", other),
        }
        // The generic announcement names no specialty.
        let last = orch.messages().last().unwrap();
        assert_eq!(
            last.text,
            "I'll help you find hospitals near you! Redirecting to the map..."
        );
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_redirect_delay_comes_from_config() {
        let backend = leak(FakeBackend::new(vec![]));
        let session = ConversationSession::new(Box::new(MemoryStore::new()), WELCOME);
        let locator = Locator::with_defaults(Box::new(NoPosition));
        let mut orch = ChatOrchestrator::new(
            session,
            locator,
            Box::new(backend),
            Duration::from_millis(1500),
        );

        match orch.submit("hospital near me").await.unwrap() {
            TurnOutcome::Redirect { delay, .. } => {
                assert_eq!(delay, Duration::from_millis(1500));
            }
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    // ---- Answered path ----

    #[tokio::test]
    async fn test_plain_question_goes_to_backend() {
        let backend = leak(FakeBackend::new(vec![Reply::Ok("Drink water and rest.")]));
        let mut orch = orchestrator(backend);

        let outcome = orch.submit("I have a headache").await.unwrap();
        assert_eq!(outcome, TurnOutcome::Answered);

        let messages = orch.messages();
        assert_eq!(messages.len(), 3); // welcome, user, assistant
        assert_eq!(messages[1].text, "I have a headache");
        assert!(messages[1].is_user);
        assert_eq!(messages[2].text, "Drink water and rest.");
        assert!(!messages[2].is_user);
        assert!(!messages[2].is_map_redirect);
    }

    #[tokio::test]
    async fn test_backend_receives_fallback_position() {
        let backend = leak(FakeBackend::new(vec![Reply::Ok("ok")]));
        let mut orch = orchestrator(backend);
        orch.submit("hello").await.unwrap();

        let calls = backend.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "hello");
        assert_eq!(calls[0].1, DEFAULT_POSITION);
    }

    #[tokio::test]
    async fn test_backend_receives_fixed_position() {
        let backend = leak(FakeBackend::new(vec![Reply::Ok("ok")]));
        let pinned = Coordinate::new(22.56, 72.93);
        let session = ConversationSession::new(Box::new(MemoryStore::new()), WELCOME);
        let locator = Locator::with_defaults(Box::new(FixedPosition(pinned)));
        let mut orch =
            ChatOrchestrator::new(session, locator, Box::new(backend), Duration::from_millis(0));

        orch.submit("hello").await.unwrap();
        assert_eq!(backend.calls.lock().unwrap()[0].1, pinned);
    }

    // ---- Failure shapes ----

    #[tokio::test]
    async fn test_server_failure_is_prefixed_error_message() {
        let backend = leak(FakeBackend::new(vec![Reply::ServerError("model unavailable")]));
        let mut orch = orchestrator(backend);

        let outcome = orch.submit("what is aspirin").await.unwrap();
        assert_eq!(outcome, TurnOutcome::Answered);
        assert_eq!(orch.messages().last().unwrap().text, "Error: model unavailable");
        assert_eq!(orch.state(), TurnState::Idle);
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error_message() {
        let backend = leak(FakeBackend::new(vec![Reply::Unreachable]));
        let mut orch = orchestrator(backend);

        let outcome = orch.submit("what is aspirin").await.unwrap();
        assert_eq!(outcome, TurnOutcome::Answered);
        assert_eq!(orch.messages().last().unwrap().text, "Network Error");
        assert_eq!(orch.state(), TurnState::Idle);
    }

    // ---- Guards ----

    #[tokio::test]
    async fn test_empty_submit_is_rejected_without_state_change() {
        let backend = leak(FakeBackend::new(vec![]));
        let mut orch = orchestrator(backend);

        assert!(matches!(
            orch.submit("").await,
            Err(ChatError::EmptyMessage)
        ));
        assert!(matches!(
            orch.submit("   \t").await,
            Err(ChatError::EmptyMessage)
        ));
        assert_eq!(orch.messages().len(), 1); // welcome only
        assert_eq!(orch.state(), TurnState::Idle);
        assert!(backend.calls.lock().unwrap().is_empty());
    }

    // ---- Ordering under a slow backend ----

    #[tokio::test]
    async fn test_sequential_turns_keep_submission_order() {
        let backend = leak(FakeBackend::slow(
            vec![Reply::Ok("first answer"), Reply::Ok("second answer")],
            Duration::from_millis(30),
        ));
        let mut orch = orchestrator(backend);

        orch.submit("first question").await.unwrap();
        orch.submit("second question").await.unwrap();

        let texts: Vec<&str> = orch.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                WELCOME,
                "first question",
                "first answer",
                "second question",
                "second answer",
            ]
        );
    }

    // ---- History import ----

    #[tokio::test]
    async fn test_import_history_appends_pair() {
        let backend = leak(FakeBackend::new(vec![]));
        let mut orch = orchestrator(backend);

        orch.import_history(&HistoryEntry {
            message: "old question".to_string(),
            response: "old answer".to_string(),
            timestamp: "2026-01-05T10:00:00Z".to_string(),
        });

        let messages = orch.messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[1].is_user);
        assert_eq!(messages[1].text, "old question");
        assert!(!messages[2].is_user);
        assert_eq!(messages[2].text, "old answer");
    }

    // ---- Clear ----

    #[tokio::test]
    async fn test_clear_reinstates_welcome() {
        let backend = leak(FakeBackend::new(vec![Reply::Ok("hi")]));
        let mut orch = orchestrator(backend);
        orch.submit("hello").await.unwrap();
        orch.clear();

        assert_eq!(orch.messages().len(), 1);
        assert_eq!(orch.messages()[0].text, WELCOME);
    }

    // ---- Route / text helpers ----

    #[test]
    fn test_map_route_formats() {
        assert_eq!(map_route(Specialty::All), "/map");
        assert_eq!(map_route(Specialty::Skin), "/map?specialty=skin");
        assert_eq!(
            map_route(Specialty::Gynaecology),
            "/map?specialty=gynaecology"
        );
    }

    #[test]
    fn test_redirect_text_names_specialty() {
        assert!(redirect_text(Specialty::Medicine).contains("for medicine"));
        assert!(!redirect_text(Specialty::All).contains("for "));
    }
}
