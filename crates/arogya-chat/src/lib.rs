//! Conversational interface for the Arogya client.
//!
//! Provides location-intent classification, the persisted conversation
//! session, and the chat orchestrator that routes each user turn to either
//! a map redirect or the remote chat endpoint.

pub mod classifier;
pub mod error;
pub mod orchestrator;
pub mod session;

pub use classifier::{classify, LocationIntent};
pub use error::ChatError;
pub use orchestrator::{ChatBackend, ChatOrchestrator, TurnOutcome, TurnState};
pub use session::{ConversationSession, FileStore, MemoryStore, SessionStore, StoreError};
