//! The conversation session and its storage.
//!
//! The full transcript is serialized to the injected [`SessionStore`] on
//! every mutation and restored at session start. Corrupt, absent, or empty
//! stored data falls back to a single fixed welcome message; storage
//! failures are absorbed and logged, never surfaced.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use arogya_core::types::Message;

/// Fixed key under which the serialized transcript lives.
pub const SESSION_STORAGE_KEY: &str = "arogya_chat_messages";

/// Errors from a session store. Absorbed by [`ConversationSession`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the serialized transcript lives. Injectable so tests can swap the
/// file-backed store for an in-memory fake.
pub trait SessionStore: Send {
    /// The stored payload, if any.
    fn load(&self) -> Result<Option<String>, StoreError>;
    /// Replace the stored payload.
    fn save(&mut self, payload: &str) -> Result<(), StoreError>;
    /// Remove the stored payload.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with a payload, as if a prior session wrote it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.slot.clone())
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        self.slot = Some(payload.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.slot = None;
        Ok(())
    }
}

/// File-backed store: one JSON blob under the fixed session key.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// A store writing `<dir>/arogya_chat_messages.json`.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{}.json", SESSION_STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, payload: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, payload)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// The ordered transcript for the current session.
pub struct ConversationSession {
    messages: Vec<Message>,
    welcome: Message,
    store: Box<dyn SessionStore>,
}

impl ConversationSession {
    /// Open a session, restoring the stored transcript. Corrupt, absent, or
    /// empty data starts the session with the welcome message instead.
    pub fn new(store: Box<dyn SessionStore>, welcome_text: &str) -> Self {
        let welcome = Message::assistant(welcome_text);
        let messages = match store.load() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Message>>(&payload) {
                Ok(stored) if !stored.is_empty() => {
                    debug!(count = stored.len(), "Session transcript restored");
                    stored
                }
                Ok(_) => vec![welcome.clone()],
                Err(e) => {
                    warn!(error = %e, "Stored transcript is corrupt; starting fresh");
                    vec![welcome.clone()]
                }
            },
            Ok(None) => vec![welcome.clone()],
            Err(e) => {
                warn!(error = %e, "Session store unreadable; starting fresh");
                vec![welcome.clone()]
            }
        };
        Self {
            messages,
            welcome,
            store,
        }
    }

    /// Append a message and persist the full transcript.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
        self.persist();
    }

    /// The transcript in display order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Wipe the stored and in-memory transcript, reinstating the welcome
    /// message.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear session store");
        }
        self.messages = vec![self.welcome.clone()];
    }

    fn persist(&mut self) {
        match serde_json::to_string(&self.messages) {
            Ok(payload) => {
                if let Err(e) = self.store.save(&payload) {
                    warn!(error = %e, "Failed to persist session transcript");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize session transcript"),
        }
    }
}
