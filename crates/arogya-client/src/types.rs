//! Request and response bodies for the backend endpoints.

use serde::{Deserialize, Serialize};

use arogya_core::types::{HistoryEntry, InboxMessage};

/// Body for `POST /login` and `POST /register`.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Generic `{success, error?}` acknowledgement body.
#[derive(Debug, Clone, Deserialize)]
pub struct AckBody {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body for `POST /chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub lat: f64,
    pub lon: f64,
}

/// Response body for `POST /chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatBody {
    pub success: bool,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `GET /history`.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryBody {
    pub success: bool,
    #[serde(default)]
    pub chats: Vec<HistoryEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body for `GET /whatsapp/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct InboxBody {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<InboxMessage>,
    #[serde(default)]
    pub error: Option<String>,
}
