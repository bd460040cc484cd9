//! The backend API client.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use arogya_core::types::{Coordinate, HistoryEntry, InboxMessage};

use crate::error::{ApiError, ApiResult};
use crate::types::{AckBody, ChatBody, ChatRequest, CredentialsRequest, HistoryBody, InboxBody};

/// Client for the Arogya backend endpoints.
///
/// Holds a cookie store so the server-issued session cookie rides along on
/// every call; the client itself never inspects or stores a token.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against the given API base URL (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let http = Client::builder().cookie_store(true).build()?;
        let base_url: String = base_url.into();
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> ApiResult<R> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self.http.post(&url).json(body).send().await?;
        Ok(response.json::<R>().await?)
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.http.get(&url).send().await?;
        Ok(response.json::<R>().await?)
    }

    /// `POST /login`. The session cookie is captured by the cookie store.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<()> {
        let body = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let ack: AckBody = self.post_json("/login", &body).await?;
        ack_to_result(ack, "Login failed")
    }

    /// `POST /register`.
    pub async fn register(&self, email: &str, password: &str) -> ApiResult<()> {
        let body = CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let ack: AckBody = self.post_json("/register", &body).await?;
        ack_to_result(ack, "Registration failed")
    }

    /// `POST /logout`.
    pub async fn logout(&self) -> ApiResult<()> {
        let url = self.url("/logout");
        debug!(url = %url, "POST");
        self.http.post(&url).send().await?;
        Ok(())
    }

    /// `POST /chat` with the user's message and best-effort position.
    /// Returns the assistant's response text.
    pub async fn chat(&self, message: &str, position: Coordinate) -> ApiResult<String> {
        let body = ChatRequest {
            message: message.to_string(),
            lat: position.lat,
            lon: position.lon,
        };
        let reply: ChatBody = self.post_json("/chat", &body).await?;
        if !reply.success {
            return Err(ApiError::Server(
                reply.error.unwrap_or_else(|| "Chat failed".to_string()),
            ));
        }
        reply
            .response
            .ok_or_else(|| ApiError::Decode("success reply without response text".to_string()))
    }

    /// `GET /history`: the user's stored consultations.
    pub async fn history(&self) -> ApiResult<Vec<HistoryEntry>> {
        let body: HistoryBody = self.get_json("/history").await?;
        if !body.success {
            return Err(ApiError::Server(
                body.error.unwrap_or_else(|| "History unavailable".to_string()),
            ));
        }
        Ok(body.chats)
    }

    /// `GET /whatsapp/messages`: the operator inbox from the messaging bridge.
    pub async fn whatsapp_messages(&self) -> ApiResult<Vec<InboxMessage>> {
        let body: InboxBody = self.get_json("/whatsapp/messages").await?;
        if !body.success {
            return Err(ApiError::Server(
                body.error.unwrap_or_else(|| "Inbox unavailable".to_string()),
            ));
        }
        Ok(body.messages)
    }
}

fn ack_to_result(ack: AckBody, fallback: &str) -> ApiResult<()> {
    if ack.success {
        Ok(())
    } else {
        Err(ApiError::Server(
            ack.error.unwrap_or_else(|| fallback.to_string()),
        ))
    }
}
