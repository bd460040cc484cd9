//! Typed HTTP client for the Arogya backend.
//!
//! The backend answers with duck-typed `{success, ..., error}` bodies; this
//! crate converts them into explicit `Result` variants at the boundary so
//! callers never inspect ad hoc success flags. Session credentials are
//! cookie-based and handled entirely by the underlying cookie store.

pub mod client;
pub mod error;
pub mod types;

pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use types::{AckBody, ChatBody, ChatRequest, CredentialsRequest, HistoryBody, InboxBody};
