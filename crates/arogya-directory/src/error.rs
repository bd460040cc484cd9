//! Error types for the facility directory.

use thiserror::Error;

use arogya_core::error::ArogyaError;

/// Errors from the amenity query. These never reach the map view: the
/// directory absorbs them and falls back to the curated list.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed amenity payload: {0}")]
    Decode(String),
}

impl From<DirectoryError> for ArogyaError {
    fn from(err: DirectoryError) -> Self {
        ArogyaError::Directory(err.to_string())
    }
}
