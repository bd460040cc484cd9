//! Error taxonomy for backend calls.

use thiserror::Error;

use arogya_core::error::ArogyaError;

/// Errors from the backend API boundary.
///
/// `Transport` means no usable response was received; `Server` means the
/// backend answered with its failure indicator and a message (shown to the
/// user verbatim, prefixed distinctly from transport errors); `Decode` means
/// the response body did not match the expected shape.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Server(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<ApiError> for ArogyaError {
    fn from(err: ApiError) -> Self {
        ArogyaError::Api(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_error_display_is_verbatim() {
        let err = ApiError::Server("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_decode_error_display() {
        let err = ApiError::Decode("missing field `response`".to_string());
        assert_eq!(err.to_string(), "malformed response: missing field `response`");
    }

    #[test]
    fn test_conversion_to_top_level_error() {
        let err: ArogyaError = ApiError::Server("nope".to_string()).into();
        assert!(matches!(err, ArogyaError::Api(_)));
        assert!(err.to_string().contains("nope"));
    }
}
