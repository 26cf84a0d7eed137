//! Error types for the Experts Land client.

use thiserror::Error;

/// Errors that can occur when calling the backend API.
///
/// The three variants keep transport failures, error statuses, and
/// payload-shape mismatches distinct for logging. The UI collapses them
/// into a single retry message per feature.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Request never produced a response (DNS, connect, abort)
    #[error("request failed: {0}")]
    Transport(String),
    /// Server answered with a non-success status
    #[error("server returned HTTP {0}")]
    Status(u16),
    /// Response body could not be read or decoded against the expected shape
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The HTTP status code, when the server answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status(code) => Some(*code),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_status_code() {
        let err = ApiError::Status(503);
        assert_eq!(err.to_string(), "server returned HTTP 503");
        assert_eq!(err.status_code(), Some(503));
    }

    #[test]
    fn test_transport_and_decode_have_no_status() {
        assert_eq!(ApiError::Transport("connect refused".into()).status_code(), None);
        assert_eq!(ApiError::Decode("missing field".into()).status_code(), None);
    }
}
