//! Error types for the console API client.
//!
//! # Design
//! Every failure is returned to the immediate caller as an `ApiError`. The
//! variants follow the order a call can fail in: options validation and
//! request construction happen before any I/O, transport and status errors
//! come from the round trip, and `Decode` happens after a successful round
//! trip, so it keeps the status and headers the transport produced.
//!
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the component does not exist" from "the console returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body.

/// Errors returned by `ConsoleClient` and `ConsoleService`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required options field was empty or unset.
    #[error("{field} is required")]
    Validation { field: &'static str },

    /// The base URL, or the URL rendered from it, could not be parsed.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The authenticator could not produce credentials for the request.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The transport could not complete the round trip.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The console returned 404.
    #[error("resource not found")]
    NotFound,

    /// The console returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("deserialization failed (HTTP {status}): {message}")]
    Decode {
        status: u16,
        headers: Vec<(String, String)>,
        message: String,
    },

    /// The key belongs to a named field and cannot be stored as an
    /// additional property.
    #[error("{0} is a named field, not an additional property")]
    ReservedProperty(String),

    /// Client configuration was missing or malformed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status attached to the error, when the round trip got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::Http { status, .. } | ApiError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_names_field() {
        let err = ApiError::Validation { field: "id" };
        assert_eq!(err.to_string(), "id is required");
    }

    #[test]
    fn status_is_reported_for_response_errors() {
        assert_eq!(ApiError::NotFound.status(), Some(404));
        let err = ApiError::Http {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
    }
}
