//! Authenticators that add credentials to outbound requests.
//!
//! An authenticator only writes headers. Acquiring or refreshing tokens is
//! the caller's job.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ApiError;
use crate::http::HttpRequest;

pub trait Authenticator: Send + Sync {
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), ApiError>;
}

/// Sends requests without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl Authenticator for NoAuth {
    fn authenticate(&self, _request: &mut HttpRequest) -> Result<(), ApiError> {
        Ok(())
    }
}

/// HTTP basic auth with a console username/API key and password/API secret.
#[derive(Clone)]
pub struct BasicAuth {
    username: String,
    password: String,
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, ApiError> {
        let username = username.into();
        let password = password.into();
        if username.is_empty() || password.is_empty() {
            return Err(ApiError::Authentication(
                "basic auth needs both a username and a password".to_string(),
            ));
        }
        if username.contains(':') {
            return Err(ApiError::Authentication("username must not contain ':'".to_string()));
        }
        Ok(Self { username, password })
    }
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Authenticator for BasicAuth {
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), ApiError> {
        let credentials = STANDARD.encode(format!("{}:{}", self.username, self.password));
        request.set_header("Authorization", format!("Basic {credentials}"));
        Ok(())
    }
}

/// A pre-issued bearer token.
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ApiError::Authentication("bearer token is empty".to_string()));
        }
        Ok(Self { token })
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerToken").field("token", &"<redacted>").finish()
    }
}

impl Authenticator for BearerToken {
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), ApiError> {
        request.set_header("Authorization", format!("Bearer {}", self.token));
        Ok(())
    }
}
