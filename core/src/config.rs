//! Client configuration.
//!
//! `ClientConfig` deserializes from any serde format, so it can sit inside a
//! larger application config, or be read from `CONSOLE_*` environment
//! variables with [`ClientConfig::from_env`].

use std::time::Duration;

use serde::Deserialize;

use crate::auth::{Authenticator, BasicAuth, BearerToken, NoAuth};
use crate::error::ApiError;

/// How requests are authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AuthConfig {
    #[default]
    NoAuth,
    /// Console username or API key, with its password or API secret.
    Basic { username: String, password: String },
    Bearer { token: String },
}

impl AuthConfig {
    pub fn authenticator(&self) -> Result<Box<dyn Authenticator>, ApiError> {
        let authenticator: Box<dyn Authenticator> = match self {
            AuthConfig::NoAuth => Box::new(NoAuth),
            AuthConfig::Basic { username, password } => Box::new(BasicAuth::new(username, password)?),
            AuthConfig::Bearer { token } => Box::new(BearerToken::new(token)?),
        };
        Ok(authenticator)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    /// Console base URL, e.g. `https://console.example.com:443`.
    pub url: String,
    #[serde(default)]
    pub auth: AuthConfig,
    /// Upper bound on each round trip. No limit when unset.
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: AuthConfig::NoAuth,
            timeout_secs: None,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Read `CONSOLE_URL`, `CONSOLE_AUTH_TYPE`, and the credential variables
    /// for the selected auth type.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let url = get("CONSOLE_URL").ok_or_else(|| ApiError::Config("CONSOLE_URL is not set".to_string()))?;

        let auth_type = get("CONSOLE_AUTH_TYPE").unwrap_or_else(|| "noauth".to_string());
        let auth = match auth_type.to_ascii_lowercase().as_str() {
            "noauth" => AuthConfig::NoAuth,
            "basic" => {
                let username = get("CONSOLE_USERNAME").or_else(|| get("CONSOLE_APIKEY"));
                let password = get("CONSOLE_PASSWORD").or_else(|| get("CONSOLE_APISECRET"));
                match (username, password) {
                    (Some(username), Some(password)) => AuthConfig::Basic { username, password },
                    _ => {
                        return Err(ApiError::Config(
                            "basic auth needs CONSOLE_USERNAME/CONSOLE_APIKEY and CONSOLE_PASSWORD/CONSOLE_APISECRET"
                                .to_string(),
                        ))
                    }
                }
            }
            "bearer" => {
                let token = get("CONSOLE_BEARER_TOKEN")
                    .ok_or_else(|| ApiError::Config("CONSOLE_BEARER_TOKEN is not set".to_string()))?;
                AuthConfig::Bearer { token }
            }
            other => return Err(ApiError::Config(format!("unknown CONSOLE_AUTH_TYPE {other:?}"))),
        };

        let timeout_secs = match get("CONSOLE_TIMEOUT_SECS") {
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| ApiError::Config(format!("CONSOLE_TIMEOUT_SECS {raw:?}: {e}")))?,
            ),
            None => None,
        };

        Ok(Self {
            url,
            auth,
            timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn url_is_required() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn defaults_to_no_auth() {
        let config = ClientConfig::from_lookup(lookup(&[("CONSOLE_URL", "http://localhost:3000")])).unwrap();
        assert_eq!(config, ClientConfig::new("http://localhost:3000"));
        assert!(config.timeout().is_none());
    }

    #[test]
    fn basic_auth_accepts_api_key_names() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("CONSOLE_URL", "https://console.example.com"),
            ("CONSOLE_AUTH_TYPE", "BASIC"),
            ("CONSOLE_APIKEY", "key"),
            ("CONSOLE_APISECRET", "secret"),
            ("CONSOLE_TIMEOUT_SECS", "30"),
        ]))
        .unwrap();
        assert_eq!(
            config.auth,
            AuthConfig::Basic {
                username: "key".to_string(),
                password: "secret".to_string()
            }
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn bearer_without_token_fails() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("CONSOLE_URL", "https://console.example.com"),
            ("CONSOLE_AUTH_TYPE", "bearer"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn bad_timeout_fails() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("CONSOLE_URL", "https://console.example.com"),
            ("CONSOLE_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn deserializes_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"url":"https://console.example.com","auth":{"type":"bearer","token":"abc"},"timeout_secs":5}"#,
        )
        .unwrap();
        assert_eq!(config.auth, AuthConfig::Bearer { token: "abc".to_string() });
        assert!(config.auth.authenticator().is_ok());
    }
}
