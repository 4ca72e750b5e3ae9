//! Stateless request builder and response parser for the console API.
//!
//! # Design
//! `ConsoleClient` holds only a `base_url` and carries no mutable state
//! between calls. Every operation has a `build_*` method that validates its
//! options and produces an `HttpRequest`; responses are turned into typed
//! results by [`parse_json`] or [`parse_text`]. Executing the round trip is
//! left to the caller, or to [`crate::ConsoleService`], keeping this layer
//! free of I/O.

mod admin;
mod ca;
mod components;
mod msp;
mod orderer;
mod peer;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::{DetailedResponse, HttpMethod, HttpResponse, RequestBuilder};

/// Synchronous, stateless client for the console API.
#[derive(Debug, Clone)]
pub struct ConsoleClient {
    base_url: String,
}

impl ConsoleClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(
        &self,
        method: HttpMethod,
        segments: &[&str],
        params: &[&str],
        operation_id: &str,
    ) -> Result<RequestBuilder, ApiError> {
        RequestBuilder::new(method, &self.base_url, segments, params, operation_id)
    }
}

/// Decode a JSON response into `T`, keeping its status and headers.
///
/// An empty 2xx body decodes to `T::default()`: every field `None` for
/// response structs, `Value::Null` for untyped results.
pub fn parse_json<T>(response: HttpResponse) -> Result<DetailedResponse<T>, ApiError>
where
    T: DeserializeOwned + Default,
{
    check_status(&response)?;
    if response.body.trim().is_empty() {
        return Ok(DetailedResponse {
            status: response.status,
            headers: response.headers,
            result: T::default(),
        });
    }
    match serde_json::from_str(&response.body) {
        Ok(result) => Ok(DetailedResponse {
            status: response.status,
            headers: response.headers,
            result,
        }),
        Err(e) => Err(ApiError::Decode {
            status: response.status,
            headers: response.headers,
            message: e.to_string(),
        }),
    }
}

/// Return the raw body of a non-JSON response.
pub fn parse_text(response: HttpResponse) -> Result<DetailedResponse<String>, ApiError> {
    check_status(&response)?;
    Ok(DetailedResponse {
        status: response.status,
        headers: response.headers,
        result: response.body,
    })
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::types::{DeleteAllSessionsResponse, GenericComponentResponse, GetNotificationsResponse};

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        }
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = ConsoleClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn parse_json_keeps_metadata() {
        let parsed: DetailedResponse<GenericComponentResponse> =
            parse_json(response(200, r#"{"id":"mypeer1","type":"fabric-peer"}"#)).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.header("content-type"), Some("application/json"));
        assert_eq!(parsed.result.id.as_deref(), Some("mypeer1"));
        assert!(parsed.result.display_name.is_none());
    }

    #[test]
    fn parse_json_not_found() {
        let err = parse_json::<GenericComponentResponse>(response(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_json_unexpected_status() {
        let err = parse_json::<GenericComponentResponse>(response(500, "internal error")).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_json_shape_mismatch_keeps_status() {
        let err = parse_json::<GetNotificationsResponse>(response(200, r#"{"total":"many"}"#)).unwrap_err();
        match err {
            ApiError::Decode { status, headers, .. } => {
                assert_eq!(status, 200);
                assert_eq!(headers.len(), 1);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn parse_json_bad_json() {
        let err = parse_json::<GenericComponentResponse>(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
    }

    #[test]
    fn parse_json_empty_body() {
        let parsed: DetailedResponse<Value> = parse_json(response(204, "")).unwrap();
        assert_eq!(parsed.result, Value::Null);
        let parsed = parse_json::<DeleteAllSessionsResponse>(response(200, "  ")).unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.result, DeleteAllSessionsResponse::default());
    }

    #[test]
    fn parse_text_returns_raw_body() {
        let parsed = parse_text(response(200, "openapi: 3.0.0\n")).unwrap();
        assert_eq!(parsed.result, "openapi: 3.0.0\n");
    }
}
