//! HTTP request/response types and the shared request builder.
//!
//! # Design
//! Requests and responses are plain data. `ConsoleClient` builds
//! `HttpRequest` values and parses `HttpResponse` values; executing the round
//! trip is the job of a `Transport`, so everything in this module is
//! deterministic and easy to test.
//!
//! `RequestBuilder` is the one piece every operation shares. It renders the
//! path from static segments and escaped parameters, appends only the query
//! pairs whose source field is set, and layers caller headers over the
//! defaults so a caller can replace any of them.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;

use crate::error::ApiError;

/// Caller-supplied headers carried by every options struct.
pub type Headers = BTreeMap<String, String>;

pub const USER_AGENT: &str = concat!("console-core/", env!("CARGO_PKG_VERSION"));
pub const ANALYTICS_HEADER: &str = "X-Console-SDK-Analytics";
pub const JSON: &str = "application/json";
pub const TEXT: &str = "text/plain";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is fully rendered: base address, escaped path, and query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Set `name` to `value`, replacing any existing header with that name.
    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        set_header(&mut self.headers, name, value.into());
    }
}

/// An HTTP response described as plain data, as produced by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// A decoded result together with the transport metadata it arrived with.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailedResponse<T> {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub result: T,
}

impl<T> DetailedResponse<T> {
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn into_result(self) -> T {
        self.result
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn set_header(headers: &mut Vec<(String, String)>, name: &str, value: String) {
    match headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
        Some(existing) => {
            existing.0 = name.to_string();
            existing.1 = value;
        }
        None => headers.push((name.to_string(), value)),
    }
}

/// Interleave static path segments with percent-escaped parameters.
///
/// `["a/b", "c"]` with `["x", "y"]` renders `a/b/x/c/y`. Segments are used
/// verbatim; parameters are escaped so a `/` inside an identifier cannot add
/// a path level.
pub fn render_path(segments: &[&str], params: &[&str]) -> String {
    let mut parts = Vec::with_capacity(segments.len() + params.len());
    for (i, segment) in segments.iter().enumerate() {
        parts.push(segment.trim_matches('/').to_string());
        if let Some(param) = params.get(i) {
            parts.push(urlencoding::encode(param).into_owned());
        }
    }
    parts.retain(|part| !part.is_empty());
    parts.join("/")
}

/// `%` is always escaped, so only the literal forms can reach the parser.
fn is_dot_segment(param: &str) -> bool {
    param == "." || param == ".."
}

/// Assembles one outbound `HttpRequest`.
#[derive(Debug)]
pub struct RequestBuilder {
    method: HttpMethod,
    url: Url,
    headers: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
    body: Option<String>,
}

impl RequestBuilder {
    /// Start a request for `operation_id` against `base_url` joined with the
    /// rendered path.
    pub fn new(
        method: HttpMethod,
        base_url: &str,
        segments: &[&str],
        params: &[&str],
        operation_id: &str,
    ) -> Result<Self, ApiError> {
        // `Url` resolves `.`/`..` segments, which would silently address a
        // different resource.
        if let Some(param) = params.iter().find(|p| is_dot_segment(p)) {
            return Err(ApiError::InvalidUrl(format!(
                "path parameter {param:?} is a dot segment"
            )));
        }
        let raw = format!("{}/{}", base_url.trim_end_matches('/'), render_path(segments, params));
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;
        let headers = vec![
            ("User-Agent".to_string(), USER_AGENT.to_string()),
            (
                ANALYTICS_HEADER.to_string(),
                format!("service_name=console;service_version=v3;operation_id={operation_id}"),
            ),
            ("Accept".to_string(), JSON.to_string()),
        ];
        Ok(Self {
            method,
            url,
            headers,
            overrides: Vec::new(),
            body: None,
        })
    }

    /// Replace the default `Accept` header.
    pub fn accept(mut self, media_type: &str) -> Self {
        set_header(&mut self.headers, "Accept", media_type.to_string());
        self
    }

    /// Append `key=value` when `value` is set; unset values leave no trace.
    pub fn query<V: fmt::Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.url.query_pairs_mut().append_pair(key, &value.to_string());
        }
        self
    }

    /// Caller headers, applied after every default.
    pub fn headers(mut self, headers: &Headers) -> Self {
        self.overrides
            .extend(headers.iter().map(|(k, v)| (k.clone(), v.clone())));
        self
    }

    /// Serialize `body` as the JSON payload.
    pub fn json_body<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        set_header(&mut self.headers, "Content-Type", JSON.to_string());
        self.body = Some(json);
        Ok(self)
    }

    pub fn build(self) -> HttpRequest {
        let mut headers = self.headers;
        for (name, value) in self.overrides {
            set_header(&mut headers, &name, value);
        }
        HttpRequest {
            method: self.method,
            url: self.url.into(),
            headers,
            body: self.body,
        }
    }
}
