//! Blocking client for the blockchain console management API (`/ak/api/v3`).
//!
//! # Overview
//! Every operation follows the same pipeline: validate an options struct,
//! build an `HttpRequest`, authenticate it, send it through a `Transport`,
//! and decode the JSON response into a typed result.
//!
//! # Design
//! - `ConsoleClient` is stateless. It builds requests and never touches the
//!   network, so callers can bring their own HTTP stack.
//! - `ConsoleService` composes a client, an `Authenticator`, and a
//!   `Transport` into one call per operation.
//! - Response fields are all `Option`s; unset options never reach the wire.
//! - Documented value sets live in [`constants`] and are not enforced here.
//!
//! ```no_run
//! use console_core::options::GetComponentOptions;
//! use console_core::{ClientConfig, ConsoleService};
//!
//! # fn main() -> Result<(), console_core::ApiError> {
//! let service = ConsoleService::from_config(&ClientConfig::from_env()?)?;
//! let peer = service.get_component(&GetComponentOptions::new("mypeer1"))?;
//! println!("{:?}", peer.result.display_name);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod options;
pub mod service;
pub mod transport;
pub mod types;
pub mod validate;

pub use auth::{Authenticator, BasicAuth, BearerToken, NoAuth};
pub use client::{parse_json, parse_text, ConsoleClient};
pub use config::{AuthConfig, ClientConfig};
pub use error::ApiError;
pub use http::{DetailedResponse, Headers, HttpMethod, HttpRequest, HttpResponse};
pub use service::{ConsoleService, ServiceResult};
pub use transport::{Transport, UreqTransport};
pub use validate::Validate;
