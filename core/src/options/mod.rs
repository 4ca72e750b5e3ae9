//! Per-operation options.
//!
//! # Design
//! Options are plain structs built with struct-update syntax:
//!
//! ```
//! use console_core::constants::deployment_attrs;
//! use console_core::options::GetComponentOptions;
//!
//! let options = GetComponentOptions {
//!     deployment_attrs: Some(deployment_attrs::INCLUDED.to_string()),
//!     ..GetComponentOptions::new("mypeer1")
//! };
//! ```
//!
//! Required strings are plain `String`s, so `Default` leaves them empty and
//! `Validate` rejects them. Body fields serialize straight from the options
//! struct; path, query, and header fields are skipped by serde.

pub mod admin;
pub mod ca;
pub mod components;
pub mod msp;
pub mod orderer;
pub mod peer;

pub use admin::*;
pub use ca::*;
pub use components::*;
pub use msp::*;
pub use orderer::*;
pub use peer::*;
