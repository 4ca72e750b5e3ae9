//! Response schemas and the nested objects shared with request bodies.
//!
//! # Design
//! Every field is an `Option`: an absent key decodes to `None` and a `None`
//! field is never serialized, so "unset" and "explicitly zero/empty" stay
//! distinguishable in both directions. Decoding is strict about shape: a key
//! holding the wrong JSON type fails the whole response.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::ApiError;

pub mod admin;
pub mod common;
pub mod component;

pub use admin::*;
pub use common::*;
pub use component::*;

/// Access to the keys a response carried beyond its named fields.
///
/// Decoding moves unknown keys into the map; encoding writes them back next
/// to the named fields. A wire name listed in `NAMED_KEYS` always decodes
/// into its field, so `set_property` refuses it.
pub trait AdditionalProperties {
    /// Wire names of the named fields.
    const NAMED_KEYS: &'static [&'static str];

    fn additional_properties(&self) -> &BTreeMap<String, Value>;

    fn additional_properties_mut(&mut self) -> &mut BTreeMap<String, Value>;

    fn get_property(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    fn set_property(&mut self, key: impl Into<String>, value: Value) -> Result<(), ApiError> {
        let key = key.into();
        if Self::NAMED_KEYS.contains(&key.as_str()) {
            return Err(ApiError::ReservedProperty(key));
        }
        self.additional_properties_mut().insert(key, value);
        Ok(())
    }

    fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().remove(key)
    }
}
