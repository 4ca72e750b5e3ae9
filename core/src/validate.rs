//! Pre-flight checks on options structs.
//!
//! Only presence is checked. Value sets such as `deployment_attrs` are left
//! to the console.

use crate::error::ApiError;

/// Implemented by every options struct; called before a request is built.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation { field });
    }
    Ok(())
}

pub(crate) fn required_some<T>(field: &'static str, value: &Option<T>) -> Result<(), ApiError> {
    if value.is_none() {
        return Err(ApiError::Validation { field });
    }
    Ok(())
}

pub(crate) fn required_items<T>(field: &'static str, value: &[T]) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::Validation { field });
    }
    Ok(())
}
