//! Options for console administration endpoints.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::error::ApiError;
use crate::http::Headers;
use crate::types::{FileLogging, InactivityTimeouts};
use crate::validate::{required, required_items, Validate};

/// Options for endpoints that take nothing but headers.
#[derive(Debug, Clone, Default)]
pub struct HeaderOptions {
    pub headers: Headers,
}

impl Validate for HeaderOptions {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

pub type GetSettingsOptions = HeaderOptions;
pub type GetHealthOptions = HeaderOptions;
pub type RestartOptions = HeaderOptions;
pub type DeleteAllSessionsOptions = HeaderOptions;
pub type DeleteAllNotificationsOptions = HeaderOptions;
pub type ClearCachesOptions = HeaderOptions;
pub type GetSwaggerOptions = HeaderOptions;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditSettingsOptions {
    pub inactivity_timeouts: Option<InactivityTimeouts>,
    pub file_logging: Option<FileLogging>,
    pub max_req_per_min: Option<u64>,
    pub max_req_per_min_ak: Option<u64>,
    pub fabric_get_block_timeout_ms: Option<u64>,
    pub fabric_instantiate_timeout_ms: Option<u64>,
    pub fabric_join_channel_timeout_ms: Option<u64>,
    pub fabric_install_cc_timeout_ms: Option<u64>,
    pub fabric_lc_install_cc_timeout_ms: Option<u64>,
    pub fabric_lc_get_cc_timeout_ms: Option<u64>,
    pub fabric_general_timeout_ms: Option<u64>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for EditSettingsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetFabVersionsOptions {
    pub cache: Option<String>,
    pub headers: Headers,
}

impl Validate for GetFabVersionsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListNotificationsOptions {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
    pub component_id: Option<String>,
    pub headers: Headers,
}

impl Validate for ListNotificationsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Delete a signature collection transaction by its tx id.
#[derive(Debug, Clone, Default)]
pub struct DeleteSigTxOptions {
    pub id: String,
    pub headers: Headers,
}

impl Validate for DeleteSigTxOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ArchiveNotificationsOptions {
    pub notification_ids: Vec<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for ArchiveNotificationsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required_items("notification_ids", &self.notification_ids)
    }
}

/// Generate a Postman collection with credentials pre-filled.
#[derive(Debug, Clone, Default)]
pub struct GetPostmanOptions {
    /// See [`crate::constants::postman_auth_type`].
    pub auth_type: String,
    pub token: Option<String>,
    pub api_key: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub headers: Headers,
}

impl Validate for GetPostmanOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("auth_type", &self.auth_type)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn edit_settings_sends_only_set_fields() {
        let options = EditSettingsOptions {
            max_req_per_min: Some(0),
            inactivity_timeouts: Some(InactivityTimeouts {
                enabled: Some(false),
                max_idle_time: None,
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"inactivity_timeouts": {"enabled": false}, "max_req_per_min": 0})
        );
    }

    #[test]
    fn archive_requires_ids() {
        assert!(ArchiveNotificationsOptions::default().validate().is_err());
    }
}
