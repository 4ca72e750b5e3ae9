//! Options for the component inventory endpoints.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::error::ApiError;
use crate::http::Headers;
use crate::validate::{required, Validate};

/// `GET /components/{id}`.
#[derive(Debug, Clone, Default)]
pub struct GetComponentOptions {
    pub id: String,
    /// See [`crate::constants::deployment_attrs`].
    pub deployment_attrs: Option<String>,
    /// See [`crate::constants::parsed_certs`].
    pub parsed_certs: Option<String>,
    /// See [`crate::constants::cache`].
    pub cache: Option<String>,
    /// See [`crate::constants::ca_attrs`].
    pub ca_attrs: Option<String>,
    pub headers: Headers,
}

impl GetComponentOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

impl Validate for GetComponentOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

/// `DELETE /components/{id}`: forget an imported component.
#[derive(Debug, Clone, Default)]
pub struct RemoveComponentOptions {
    pub id: String,
    pub headers: Headers,
}

impl Validate for RemoveComponentOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

/// `DELETE /kubernetes/components/{id}`: tear down a deployed component.
#[derive(Debug, Clone, Default)]
pub struct DeleteComponentOptions {
    pub id: String,
    pub headers: Headers,
}

impl Validate for DeleteComponentOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditAdminCertsOptions {
    #[serde(skip)]
    pub id: String,
    /// Base64-encoded PEM certificates to add.
    pub append_admin_certs: Option<Vec<String>>,
    /// Base64-encoded PEM certificates to remove.
    pub remove_admin_certs: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for EditAdminCertsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListComponentsOptions {
    pub deployment_attrs: Option<String>,
    pub parsed_certs: Option<String>,
    pub cache: Option<String>,
    pub ca_attrs: Option<String>,
    pub headers: Headers,
}

impl Validate for ListComponentsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetComponentsByTypeOptions {
    /// See [`crate::constants::component_type`].
    pub type_: String,
    pub deployment_attrs: Option<String>,
    pub parsed_certs: Option<String>,
    pub cache: Option<String>,
    pub headers: Headers,
}

impl Validate for GetComponentsByTypeOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("type", &self.type_)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GetComponentsByTagOptions {
    pub tag: String,
    pub deployment_attrs: Option<String>,
    pub parsed_certs: Option<String>,
    pub cache: Option<String>,
    pub headers: Headers,
}

impl Validate for GetComponentsByTagOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("tag", &self.tag)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RemoveComponentsByTagOptions {
    pub tag: String,
    pub headers: Headers,
}

impl Validate for RemoveComponentsByTagOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("tag", &self.tag)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteComponentsByTagOptions {
    pub tag: String,
    pub headers: Headers,
}

impl Validate for DeleteComponentsByTagOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("tag", &self.tag)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeleteAllComponentsOptions {
    pub headers: Headers,
}

impl Validate for DeleteAllComponentsOptions {
    fn validate(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Send a config block to an orderer that is waiting for its system channel.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubmitBlockOptions {
    #[serde(skip)]
    pub id: String,
    /// Base64-encoded genesis or config block.
    pub b64_block: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for SubmitBlockOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}
