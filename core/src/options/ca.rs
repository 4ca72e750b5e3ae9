//! Options for certificate authority endpoints.

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::error::ApiError;
use crate::http::Headers;
use crate::types::{CaResources, CaStorage, Hsm, MspCryptoField};
use crate::validate::{required, required_some, Validate};

/// Deploy a new CA into the console's Kubernetes cluster.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCaOptions {
    pub display_name: String,
    /// Fabric CA server configuration, `{"ca": {...}, "tlsca": {...}}`.
    pub config_override: Option<Value>,
    pub id: Option<String>,
    pub resources: Option<CaResources>,
    pub storage: Option<CaStorage>,
    pub zone: Option<String>,
    pub replicas: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub hsm: Option<Hsm>,
    pub region: Option<String>,
    pub version: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for CreateCaOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("display_name", &self.display_name)?;
        required_some("config_override", &self.config_override)
    }
}

/// Register a CA that runs outside the console.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportCaOptions {
    pub display_name: String,
    pub api_url: String,
    pub msp: Option<MspCryptoField>,
    pub id: Option<String>,
    pub location: Option<String>,
    pub operations_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub tls_cert: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for ImportCaOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("display_name", &self.display_name)?;
        required("api_url", &self.api_url)?;
        required_some("msp", &self.msp)
    }
}

/// Change the Kubernetes deployment of a CA.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCaOptions {
    #[serde(skip)]
    pub id: String,
    pub config_override: Option<Value>,
    pub replicas: Option<u32>,
    pub resources: Option<CaResources>,
    pub version: Option<String>,
    pub zone: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for UpdateCaOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

/// Change the console's record of a CA without touching its deployment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditCaOptions {
    #[serde(skip)]
    pub id: String,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub ca_name: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for EditCaOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CaRenew {
    pub tls_cert: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaActionOptions {
    #[serde(skip)]
    pub id: String,
    pub restart: Option<bool>,
    pub renew: Option<CaRenew>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for CaActionOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_ca_requires_config_override() {
        let options = CreateCaOptions {
            display_name: "Org1 CA".to_string(),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "config_override" }));
    }

    #[test]
    fn create_ca_body_has_only_set_fields() {
        let options = CreateCaOptions {
            display_name: "Org1 CA".to_string(),
            config_override: Some(json!({"ca": {"registry": {"maxenrollments": -1}}})),
            replicas: Some(1),
            ..Default::default()
        };
        let body = serde_json::to_value(&options).unwrap();
        assert_eq!(
            body,
            json!({
                "display_name": "Org1 CA",
                "config_override": {"ca": {"registry": {"maxenrollments": -1}}},
                "replicas": 1
            })
        );
    }

    #[test]
    fn edit_ca_keeps_path_id_out_of_body() {
        let options = EditCaOptions {
            id: "org1ca".to_string(),
            display_name: Some("Renamed".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({"display_name": "Renamed"}));
    }
}
