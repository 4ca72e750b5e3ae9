//! Options for ordering service endpoints.

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::error::ApiError;
use crate::http::Headers;
use crate::types::{
    CertEnroll, CertReenroll, CryptoObject, Hsm, MspCryptoField, NodeOu, OrdererResources,
    OrdererStorage,
};
use crate::validate::{required, required_items, required_some, Validate};

/// Deploy an ordering service. One entry in `crypto` per node.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateOrdererOptions {
    /// See [`crate::constants::orderer_type`].
    pub orderer_type: String,
    pub msp_id: String,
    pub display_name: String,
    pub crypto: Vec<CryptoObject>,
    pub cluster_name: Option<String>,
    pub id: Option<String>,
    pub cluster_id: Option<String>,
    /// Add nodes to an existing cluster instead of creating one.
    pub external_append: Option<bool>,
    /// One `orderer.yaml` override per node.
    pub config_override: Option<Vec<Value>>,
    pub resources: Option<OrdererResources>,
    pub storage: Option<OrdererStorage>,
    pub system_channel_id: Option<String>,
    pub zone: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub region: Option<Vec<String>>,
    pub hsm: Option<Hsm>,
    pub version: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for CreateOrdererOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("orderer_type", &self.orderer_type)?;
        required("msp_id", &self.msp_id)?;
        required("display_name", &self.display_name)?;
        required_items("crypto", &self.crypto)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportOrdererOptions {
    pub cluster_name: String,
    pub display_name: String,
    pub grpcwp_url: String,
    pub msp: Option<MspCryptoField>,
    pub msp_id: String,
    pub api_url: Option<String>,
    pub cluster_id: Option<String>,
    pub id: Option<String>,
    pub location: Option<String>,
    pub operations_url: Option<String>,
    pub system_channel_id: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for ImportOrdererOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("cluster_name", &self.cluster_name)?;
        required("display_name", &self.display_name)?;
        required("grpcwp_url", &self.grpcwp_url)?;
        required_some("msp", &self.msp)?;
        required("msp_id", &self.msp_id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditOrdererOptions {
    #[serde(skip)]
    pub id: String,
    pub cluster_name: Option<String>,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub grpcwp_url: Option<String>,
    pub msp_id: Option<String>,
    /// Whether this node has been added to the consenter set.
    pub consenter_proposal_fin: Option<bool>,
    pub location: Option<String>,
    pub system_channel_id: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for EditOrdererOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrdererActionOptions {
    #[serde(skip)]
    pub id: String,
    pub restart: Option<bool>,
    pub reenroll: Option<CertReenroll>,
    pub enroll: Option<CertEnroll>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for OrdererActionOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateOrdererOptions {
    #[serde(skip)]
    pub id: String,
    pub admin_certs: Option<Vec<String>>,
    pub config_override: Option<Value>,
    pub crypto: Option<CryptoObject>,
    pub node_ou: Option<NodeOu>,
    pub replicas: Option<u32>,
    pub resources: Option<OrdererResources>,
    pub version: Option<String>,
    pub zone: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for UpdateOrdererOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_orderer_requires_node_crypto() {
        let options = CreateOrdererOptions {
            orderer_type: "raft".to_string(),
            msp_id: "OrdererMSP".to_string(),
            display_name: "Ordering Service".to_string(),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "crypto" }));

        let options = CreateOrdererOptions {
            crypto: vec![CryptoObject::default()],
            ..options
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn required_fields_checked_in_order() {
        let err = ImportOrdererOptions::default().validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "cluster_name" }));
    }
}
