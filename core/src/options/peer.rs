//! Options for peer endpoints.

use serde::Serialize;
use serde_json::Value;
use serde_with::skip_serializing_none;

use crate::error::ApiError;
use crate::http::Headers;
use crate::types::{
    CertEnroll, CertReenroll, CryptoObject, Hsm, MspCryptoField, NodeOu, PeerResources, PeerStorage,
};
use crate::validate::{required, required_some, Validate};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePeerOptions {
    pub msp_id: String,
    pub display_name: String,
    pub crypto: Option<CryptoObject>,
    pub id: Option<String>,
    /// Overrides merged into the peer's `core.yaml`.
    pub config_override: Option<Value>,
    pub resources: Option<PeerResources>,
    pub storage: Option<PeerStorage>,
    pub zone: Option<String>,
    /// See [`crate::constants::state_db`].
    pub state_db: Option<String>,
    pub tags: Option<Vec<String>>,
    pub hsm: Option<Hsm>,
    pub region: Option<String>,
    pub version: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for CreatePeerOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("msp_id", &self.msp_id)?;
        required("display_name", &self.display_name)?;
        required_some("crypto", &self.crypto)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportPeerOptions {
    pub display_name: String,
    pub grpcwp_url: String,
    pub msp: Option<MspCryptoField>,
    pub msp_id: String,
    pub id: Option<String>,
    pub api_url: Option<String>,
    pub location: Option<String>,
    pub operations_url: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for ImportPeerOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("display_name", &self.display_name)?;
        required("grpcwp_url", &self.grpcwp_url)?;
        required_some("msp", &self.msp)?;
        required("msp_id", &self.msp_id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditPeerOptions {
    #[serde(skip)]
    pub id: String,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub grpcwp_url: Option<String>,
    pub msp_id: Option<String>,
    pub location: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for EditPeerOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct PeerActionOptions {
    #[serde(skip)]
    pub id: String,
    pub restart: Option<bool>,
    pub reenroll: Option<CertReenroll>,
    pub enroll: Option<CertEnroll>,
    /// Migrate the state database after an upgrade.
    pub upgrade_dbs: Option<bool>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for PeerActionOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePeerOptions {
    #[serde(skip)]
    pub id: String,
    pub admin_certs: Option<Vec<String>>,
    pub config_override: Option<Value>,
    pub crypto: Option<CryptoObject>,
    pub node_ou: Option<NodeOu>,
    pub replicas: Option<u32>,
    pub resources: Option<PeerResources>,
    pub version: Option<String>,
    pub zone: Option<String>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for UpdatePeerOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}
