//! Responses describing components: CAs, peers, orderers, and MSPs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::common::{
    CaResources, CaStorage, GenericResources, GenericStorage, MspCryptoField, NodeOu,
    OrdererResources, OrdererStorage, ParsedCertificate, PeerResources, PeerStorage,
};

/// Any component, as returned by the get/list endpoints.
///
/// Which fields are present depends on the component type and on the
/// `deployment_attrs`/`parsed_certs`/`ca_attrs` query flags.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericComponentResponse {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub display_name: Option<String>,
    pub cluster_id: Option<String>,
    pub cluster_name: Option<String>,
    pub grpcwp_url: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub msp: Option<MspCryptoField>,
    pub msp_id: Option<String>,
    pub location: Option<String>,
    pub node_ou: Option<NodeOu>,
    pub resources: Option<GenericResources>,
    pub scheme_version: Option<String>,
    pub state_db: Option<String>,
    pub storage: Option<GenericStorage>,
    pub timestamp: Option<u64>,
    pub tags: Option<Vec<String>>,
    pub version: Option<String>,
    pub zone: Option<String>,
    pub admin_certs_parsed: Option<Vec<ParsedCertificate>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMultiComponentsResponse {
    pub components: Option<Vec<GenericComponentResponse>>,
}

/// Outcome of deleting or removing a single component.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteComponentResponse {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub id: Option<String>,
    pub display_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMultiComponentsResponse {
    pub deleted: Option<Vec<DeleteComponentResponse>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveMultiComponentsResponse {
    pub removed: Option<Vec<DeleteComponentResponse>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditAdminCertsResponse {
    pub changes_made: Option<u32>,
    pub set_admin_certs: Option<Vec<ParsedCertificate>>,
}

/// Acknowledgement of an action request on a deployed component.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsResponse {
    pub message: Option<String>,
    pub id: Option<String>,
    pub actions: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaResponse {
    pub id: Option<String>,
    pub dep_component_id: Option<String>,
    pub display_name: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub config_override: Option<Value>,
    pub location: Option<String>,
    pub msp: Option<MspCryptoField>,
    pub resources: Option<CaResources>,
    pub scheme_version: Option<String>,
    pub storage: Option<CaStorage>,
    pub tags: Option<Vec<String>>,
    pub timestamp: Option<u64>,
    pub version: Option<String>,
    pub zone: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerResponse {
    pub id: Option<String>,
    pub dep_component_id: Option<String>,
    pub display_name: Option<String>,
    pub grpcwp_url: Option<String>,
    pub api_url: Option<String>,
    pub operations_url: Option<String>,
    pub config_override: Option<Value>,
    pub node_ou: Option<NodeOu>,
    pub msp: Option<MspCryptoField>,
    pub msp_id: Option<String>,
    pub location: Option<String>,
    pub resources: Option<PeerResources>,
    pub scheme_version: Option<String>,
    pub state_db: Option<String>,
    pub storage: Option<PeerStorage>,
    pub tags: Option<Vec<String>>,
    pub timestamp: Option<u64>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub version: Option<String>,
    pub zone: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererResponse {
    pub id: Option<String>,
    pub dep_component_id: Option<String>,
    pub api_url: Option<String>,
    pub display_name: Option<String>,
    pub grpcwp_url: Option<String>,
    pub location: Option<String>,
    pub operations_url: Option<String>,
    pub orderer_type: Option<String>,
    pub config_override: Option<Value>,
    pub consenter_proposal_fin: Option<bool>,
    pub node_ou: Option<NodeOu>,
    pub msp: Option<MspCryptoField>,
    pub msp_id: Option<String>,
    pub resources: Option<OrdererResources>,
    pub scheme_version: Option<String>,
    pub storage: Option<OrdererStorage>,
    pub system_channel_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub timestamp: Option<u64>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub version: Option<String>,
    pub zone: Option<String>,
}

/// Creating an ordering service can deploy several nodes at once.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrdererResponse {
    pub created: Option<Vec<OrdererResponse>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspResponse {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub display_name: Option<String>,
    pub msp_id: Option<String>,
    pub timestamp: Option<u64>,
    pub tags: Option<Vec<String>>,
    pub root_certs: Option<Vec<String>>,
    pub intermediate_certs: Option<Vec<String>>,
    pub admins: Option<Vec<String>>,
    pub scheme_version: Option<String>,
    pub tls_root_certs: Option<Vec<String>>,
}

/// Public certificates of one MSP ID.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspPublicData {
    pub msp_id: Option<String>,
    pub root_certs: Option<Vec<String>>,
    pub admins: Option<Vec<String>>,
    pub tls_root_certs: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetMspCertificateResponse {
    pub msps: Option<Vec<MspPublicData>>,
}
