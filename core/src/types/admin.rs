//! Responses from the console administration endpoints.
//!
//! `GetPublicSettingsResponse`, `HealthOptools`, and `HealthOs` name the keys
//! this client knows about and keep every other key the console sends in
//! `additional_properties`, so nothing is lost when a newer console adds
//! settings or statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::skip_serializing_none;

use super::AdditionalProperties;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub enabled: Option<bool>,
    pub level: Option<String>,
    pub unique_name: Option<bool>,
}

/// File logging for the console server and for browser clients.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileLogging {
    pub server: Option<LoggingSettings>,
    pub client: Option<LoggingSettings>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InactivityTimeouts {
    pub enabled: Option<bool>,
    pub max_idle_time: Option<u64>,
}

/// Timeouts the console applies to Fabric operations, in milliseconds.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FabricTimeouts {
    pub api_timeout: Option<u64>,
    pub fabric_get_block_timeout_ms: Option<u64>,
    pub fabric_instantiate_timeout_ms: Option<u64>,
    pub fabric_join_channel_timeout_ms: Option<u64>,
    pub fabric_install_cc_timeout_ms: Option<u64>,
    pub fabric_lc_install_cc_timeout_ms: Option<u64>,
    pub fabric_lc_get_cc_timeout_ms: Option<u64>,
    pub fabric_general_timeout_ms: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleVersions {
    pub apollo: Option<String>,
    pub athena: Option<String>,
    pub stitch: Option<String>,
    pub tag: Option<String>,
}

/// Public console settings. Keys are upper-case on the wire.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct GetPublicSettingsResponse {
    pub athena_id: Option<String>,
    pub auth_scheme: Option<String>,
    pub configtxlator_url: Option<String>,
    pub deployer_url: Option<String>,
    pub domain: Option<String>,
    pub environment: Option<String>,
    pub file_logging: Option<FileLogging>,
    pub host_url: Option<String>,
    pub inactivity_timeouts: Option<InactivityTimeouts>,
    pub infrastructure: Option<String>,
    pub max_req_per_min: Option<u64>,
    pub max_req_per_min_ak: Option<u64>,
    pub port: Option<u16>,
    pub region: Option<String>,
    pub timeouts: Option<FabricTimeouts>,
    pub versions: Option<ConsoleVersions>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, Value>,
}

impl AdditionalProperties for GetPublicSettingsResponse {
    const NAMED_KEYS: &'static [&'static str] = &[
        "ATHENA_ID",
        "AUTH_SCHEME",
        "CONFIGTXLATOR_URL",
        "DEPLOYER_URL",
        "DOMAIN",
        "ENVIRONMENT",
        "FILE_LOGGING",
        "HOST_URL",
        "INACTIVITY_TIMEOUTS",
        "INFRASTRUCTURE",
        "MAX_REQ_PER_MIN",
        "MAX_REQ_PER_MIN_AK",
        "PORT",
        "REGION",
        "TIMEOUTS",
        "VERSIONS",
    ];

    fn additional_properties(&self) -> &BTreeMap<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.additional_properties
    }
}

/// One selectable Fabric image version.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricVersion {
    pub default: Option<bool>,
    pub version: Option<String>,
    pub image: Option<Value>,
}

/// Available versions per component type, keyed by version string.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FabricVersionDictionary {
    pub ca: Option<BTreeMap<String, FabricVersion>>,
    pub peer: Option<BTreeMap<String, FabricVersion>>,
    pub orderer: Option<BTreeMap<String, FabricVersion>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFabricVersionsResponse {
    pub versions: Option<FabricVersionDictionary>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthMemory {
    pub rss: Option<String>,
    pub heap_total: Option<String>,
    pub heap_used: Option<String>,
    pub external: Option<String>,
}

/// Health of the console process itself.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthOptools {
    pub instance_id: Option<String>,
    pub now: Option<u64>,
    pub born: Option<u64>,
    pub up_time: Option<String>,
    pub memory: Option<HealthMemory>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, Value>,
}

impl AdditionalProperties for HealthOptools {
    const NAMED_KEYS: &'static [&'static str] = &[
        "instance_id", "now", "born", "up_time", "memory",
    ];

    fn additional_properties(&self) -> &BTreeMap<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.additional_properties
    }
}

/// Health of the host the console runs on.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthOs {
    pub arch: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub endian: Option<String>,
    pub loadavg: Option<Vec<f64>>,
    pub total_memory: Option<String>,
    pub free_memory: Option<String>,
    pub up_time: Option<String>,
    #[serde(flatten)]
    pub additional_properties: BTreeMap<String, Value>,
}

impl AdditionalProperties for HealthOs {
    const NAMED_KEYS: &'static [&'static str] = &[
        "arch",
        "type",
        "endian",
        "loadavg",
        "total_memory",
        "free_memory",
        "up_time",
    ];

    fn additional_properties(&self) -> &BTreeMap<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut BTreeMap<String, Value> {
        &mut self.additional_properties
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetAthenaHealthStatsResponse {
    #[serde(rename = "OPTOOLS")]
    pub optools: Option<HealthOptools>,
    #[serde(rename = "OS")]
    pub os: Option<HealthOs>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationData {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub status: Option<String>,
    pub by: Option<String>,
    pub message: Option<String>,
    pub ts_display: Option<u64>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetNotificationsResponse {
    pub total: Option<u64>,
    pub returning: Option<u64>,
    pub notifications: Option<Vec<NotificationData>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteSignatureCollectionResponse {
    pub message: Option<String>,
    pub tx_id: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveResponse {
    pub message: Option<String>,
    pub details: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestartAthenaResponse {
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllSessionsResponse {
    pub message: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteAllNotificationsResponse {
    pub message: Option<String>,
    pub details: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheFlushResponse {
    pub message: Option<String>,
    pub flushed: Option<Vec<String>>,
}
