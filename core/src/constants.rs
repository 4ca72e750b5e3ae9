//! Documented value sets for query parameters and body fields.
//!
//! The console validates these; the client passes whatever string the
//! caller supplies.

/// `deployment_attrs`: include Kubernetes deployment attributes.
pub mod deployment_attrs {
    pub const INCLUDED: &str = "included";
    pub const OMITTED: &str = "omitted";
}

/// `parsed_certs`: include parsed certificate fields.
pub mod parsed_certs {
    pub const INCLUDED: &str = "included";
    pub const OMITTED: &str = "omitted";
}

/// `cache`: `skip` asks the console to bypass its own caches.
pub mod cache {
    pub const SKIP: &str = "skip";
    pub const USE: &str = "use";
}

/// `ca_attrs`: include the CA's own attributes.
pub mod ca_attrs {
    pub const INCLUDED: &str = "included";
    pub const OMITTED: &str = "omitted";
}

/// Component types used by `get_components_by_type`.
pub mod component_type {
    pub const FABRIC_CA: &str = "fabric-ca";
    pub const FABRIC_PEER: &str = "fabric-peer";
    pub const FABRIC_ORDERER: &str = "fabric-orderer";
    pub const MSP: &str = "msp";
}

pub mod orderer_type {
    pub const RAFT: &str = "raft";
}

pub mod state_db {
    pub const COUCHDB: &str = "couchdb";
    pub const LEVELDB: &str = "leveldb";
}

/// `auth_type` for the generated Postman collection.
pub mod postman_auth_type {
    pub const BEARER: &str = "bearer";
    pub const API_KEY: &str = "api_key";
    pub const BASIC: &str = "basic";
}

/// Log levels accepted by the file logging settings.
pub mod log_level {
    pub const ERROR: &str = "error";
    pub const WARN: &str = "warn";
    pub const INFO: &str = "info";
    pub const VERBOSE: &str = "verbose";
    pub const DEBUG: &str = "debug";
    pub const SILLY: &str = "silly";
}
