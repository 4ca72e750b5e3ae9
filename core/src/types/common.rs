//! Nested objects shared by request bodies and responses.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Kubernetes resource quantities, e.g. `cpu: "100m"`, `memory: "256MiB"`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuantities {
    pub cpu: Option<String>,
    pub memory: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceObject {
    pub requests: Option<ResourceQuantities>,
    pub limits: Option<ResourceQuantities>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageObject {
    pub size: Option<String>,
    pub class: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaResources {
    pub ca: Option<ResourceObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaStorage {
    pub ca: Option<StorageObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerResources {
    pub chaincodelauncher: Option<ResourceObject>,
    pub couchdb: Option<ResourceObject>,
    pub statedb: Option<ResourceObject>,
    pub dind: Option<ResourceObject>,
    pub fluentd: Option<ResourceObject>,
    pub peer: Option<ResourceObject>,
    pub proxy: Option<ResourceObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerStorage {
    pub couchdb: Option<StorageObject>,
    pub leveldb: Option<StorageObject>,
    pub peer: Option<StorageObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererResources {
    pub orderer: Option<ResourceObject>,
    pub proxy: Option<ResourceObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererStorage {
    pub orderer: Option<StorageObject>,
}

/// Resources reported for any component type by the list/get endpoints.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericResources {
    pub ca: Option<ResourceObject>,
    pub peer: Option<ResourceObject>,
    pub orderer: Option<ResourceObject>,
    pub proxy: Option<ResourceObject>,
    pub statedb: Option<ResourceObject>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericStorage {
    pub ca: Option<StorageObject>,
    pub peer: Option<StorageObject>,
    pub orderer: Option<StorageObject>,
    pub statedb: Option<StorageObject>,
}

/// PKCS #11 endpoint used when keys live in an HSM.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsm {
    pub pkcs11endpoint: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeOu {
    pub enabled: Option<bool>,
}

/// Root certificates of a certificate authority, keyed by CA name.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspCa {
    pub name: Option<String>,
    pub root_certs: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspComponent {
    pub tls_cert: Option<String>,
    pub ecert: Option<String>,
    pub admin_certs: Option<Vec<String>>,
}

/// Public MSP material of an imported or deployed component.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspCryptoField {
    pub ca: Option<MspCa>,
    pub tlsca: Option<MspCa>,
    pub component: Option<MspComponent>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentComponent {
    pub admincerts: Option<Vec<String>>,
}

/// Where and how a new component enrolls with a CA.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentCa {
    pub host: Option<String>,
    pub port: Option<u32>,
    pub name: Option<String>,
    pub tls_cert: Option<String>,
    pub enroll_id: Option<String>,
    pub enroll_secret: Option<String>,
    pub csr_hosts: Option<Vec<String>>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoEnrollment {
    pub component: Option<EnrollmentComponent>,
    pub ca: Option<EnrollmentCa>,
    pub tlsca: Option<EnrollmentCa>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspKeyMaterial {
    pub keystore: Option<String>,
    pub signcerts: Option<String>,
    pub cacerts: Option<Vec<String>>,
    pub intermediatecerts: Option<Vec<String>>,
    pub admincerts: Option<Vec<String>>,
    pub tls_key: Option<String>,
    pub tls_cert: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MspCaCerts {
    pub cacerts: Option<Vec<String>>,
    pub intermediatecerts: Option<Vec<String>>,
}

/// Pre-generated MSP material, used instead of enrolling.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoMsp {
    pub component: Option<MspKeyMaterial>,
    pub ca: Option<MspCaCerts>,
    pub tlsca: Option<MspCaCerts>,
}

/// Crypto for a peer or orderer: either enrollment details or an MSP.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptoObject {
    pub enrollment: Option<CryptoEnrollment>,
    pub msp: Option<CryptoMsp>,
}

/// An X.509 certificate as parsed by the console.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCertificate {
    pub base_64_pem: Option<String>,
    pub issuer: Option<String>,
    pub not_after: Option<u64>,
    pub not_before: Option<u64>,
    pub serial_number_hex: Option<String>,
    pub signature_algorithm: Option<String>,
    pub subject: Option<String>,
    pub x509_version: Option<u32>,
    pub time_left: Option<String>,
}

/// Re-enrollment of a component's certificates.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertReenroll {
    pub tls_cert: Option<bool>,
    pub ecert: Option<bool>,
}

/// Enrollment of a component's certificates with the given CA.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertEnroll {
    pub tls_cert: Option<EnrollmentCa>,
    pub ecert: Option<EnrollmentCa>,
}
