use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::{
    CreatePeerOptions, EditPeerOptions, ImportPeerOptions, PeerActionOptions, UpdatePeerOptions,
};
use crate::validate::Validate;

use super::ConsoleClient;

impl ConsoleClient {
    pub fn build_create_peer(&self, options: &CreatePeerOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/kubernetes/components/fabric-peer"], &[], "create_peer")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_import_peer(&self, options: &ImportPeerOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/components/fabric-peer"], &[], "import_peer")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_edit_peer(&self, options: &EditPeerOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/components/fabric-peer"],
                &[options.id.as_str()],
                "edit_peer",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_peer_action(&self, options: &PeerActionOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Post,
                &["ak/api/v3/kubernetes/components/fabric-peer", "actions"],
                &[options.id.as_str()],
                "peer_action",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_update_peer(&self, options: &UpdatePeerOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/kubernetes/components/fabric-peer"],
                &[options.id.as_str()],
                "update_peer",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::constants::state_db;
    use crate::types::{CertReenroll, CryptoEnrollment, CryptoObject, EnrollmentCa};

    fn client() -> ConsoleClient {
        ConsoleClient::new("http://localhost:3000")
    }

    #[test]
    fn build_create_peer_serializes_nested_crypto() {
        let options = CreatePeerOptions {
            msp_id: "Org1MSP".to_string(),
            display_name: "Peer 1".to_string(),
            state_db: Some(state_db::COUCHDB.to_string()),
            crypto: Some(CryptoObject {
                enrollment: Some(CryptoEnrollment {
                    ca: Some(EnrollmentCa {
                        host: Some("ca.example.com".to_string()),
                        port: Some(7054),
                        name: Some("ca".to_string()),
                        enroll_id: Some("admin".to_string()),
                        enroll_secret: Some("password".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }),
                msp: None,
            }),
            ..Default::default()
        };
        let req = client().build_create_peer(&options).unwrap();
        assert_eq!(req.url, "http://localhost:3000/ak/api/v3/kubernetes/components/fabric-peer");
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "msp_id": "Org1MSP",
                "display_name": "Peer 1",
                "state_db": "couchdb",
                "crypto": {"enrollment": {"ca": {
                    "host": "ca.example.com",
                    "port": 7054,
                    "name": "ca",
                    "enroll_id": "admin",
                    "enroll_secret": "password"
                }}}
            })
        );
    }

    #[test]
    fn build_create_peer_requires_crypto() {
        let options = CreatePeerOptions {
            msp_id: "Org1MSP".to_string(),
            display_name: "Peer 1".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            client().build_create_peer(&options),
            Err(ApiError::Validation { field: "crypto" })
        ));
    }

    #[test]
    fn build_peer_action_reenroll() {
        let options = PeerActionOptions {
            id: "peer1".to_string(),
            reenroll: Some(CertReenroll {
                tls_cert: Some(true),
                ecert: None,
            }),
            ..Default::default()
        };
        let req = client().build_peer_action(&options).unwrap();
        assert_eq!(
            req.url,
            "http://localhost:3000/ak/api/v3/kubernetes/components/fabric-peer/peer1/actions"
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"reenroll":{"tls_cert":true}}"#));
    }

    #[test]
    fn build_edit_peer_uses_console_record_path() {
        let options = EditPeerOptions {
            id: "peer1".to_string(),
            tags: Some(vec!["org1".to_string()]),
            ..Default::default()
        };
        let req = client().build_edit_peer(&options).unwrap();
        assert_eq!(req.url, "http://localhost:3000/ak/api/v3/components/fabric-peer/peer1");
        assert_eq!(req.body.as_deref(), Some(r#"{"tags":["org1"]}"#));
    }
}
