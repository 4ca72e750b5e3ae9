use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::{
    CreateOrdererOptions, EditOrdererOptions, ImportOrdererOptions, OrdererActionOptions,
    UpdateOrdererOptions,
};
use crate::validate::Validate;

use super::ConsoleClient;

impl ConsoleClient {
    pub fn build_create_orderer(&self, options: &CreateOrdererOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Post,
                &["ak/api/v3/kubernetes/components/fabric-orderer"],
                &[],
                "create_orderer",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_import_orderer(&self, options: &ImportOrdererOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/components/fabric-orderer"], &[], "import_orderer")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_edit_orderer(&self, options: &EditOrdererOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/components/fabric-orderer"],
                &[options.id.as_str()],
                "edit_orderer",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_orderer_action(&self, options: &OrdererActionOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Post,
                &["ak/api/v3/kubernetes/components/fabric-orderer", "actions"],
                &[options.id.as_str()],
                "orderer_action",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_update_orderer(&self, options: &UpdateOrdererOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/kubernetes/components/fabric-orderer"],
                &[options.id.as_str()],
                "update_orderer",
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
    use crate::constants::orderer_type;
    use crate::types::CryptoObject;

    fn client() -> ConsoleClient {
        ConsoleClient::new("http://localhost:3000")
    }

    #[test]
    fn build_create_orderer_sends_one_crypto_per_node() {
        let options = CreateOrdererOptions {
            orderer_type: orderer_type::RAFT.to_string(),
            msp_id: "OrdererMSP".to_string(),
            display_name: "Ordering Service".to_string(),
            crypto: vec![CryptoObject::default(), CryptoObject::default()],
            zone: Some(vec!["dal10".to_string(), "dal12".to_string()]),
            ..Default::default()
        };
        let req = client().build_create_orderer(&options).unwrap();
        let body: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["crypto"], json!([{}, {}]));
        assert_eq!(body["zone"], json!(["dal10", "dal12"]));
        assert!(body.get("cluster_name").is_none());
        assert!(body.get("external_append").is_none());
    }

    #[test]
    fn build_edit_orderer_sends_false_explicitly() {
        let options = EditOrdererOptions {
            id: "orderer1".to_string(),
            consenter_proposal_fin: Some(false),
            ..Default::default()
        };
        let req = client().build_edit_orderer(&options).unwrap();
        assert_eq!(req.url, "http://localhost:3000/ak/api/v3/components/fabric-orderer/orderer1");
        assert_eq!(req.body.as_deref(), Some(r#"{"consenter_proposal_fin":false}"#));
    }

    #[test]
    fn build_orderer_action_restart() {
        let options = OrdererActionOptions {
            id: "orderer1".to_string(),
            restart: Some(true),
            ..Default::default()
        };
        let req = client().build_orderer_action(&options).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.body.as_deref(), Some(r#"{"restart":true}"#));
    }
}
