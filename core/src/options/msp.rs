//! Options for membership service provider endpoints.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::error::ApiError;
use crate::http::Headers;
use crate::validate::{required, required_items, Validate};

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportMspOptions {
    pub msp_id: String,
    pub display_name: String,
    /// Base64-encoded PEM root certificates.
    pub root_certs: Vec<String>,
    pub intermediate_certs: Option<Vec<String>>,
    pub admins: Option<Vec<String>>,
    pub tls_root_certs: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for ImportMspOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("msp_id", &self.msp_id)?;
        required("display_name", &self.display_name)?;
        required_items("root_certs", &self.root_certs)
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct EditMspOptions {
    #[serde(skip)]
    pub id: String,
    pub msp_id: Option<String>,
    pub display_name: Option<String>,
    pub root_certs: Option<Vec<String>>,
    pub intermediate_certs: Option<Vec<String>>,
    pub admins: Option<Vec<String>>,
    pub tls_root_certs: Option<Vec<String>>,
    #[serde(skip)]
    pub headers: Headers,
}

impl Validate for EditMspOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("id", &self.id)
    }
}

/// Public certificates for every component registered under an MSP ID.
#[derive(Debug, Clone, Default)]
pub struct GetMspCertificateOptions {
    pub msp_id: String,
    pub cache: Option<String>,
    pub headers: Headers,
}

impl Validate for GetMspCertificateOptions {
    fn validate(&self) -> Result<(), ApiError> {
        required("msp_id", &self.msp_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn import_msp_requires_root_certs() {
        let options = ImportMspOptions {
            msp_id: "Org1MSP".to_string(),
            display_name: "Org1".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(ApiError::Validation { field: "root_certs" })
        ));
    }

    #[test]
    fn empty_optional_list_is_still_sent() {
        let options = EditMspOptions {
            id: "org1msp".to_string(),
            admins: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&options).unwrap(), json!({"admins": []}));
    }
}
