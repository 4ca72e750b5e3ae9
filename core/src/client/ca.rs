use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::{CaActionOptions, CreateCaOptions, EditCaOptions, ImportCaOptions, UpdateCaOptions};
use crate::validate::Validate;

use super::ConsoleClient;

impl ConsoleClient {
    pub fn build_create_ca(&self, options: &CreateCaOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/kubernetes/components/fabric-ca"], &[], "create_ca")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_import_ca(&self, options: &ImportCaOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/components/fabric-ca"], &[], "import_ca")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_update_ca(&self, options: &UpdateCaOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/kubernetes/components/fabric-ca"],
                &[options.id.as_str()],
                "update_ca",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_edit_ca(&self, options: &EditCaOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/components/fabric-ca"],
                &[options.id.as_str()],
                "edit_ca",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_ca_action(&self, options: &CaActionOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Post,
                &["ak/api/v3/kubernetes/components/fabric-ca", "actions"],
                &[options.id.as_str()],
                "ca_action",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }
}
