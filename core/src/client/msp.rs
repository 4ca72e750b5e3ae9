use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::{EditMspOptions, GetMspCertificateOptions, ImportMspOptions};
use crate::validate::Validate;

use super::ConsoleClient;

impl ConsoleClient {
    pub fn build_import_msp(&self, options: &ImportMspOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/components/msp"], &[], "import_msp")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_edit_msp(&self, options: &EditMspOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Put, &["ak/api/v3/components/msp"], &[options.id.as_str()], "edit_msp")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_get_msp_certificate(&self, options: &GetMspCertificateOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Get,
                &["ak/api/v3/components/msps"],
                &[options.msp_id.as_str()],
                "get_msp_certificate",
            )?
            .query("cache", options.cache.as_deref())
            .headers(&options.headers)
            .build())
    }
}
