use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, TEXT};
use crate::options::{
    ArchiveNotificationsOptions, DeleteSigTxOptions, EditSettingsOptions, GetFabVersionsOptions,
    GetPostmanOptions, HeaderOptions, ListNotificationsOptions,
};
use crate::validate::Validate;

use super::ConsoleClient;

impl ConsoleClient {
    pub fn build_get_settings(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        self.build_bare(HttpMethod::Get, "ak/api/v3/settings", "get_settings", options)
    }

    pub fn build_edit_settings(&self, options: &EditSettingsOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Put, &["ak/api/v3/settings"], &[], "edit_settings")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_get_fab_versions(&self, options: &GetFabVersionsOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Get, &["ak/api/v3/kubernetes/fabric/versions"], &[], "get_fab_versions")?
            .query("cache", options.cache.as_deref())
            .headers(&options.headers)
            .build())
    }

    pub fn build_get_health(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        self.build_bare(HttpMethod::Get, "ak/api/v3/health", "get_health", options)
    }

    pub fn build_list_notifications(&self, options: &ListNotificationsOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Get, &["ak/api/v3/notifications"], &[], "list_notifications")?
            .query("limit", options.limit)
            .query("skip", options.skip)
            .query("component_id", options.component_id.as_deref())
            .headers(&options.headers)
            .build())
    }

    pub fn build_delete_sig_tx(&self, options: &DeleteSigTxOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Delete,
                &["ak/api/v3/signature_collections"],
                &[options.id.as_str()],
                "delete_sig_tx",
            )?
            .headers(&options.headers)
            .build())
    }

    pub fn build_archive_notifications(
        &self,
        options: &ArchiveNotificationsOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Post, &["ak/api/v3/notifications/bulk"], &[], "archive_notifications")?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_restart(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        self.build_bare(HttpMethod::Post, "ak/api/v3/restart", "restart", options)
    }

    pub fn build_delete_all_sessions(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        self.build_bare(HttpMethod::Delete, "ak/api/v3/sessions", "delete_all_sessions", options)
    }

    pub fn build_delete_all_notifications(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        self.build_bare(
            HttpMethod::Delete,
            "ak/api/v3/notifications/purge",
            "delete_all_notifications",
            options,
        )
    }

    pub fn build_clear_caches(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        self.build_bare(HttpMethod::Post, "ak/api/v3/cache", "clear_caches", options)
    }

    pub fn build_get_postman(&self, options: &GetPostmanOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Get, &["ak/api/v3/postman"], &[], "get_postman")?
            .query("auth_type", Some(options.auth_type.as_str()))
            .query("token", options.token.as_deref())
            .query("api_key", options.api_key.as_deref())
            .query("username", options.username.as_deref())
            .query("password", options.password.as_deref())
            .headers(&options.headers)
            .build())
    }

    /// The OpenAPI document is served as text, not JSON.
    pub fn build_get_swagger(&self, options: &HeaderOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Get, &["ak/api/v3/openapi"], &[], "get_swagger")?
            .accept(TEXT)
            .headers(&options.headers)
            .build())
    }

    fn build_bare(
        &self,
        method: HttpMethod,
        path: &str,
        operation_id: &str,
        options: &HeaderOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(method, &[path], &[], operation_id)?
            .headers(&options.headers)
            .build())
    }
}
