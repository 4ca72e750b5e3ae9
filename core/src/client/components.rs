use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest};
use crate::options::{
    DeleteAllComponentsOptions, DeleteComponentOptions, DeleteComponentsByTagOptions,
    EditAdminCertsOptions, GetComponentOptions, GetComponentsByTagOptions,
    GetComponentsByTypeOptions, ListComponentsOptions, RemoveComponentOptions,
    RemoveComponentsByTagOptions, SubmitBlockOptions,
};
use crate::validate::Validate;

use super::ConsoleClient;

impl ConsoleClient {
    pub fn build_get_component(&self, options: &GetComponentOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Get, &["ak/api/v3/components"], &[options.id.as_str()], "get_component")?
            .query("deployment_attrs", options.deployment_attrs.as_deref())
            .query("parsed_certs", options.parsed_certs.as_deref())
            .query("cache", options.cache.as_deref())
            .query("ca_attrs", options.ca_attrs.as_deref())
            .headers(&options.headers)
            .build())
    }

    pub fn build_remove_component(&self, options: &RemoveComponentOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Delete, &["ak/api/v3/components"], &[options.id.as_str()], "remove_component")?
            .headers(&options.headers)
            .build())
    }

    pub fn build_delete_component(&self, options: &DeleteComponentOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Delete,
                &["ak/api/v3/kubernetes/components"],
                &[options.id.as_str()],
                "delete_component",
            )?
            .headers(&options.headers)
            .build())
    }

    pub fn build_edit_admin_certs(&self, options: &EditAdminCertsOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/kubernetes/components", "certs"],
                &[options.id.as_str()],
                "edit_admin_certs",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }

    pub fn build_list_components(&self, options: &ListComponentsOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(HttpMethod::Get, &["ak/api/v3/components"], &[], "list_components")?
            .query("deployment_attrs", options.deployment_attrs.as_deref())
            .query("parsed_certs", options.parsed_certs.as_deref())
            .query("cache", options.cache.as_deref())
            .query("ca_attrs", options.ca_attrs.as_deref())
            .headers(&options.headers)
            .build())
    }

    pub fn build_get_components_by_type(
        &self,
        options: &GetComponentsByTypeOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Get,
                &["ak/api/v3/components/types"],
                &[options.type_.as_str()],
                "get_components_by_type",
            )?
            .query("deployment_attrs", options.deployment_attrs.as_deref())
            .query("parsed_certs", options.parsed_certs.as_deref())
            .query("cache", options.cache.as_deref())
            .headers(&options.headers)
            .build())
    }

    pub fn build_get_components_by_tag(
        &self,
        options: &GetComponentsByTagOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Get,
                &["ak/api/v3/components/tags"],
                &[options.tag.as_str()],
                "get_components_by_tag",
            )?
            .query("deployment_attrs", options.deployment_attrs.as_deref())
            .query("parsed_certs", options.parsed_certs.as_deref())
            .query("cache", options.cache.as_deref())
            .headers(&options.headers)
            .build())
    }

    pub fn build_remove_components_by_tag(
        &self,
        options: &RemoveComponentsByTagOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Delete,
                &["ak/api/v3/components/tags"],
                &[options.tag.as_str()],
                "remove_components_by_tag",
            )?
            .headers(&options.headers)
            .build())
    }

    pub fn build_delete_components_by_tag(
        &self,
        options: &DeleteComponentsByTagOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Delete,
                &["ak/api/v3/kubernetes/components/tags"],
                &[options.tag.as_str()],
                "delete_components_by_tag",
            )?
            .headers(&options.headers)
            .build())
    }

    pub fn build_delete_all_components(
        &self,
        options: &DeleteAllComponentsOptions,
    ) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Delete,
                &["ak/api/v3/kubernetes/components/purge"],
                &[],
                "delete_all_components",
            )?
            .headers(&options.headers)
            .build())
    }

    pub fn build_submit_block(&self, options: &SubmitBlockOptions) -> Result<HttpRequest, ApiError> {
        options.validate()?;
        Ok(self
            .request(
                HttpMethod::Put,
                &["ak/api/v3/kubernetes/components", "config"],
                &[options.id.as_str()],
                "submit_block",
            )?
            .json_body(options)?
            .headers(&options.headers)
            .build())
    }
}
