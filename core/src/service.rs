//! Full round trips: validate, build, authenticate, send, decode.
//!
//! # Design
//! `ConsoleService` pairs a `ConsoleClient` with an `Authenticator` and a
//! `Transport`. Each method performs exactly one request and returns the
//! decoded result with its status and headers. Nothing is retried, cached,
//! or shared between calls, so one service can be used from many threads.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use crate::auth::Authenticator;
use crate::client::{parse_json, parse_text, ConsoleClient};
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{DetailedResponse, HttpRequest, HttpResponse, ANALYTICS_HEADER};
use crate::options::*;
use crate::transport::{Transport, UreqTransport};
use crate::types::*;

pub type ServiceResult<T> = Result<DetailedResponse<T>, ApiError>;

pub struct ConsoleService<T: Transport = UreqTransport> {
    client: ConsoleClient,
    authenticator: Box<dyn Authenticator>,
    transport: T,
}

impl ConsoleService<UreqTransport> {
    /// Build a service with a `UreqTransport` from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let authenticator = config.auth.authenticator()?;
        let transport = UreqTransport::with_timeout(config.timeout());
        Ok(Self::new(&config.url, authenticator, transport))
    }
}

impl<T: Transport> ConsoleService<T> {
    pub fn new(base_url: &str, authenticator: Box<dyn Authenticator>, transport: T) -> Self {
        Self {
            client: ConsoleClient::new(base_url),
            authenticator,
            transport,
        }
    }

    pub fn client(&self) -> &ConsoleClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn send(&self, mut request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.authenticator.authenticate(&mut request)?;
        let path = request.url.split('?').next().unwrap_or_default();
        debug!(
            method = %request.method,
            path,
            operation = request.header(ANALYTICS_HEADER).unwrap_or_default(),
            "sending console request"
        );
        let response = self.transport.send(&request)?;
        trace!(status = response.status, bytes = response.body.len(), "console responded");
        Ok(response)
    }

    fn call<R: DeserializeOwned + Default>(&self, request: Result<HttpRequest, ApiError>) -> ServiceResult<R> {
        parse_json(self.send(request?)?)
    }

    // Components

    pub fn get_component(&self, options: &GetComponentOptions) -> ServiceResult<GenericComponentResponse> {
        self.call(self.client.build_get_component(options))
    }

    pub fn remove_component(&self, options: &RemoveComponentOptions) -> ServiceResult<DeleteComponentResponse> {
        self.call(self.client.build_remove_component(options))
    }

    pub fn delete_component(&self, options: &DeleteComponentOptions) -> ServiceResult<DeleteComponentResponse> {
        self.call(self.client.build_delete_component(options))
    }

    pub fn edit_admin_certs(&self, options: &EditAdminCertsOptions) -> ServiceResult<EditAdminCertsResponse> {
        self.call(self.client.build_edit_admin_certs(options))
    }

    pub fn list_components(&self, options: &ListComponentsOptions) -> ServiceResult<GetMultiComponentsResponse> {
        self.call(self.client.build_list_components(options))
    }

    pub fn get_components_by_type(
        &self,
        options: &GetComponentsByTypeOptions,
    ) -> ServiceResult<GetMultiComponentsResponse> {
        self.call(self.client.build_get_components_by_type(options))
    }

    pub fn get_components_by_tag(&self, options: &GetComponentsByTagOptions) -> ServiceResult<GetMultiComponentsResponse> {
        self.call(self.client.build_get_components_by_tag(options))
    }

    pub fn remove_components_by_tag(
        &self,
        options: &RemoveComponentsByTagOptions,
    ) -> ServiceResult<RemoveMultiComponentsResponse> {
        self.call(self.client.build_remove_components_by_tag(options))
    }

    pub fn delete_components_by_tag(
        &self,
        options: &DeleteComponentsByTagOptions,
    ) -> ServiceResult<DeleteMultiComponentsResponse> {
        self.call(self.client.build_delete_components_by_tag(options))
    }

    pub fn delete_all_components(
        &self,
        options: &DeleteAllComponentsOptions,
    ) -> ServiceResult<DeleteMultiComponentsResponse> {
        self.call(self.client.build_delete_all_components(options))
    }

    pub fn submit_block(&self, options: &SubmitBlockOptions) -> ServiceResult<GenericComponentResponse> {
        self.call(self.client.build_submit_block(options))
    }

    // Certificate authorities

    pub fn create_ca(&self, options: &CreateCaOptions) -> ServiceResult<CaResponse> {
        self.call(self.client.build_create_ca(options))
    }

    pub fn import_ca(&self, options: &ImportCaOptions) -> ServiceResult<CaResponse> {
        self.call(self.client.build_import_ca(options))
    }

    pub fn update_ca(&self, options: &UpdateCaOptions) -> ServiceResult<CaResponse> {
        self.call(self.client.build_update_ca(options))
    }

    pub fn edit_ca(&self, options: &EditCaOptions) -> ServiceResult<CaResponse> {
        self.call(self.client.build_edit_ca(options))
    }

    pub fn ca_action(&self, options: &CaActionOptions) -> ServiceResult<ActionsResponse> {
        self.call(self.client.build_ca_action(options))
    }

    // Peers

    pub fn create_peer(&self, options: &CreatePeerOptions) -> ServiceResult<PeerResponse> {
        self.call(self.client.build_create_peer(options))
    }

    pub fn import_peer(&self, options: &ImportPeerOptions) -> ServiceResult<PeerResponse> {
        self.call(self.client.build_import_peer(options))
    }

    pub fn edit_peer(&self, options: &EditPeerOptions) -> ServiceResult<PeerResponse> {
        self.call(self.client.build_edit_peer(options))
    }

    pub fn peer_action(&self, options: &PeerActionOptions) -> ServiceResult<ActionsResponse> {
        self.call(self.client.build_peer_action(options))
    }

    pub fn update_peer(&self, options: &UpdatePeerOptions) -> ServiceResult<PeerResponse> {
        self.call(self.client.build_update_peer(options))
    }

    // Ordering services

    pub fn create_orderer(&self, options: &CreateOrdererOptions) -> ServiceResult<CreateOrdererResponse> {
        self.call(self.client.build_create_orderer(options))
    }

    pub fn import_orderer(&self, options: &ImportOrdererOptions) -> ServiceResult<OrdererResponse> {
        self.call(self.client.build_import_orderer(options))
    }

    pub fn edit_orderer(&self, options: &EditOrdererOptions) -> ServiceResult<OrdererResponse> {
        self.call(self.client.build_edit_orderer(options))
    }

    pub fn orderer_action(&self, options: &OrdererActionOptions) -> ServiceResult<ActionsResponse> {
        self.call(self.client.build_orderer_action(options))
    }

    pub fn update_orderer(&self, options: &UpdateOrdererOptions) -> ServiceResult<OrdererResponse> {
        self.call(self.client.build_update_orderer(options))
    }

    // Membership service providers

    pub fn import_msp(&self, options: &ImportMspOptions) -> ServiceResult<MspResponse> {
        self.call(self.client.build_import_msp(options))
    }

    pub fn edit_msp(&self, options: &EditMspOptions) -> ServiceResult<MspResponse> {
        self.call(self.client.build_edit_msp(options))
    }

    pub fn get_msp_certificate(&self, options: &GetMspCertificateOptions) -> ServiceResult<GetMspCertificateResponse> {
        self.call(self.client.build_get_msp_certificate(options))
    }

    // Console administration

    pub fn get_settings(&self, options: &GetSettingsOptions) -> ServiceResult<GetPublicSettingsResponse> {
        self.call(self.client.build_get_settings(options))
    }

    pub fn edit_settings(&self, options: &EditSettingsOptions) -> ServiceResult<GetPublicSettingsResponse> {
        self.call(self.client.build_edit_settings(options))
    }

    pub fn get_fab_versions(&self, options: &GetFabVersionsOptions) -> ServiceResult<GetFabricVersionsResponse> {
        self.call(self.client.build_get_fab_versions(options))
    }

    pub fn get_health(&self, options: &GetHealthOptions) -> ServiceResult<GetAthenaHealthStatsResponse> {
        self.call(self.client.build_get_health(options))
    }

    pub fn list_notifications(&self, options: &ListNotificationsOptions) -> ServiceResult<GetNotificationsResponse> {
        self.call(self.client.build_list_notifications(options))
    }

    pub fn delete_sig_tx(&self, options: &DeleteSigTxOptions) -> ServiceResult<DeleteSignatureCollectionResponse> {
        self.call(self.client.build_delete_sig_tx(options))
    }

    pub fn archive_notifications(&self, options: &ArchiveNotificationsOptions) -> ServiceResult<ArchiveResponse> {
        self.call(self.client.build_archive_notifications(options))
    }

    pub fn restart(&self, options: &RestartOptions) -> ServiceResult<RestartAthenaResponse> {
        self.call(self.client.build_restart(options))
    }

    pub fn delete_all_sessions(&self, options: &DeleteAllSessionsOptions) -> ServiceResult<DeleteAllSessionsResponse> {
        self.call(self.client.build_delete_all_sessions(options))
    }

    pub fn delete_all_notifications(
        &self,
        options: &DeleteAllNotificationsOptions,
    ) -> ServiceResult<DeleteAllNotificationsResponse> {
        self.call(self.client.build_delete_all_notifications(options))
    }

    pub fn clear_caches(&self, options: &ClearCachesOptions) -> ServiceResult<CacheFlushResponse> {
        self.call(self.client.build_clear_caches(options))
    }

    /// A Postman collection; its schema belongs to Postman, so it stays untyped.
    pub fn get_postman(&self, options: &GetPostmanOptions) -> ServiceResult<Value> {
        self.call(self.client.build_get_postman(options))
    }

    pub fn get_swagger(&self, options: &GetSwaggerOptions) -> ServiceResult<String> {
        let request = self.client.build_get_swagger(options)?;
        parse_text(self.send(request)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::auth::{BasicAuth, NoAuth};

    /// Records every request and answers with a canned response.
    struct CannedTransport {
        response: HttpResponse,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl CannedTransport {
        fn new(status: u16, body: &str) -> Self {
            Self {
                response: HttpResponse {
                    status,
                    headers: vec![("X-Request-Id".to_string(), "req-1".to_string())],
                    body: body.to_string(),
                },
                seen: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl Transport for CannedTransport {
        fn send(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            self.seen.lock().unwrap().push(request.clone());
            Ok(self.response.clone())
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn send(&self, _request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }

    fn service(transport: CannedTransport) -> ConsoleService<CannedTransport> {
        ConsoleService::new("http://localhost:3000", Box::new(NoAuth), transport)
    }

    #[test]
    fn get_component_round_trip() {
        let svc = service(CannedTransport::new(200, r#"{"id":"mypeer1","type":"fabric-peer"}"#));
        let options = GetComponentOptions {
            deployment_attrs: Some("included".to_string()),
            ..GetComponentOptions::new("mypeer1")
        };
        let response = svc.get_component(&options).unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.header("x-request-id"), Some("req-1"));
        assert_eq!(
            response.result,
            GenericComponentResponse {
                id: Some("mypeer1".to_string()),
                type_: Some("fabric-peer".to_string()),
                ..Default::default()
            }
        );

        let requests = svc.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].url,
            "http://localhost:3000/ak/api/v3/components/mypeer1?deployment_attrs=included"
        );
        assert_eq!(requests[0].header("accept"), Some("application/json"));
    }

    #[test]
    fn validation_failure_never_reaches_transport() {
        let svc = service(CannedTransport::new(200, "{}"));
        let err = svc.delete_component(&DeleteComponentOptions::default()).unwrap_err();
        assert!(matches!(err, ApiError::Validation { field: "id" }));
        assert!(svc.transport().requests().is_empty());
    }

    #[test]
    fn authenticator_runs_before_send() {
        let svc = ConsoleService::new(
            "http://localhost:3000",
            Box::new(BasicAuth::new("admin", "secret").unwrap()),
            CannedTransport::new(200, r#"{"message":"ok"}"#),
        );
        svc.restart(&RestartOptions::default()).unwrap();
        let requests = svc.transport().requests();
        assert_eq!(requests[0].header("Authorization"), Some("Basic YWRtaW46c2VjcmV0"));
    }

    #[test]
    fn transport_error_passes_through() {
        let svc = ConsoleService::new("http://localhost:3000", Box::new(NoAuth), FailingTransport);
        let err = svc.get_health(&GetHealthOptions::default()).unwrap_err();
        assert!(matches!(err, ApiError::Transport(msg) if msg == "connection refused"));
    }

    #[test]
    fn decode_error_keeps_metadata() {
        let svc = service(CannedTransport::new(200, r#"{"components":"none"}"#));
        let err = svc.list_components(&ListComponentsOptions::default()).unwrap_err();
        match err {
            ApiError::Decode { status, headers, .. } => {
                assert_eq!(status, 200);
                assert_eq!(headers[0].1, "req-1");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn swagger_is_returned_as_text() {
        let svc = service(CannedTransport::new(200, "openapi: 3.0.0\ninfo: {}\n"));
        let response = svc.get_swagger(&GetSwaggerOptions::default()).unwrap();
        assert!(response.result.starts_with("openapi: 3.0.0"));
        assert_eq!(svc.transport().requests()[0].header("accept"), Some("text/plain"));
    }

    #[test]
    fn not_found_is_distinguished() {
        let svc = service(CannedTransport::new(404, r#"{"statusCode":404}"#));
        let err = svc.get_component(&GetComponentOptions::new("missing")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn service_is_shareable_across_threads() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<ConsoleService<UreqTransport>>();
    }
}
