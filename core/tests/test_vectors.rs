//! Verify build and parse against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected results or errors. Results are compared as JSON values after
//! re-encoding, so a `None` field that leaked onto the wire, or a key that
//! was dropped while decoding, shows up as a mismatch.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use console_core::options::{EditSettingsOptions, GetComponentOptions, ImportMspOptions, ListNotificationsOptions};
use console_core::types::{GenericComponentResponse, GetNotificationsResponse, GetPublicSettingsResponse, MspResponse};
use console_core::{parse_json, ApiError, ConsoleClient, HttpMethod, HttpRequest, HttpResponse};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ConsoleClient {
    ConsoleClient::new(BASE_URL)
}

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn opt_string(input: &Value, key: &str) -> Option<String> {
    input[key].as_str().map(str::to_string)
}

fn string_list(input: &Value, key: &str) -> Option<Vec<String>> {
    input[key].as_array().map(|items| {
        items
            .iter()
            .map(|item| item.as_str().unwrap().to_string())
            .collect()
    })
}

fn check_request(name: &str, req: &HttpRequest, expected: &Value) {
    assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");
    assert_eq!(req.url, format!("{BASE_URL}{}", expected["path"].as_str().unwrap()), "{name}: url");

    assert!(
        req.header("User-Agent").unwrap().starts_with("console-core/"),
        "{name}: user agent"
    );
    for pair in expected["headers"].as_array().unwrap() {
        let pair = pair.as_array().unwrap();
        let (key, value) = (pair[0].as_str().unwrap(), pair[1].as_str().unwrap());
        assert_eq!(req.header(key), Some(value), "{name}: header {key}");
    }

    match expected.get("body") {
        Some(body) => {
            let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&sent, body, "{name}: body");
        }
        None => {
            assert!(req.body.is_none(), "{name}: unexpected body");
            assert!(req.header("Content-Type").is_none(), "{name}: unexpected content type");
        }
    }
}

fn simulated(case: &Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Parse the simulated response as `T` and compare with the expected outcome.
fn check_response<T: DeserializeOwned + Serialize + Default>(name: &str, case: &Value) {
    let response = simulated(case);
    let status = response.status;
    let parsed = parse_json::<T>(response);

    match case["expected_error"].as_str() {
        Some("not_found") => assert!(matches!(parsed, Err(ApiError::NotFound)), "{name}: expected NotFound"),
        Some("http") => match parsed {
            Err(ApiError::Http { status: got, body }) => {
                assert_eq!(got, status, "{name}: status");
                assert_eq!(body, case["simulated_response"]["body"].as_str().unwrap(), "{name}: body");
            }
            _ => panic!("{name}: expected Http error"),
        },
        Some("decode") => match parsed {
            Err(ApiError::Decode { status: got, headers, .. }) => {
                assert_eq!(got, status, "{name}: status");
                assert!(!headers.is_empty(), "{name}: headers kept");
            }
            _ => panic!("{name}: expected Decode error"),
        },
        Some(other) => panic!("{name}: unknown expected_error {other}"),
        None => {
            let detailed = parsed.unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(detailed.status, status, "{name}: status");
            assert_eq!(detailed.header("content-type"), Some("application/json"), "{name}: headers");
            let result = serde_json::to_value(&detailed.result).unwrap();
            assert_eq!(result, case["expected_result"], "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Get component
// ---------------------------------------------------------------------------

#[test]
fn get_component_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/get_component.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let options = GetComponentOptions {
            deployment_attrs: opt_string(input, "deployment_attrs"),
            parsed_certs: opt_string(input, "parsed_certs"),
            cache: opt_string(input, "cache"),
            ca_attrs: opt_string(input, "ca_attrs"),
            ..GetComponentOptions::new(input["id"].as_str().unwrap())
        };

        let req = c.build_get_component(&options).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_response::<GenericComponentResponse>(name, &case);
    }
}

// ---------------------------------------------------------------------------
// List notifications
// ---------------------------------------------------------------------------

#[test]
fn list_notifications_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/list_notifications.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let options = ListNotificationsOptions {
            limit: input["limit"].as_u64().map(|n| n as u32),
            skip: input["skip"].as_u64().map(|n| n as u32),
            component_id: opt_string(input, "component_id"),
            ..Default::default()
        };

        let req = c.build_list_notifications(&options).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_response::<GetNotificationsResponse>(name, &case);
    }
}

// ---------------------------------------------------------------------------
// Edit settings
// ---------------------------------------------------------------------------

#[test]
fn edit_settings_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/edit_settings.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let options = EditSettingsOptions {
            max_req_per_min: input["max_req_per_min"].as_u64(),
            max_req_per_min_ak: input["max_req_per_min_ak"].as_u64(),
            inactivity_timeouts: serde_json::from_value(input["inactivity_timeouts"].clone()).unwrap(),
            ..Default::default()
        };

        let req = c.build_edit_settings(&options).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_response::<GetPublicSettingsResponse>(name, &case);
    }
}

// ---------------------------------------------------------------------------
// Import MSP
// ---------------------------------------------------------------------------

#[test]
fn import_msp_test_vectors() {
    let c = client();
    for case in load(include_str!("../../test-vectors/import_msp.json")) {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let options = ImportMspOptions {
            msp_id: input["msp_id"].as_str().unwrap().to_string(),
            display_name: input["display_name"].as_str().unwrap().to_string(),
            root_certs: string_list(input, "root_certs").unwrap_or_default(),
            intermediate_certs: string_list(input, "intermediate_certs"),
            admins: string_list(input, "admins"),
            tls_root_certs: string_list(input, "tls_root_certs"),
            ..Default::default()
        };

        if let Some(field) = case["expected_validation_error"].as_str() {
            match c.build_import_msp(&options) {
                Err(ApiError::Validation { field: got }) => assert_eq!(got, field, "{name}: field"),
                other => panic!("{name}: expected validation error, got {other:?}"),
            }
            continue;
        }

        let req = c.build_import_msp(&options).unwrap();
        check_request(name, &req, &case["expected_request"]);
        check_response::<MspResponse>(name, &case);
    }
}
