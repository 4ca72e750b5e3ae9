//! In-memory stand-in for the console management API.
//!
//! Implements the component inventory, MSP and peer import, settings,
//! health, notifications, and the OpenAPI document, which is enough to drive
//! the client end to end. Components are stored as raw JSON objects so the
//! mock never masks a schema mismatch on the client side.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;
use uuid::Uuid;

pub const OPENAPI_DOCUMENT: &str = "openapi: 3.0.0\ninfo:\n  title: Blockchain Console API\n  version: v3\n";

#[derive(Default)]
pub struct Console {
    pub components: BTreeMap<String, Value>,
    pub notifications: Vec<Value>,
    pub settings: Map<String, Value>,
}

#[derive(Clone)]
pub struct AppState {
    db: Arc<RwLock<Console>>,
    authorization: Option<Arc<str>>,
}

pub fn app() -> Router {
    router(None)
}

/// Like [`app`], but every request must carry exactly this `Authorization`
/// header value.
pub fn app_with_authorization(authorization: &str) -> Router {
    router(Some(Arc::from(authorization)))
}

fn router(authorization: Option<Arc<str>>) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(seed())),
        authorization,
    };
    Router::new()
        .route("/ak/api/v3/components", get(list_components))
        .route("/ak/api/v3/components/{id}", get(get_component).delete(remove_component))
        .route(
            "/ak/api/v3/components/tags/{tag}",
            get(get_components_by_tag).delete(remove_components_by_tag),
        )
        .route("/ak/api/v3/components/msp", post(import_msp))
        .route("/ak/api/v3/components/fabric-peer", post(import_peer))
        .route("/ak/api/v3/components/fabric-peer/{id}", put(edit_peer))
        .route("/ak/api/v3/settings", get(get_settings).put(edit_settings))
        .route("/ak/api/v3/health", get(get_health))
        .route("/ak/api/v3/notifications", get(list_notifications))
        .route("/ak/api/v3/notifications/bulk", post(archive_notifications))
        .route("/ak/api/v3/openapi", get(get_openapi))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_authorization))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

fn seed() -> Console {
    let mut settings = Map::new();
    settings.insert("ATHENA_ID".to_string(), json!("mock-console"));
    settings.insert("AUTH_SCHEME".to_string(), json!("couchdb"));
    settings.insert("MAX_REQ_PER_MIN".to_string(), json!(25));
    settings.insert("MAX_REQ_PER_MIN_AK".to_string(), json!(25));
    settings.insert(
        "INACTIVITY_TIMEOUTS".to_string(),
        json!({"enabled": false, "max_idle_time": 90000}),
    );
    settings.insert(
        "FILE_LOGGING".to_string(),
        json!({
            "server": {"enabled": false, "level": "silly", "unique_name": false},
            "client": {"enabled": true, "level": "silly", "unique_name": false}
        }),
    );
    settings.insert("FEATURE_FLAGS".to_string(), json!({"mustgather_enabled": true}));
    settings.insert("TRUST_PROXY".to_string(), json!("loopback"));
    Console {
        components: BTreeMap::new(),
        notifications: Vec::new(),
        settings,
    }
}

async fn require_authorization(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if let Some(expected) = &state.authorization {
        let presented = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        if presented != Some(expected.as_ref()) {
            return error(StatusCode::UNAUTHORIZED, "missing or invalid credentials");
        }
    }
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"statusCode": status.as_u16(), "msgs": [message]})),
    )
        .into_response()
}

fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "component not found")
}

/// Console-style ids: the display name lower-cased with only alphanumerics.
fn derive_id(console: &Console, display_name: &str) -> String {
    let base: String = display_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let base = if base.is_empty() { "component".to_string() } else { base };
    let mut id = base.clone();
    let mut n = 1;
    while console.components.contains_key(&id) {
        n += 1;
        id = format!("{base}_{n}");
    }
    id
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn field<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn has_tag(component: &Value, tag: &str) -> bool {
    component
        .get("tags")
        .and_then(Value::as_array)
        .is_some_and(|tags| tags.iter().any(|t| t.as_str() == Some(tag)))
}

fn deleted_summary(component: &Value) -> Value {
    json!({
        "message": "deleted",
        "type": component.get("type").cloned().unwrap_or(Value::Null),
        "id": component.get("id").cloned().unwrap_or(Value::Null),
        "display_name": component.get("display_name").cloned().unwrap_or(Value::Null),
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct ComponentQuery {
    pub deployment_attrs: Option<String>,
}

/// Deployment attributes are only reported when asked for.
fn present(component: &Value, query: &ComponentQuery) -> Value {
    let mut component = component.clone();
    if query.deployment_attrs.as_deref() != Some("included") {
        if let Some(obj) = component.as_object_mut() {
            obj.remove("resources");
            obj.remove("storage");
        }
    }
    component
}

async fn list_components(State(state): State<AppState>, Query(query): Query<ComponentQuery>) -> Json<Value> {
    let db = state.db.read().await;
    let components: Vec<Value> = db.components.values().map(|c| present(c, &query)).collect();
    Json(json!({ "components": components }))
}

async fn get_component(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ComponentQuery>,
) -> Response {
    let db = state.db.read().await;
    match db.components.get(&id) {
        Some(component) => Json(present(component, &query)).into_response(),
        None => not_found(),
    }
}

async fn remove_component(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let mut db = state.db.write().await;
    match db.components.remove(&id) {
        Some(component) => {
            debug!(%id, "removed component");
            notify(&mut db, &id, format!("removed component {id}"));
            Json(deleted_summary(&component)).into_response()
        }
        None => not_found(),
    }
}

async fn get_components_by_tag(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(query): Query<ComponentQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let components: Vec<Value> = db
        .components
        .values()
        .filter(|c| has_tag(c, &tag))
        .map(|c| present(c, &query))
        .collect();
    Json(json!({ "components": components }))
}

async fn remove_components_by_tag(State(state): State<AppState>, Path(tag): Path<String>) -> Response {
    let mut db = state.db.write().await;
    let ids: Vec<String> = db
        .components
        .iter()
        .filter(|(_, c)| has_tag(c, &tag))
        .map(|(id, _)| id.clone())
        .collect();
    if ids.is_empty() {
        return error(StatusCode::NOT_FOUND, "no components with that tag");
    }
    let removed: Vec<Value> = ids
        .iter()
        .filter_map(|id| db.components.remove(id))
        .map(|c| deleted_summary(&c))
        .collect();
    for id in &ids {
        notify(&mut db, id, format!("removed component {id}"));
    }
    Json(json!({ "removed": removed })).into_response()
}

async fn import_msp(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let (Some(msp_id), Some(display_name)) = (field(&body, "msp_id"), field(&body, "display_name")) else {
        return error(StatusCode::BAD_REQUEST, "msp_id and display_name are required");
    };
    let root_certs = body.get("root_certs").and_then(Value::as_array);
    if root_certs.map_or(true, |certs| certs.is_empty()) {
        return error(StatusCode::BAD_REQUEST, "root_certs is required");
    }
    let mut db = state.db.write().await;
    let id = derive_id(&db, display_name);
    let mut component = json!({
        "id": id,
        "type": "msp",
        "display_name": display_name,
        "msp_id": msp_id,
        "timestamp": now_ms(),
        "scheme_version": "v1",
    });
    for key in ["root_certs", "intermediate_certs", "admins", "tls_root_certs", "tags"] {
        if let Some(value) = body.get(key) {
            component[key] = value.clone();
        }
    }
    db.components.insert(id, component.clone());
    (StatusCode::OK, Json(component)).into_response()
}

async fn import_peer(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let (Some(display_name), Some(grpcwp_url), Some(msp_id)) = (
        field(&body, "display_name"),
        field(&body, "grpcwp_url"),
        field(&body, "msp_id"),
    ) else {
        return error(StatusCode::BAD_REQUEST, "display_name, grpcwp_url and msp_id are required");
    };
    if body.get("msp").is_none() {
        return error(StatusCode::BAD_REQUEST, "msp is required");
    }
    let mut db = state.db.write().await;
    let id = field(&body, "id")
        .map(str::to_string)
        .unwrap_or_else(|| derive_id(&db, display_name));
    let mut component = json!({
        "id": id,
        "type": "fabric-peer",
        "display_name": display_name,
        "grpcwp_url": grpcwp_url,
        "msp_id": msp_id,
        "location": "-",
        "timestamp": now_ms(),
        "scheme_version": "v1",
    });
    for key in ["msp", "api_url", "operations_url", "location", "tags"] {
        if let Some(value) = body.get(key) {
            component[key] = value.clone();
        }
    }
    db.components.insert(id, component.clone());
    Json(component).into_response()
}

async fn edit_peer(State(state): State<AppState>, Path(id): Path<String>, Json(body): Json<Value>) -> Response {
    let mut db = state.db.write().await;
    let Some(component) = db.components.get_mut(&id) else {
        return not_found();
    };
    if let (Some(target), Some(changes)) = (component.as_object_mut(), body.as_object()) {
        for (key, value) in changes {
            target.insert(key.clone(), value.clone());
        }
    }
    Json(component.clone()).into_response()
}

async fn get_settings(State(state): State<AppState>) -> Json<Value> {
    let db = state.db.read().await;
    Json(Value::Object(db.settings.clone()))
}

async fn edit_settings(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let Some(changes) = body.as_object() else {
        return error(StatusCode::BAD_REQUEST, "body must be an object");
    };
    let mut db = state.db.write().await;
    for (key, value) in changes {
        let key = key.to_ascii_uppercase();
        if key.starts_with("FABRIC_") {
            let timeouts = db.settings.entry("TIMEOUTS").or_insert_with(|| json!({}));
            timeouts[key.as_str()] = value.clone();
            continue;
        }
        // Nested objects are merged one level deep.
        if let (Some(Value::Object(current)), Value::Object(update)) = (db.settings.get_mut(&key), value) {
            for (k, v) in update {
                current.insert(k.clone(), v.clone());
            }
            continue;
        }
        db.settings.insert(key, value.clone());
    }
    Json(Value::Object(db.settings.clone())).into_response()
}

async fn get_health() -> Json<Value> {
    Json(json!({
        "OPTOOLS": {
            "instance_id": "mock-console-0",
            "now": now_ms(),
            "up_time": "1 hour",
            "memory": {"rss": "56.0MB", "heap_total": "32.0MB", "heap_used": "20.0MB", "external": "1.0MB"},
            "session_cache_stats": {"hits": 0, "misses": 0, "keys": 0}
        },
        "OS": {
            "arch": std::env::consts::ARCH,
            "type": std::env::consts::OS,
            "endian": "LE",
            "loadavg": [0.0, 0.0, 0.0],
            "hostname": "mock"
        }
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    pub limit: Option<usize>,
    pub skip: Option<usize>,
    pub component_id: Option<String>,
}

async fn list_notifications(
    State(state): State<AppState>,
    Query(query): Query<NotificationQuery>,
) -> Json<Value> {
    let db = state.db.read().await;
    let matching: Vec<&Value> = db
        .notifications
        .iter()
        .filter(|n| match &query.component_id {
            Some(id) => n.get("component_id").and_then(Value::as_str) == Some(id.as_str()),
            None => true,
        })
        .collect();
    let page: Vec<Value> = matching
        .iter()
        .skip(query.skip.unwrap_or(0))
        .take(query.limit.unwrap_or(usize::MAX))
        .map(|n| (*n).clone())
        .collect();
    Json(json!({
        "total": matching.len(),
        "returning": page.len(),
        "notifications": page,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    pub notification_ids: Vec<String>,
}

async fn archive_notifications(State(state): State<AppState>, Json(body): Json<ArchiveRequest>) -> Response {
    let mut db = state.db.write().await;
    let before = db.notifications.len();
    db.notifications.retain(|n| {
        let id = n.get("id").and_then(Value::as_str).unwrap_or_default();
        !body.notification_ids.iter().any(|wanted| wanted == id)
    });
    let archived = before - db.notifications.len();
    Json(json!({"message": "ok", "details": format!("archived {archived} notification(s)")})).into_response()
}

async fn get_openapi() -> Response {
    ([(header::CONTENT_TYPE, "text/plain")], OPENAPI_DOCUMENT).into_response()
}

/// Record a notification, as the console does after component changes.
fn notify(console: &mut Console, component_id: &str, message: String) {
    console.notifications.push(json!({
        "id": Uuid::new_v4().simple().to_string(),
        "type": "general",
        "status": "success",
        "by": "mock",
        "message": message,
        "component_id": component_id,
        "ts_display": now_ms(),
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_id_strips_punctuation_and_dedupes() {
        let mut console = Console::default();
        assert_eq!(derive_id(&console, "Org1 CA"), "org1ca");
        console.components.insert("org1ca".to_string(), json!({}));
        assert_eq!(derive_id(&console, "Org1 CA"), "org1ca_2");
        assert_eq!(derive_id(&console, "!!"), "component");
    }

    #[test]
    fn deployment_attrs_are_hidden_by_default() {
        let component = json!({"id": "p1", "resources": {"peer": {}}, "storage": {}});
        let hidden = present(&component, &ComponentQuery::default());
        assert!(hidden.get("resources").is_none());
        let shown = present(
            &component,
            &ComponentQuery {
                deployment_attrs: Some("included".to_string()),
            },
        );
        assert!(shown.get("resources").is_some());
    }

    #[test]
    fn tags_match_exactly() {
        let component = json!({"tags": ["org1", "peers"]});
        assert!(has_tag(&component, "org1"));
        assert!(!has_tag(&component, "org"));
        assert!(!has_tag(&json!({}), "org1"));
    }
}
