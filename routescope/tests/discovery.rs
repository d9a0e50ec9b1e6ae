//! Integration tests for route auto-discovery.
//!
//! IMPORTANT: `inventory` collects from the entire test binary, so every
//! `discover()` call below sees every handler in this file. Unique
//! `/disc-*` path prefixes keep the assertions unambiguous.

use http::StatusCode;
use routescope::prelude::*;
use routescope::testing::TestClient;
use serde_json::Value;

// ── Discovered handlers ─────────────────────────────────────────────────────

#[get("/disc-hello")]
async fn disc_hello() -> &'static str {
    "hello from discovery"
}

#[post("/disc-echo")]
async fn disc_echo() -> &'static str {
    "echoed"
}

#[put("/disc-update")]
async fn disc_update() -> &'static str {
    "updated"
}

#[delete("/disc-remove")]
async fn disc_remove() -> StatusCode {
    StatusCode::NO_CONTENT
}

#[get("/disc-items/:id")]
async fn disc_item(id: Path<u64>) -> String {
    format!("item {}", id.into_inner())
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    term: Option<String>,
}

#[get("/disc-search")]
async fn disc_search(query: Query<SearchQuery>) -> String {
    format!("term={}", query.term.clone().unwrap_or_default())
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_discovered_get_route() {
    let app = RouteScope::new().discover();
    let client = TestClient::new(app).await;

    let response = client.get("/disc-hello").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "hello from discovery");
}

#[tokio::test]
async fn test_discovered_post_route() {
    let app = RouteScope::new().discover();
    let client = TestClient::new(app).await;

    let response = client.post("/disc-echo").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "echoed");
}

#[tokio::test]
async fn test_discovered_put_route() {
    let app = RouteScope::new().discover();
    let client = TestClient::new(app).await;

    let response = client.put("/disc-update").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "updated");
}

#[tokio::test]
async fn test_discovered_delete_route() {
    let app = RouteScope::new().discover();
    let client = TestClient::new(app).await;

    let response = client.delete("/disc-remove").send().await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_discovered_route_extracts_path_param() {
    let app = RouteScope::new().discover();
    let client = TestClient::new(app).await;

    let response = client.get("/disc-items/42").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "item 42");
}

#[tokio::test]
async fn test_discovered_route_extracts_query() {
    let app = RouteScope::new().discover();
    let client = TestClient::new(app).await;

    let response = client.get("/disc-search?term=users").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "term=users");
}

#[tokio::test]
async fn test_discover_and_router_are_additive() {
    let manual = Router::new().get("/disc-manual", |_, _, _| async { "manual route" });

    let app = RouteScope::new().router(manual).discover();
    let client = TestClient::new(app).await;

    let response = client.get("/disc-hello").send().await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = client.get("/disc-manual").send().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text(), "manual route");
}

#[tokio::test]
async fn test_discovered_routes_appear_in_inspector() {
    let app = RouteScope::new()
        .discover()
        .with_inspector(InspectorConfig::new());
    let client = TestClient::new(app).await;

    let response = client.get("/routescope/routes.json").send().await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = response.json();
    let web = json["web"].as_array().unwrap();

    let paths: Vec<&str> = web
        .iter()
        .filter_map(|route| route.get("uri").and_then(Value::as_str))
        .collect();
    assert!(paths.contains(&"/disc-hello"));
    assert!(paths.contains(&"/disc-echo"));
    assert!(paths.contains(&"/disc-items/:id"));

    let hello = web
        .iter()
        .find(|route| route["uri"] == "/disc-hello")
        .unwrap();
    assert_eq!(hello["handler"], "disc_hello");
}
