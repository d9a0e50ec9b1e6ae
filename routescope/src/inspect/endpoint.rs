//! Inspector endpoints: the HTML page and its JSON counterpart.

use std::sync::Arc;

use http::{Request, Response, StatusCode};
use hyper::body::Incoming;

use crate::config::InspectorConfig;
use crate::extract::PathParams;
use crate::response::{BoxBody, Html, IntoResponse};
use crate::state::AppState;

use super::{RouteRecord, scan, view};

/// Snapshot of the route table, stored in application state when the
/// inspector is mounted.
#[derive(Debug, Clone, Default)]
pub struct RouteRegistry {
    routes: Vec<RouteRecord>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn with_routes(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }
}

/// Handler for `GET /{prefix}`.
///
/// Scans the registry against the configured exclusion patterns and
/// renders the two listings as HTML.
pub async fn inspector_index(
    _req: Request<Incoming>,
    _params: PathParams,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    match state.get::<RouteRegistry>().zip(state.get::<InspectorConfig>()) {
        Some((registry, config)) => {
            let result = scan(registry.routes(), &config.excluded_patterns);
            Html(view::render(&result)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Handler for `GET /{prefix}/routes.json`.
///
/// Same scan as the HTML page, serialized as `{"api": [..], "web": [..]}`.
pub async fn routes_json(
    _req: Request<Incoming>,
    _params: PathParams,
    state: Arc<AppState>,
) -> Response<BoxBody> {
    match state.get::<RouteRegistry>().zip(state.get::<InspectorConfig>()) {
        Some((registry, config)) => {
            let result = scan(registry.routes(), &config.excluded_patterns);
            let json = serde_json::to_vec(&result).unwrap_or_default();
            Response::builder()
                .status(StatusCode::OK)
                .header("content-type", "application/json")
                .body(http_body_util::Full::new(bytes::Bytes::from(json)))
                .unwrap()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
