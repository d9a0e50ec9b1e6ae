use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::{Method, Request, Response, StatusCode};
use hyper::body::Incoming;

use crate::extract::PathParams;
use crate::inspect::RouteRecord;
use crate::response::{BoxBody, IntoResponse};
use crate::state::AppState;

type BoxFuture = Pin<Box<dyn Future<Output = Response<BoxBody>> + Send>>;
type HandlerFn = Box<dyn Fn(Request<Incoming>, PathParams, Arc<AppState>) -> BoxFuture + Send + Sync>;

struct RouteEntry {
    method: Method,
    pattern: String,
    name: Option<String>,
    handler_label: String,
    handler: HandlerFn,
}

/// Route table with `:param` pattern matching.
///
/// Routes are matched in registration order; the first entry whose method
/// and pattern fit the request wins. The table doubles as the source of
/// truth for the inspector via [`Router::records`].
pub struct Router {
    routes: Vec<RouteEntry>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    pub fn route<F, Fut, Out>(self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        let label = handler_label::<F>();
        self.push(method, path, label, handler)
    }

    pub fn get<F, Fut, Out>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        self.route(Method::GET, path, handler)
    }

    pub fn post<F, Fut, Out>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        self.route(Method::POST, path, handler)
    }

    pub fn put<F, Fut, Out>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        self.route(Method::PUT, path, handler)
    }

    pub fn delete<F, Fut, Out>(self, path: &str, handler: F) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        self.route(Method::DELETE, path, handler)
    }

    /// Names the most recently added route.
    ///
    /// ```
    /// use routescope::router::Router;
    ///
    /// let router = Router::new()
    ///     .get("/dashboard", |_, _, _| async { "ok" })
    ///     .name("dashboard.index");
    /// assert_eq!(router.records()[0].name.as_deref(), Some("dashboard.index"));
    /// ```
    pub fn name(mut self, name: &str) -> Self {
        if let Some(route) = self.routes.last_mut() {
            route.name = Some(name.to_string());
        }
        self
    }

    /// Registration entry point for descriptors collected at link time.
    /// The route macros generate calls to this; use [`Router::route`]
    /// for manual registration.
    #[doc(hidden)]
    pub fn discovered<F, Fut, Out>(
        self,
        method: &str,
        path: &str,
        handler_name: &'static str,
        handler: F,
    ) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        let method = method.parse::<Method>().unwrap_or(Method::GET);
        self.push(method, path, handler_name.to_string(), handler)
    }

    fn push<F, Fut, Out>(mut self, method: Method, path: &str, label: String, handler: F) -> Self
    where
        F: Fn(Request<Incoming>, PathParams, Arc<AppState>) -> Fut + Send + Sync + Clone + 'static,
        Fut: Future<Output = Out> + Send + 'static,
        Out: IntoResponse + 'static,
    {
        let handler = Box::new(
            move |req: Request<Incoming>, params: PathParams, state: Arc<AppState>| {
                let handler = handler.clone();
                Box::pin(async move {
                    let output = handler(req, params, state).await;
                    output.into_response()
                }) as BoxFuture
            },
        );

        self.routes.push(RouteEntry {
            method,
            pattern: path.to_string(),
            name: None,
            handler_label: label,
            handler,
        });
        self
    }

    pub(crate) fn extend(mut self, other: Router) -> Self {
        self.routes.extend(other.routes);
        self
    }

    /// Snapshots the table as inspector records, in registration order.
    pub fn records(&self) -> Vec<RouteRecord> {
        self.routes
            .iter()
            .map(|route| RouteRecord {
                method: route.method.to_string(),
                uri: route.pattern.clone(),
                name: route.name.clone(),
                handler: route.handler_label.clone(),
            })
            .collect()
    }

    pub(crate) async fn dispatch(
        &self,
        req: Request<Incoming>,
        state: Arc<AppState>,
    ) -> Response<BoxBody> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        for route in &self.routes {
            if route.method != method {
                continue;
            }
            if let Some(params) = match_pattern(&route.pattern, &path) {
                return (route.handler)(req, params, state).await;
            }
        }

        StatusCode::NOT_FOUND.into_response()
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches a request path against a pattern, capturing `:param` segments.
fn match_pattern(pattern: &str, path: &str) -> Option<PathParams> {
    let pattern_segments: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = PathParams::new();
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = expected.strip_prefix(':') {
            if actual.is_empty() {
                return None;
            }
            params.insert(name, *actual);
        } else if expected != actual {
            return None;
        }
    }

    Some(params)
}

/// Derives a display label for a handler from its type name, so manual
/// registrations get `list_users` rather than a full closure path.
fn handler_label<F>() -> String {
    let full = std::any::type_name::<F>();
    full.rsplit("::")
        .find(|segment| *segment != "{{closure}}")
        .unwrap_or("handler")
        .to_string()
}
