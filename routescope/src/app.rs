//! Application builder and HTTP serve loop.

use std::convert::Infallible;
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use http::{Request, Response};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;
use tokio::net::TcpListener;
use tracing::{Instrument, debug, info, info_span, warn};
use uuid::Uuid;

use crate::config::InspectorConfig;
use crate::discovery::RouteDescriptor;
use crate::inspect::{self, RouteRegistry};
use crate::response::BoxBody;
use crate::router::Router;
use crate::state::AppState;

/// How long to wait for in-flight connections after a shutdown signal.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(10);

/// Application builder.
///
/// # Quick Start
///
/// ```ignore
/// use routescope::prelude::*;
///
/// #[tokio::main]
/// async fn main() -> std::io::Result<()> {
///     load_dotenv();
///     RouteScope::new()
///         .with_inspector(InspectorConfig::from_env())
///         .discover()
///         .listen("127.0.0.1:3000")
///         .await
/// }
/// ```
pub struct RouteScope {
    router: Router,
    state: AppState,
    inspector: Option<InspectorConfig>,
}

impl RouteScope {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            state: AppState::new(),
            inspector: None,
        }
    }

    /// Adds the routes of `router` to the app. Additive with
    /// [`discover`](RouteScope::discover).
    pub fn router(mut self, router: Router) -> Self {
        self.router = self.router.extend(router);
        self
    }

    /// Registers a state value, retrievable in handlers via
    /// [`AppState::get`].
    pub fn state<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        self.state.insert(value);
        self
    }

    /// Configures the route inspector. The inspector routes are only
    /// mounted when `config.enabled` is true; otherwise this is a no-op
    /// and requests under the prefix fall through to 404.
    pub fn with_inspector(mut self, config: InspectorConfig) -> Self {
        self.inspector = Some(config);
        self
    }

    /// Wires in every route registered at link time by the route macros.
    pub fn discover(mut self) -> Self {
        for descriptor in inventory::iter::<RouteDescriptor> {
            debug!(
                method = descriptor.method,
                path = descriptor.path,
                handler = descriptor.handler_name,
                "registering discovered route"
            );
            self.router = (descriptor.register)(self.router);
        }
        self
    }

    /// Mounts the inspector (when enabled) and freezes the app.
    ///
    /// The registry snapshot is taken after the inspector routes are
    /// added, so the inspector lists itself unless an exclusion pattern
    /// hides it, which the default pattern list does.
    pub(crate) fn build(mut self) -> Engine {
        if let Some(config) = self.inspector.take() {
            if config.enabled {
                let base = config.base_path();
                info!(prefix = %base, "route inspector enabled");

                let json_path = format!("{}/routes.json", base);
                self.router = self
                    .router
                    .get(&base, inspect::inspector_index)
                    .name("routescope.index")
                    .get(&json_path, inspect::routes_json)
                    .name("routescope.routes");

                self.state
                    .insert(RouteRegistry::with_routes(self.router.records()));
                self.state.insert(config);
            }
        }

        Engine {
            router: self.router,
            state: Arc::new(self.state),
        }
    }

    /// Binds `addr` and serves until ctrl-c, then drains connections.
    pub async fn listen(self, addr: &str) -> io::Result<()> {
        let engine = Arc::new(self.build());
        let listener = TcpListener::bind(addr).await?;
        info!(%addr, "listening");

        let server = http1::Builder::new();
        let graceful = GracefulShutdown::new();
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let (stream, remote) = match accepted {
                        Ok(pair) => pair,
                        Err(err) => {
                            warn!(%err, "failed to accept connection");
                            continue;
                        }
                    };
                    debug!(%remote, "connection accepted");

                    let engine = engine.clone();
                    let service = service_fn(move |req| {
                        let engine = engine.clone();
                        async move { Ok::<_, Infallible>(engine.handle(req).await) }
                    });

                    let conn = graceful.watch(server.serve_connection(TokioIo::new(stream), service));
                    tokio::spawn(async move {
                        if let Err(err) = conn.await {
                            debug!(%err, "connection error");
                        }
                    });
                }
                _ = &mut shutdown => {
                    info!("shutdown signal received, draining connections");
                    break;
                }
            }
        }

        tokio::select! {
            _ = graceful.shutdown() => info!("connections drained"),
            _ = tokio::time::sleep(SHUTDOWN_GRACE) => warn!("drain timed out, closing"),
        }

        Ok(())
    }
}

impl Default for RouteScope {
    fn default() -> Self {
        Self::new()
    }
}

/// The frozen app: route table plus shared state.
pub(crate) struct Engine {
    router: Router,
    state: Arc<AppState>,
}

impl Engine {
    pub(crate) async fn handle(&self, req: Request<Incoming>) -> Response<BoxBody> {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let request_id = Uuid::new_v4();
        let span = info_span!("request", %method, %path, %request_id);

        async {
            let started = Instant::now();
            let response = self.router.dispatch(req, self.state.clone()).await;
            debug!(
                status = response.status().as_u16(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "request served"
            );
            response
        }
        .instrument(span)
        .await
    }
}
