//! routescope: a browser-based route inspector for hyper services.
//!
//! Register routes manually or with the `#[get]`/`#[post]` attribute
//! macros, flip the inspector on, and browse everything the app serves
//! at `/{prefix}` split into web and API listings, with configured
//! noise patterns filtered out.
//!
//! # Quick Start
//!
//! ```ignore
//! use routescope::prelude::*;
//!
//! #[get("/")]
//! async fn home() -> &'static str {
//!     "Hello!"
//! }
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     load_dotenv();
//!     RouteScope::new()
//!         .with_inspector(InspectorConfig::from_env())
//!         .discover()
//!         .listen("127.0.0.1:3000")
//!         .await
//! }
//! ```
//!
//! The inspector is governed by `ROUTESCOPE_ENABLED` and
//! `ROUTESCOPE_PREFIX`; by default it only comes up when `APP_ENV` is
//! `local` or `development`.

pub mod app;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod inspect;
pub mod logging;
pub mod response;
pub mod router;
pub mod state;
pub mod testing;

// Re-exported for the code the route macros generate.
pub use http;
pub use hyper;
pub use inventory;

pub mod prelude {
    pub use crate::app::RouteScope;
    pub use crate::config::{AppConfig, InspectorConfig, load_dotenv};
    pub use crate::error::{Error, Result};
    pub use crate::extract::{Path, PathParams, Query};
    pub use crate::response::{Html, IntoResponse, Json};
    pub use crate::router::Router;
    pub use http::StatusCode;
    pub use routescope_macros::{delete, get, post, put};
}
