//! Route inspection: enumerate registered routes, drop configured noise
//! patterns, and split the rest into API and web listings.

mod endpoint;
mod record;
mod scan;
mod view;

pub use endpoint::{RouteRegistry, inspector_index, routes_json};
pub use record::RouteRecord;
pub use scan::{RouteScan, scan};
