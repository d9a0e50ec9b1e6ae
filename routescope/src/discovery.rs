//! Route auto-discovery via `inventory`.
//!
//! When handlers are annotated with `#[get]`, `#[post]`, `#[put]`, or
//! `#[delete]`, the macro emits an `inventory::submit!` that registers a
//! [`RouteDescriptor`] at link time. Calling
//! [`RouteScope::discover()`](crate::app::RouteScope::discover) iterates
//! these descriptors and wires them into the router automatically, so
//! they show up in the inspector like any manually registered route.

use crate::router::Router;

/// Metadata about a route handler, collected at link time via `inventory`.
///
/// Emitted by the `#[get]`, `#[post]`, `#[put]`, `#[delete]` macros.
pub struct RouteDescriptor {
    /// HTTP method (GET, POST, PUT, DELETE)
    pub method: &'static str,
    /// Route path pattern (e.g. "/users/:id")
    pub path: &'static str,
    /// Function name of the handler
    pub handler_name: &'static str,
    /// Registers this route on the given Router and returns it
    pub register: fn(Router) -> Router,
}

inventory::collect!(RouteDescriptor);
