//! The scan: partition registered routes into API and web listings and
//! drop anything matching an exclusion pattern.

use serde::Serialize;

use super::RouteRecord;

/// Result of scanning the route table.
///
/// Two listings, both in registration order. Computed per request from
/// the registry snapshot; nothing here is cached or persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteScan {
    pub api: Vec<RouteRecord>,
    pub web: Vec<RouteRecord>,
}

impl RouteScan {
    pub fn total(&self) -> usize {
        self.api.len() + self.web.len()
    }
}

/// Partitions routes into API and web listings, skipping any route whose
/// URI contains one of the exclusion patterns.
///
/// A URI is an API route when its path starts with the `/api` segment.
/// Patterns are plain substrings; empty patterns are ignored so a stray
/// `""` cannot blank the whole listing.
pub fn scan(routes: &[RouteRecord], excluded_patterns: &[String]) -> RouteScan {
    let mut result = RouteScan::default();

    for route in routes {
        if is_excluded(&route.uri, excluded_patterns) {
            continue;
        }
        if is_api(&route.uri) {
            result.api.push(route.clone());
        } else {
            result.web.push(route.clone());
        }
    }

    result
}

fn is_excluded(uri: &str, patterns: &[String]) -> bool {
    patterns
        .iter()
        .filter(|pattern| !pattern.is_empty())
        .any(|pattern| uri.contains(pattern.as_str()))
}

fn is_api(uri: &str) -> bool {
    let path = uri.strip_prefix('/').unwrap_or(uri);
    path == "api" || path.starts_with("api/")
}
