//! Route metadata shown by the inspector.

use serde::Serialize;

/// A registered route as the inspector sees it.
///
/// Transient read model built from the router table at app build time;
/// `name` is optional because most routes are never named.
///
/// # Examples
///
/// ```
/// use routescope::inspect::RouteRecord;
///
/// let record = RouteRecord::new("GET", "/users/:id").named("users.show");
/// assert_eq!(record.method, "GET");
/// assert_eq!(record.name.as_deref(), Some("users.show"));
/// ```
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteRecord {
    /// The HTTP method (GET, POST, PUT, DELETE, etc.).
    pub method: String,
    /// The URI pattern with parameters (e.g., "/users/:id").
    pub uri: String,
    /// The route name, if one was assigned.
    pub name: Option<String>,
    /// Label of the handler behind the route.
    pub handler: String,
}

impl RouteRecord {
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            name: None,
            handler: "handler".to_string(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn handled_by(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = RouteRecord::new("GET", "/users");
        assert_eq!(record.method, "GET");
        assert_eq!(record.uri, "/users");
        assert_eq!(record.name, None);
    }

    #[test]
    fn test_record_builders() {
        let record = RouteRecord::new("POST", "/users")
            .named("users.store")
            .handled_by("create_user");
        assert_eq!(record.name.as_deref(), Some("users.store"));
        assert_eq!(record.handler, "create_user");
    }

    #[test]
    fn test_record_serialize() {
        let record = RouteRecord::new("GET", "/health").handled_by("health_check");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"method\":\"GET\""));
        assert!(json.contains("\"uri\":\"/health\""));
        assert!(json.contains("\"name\":null"));
        assert!(json.contains("\"handler\":\"health_check\""));
    }
}
