use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Type-keyed application state.
///
/// Holds one value per type, registered at build time via
/// [`RouteScope::state`](crate::app::RouteScope::state) and read by
/// handlers with [`AppState::get`]. Immutable once the app is built.
#[derive(Default)]
pub struct AppState {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<T: Send + Sync + 'static>(&mut self, value: T) {
        self.entries.insert(TypeId::of::<T>(), Box::new(value));
    }

    pub fn get<T: Send + Sync + 'static>(&self) -> Option<&T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.downcast_ref::<T>())
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("entries", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Marker(u32);

    #[test]
    fn test_insert_then_get() {
        let mut state = AppState::new();
        state.insert(Marker(7));
        assert_eq!(state.get::<Marker>(), Some(&Marker(7)));
    }

    #[test]
    fn test_get_missing_type_is_none() {
        let state = AppState::new();
        assert!(state.get::<Marker>().is_none());
    }

    #[test]
    fn test_insert_replaces_previous_value() {
        let mut state = AppState::new();
        state.insert(Marker(1));
        state.insert(Marker(2));
        assert_eq!(state.get::<Marker>(), Some(&Marker(2)));
    }
}
