use std::fmt;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::state::AppState;

/// Path parameters captured while matching a route pattern.
///
/// Entries keep the order of the `:param` segments in the pattern.
#[derive(Debug, Clone, Default)]
pub struct PathParams {
    params: Vec<(String, String)>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn first(&self) -> Option<(&str, &str)> {
        self.params
            .first()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Extraction from the request head, path parameters, and app state.
///
/// Implemented by extractors that never touch the request body, which is
/// all the route macros need.
#[allow(async_fn_in_trait)]
pub trait FromRequestParts: Sized {
    async fn from_request_parts(
        parts: &http::request::Parts,
        params: &PathParams,
        state: &Arc<AppState>,
    ) -> Result<Self, Error>;
}

/// Typed path parameter extractor for the first `:param` in the pattern.
#[derive(Debug)]
pub struct Path<T>(pub T);

impl<T> Path<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Path<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Display> fmt::Display for Path<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T> FromRequestParts for Path<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    async fn from_request_parts(
        _parts: &http::request::Parts,
        params: &PathParams,
        _state: &Arc<AppState>,
    ) -> Result<Self, Error> {
        let (name, raw) = params
            .first()
            .ok_or_else(|| Error::bad_request("missing path parameter"))?;

        let value = raw
            .parse::<T>()
            .map_err(|e| Error::bad_request(format!("invalid path parameter `{}`: {}", name, e)))?;

        Ok(Path(value))
    }
}

/// Typed query-string extractor.
pub struct Query<T>(pub T);

impl<T> Query<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Query<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: DeserializeOwned> FromRequestParts for Query<T> {
    async fn from_request_parts(
        parts: &http::request::Parts,
        _params: &PathParams,
        _state: &Arc<AppState>,
    ) -> Result<Self, Error> {
        let query = parts.uri.query().unwrap_or("");
        let value = serde_urlencoded::from_str(query)
            .map_err(|e| Error::validation(format!("invalid query string: {}", e)))?;

        Ok(Query(value))
    }
}
