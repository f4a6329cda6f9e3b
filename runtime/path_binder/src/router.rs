//! A thin adapter over [`matchit`] to extract path parameters from a request path.
//!
//! The binder itself doesn't care where parameters come from, as long as they
//! implement [`ParamSource`](crate::ParamSource).
//! This module exists to drive it with real route templates.
use crate::errors::{RouteNotFound, RouteRegistrationError};

pub use matchit::Params;

/// A set of route templates, each associated with a value (e.g. a handler identifier).
///
/// Route templates use `matchit`'s syntax: `/users/{id}` for named parameters,
/// `/assets/{*path}` for catch-all parameters.
#[derive(Debug, Clone)]
pub struct Router<T> {
    inner: matchit::Router<T>,
}

/// The outcome of a successful [`Router::at`] lookup.
#[derive(Debug)]
pub struct MatchedRoute<'server, 'request, V> {
    /// The value registered alongside the matched route template.
    pub value: V,
    /// The path parameters extracted from the request path.
    ///
    /// Values are raw: if you send a request to `/users/ann%20lee`, `id` is
    /// set to `ann%20lee`, not `ann lee`.
    pub params: Params<'server, 'request>,
}

impl<T> Router<T> {
    /// A router with no registered routes.
    pub fn new() -> Self {
        Self {
            inner: matchit::Router::new(),
        }
    }

    /// Register a new route template.
    pub fn route(
        &mut self,
        template: impl Into<String>,
        value: T,
    ) -> Result<(), RouteRegistrationError> {
        let template = template.into();
        self.inner
            .insert(template.clone(), value)
            .map_err(|source| RouteRegistrationError { template, source })
    }

    /// Find the route template that matches `path`.
    pub fn at<'server, 'request>(
        &'server self,
        path: &'request str,
    ) -> Result<MatchedRoute<'server, 'request, &'server T>, RouteNotFound> {
        match self.inner.at(path) {
            Ok(matched) => Ok(MatchedRoute {
                value: matched.value,
                params: matched.params,
            }),
            Err(source) => Err(RouteNotFound {
                path: path.to_owned(),
                source,
            }),
        }
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}
