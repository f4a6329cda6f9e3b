//! Errors that can happen when binding path parameters or matching routes.
use http::StatusCode;

/// The error returned by [`Binder::bind`] when binding fails.
///
/// Binding stops at the first failure. Fields bound before the failing one
/// keep the values they were assigned: there is no rollback.
///
/// Use [`BindError::into_response`] to translate the error into an HTTP response.
///
/// [`Binder::bind`]: crate::Binder::bind
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BindError {
    /// No parameter source was provided, e.g. because the request didn't match
    /// any route.
    #[error("invalid request provided: there is no parameter source to bind from")]
    InvalidRequest,
    /// No target was provided to bind into.
    #[error("invalid bind target: it must be a mutable reference to a struct")]
    NonPointerTarget,
    /// A sequence field had to be split, but the configured delimiter is empty.
    #[error("invalid delimiter: sequence fields can't be split on an empty string")]
    InvalidDelimiter,
    /// A sequence field had no underlying storage (i.e. it was set to `None`).
    ///
    /// The binder never allocates on the caller's behalf: initialize the field
    /// to `Some(vec![])` before binding.
    #[error("`{field}` can't be bound: the sequence field must be initialized before binding")]
    NilSliceField {
        /// The name of the offending field.
        field: &'static str,
    },
    /// The field is annotated with `#[path_param]` but its type is neither
    /// `String` nor a sequence of `String`s.
    #[error(
        "invalid field type: `{field}` is a `{type_name}`, it must be `String`, \
        `Vec<String>` or `Option<Vec<String>>`"
    )]
    UnsupportedFieldType {
        /// The name of the offending field.
        field: &'static str,
        /// The declared type of the offending field, as written in the source.
        type_name: &'static str,
    },
}

impl BindError {
    /// The status code that should be returned to the caller.
    ///
    /// A missing parameter source is the client's fault (`400 Bad Request`),
    /// every other failure is caused by a programmer or configuration error
    /// (`500 Internal Server Error`).
    pub fn status_code(&self) -> StatusCode {
        match self {
            BindError::InvalidRequest => StatusCode::BAD_REQUEST,
            BindError::NonPointerTarget
            | BindError::InvalidDelimiter
            | BindError::NilSliceField { .. }
            | BindError::UnsupportedFieldType { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert a [`BindError`] into an HTTP response.
    ///
    /// Programmer errors get an opaque body, to avoid leaking details about the
    /// internals of the application.
    pub fn into_response(&self) -> http::Response<String> {
        let status = self.status_code();
        let body = if status == StatusCode::BAD_REQUEST {
            format!("Invalid URL.\n{self}")
        } else {
            "Something went wrong when trying to process the request".to_owned()
        };
        let mut response = http::Response::new(body);
        *response.status_mut() = status;
        response
    }
}

/// The error returned by [`Router::route`] when a route template can't be registered.
///
/// [`Router::route`]: crate::router::Router::route
#[derive(Debug, thiserror::Error)]
#[error("`{template}` can't be registered as a route")]
pub struct RouteRegistrationError {
    pub(crate) template: String,
    #[source]
    pub(crate) source: matchit::InsertError,
}

/// The error returned by [`Router::at`] when no route matches the given path.
///
/// [`Router::at`]: crate::router::Router::at
#[derive(Debug, thiserror::Error)]
#[error("no route matches `{path}`")]
pub struct RouteNotFound {
    pub(crate) path: String,
    #[source]
    pub(crate) source: matchit::MatchError,
}

#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
#[error("Failed to load the binder configuration")]
/// The error returned by [`BinderConfig::load`](crate::BinderConfig::load).
pub struct ConfigLoadError(#[source] pub(crate) anyhow::Error);
