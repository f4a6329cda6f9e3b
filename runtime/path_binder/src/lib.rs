//! # `path_binder`
//!
//! Populate the fields of a struct from the path parameters of a matched route.
//!
//! Fields opt in via the `#[path_param]` attribute, which names the parameter
//! they are bound from.
//! Two field shapes are supported:
//!
//! - `String`, set to the raw parameter value;
//! - `Vec<String>` and `Option<Vec<String>>`, which get the parameter value,
//!   split on the configured [`Delimiter`], appended to their current content.
//!
//! ```rust
//! use path_binder::BindTarget;
//! use path_binder::router::Router;
//!
//! #[derive(BindTarget, Default)]
//! pub struct Post {
//!     #[path_param(name = "id")]
//!     id: String,
//!     #[path_param(name = "tags")]
//!     tags: Option<Vec<String>>,
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.route("/posts/{id}/{tags}", ())?;
//! let matched = router.at("/posts/1/rust,web")?;
//!
//! // Sequence fields must be initialized before binding.
//! let mut post = Post {
//!     tags: Some(vec![]),
//!     ..Default::default()
//! };
//! post.bind_from(&matched.params)?;
//! assert_eq!(post.id, "1");
//! assert_eq!(post.tags, Some(vec!["rust".to_string(), "web".to_string()]));
//! # Ok(())
//! # }
//! ```
//!
//! Check out [`Binder`] for the details of the binding process and [`BindTarget`]
//! for the derive macro.

// Allow the derive macro to refer to `::path_binder` from within this crate.
extern crate self as path_binder;

pub use binder::Binder;
pub use config::{BinderConfig, Delimiter};
pub use source::ParamSource;
pub use target::{BindTarget, FieldDescriptor, FieldKind};

/// Derive an implementation of [`BindTarget`] for a struct with named fields.
///
/// Annotate each field that should be bound with `#[path_param(name = "...")]`.
/// A bare `#[path_param]` binds from the parameter named after the field.
///
/// ```rust
/// use path_binder::BindTarget;
///
/// #[derive(BindTarget)]
/// pub struct Home {
///     // Bound from the `home_id` parameter.
///     #[path_param]
///     home_id: String,
///     // Bound from the `r` parameter.
///     #[path_param(name = "r")]
///     rooms: Vec<String>,
///     // Never touched.
///     cached: bool,
/// }
/// ```
///
/// Annotated fields whose type is not `String`, `Vec<String>` or
/// `Option<Vec<String>>` are recorded as unsupported: binding fails with
/// [`BindError::UnsupportedFieldType`](errors::BindError::UnsupportedFieldType)
/// when they are reached.
/// Type aliases are not resolved.
pub use path_binder_macros::BindTarget;

mod binder;
mod config;
pub mod errors;
pub mod router;
mod source;
mod target;
