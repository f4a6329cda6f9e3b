use tracing_log_error::log_error;

use crate::config::{BinderConfig, Delimiter};
use crate::errors::BindError;
use crate::source::ParamSource;
use crate::target::{BindTarget, FieldKind};

/// Populate the annotated fields of a struct from a set of path parameters.
///
/// A `Binder` is immutable once built: it can be shared freely across threads.
///
/// # Example
///
/// ```rust
/// use path_binder::{Binder, BindTarget, BinderConfig};
/// use path_binder::router::Router;
///
/// #[derive(BindTarget, Default)]
/// pub struct Search {
///     #[path_param(name = "category")]
///     category: String,
///     #[path_param(name = "terms")]
///     terms: Vec<String>,
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.route("/search/{category}/{terms}", ())?;
/// let matched = router.at("/search/books/rust;async")?;
///
/// let binder = Binder::new(BinderConfig::new().delimiter(";"));
/// let mut search = Search::default();
/// binder.bind(Some(&matched.params), Some(&mut search))?;
///
/// assert_eq!(search.category, "books");
/// assert_eq!(search.terms, vec!["rust", "async"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Binder {
    config: BinderConfig,
}

impl Binder {
    /// A binder driven by `config`.
    ///
    /// The delimiter isn't validated here: an empty one is only rejected
    /// when a sequence field is bound.
    pub fn new(config: BinderConfig) -> Self {
        Self { config }
    }

    /// A binder that splits sequence fields on the given delimiter.
    pub fn with_delimiter(delimiter: impl Into<Delimiter>) -> Self {
        Self::new(BinderConfig::new().delimiter(delimiter))
    }

    /// The configuration this binder was built with.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Bind the parameters in `source` into the annotated fields of `target`.
    ///
    /// Fields are processed in declaration order:
    ///
    /// - `String` fields are overwritten with the raw parameter value;
    /// - sequence fields get the parameter value, split on the configured
    ///   delimiter, **appended** to their current content.
    ///
    /// Missing parameters are treated as empty strings.
    /// Unannotated fields are neither read nor written.
    ///
    /// # Errors
    ///
    /// Binding stops at the first error and fields bound up to that point keep
    /// their new values.
    /// Check out [`BindError`] for the possible failure modes.
    pub fn bind<S, T>(&self, source: Option<&S>, target: Option<&mut T>) -> Result<(), BindError>
    where
        S: ParamSource + ?Sized,
        T: BindTarget,
    {
        let span = tracing::debug_span!(
            "Bind path parameters",
            target = std::any::type_name::<T>(),
        );
        let _guard = span.enter();
        self._bind(source, target).inspect_err(|e| {
            log_error!(e, level: tracing::Level::DEBUG, "Failed to bind path parameters");
        })
    }

    fn _bind<S, T>(&self, source: Option<&S>, target: Option<&mut T>) -> Result<(), BindError>
    where
        S: ParamSource + ?Sized,
        T: BindTarget,
    {
        let source = source.ok_or(BindError::InvalidRequest)?;
        let target = target.ok_or(BindError::NonPointerTarget)?;

        for field in T::FIELDS {
            let value = source.lookup(field.param());
            match field.kind() {
                FieldKind::Text(access) => {
                    let slot = access(target);
                    slot.clear();
                    slot.push_str(value);
                }
                FieldKind::TextSequence(access) => {
                    let delimiter = self.delimiter()?;
                    access(target).extend(value.split(delimiter).map(ToOwned::to_owned));
                }
                FieldKind::OptionalTextSequence(access) => {
                    let delimiter = self.delimiter()?;
                    let Some(slot) = access(target) else {
                        return Err(BindError::NilSliceField {
                            field: field.name(),
                        });
                    };
                    slot.extend(value.split(delimiter).map(ToOwned::to_owned));
                }
                FieldKind::Unsupported { type_name } => {
                    return Err(BindError::UnsupportedFieldType {
                        field: field.name(),
                        type_name: *type_name,
                    });
                }
            }
            tracing::trace!(field = field.name(), param = field.param(), "Bound field");
        }
        Ok(())
    }

    fn delimiter(&self) -> Result<&str, BindError> {
        let delimiter = &self.config.delimiter;
        if delimiter.is_empty() {
            return Err(BindError::InvalidDelimiter);
        }
        Ok(delimiter.as_str())
    }
}
