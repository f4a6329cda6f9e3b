use crate::binder::Binder;
use crate::errors::BindError;
use crate::source::ParamSource;

/// A struct whose annotated fields can be populated from path parameters.
///
/// You shouldn't implement this trait by hand: use `#[derive(BindTarget)]`
/// instead, it builds the field descriptor table for you.
///
/// # Example
///
/// ```rust
/// use path_binder::BindTarget;
/// use std::collections::HashMap;
///
/// #[derive(BindTarget, Default)]
/// pub struct Article {
///     #[path_param(name = "id")]
///     id: String,
///     #[path_param(name = "tags")]
///     tags: Vec<String>,
///     // Not annotated, never touched by the binder.
///     views: u64,
/// }
///
/// # fn main() -> Result<(), path_binder::errors::BindError> {
/// let params = HashMap::from([("id", "42"), ("tags", "rust,web")]);
/// let mut article = Article::default();
/// article.bind_from(&params)?;
///
/// assert_eq!(article.id, "42");
/// assert_eq!(article.tags, vec!["rust", "web"]);
/// assert_eq!(article.views, 0);
/// # Ok(())
/// # }
/// ```
pub trait BindTarget: Sized + 'static {
    /// The annotated fields of `Self`, in declaration order.
    ///
    /// Unannotated fields don't appear in this table.
    const FIELDS: &'static [FieldDescriptor<Self>];

    /// Bind path parameters into `self` using the default [`Binder`]
    /// (i.e. sequences are split on `,`).
    fn bind_from<S>(&mut self, source: &S) -> Result<(), BindError>
    where
        S: ParamSource + ?Sized,
    {
        Binder::default().bind(Some(source), Some(self))
    }
}

/// An annotated field of `T`.
pub struct FieldDescriptor<T> {
    name: &'static str,
    param: &'static str,
    kind: FieldKind<T>,
}

/// The shape of an annotated field, alongside an accessor to reach it.
pub enum FieldKind<T> {
    /// A `String` field. The raw parameter value replaces its content.
    Text(fn(&mut T) -> &mut String),
    /// A `Vec<String>` field. The split parameter value is appended to it.
    TextSequence(fn(&mut T) -> &mut Vec<String>),
    /// An `Option<Vec<String>>` field.
    ///
    /// The split parameter value is appended to it if it's `Some`, binding fails otherwise.
    OptionalTextSequence(fn(&mut T) -> &mut Option<Vec<String>>),
    /// A field whose type can't be bound from a path parameter.
    Unsupported {
        /// The declared type of the field, as written in the source.
        type_name: &'static str,
    },
}

impl<T> FieldDescriptor<T> {
    /// Describe a field named `name`, bound from the `param` path parameter.
    ///
    /// Invoked by `#[derive(BindTarget)]`, you shouldn't need to call it yourself.
    #[doc(hidden)]
    pub const fn new(name: &'static str, param: &'static str, kind: FieldKind<T>) -> Self {
        Self { name, param, kind }
    }

    /// The name of the field.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The name of the path parameter this field is bound from.
    pub fn param(&self) -> &'static str {
        self.param
    }

    /// The shape of the field, alongside its accessor.
    pub fn kind(&self) -> &FieldKind<T> {
        &self.kind
    }
}

impl<T> std::fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("param", &self.param)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T> std::fmt::Debug for FieldKind<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text(_) => f.write_str("Text"),
            FieldKind::TextSequence(_) => f.write_str("TextSequence"),
            FieldKind::OptionalTextSequence(_) => f.write_str("OptionalTextSequence"),
            FieldKind::Unsupported { type_name } => f
                .debug_struct("Unsupported")
                .field("type_name", type_name)
                .finish(),
        }
    }
}
