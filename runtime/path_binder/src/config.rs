//! Configuration for a [`Binder`](crate::Binder).
//!
//! [`BinderConfig`] is the key type in this module.
use std::borrow::Cow;

/// The configuration of a [`Binder`](crate::Binder).
///
/// It can be deserialized from any `serde`-compatible format.
/// All fields are optional and fall back to their default value.
///
/// # Example
///
/// ```yaml
/// delimiter: ";"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct BinderConfig {
    /// The string used to split a parameter value when the target field is a sequence.
    ///
    /// Defaults to `,`.
    pub delimiter: Delimiter,
}

impl BinderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the [delimiter](Self::delimiter).
    pub fn delimiter(mut self, delimiter: impl Into<Delimiter>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}

/// The separator used to split one parameter value into a sequence of values.
///
/// An empty delimiter can be constructed, but binding a sequence field with it
/// fails with [`BindError::InvalidDelimiter`](crate::errors::BindError::InvalidDelimiter).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Delimiter(Cow<'static, str>);

impl Delimiter {
    /// The default delimiter, `,`.
    pub const COMMA: Delimiter = Delimiter(Cow::Borrowed(","));

    pub fn new(delimiter: impl Into<Cow<'static, str>>) -> Self {
        Self(delimiter.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Self::COMMA
    }
}

impl From<&'static str> for Delimiter {
    fn from(value: &'static str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Delimiter {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for Delimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "config")]
mod loader {
    use std::path::Path;

    use anyhow::Context;
    use figment::{
        Figment,
        providers::{Env, Format, Serialized, Yaml},
    };

    use super::BinderConfig;
    use crate::errors::ConfigLoadError;

    static ENV_PREFIX: &str = "PB_";

    impl BinderConfig {
        /// Load the binder configuration by merging together three sources:
        ///
        /// 1. Environment variables (`PB_*`, e.g. `PB_DELIMITER`)
        /// 2. The configuration file, `{configuration_dir}/binder.yml`
        /// 3. The default values
        ///
        /// The list above is ordered by precedence.
        /// The configuration file is optional: it's skipped if it doesn't exist.
        pub fn load(configuration_dir: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
            let configuration_dir = configuration_dir.as_ref();
            let span = tracing::info_span!(
                "Loading binder configuration",
                configuration.directory = %configuration_dir.display(),
            );
            let _guard = span.enter();

            let figment = Figment::from(Serialized::defaults(BinderConfig::default()))
                .merge(Yaml::file(configuration_dir.join("binder.yml")))
                .merge(Env::prefixed(ENV_PREFIX));
            let config: BinderConfig = figment
                .extract()
                .context("Failed to load hierarchical configuration")
                .map_err(ConfigLoadError)?;
            tracing::debug!(delimiter = %config.delimiter, "Loaded binder configuration");
            Ok(config)
        }
    }
}
