//! Declarative combobox configuration.
//!
//! A [`ComboboxConfig`] names a variant and lists the options, and can be
//! read from TOML or JSON:
//!
//! ```toml
//! variant = "autocomplete"
//! id_base = "fruit"
//! options = ["Apple", "Apricot", "Banana"]
//! ```
//!
//! ```
//! use horizon_combobox::{ComboboxConfig, Variant};
//!
//! let config = ComboboxConfig::from_toml_str(r#"
//! variant = "autoselect"
//! options = ["Apple", "Banana"]
//! "#).unwrap();
//!
//! assert_eq!(config.variant, Variant::Autoselect);
//! let combo = config.build();
//! assert_eq!(combo.displayed_value(), "Apple");
//! ```

use std::fs;
use std::path::Path;

use horizon_combobox_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::combobox::{Combobox, DEFAULT_ID_BASE};
use crate::error::{Error, Result};
use crate::policy::Variant;

fn default_id_base() -> String {
    DEFAULT_ID_BASE.to_string()
}

/// Everything needed to build a [`Combobox`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxConfig {
    /// Which behaviour to run.
    #[serde(default)]
    pub variant: Variant,

    /// Prefix for option element ids.
    #[serde(default = "default_id_base")]
    pub id_base: String,

    /// The option catalog, in display order.
    #[serde(default)]
    pub options: Vec<String>,
}

impl Default for ComboboxConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            id_base: default_id_base(),
            options: Vec::new(),
        }
    }
}

impl ComboboxConfig {
    /// Create a config for `variant` over `options`.
    pub fn new<I, S>(variant: Variant, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            variant,
            options: options.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Parse a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read a config file, choosing the format from its extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self> = match extension.as_deref() {
            Some("toml") => Self::from_toml_str,
            Some("json") => Self::from_json_str,
            _ => return Err(Error::unsupported_format(path)),
        };

        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = parse(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            variant = %config.variant,
            options = config.options.len(),
            "loaded combobox config"
        );
        Ok(config)
    }

    /// Serialize this config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Serialize this config as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the combobox this config describes.
    pub fn build(&self) -> Combobox {
        Combobox::new(self.options.clone(), self.variant).with_id_base(self.id_base.clone())
    }
}
