//! Option layering: built-in defaults, then a JSON config file, then flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shadeset_core::{LengthUnit, StyleConfig, ThemeOptions, Variant};

use crate::error::{CliError, Result};

/// Primary color shown when the editor first opens.
pub const DEFAULT_PRIMARY: &str = "#007bff";

/// Corner radius shown when the editor first opens.
pub const DEFAULT_RADIUS: f64 = 0.5;

/// Contents of a `--config` file. Every field is optional.
///
/// ```json
/// { "primary": "tomato", "variant": "tint", "dark_selector": "[data-theme=dark]" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub primary: Option<String>,
    pub radius: Option<f64>,
    pub variant: Option<String>,
    pub appearance: Option<String>,
    pub root_selector: Option<String>,
    pub dark_selector: Option<String>,
    pub radius_unit: Option<LengthUnit>,
}

impl FileConfig {
    /// Read and parse a config file.
    ///
    /// # Errors
    ///
    /// [`CliError::Io`] when the file cannot be read and
    /// [`CliError::InvalidConfig`] when it is not a valid config object.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
        serde_json::from_str(&text).map_err(|error| CliError::InvalidConfig {
            path: path.to_path_buf(),
            message: error.to_string(),
        })
    }
}

/// Values given on the command line; `None` defers to the lower layers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub primary: Option<String>,
    pub radius: Option<f64>,
    pub variant: Option<String>,
    pub appearance: Option<String>,
    pub root_selector: Option<String>,
    pub dark_selector: Option<String>,
    pub radius_unit: Option<LengthUnit>,
    pub config: Option<PathBuf>,
}

/// Fully layered input for one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub options: ThemeOptions,
    pub style: StyleConfig,
}

impl Overrides {
    /// Apply the layers in order. The config file is read only when given.
    ///
    /// # Errors
    ///
    /// See [`FileConfig::load`].
    pub fn resolve(&self) -> Result<Resolved> {
        let file = match &self.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(self.layer_over(file))
    }

    /// Layer these flags over an already loaded file config.
    #[must_use]
    pub fn layer_over(&self, file: FileConfig) -> Resolved {
        let defaults = StyleConfig::default();

        let primary = self
            .primary
            .clone()
            .or(file.primary)
            .unwrap_or_else(|| DEFAULT_PRIMARY.to_string());
        let radius = self.radius.or(file.radius).unwrap_or(DEFAULT_RADIUS);
        let variant = self
            .variant
            .clone()
            .or(file.variant)
            .unwrap_or_else(|| Variant::default().into());

        let mut options = ThemeOptions::new(primary, radius).variant(variant);
        options.appearance = self.appearance.clone().or(file.appearance);

        let style = StyleConfig {
            root_selector: self
                .root_selector
                .clone()
                .or(file.root_selector)
                .unwrap_or(defaults.root_selector),
            dark_selector: self
                .dark_selector
                .clone()
                .or(file.dark_selector)
                .unwrap_or(defaults.dark_selector),
            radius_unit: self
                .radius_unit
                .or(file.radius_unit)
                .unwrap_or(defaults.radius_unit),
        };

        Resolved { options, style }
    }
}
