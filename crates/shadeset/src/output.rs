//! Rendering a derived theme and delivering it to stdout or a file.

use std::fs;
use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use shadeset_core::{PaletteSet, StyleConfig, Theme};
use tracing::debug;

use crate::error::{CliError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two custom-property blocks, ready to paste into a style sheet.
    #[default]
    Css,
    /// Variant, appearance, the active set, both token maps and the rendered blocks.
    Json,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(flatten)]
    theme: &'a Theme,
    /// Set matching the requested appearance (light when none was given).
    active: &'a PaletteSet,
    root_selector: &'a str,
    dark_selector: &'a str,
    css: &'a str,
}

/// Render `theme` in `format`. Never ends with a newline.
///
/// # Errors
///
/// [`CliError::Json`] if serialization fails.
pub fn render(theme: &Theme, style: &StyleConfig, format: OutputFormat) -> Result<String> {
    let css = theme.to_css(style);
    match format {
        OutputFormat::Css => Ok(css.into_string()),
        OutputFormat::Json => {
            let document = Document {
                theme,
                active: theme.active(),
                root_selector: &style.root_selector,
                dark_selector: &style.dark_selector,
                css: css.as_str(),
            };
            Ok(serde_json::to_string_pretty(&document)?)
        }
    }
}

/// Write `text` plus a trailing newline to `path`, or to stdout.
///
/// # Errors
///
/// [`CliError::Io`] for file failures, [`CliError::Stdout`] otherwise.
pub fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{text}\n")).map_err(|source| CliError::io(path, source))?;
            debug!(path = %path.display(), bytes = text.len() + 1, "theme written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{text}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}
