//! Style sheet rendering of palette sets.
//!
//! Output shape:
//!
//! ```text
//! :root {
//!   --background: 0 0% 100%;
//!   ...
//!   --radius: 0.5rem;
//! }
//!
//! .dark {
//!   ...
//! }
//! ```

use std::fmt;
use std::fmt::Write as _;

use crate::color::Color;
use crate::tokens::{LengthUnit, PaletteSet, RoleColor};

/// Where and how the two rule blocks are emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct StyleConfig {
    /// Selector of the default (light) block.
    pub root_selector: String,
    /// Selector of the dark-mode block.
    pub dark_selector: String,
    /// Unit appended to the radius value.
    pub radius_unit: LengthUnit,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            root_selector: ":root".to_string(),
            dark_selector: ".dark".to_string(),
            radius_unit: LengthUnit::Rem,
        }
    }
}

/// Rendered style text holding both rule blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleText(String);

impl StyleText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Value of `--<name>` inside the block opened by `selector`.
    #[must_use]
    pub fn value_of(&self, selector: &str, name: &str) -> Option<&str> {
        let header = format!("{selector} {{");
        let block = self
            .0
            .split("\n\n")
            .find(|block| block.trim_start().starts_with(&header))?;
        let prefix = format!("--{name}:");
        block.lines().find_map(|line| {
            line.trim()
                .strip_prefix(&prefix)
                .map(|rest| rest.trim().trim_end_matches(';'))
        })
    }
}

impl fmt::Display for StyleText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<StyleText> for String {
    fn from(text: StyleText) -> Self {
        text.0
    }
}

/// Encode a color as `"<hue> <saturation>% <lightness>%"`.
#[must_use]
pub fn format_color(color: Color) -> String {
    RoleColor::from_color(color).to_string()
}

/// Render the light set under `config.root_selector` and the dark set under
/// `config.dark_selector`, one `  --<role>: <value>;` line per token.
#[must_use]
pub fn assemble(light: &PaletteSet, dark: &PaletteSet, config: &StyleConfig) -> StyleText {
    let mut out = String::new();
    write_block(&mut out, &config.root_selector, light);
    out.push_str("\n\n");
    write_block(&mut out, &config.dark_selector, dark);
    StyleText(out)
}

fn write_block(out: &mut String, selector: &str, set: &PaletteSet) {
    out.push_str(selector);
    out.push_str(" {\n");
    for (name, value) in set.declarations() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "  --{name}: {value};");
    }
    out.push('}');
}
