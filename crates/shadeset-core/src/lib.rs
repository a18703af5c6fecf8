#![forbid(unsafe_code)]

//! Palette derivation engine for design-token themes.
//!
//! # Role in shadeset
//! `shadeset-core` turns one primary color, a corner radius and a
//! [`Variant`] into two complete sets of role colors (light and dark),
//! rendered as style-sheet custom properties. It is a pure function of its
//! inputs: no I/O, no shared state, safe to call from any thread.
//!
//! # Pipeline
//! 1. [`options::validate`] checks the raw [`ThemeOptions`].
//! 2. [`Color::parse`] turns the primary string into an OKLCH [`Color`].
//! 3. [`Variant::derive`] runs the Tint, Vibrant or Professional strategy,
//!    picking foregrounds with [`contrast::select_foreground`].
//! 4. [`css::assemble`] renders both [`PaletteSet`]s.
//!
//! ```
//! use shadeset_core::{ThemeOptions, generate_theme};
//!
//! let css = generate_theme(&ThemeOptions::new("#007bff", 0.5).variant("tint"))?;
//! assert!(css.as_str().starts_with(":root {"));
//! assert_eq!(css.value_of(".dark", "radius"), Some("0.5rem"));
//! # Ok::<(), shadeset_core::ThemeError>(())
//! ```

/// Perceptual color model, parsing and contrast.
pub mod color;
/// Foreground selection by contrast threshold.
pub mod contrast;
/// Style sheet rendering.
pub mod css;
/// Error types.
pub mod error;
/// Raw input and validation.
pub mod options;
/// Tint, Vibrant and Professional derivations.
pub mod strategy;
/// Roles, encoded values and palette sets.
pub mod tokens;

pub use color::{Channel, Color, MixSpace, contrast as contrast_ratio};
pub use contrast::{WCAG_THRESHOLD, select_foreground};
pub use css::{StyleConfig, StyleText, assemble, format_color};
pub use error::{ColorParseError, Result, ThemeError, ValidationError};
pub use options::{Appearance, ThemeOptions, ValidatedOptions, Variant, validate};
pub use strategy::PalettePair;
pub use tokens::{LengthUnit, PaletteSet, Radius, Role, RoleColor, TokenValue};

use tracing::{debug, debug_span};

/// A derived theme: both palette sets plus the normalized selectors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Theme {
    pub variant: Variant,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub appearance: Option<Appearance>,
    pub light: PaletteSet,
    pub dark: PaletteSet,
}

impl Theme {
    /// Render both sets with `config`'s selectors.
    #[must_use]
    pub fn to_css(&self, config: &StyleConfig) -> StyleText {
        assemble(&self.light, &self.dark, config)
    }

    /// The set matching the active appearance, light when none is set.
    #[must_use]
    pub fn active(&self) -> &PaletteSet {
        match self.appearance {
            Some(Appearance::Dark) => &self.dark,
            Some(Appearance::Light) | None => &self.light,
        }
    }
}

/// Validate, parse and derive, using the default radius unit.
///
/// # Errors
///
/// [`ThemeError::Validation`] for malformed options and
/// [`ThemeError::ColorParse`] when the primary is not a color.
pub fn derive_theme(options: &ThemeOptions) -> Result<Theme> {
    derive_theme_with(options, LengthUnit::default())
}

/// [`derive_theme`] with an explicit radius unit.
///
/// # Errors
///
/// See [`derive_theme`].
pub fn derive_theme_with(options: &ThemeOptions, radius_unit: LengthUnit) -> Result<Theme> {
    let validated = validate(options).inspect_err(|error| {
        debug!(%error, "theme options rejected");
    })?;

    let _span = debug_span!(
        "generate_theme",
        variant = %validated.variant,
        appearance = ?validated.appearance,
    )
    .entered();

    let primary = Color::parse(&validated.primary).inspect_err(|error| {
        debug!(%error, "primary color rejected");
    })?;

    let radius = Radius::new(validated.radius, radius_unit);
    let PalettePair { light, dark } = validated.variant.derive(primary, radius);

    Ok(Theme {
        variant: validated.variant,
        appearance: validated.appearance,
        light,
        dark,
    })
}

/// Generate the style text for `options` with the default [`StyleConfig`].
///
/// # Errors
///
/// See [`derive_theme`].
pub fn generate_theme(options: &ThemeOptions) -> Result<StyleText> {
    generate_theme_with(options, &StyleConfig::default())
}

/// Generate the style text for `options` with an explicit [`StyleConfig`].
///
/// # Errors
///
/// See [`derive_theme`].
pub fn generate_theme_with(options: &ThemeOptions, config: &StyleConfig) -> Result<StyleText> {
    let theme = derive_theme_with(options, config.radius_unit)?;
    Ok(theme.to_css(config))
}

#[cfg(test)]
mod tests {
    use tracing_test::traced_test;

    use super::*;

    #[test]
    fn generate_is_deterministic() {
        let options = ThemeOptions::new("#7c3aed", 0.75).variant("vibrant");
        let first = generate_theme(&options).expect("valid theme");
        let second = generate_theme(&options).expect("valid theme");
        assert_eq!(first, second);
    }

    #[test]
    fn errors_surface_with_their_category() {
        let error = generate_theme(&ThemeOptions::new("", 0.5)).expect_err("empty primary");
        assert!(error.is_validation());

        let error = generate_theme(&ThemeOptions::new("notacolor", 0.5)).expect_err("bad color");
        assert!(error.is_color_parse());

        let error = generate_theme(&ThemeOptions::new("notacolor", 0.0)).expect_err("radius");
        assert!(error.is_validation(), "validation runs before parsing");
    }

    #[test]
    fn theme_to_css_matches_generate() {
        let options = ThemeOptions::new("tomato", 1.0).variant("tint").appearance("dark");
        let theme = derive_theme(&options).expect("valid theme");
        assert_eq!(theme.variant, Variant::Tint);
        assert_eq!(theme.appearance, Some(Appearance::Dark));
        assert_eq!(theme.active(), &theme.dark);
        assert_eq!(
            theme.to_css(&StyleConfig::default()),
            generate_theme(&options).expect("valid theme")
        );
    }

    #[test]
    fn appearance_does_not_change_the_output() {
        let base = ThemeOptions::new("#007bff", 0.5).variant("tint");
        let light = generate_theme(&base.clone().appearance("light")).expect("light");
        let dark = generate_theme(&base.clone().appearance("dark")).expect("dark");
        let none = generate_theme(&base).expect("none");
        assert_eq!(light, dark);
        assert_eq!(light, none);
    }

    #[test]
    fn radius_unit_follows_config() {
        let config = StyleConfig {
            radius_unit: LengthUnit::Px,
            ..StyleConfig::default()
        };
        let css = generate_theme_with(&ThemeOptions::new("red", 6.0), &config).expect("valid");
        assert_eq!(css.value_of(":root", "radius"), Some("6px"));
        assert_eq!(css.value_of(".dark", "radius"), Some("6px"));
    }

    #[traced_test]
    #[test]
    fn generation_logs_the_variant() {
        let _ = generate_theme(&ThemeOptions::new("#007bff", 0.5).variant("vibrant"));
        assert!(logs_contain("deriving palettes"));
        assert!(logs_contain("vibrant"));
    }

    #[traced_test]
    #[test]
    fn rejected_color_is_logged() {
        let _ = generate_theme(&ThemeOptions::new("notacolor", 0.5));
        assert!(logs_contain("primary color rejected"));
    }
}
