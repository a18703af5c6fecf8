//! Theme input and its validation.
//!
//! [`ThemeOptions`] is the raw shape a collaborator hands over: plain
//! strings and numbers, exactly as a form or a config file would carry
//! them. [`validate`] checks it against the accepted domain and returns
//! [`ValidatedOptions`] with typed selectors. No color math happens here.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Palette derivation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Variant {
    /// Low-chroma tints of the primary for every role.
    Tint,
    /// Saturated tints with a separate surface color for cards and popovers.
    Vibrant,
    /// Fixed neutral roles; only the primary accent follows the input.
    #[default]
    Professional,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Tint, Self::Vibrant, Self::Professional];

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "tint" => Some(Self::Tint),
            "vibrant" => Some(Self::Vibrant),
            "professional" => Some(Self::Professional),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tint => "tint",
            Self::Vibrant => "vibrant",
            Self::Professional => "professional",
        }
    }

    /// One-line summary for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Tint => "soft low-chroma tints of the primary hue",
            Self::Vibrant => "saturated surfaces built from the primary hue",
            Self::Professional => "neutral surfaces with a primary-colored accent",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownVariant {
            value: s.to_string(),
        })
    }
}

impl From<Variant> for String {
    fn from(variant: Variant) -> Self {
        variant.as_str().to_string()
    }
}

/// Active light/dark mode marker.
///
/// Both palettes are always derived; the appearance only tells the
/// collaborator which one is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Appearance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Appearance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownAppearance {
            value: s.to_string(),
        })
    }
}

impl From<Appearance> for String {
    fn from(appearance: Appearance) -> Self {
        appearance.as_str().to_string()
    }
}

/// Raw, unvalidated theme input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeOptions {
    /// Primary color in any notation [`crate::Color::parse`] accepts.
    pub primary: String,
    /// Corner radius, in the unit configured by [`crate::StyleConfig`].
    pub radius: f64,
    /// `tint`, `vibrant` or `professional`; `None` means professional.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub variant: Option<String>,
    /// `light` or `dark`; purely informational for the collaborator.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub appearance: Option<String>,
}

impl ThemeOptions {
    pub fn new(primary: impl Into<String>, radius: f64) -> Self {
        Self {
            primary: primary.into(),
            radius,
            variant: None,
            appearance: None,
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    #[must_use]
    pub fn appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = Some(appearance.into());
        self
    }

    /// Shorthand for [`validate`].
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn validate(&self) -> Result<ValidatedOptions, ValidationError> {
        validate(self)
    }
}

/// Options that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedOptions {
    /// Trimmed primary color string. Not parsed yet.
    pub primary: String,
    pub radius: f64,
    pub variant: Variant,
    pub appearance: Option<Appearance>,
}

/// Check raw options against the accepted domain.
///
/// `variant` defaults to [`Variant::Professional`] when absent;
/// `appearance` is passed through as given.
///
/// # Errors
///
/// Returns a [`ValidationError`] when the primary is blank, the radius is
/// not a finite positive number, or a selector is not one of its known
/// tokens.
pub fn validate(options: &ThemeOptions) -> Result<ValidatedOptions, ValidationError> {
    let primary = options.primary.trim();
    if primary.is_empty() {
        return Err(ValidationError::EmptyPrimary);
    }

    let radius = options.radius;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(ValidationError::NonPositiveRadius { radius });
    }

    let variant = match options.variant.as_deref() {
        Some(raw) => raw.parse::<Variant>()?,
        None => Variant::default(),
    };

    let appearance = options
        .appearance
        .as_deref()
        .map(str::parse::<Appearance>)
        .transpose()?;

    Ok(ValidatedOptions {
        primary: primary.to_string(),
        radius,
        variant,
        appearance,
    })
}

#[cfg(test)]
mod tests {
    use super::{Appearance, ThemeOptions, Variant, validate};
    use crate::error::ValidationError;

    #[test]
    fn variant_defaults_to_professional() {
        let validated = validate(&ThemeOptions::new("#007bff", 0.5)).expect("valid options");
        assert_eq!(validated.variant, Variant::Professional);
        assert_eq!(validated.appearance, None);
    }

    #[test]
    fn selectors_are_parsed_case_insensitively() {
        let validated = ThemeOptions::new(" #007bff ", 1.0)
            .variant("Tint")
            .appearance(" DARK ")
            .validate()
            .expect("valid options");
        assert_eq!(validated.primary, "#007bff");
        assert_eq!(validated.variant, Variant::Tint);
        assert_eq!(validated.appearance, Some(Appearance::Dark));
    }

    #[test]
    fn blank_primary_is_rejected() {
        for primary in ["", "   "] {
            let error = validate(&ThemeOptions::new(primary, 0.5)).expect_err("blank primary");
            assert_eq!(error, ValidationError::EmptyPrimary);
        }
    }

    #[test]
    fn non_positive_or_non_finite_radius_is_rejected() {
        for radius in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY] {
            let error = validate(&ThemeOptions::new("red", radius)).expect_err("bad radius");
            assert!(
                matches!(error, ValidationError::NonPositiveRadius { .. }),
                "radius {radius} gave {error}"
            );
        }
    }

    #[test]
    fn smallest_positive_radius_is_accepted() {
        let validated = validate(&ThemeOptions::new("red", 0.0001)).expect("valid radius");
        assert_eq!(validated.radius, 0.0001);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let error = validate(&ThemeOptions::new("red", 0.5).variant("bogus")).expect_err("variant");
        assert_eq!(
            error,
            ValidationError::UnknownVariant {
                value: "bogus".to_string()
            }
        );

        let error = validate(&ThemeOptions::new("red", 0.5).variant("")).expect_err("variant");
        assert!(matches!(error, ValidationError::UnknownVariant { .. }));

        let error =
            validate(&ThemeOptions::new("red", 0.5).appearance("dim")).expect_err("appearance");
        assert!(matches!(error, ValidationError::UnknownAppearance { .. }));
    }

    #[test]
    fn validation_does_not_parse_the_color() {
        let validated = validate(&ThemeOptions::new("notacolor", 0.5)).expect("shape is valid");
        assert_eq!(validated.primary, "notacolor");
    }

    #[test]
    fn variant_tokens_round_trip_through_display() {
        for variant in Variant::ALL {
            assert_eq!(variant.to_string().parse::<Variant>(), Ok(variant));
        }
        assert_eq!(String::from(Appearance::Light), "light");
    }
}
