//! Error taxonomy for theme generation.
//!
//! Every failure is raised before any color derivation runs, so a caller
//! either gets a complete pair of palettes or one of these values.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ThemeError>;

/// Any failure of a single theme generation call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ColorParse(#[from] ColorParseError),
}

impl ThemeError {
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    #[must_use]
    pub const fn is_color_parse(&self) -> bool {
        matches!(self, Self::ColorParse(_))
    }
}

/// Input that has the wrong shape or falls outside the accepted domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("primary color cannot be empty")]
    EmptyPrimary,

    #[error("radius must be a positive number (got {radius})")]
    NonPositiveRadius { radius: f64 },

    #[error("unknown variant: {value:?} (expected tint, vibrant or professional)")]
    UnknownVariant { value: String },

    #[error("unknown appearance: {value:?} (expected light or dark)")]
    UnknownAppearance { value: String },
}

/// The primary color string is not a recognized color notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("unrecognized color notation: {input:?}")]
    UnknownNotation { input: String },

    #[error("invalid hex color: {input:?}")]
    InvalidHex { input: String },

    #[error("invalid color function: {input:?}")]
    InvalidFunction { input: String },

    #[error("color component out of range: {input:?}")]
    OutOfRange { input: String },
}

impl ColorParseError {
    /// The text that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::UnknownNotation { input }
            | Self::InvalidHex { input }
            | Self::InvalidFunction { input }
            | Self::OutOfRange { input } => input,
        }
    }
}
