//! Foreground selection for filled roles.
//!
//! A single-threshold heuristic: prefer a near-white tint of the
//! background, fall back to a deep shade of it. This picks one of two
//! candidates; it does not search for a color that meets WCAG AA.

use tracing::trace;

use crate::color::{Color, MixSpace, contrast};

/// Contrast ratio the light candidate must exceed to be chosen.
pub const WCAG_THRESHOLD: f64 = 2.3;

/// Fraction of the way toward white for the default light candidate.
pub const LIGHT_MIX: f64 = 0.97;

/// Fraction of the way toward black for the default dark candidate.
pub const DARK_MIX: f64 = 0.7;

/// Default light candidate for `background`.
#[must_use]
pub fn light_candidate(background: Color) -> Color {
    background.mix_toward(Color::WHITE, LIGHT_MIX, MixSpace::Oklch)
}

/// Default dark candidate for `background`.
#[must_use]
pub fn dark_candidate(background: Color) -> Color {
    background.mix_toward(Color::BLACK, DARK_MIX, MixSpace::Oklch)
}

/// Choose a foreground for `background`.
///
/// Returns `light` when `contrast(background, light)` is strictly greater
/// than [`WCAG_THRESHOLD`], `dark` otherwise. Missing candidates default
/// to [`light_candidate`] and [`dark_candidate`].
#[must_use]
pub fn select_foreground(background: Color, light: Option<Color>, dark: Option<Color>) -> Color {
    let light = light.unwrap_or_else(|| light_candidate(background));
    let ratio = contrast(background, light);
    let use_light = ratio > WCAG_THRESHOLD;
    trace!(%background, ratio, use_light, "foreground selected");
    if use_light {
        light
    } else {
        dark.unwrap_or_else(|| dark_candidate(background))
    }
}

/// [`select_foreground`] with both default candidates.
#[must_use]
pub fn foreground_for(background: Color) -> Color {
    select_foreground(background, None, None)
}
