//! Perceptual color model.
//!
//! [`Color`] stores a point in OKLCH (lightness, chroma, hue). Every role
//! color in a theme is derived from the primary by overriding lightness
//! and/or chroma, so the hue channel carries through untouched.
//!
//! Conversions to and from sRGB, HSL and linear light go through the
//! `palette` crate; this module adds parsing, channel overrides, mixing,
//! the WCAG 2.1 contrast ratio, and gamut mapping for the final encoding.

use std::fmt;
use std::str::FromStr;

use palette::convert::FromColorUnclamped;
use palette::{FromColor, Hsl, LinSrgb, OklabHue, Oklch, Srgb};

use crate::error::ColorParseError;

/// Chroma below which a color counts as achromatic and its hue is powerless.
pub const ACHROMATIC_CHROMA: f64 = 0.0002;

/// Slack allowed on each sRGB component before a color counts as out of gamut.
const GAMUT_EPSILON: f64 = 1e-6;

/// Bisection steps used when reducing chroma into the sRGB gamut.
const GAMUT_SEARCH_STEPS: usize = 32;

/// Upper bound for the gamut search. No sRGB color has OKLCH chroma above ~0.37.
const MAX_SRGB_CHROMA: f64 = 0.5;

/// sRGB channel spread below which a color encodes as a pure gray.
const GRAY_SPREAD: f64 = 1e-7;

/// A color in OKLCH space.
///
/// Invariants: `lightness` in `[0, 1]`, `chroma >= 0`, `hue` in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    lightness: f64,
    chroma: f64,
    hue: f64,
}

/// Channel that [`Color::with_channel`] can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Lightness,
    Chroma,
}

/// Space in which [`Color::mix_toward`] interpolates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MixSpace {
    /// Interpolate lightness, chroma and hue.
    #[default]
    Oklch,
    /// Interpolate gamma-encoded sRGB components.
    Srgb,
}

impl Color {
    pub const WHITE: Self = Self {
        lightness: 1.0,
        chroma: 0.0,
        hue: 0.0,
    };

    pub const BLACK: Self = Self {
        lightness: 0.0,
        chroma: 0.0,
        hue: 0.0,
    };

    /// Build a color from OKLCH channels, normalizing them into range.
    #[must_use]
    pub fn oklch(lightness: f64, chroma: f64, hue: f64) -> Self {
        let chroma = if chroma.is_finite() { chroma.max(0.0) } else { 0.0 };
        // Round-trip noise from sRGB grays must not leave a residual chroma.
        let chroma = if chroma < ACHROMATIC_CHROMA { 0.0 } else { chroma };
        let hue = if chroma == 0.0 || !hue.is_finite() {
            0.0
        } else {
            normalize_hue(hue)
        };
        Self {
            lightness: if lightness.is_finite() {
                lightness.clamp(0.0, 1.0)
            } else {
                0.0
            },
            chroma,
            hue,
        }
    }

    /// Convert a gamma-encoded sRGB color.
    #[must_use]
    pub fn from_srgb(rgb: Srgb<f64>) -> Self {
        let oklch = Oklch::<f64>::from_color(rgb);
        Self::oklch(oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
    }

    /// Parse a color string. See [`parse`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorParseError`] when the notation is not recognized.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        parse(input)
    }

    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.lightness
    }

    #[must_use]
    pub const fn chroma(self) -> f64 {
        self.chroma
    }

    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hue
    }

    #[must_use]
    pub fn is_achromatic(self) -> bool {
        self.chroma < ACHROMATIC_CHROMA
    }

    /// Replace one channel, keeping the others (hue included).
    #[must_use]
    pub fn with_channel(self, channel: Channel, value: f64) -> Self {
        let mut next = self;
        match channel {
            Channel::Lightness => next.lightness = value.clamp(0.0, 1.0),
            Channel::Chroma => next.chroma = value.max(0.0),
        }
        next
    }

    #[must_use]
    pub fn with_lightness(self, lightness: f64) -> Self {
        self.with_channel(Channel::Lightness, lightness)
    }

    #[must_use]
    pub fn with_chroma(self, chroma: f64) -> Self {
        self.with_channel(Channel::Chroma, chroma)
    }

    /// Interpolate from `self` toward `target` by `fraction` (clamped to `[0, 1]`).
    ///
    /// In [`MixSpace::Oklch`] an achromatic endpoint takes the hue of the
    /// other one, so mixing toward white or black keeps `self`'s hue.
    #[must_use]
    pub fn mix_toward(self, target: Self, fraction: f64, space: MixSpace) -> Self {
        let t = fraction.clamp(0.0, 1.0);
        match space {
            MixSpace::Oklch => {
                let hue = match (self.is_achromatic(), target.is_achromatic()) {
                    (false, true) | (true, true) => self.hue,
                    (true, false) => target.hue,
                    (false, false) => mix_hue(self.hue, target.hue, t),
                };
                Self {
                    lightness: lerp(self.lightness, target.lightness, t).clamp(0.0, 1.0),
                    chroma: lerp(self.chroma, target.chroma, t).max(0.0),
                    hue,
                }
            }
            MixSpace::Srgb => {
                let a = self.to_srgb();
                let b = target.to_srgb();
                Self::from_srgb(Srgb::<f64>::new(
                    lerp(a.red, b.red, t),
                    lerp(a.green, b.green, t),
                    lerp(a.blue, b.blue, t),
                ))
            }
        }
    }

    /// Gamma-encoded sRGB, gamut mapped by chroma reduction.
    #[must_use]
    pub fn to_srgb(self) -> Srgb<f64> {
        let direct = self.to_srgb_unclamped();
        if in_gamut(direct) {
            return clip(direct);
        }

        let (mut low, mut high) = (0.0, self.chroma.min(MAX_SRGB_CHROMA));
        for _ in 0..GAMUT_SEARCH_STEPS {
            let mid = (low + high) / 2.0;
            if in_gamut(self.with_chroma(mid).to_srgb_unclamped()) {
                low = mid;
            } else {
                high = mid;
            }
        }
        clip(self.with_chroma(low).to_srgb_unclamped())
    }

    /// Whether the color is displayable in sRGB without gamut mapping.
    #[must_use]
    pub fn in_srgb_gamut(self) -> bool {
        in_gamut(self.to_srgb_unclamped())
    }

    /// `(hue degrees, saturation %, lightness %)` of the gamut-mapped color.
    #[must_use]
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let rgb = self.to_srgb();
        let max = rgb.red.max(rgb.green).max(rgb.blue);
        let min = rgb.red.min(rgb.green).min(rgb.blue);
        if max - min < GRAY_SPREAD {
            return (0.0, 0.0, (max + min) / 2.0 * 100.0);
        }
        let hsl = Hsl::<palette::encoding::Srgb, f64>::from_color(rgb);
        (
            hsl.hue.into_positive_degrees(),
            hsl.saturation * 100.0,
            hsl.lightness * 100.0,
        )
    }

    /// `#rrggbb` of the gamut-mapped color.
    #[must_use]
    pub fn to_hex(self) -> String {
        let rgb: Srgb<u8> = self.to_srgb().into_format();
        format!("#{:02x}{:02x}{:02x}", rgb.red, rgb.green, rgb.blue)
    }

    /// WCAG 2.1 relative luminance, in `[0, 1]`.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let linear: LinSrgb<f64> = self.to_srgb().into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }

    fn to_srgb_unclamped(self) -> Srgb<f64> {
        Srgb::<f64>::from_color_unclamped(Oklch::<f64>::new(
            self.lightness,
            self.chroma,
            OklabHue::<f64>::from_degrees(self.hue),
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({:.4} {:.4} {:.2})",
            self.lightness, self.chroma, self.hue
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse(value)
    }
}

/// WCAG 2.1 contrast ratio between a background and a foreground.
///
/// The lighter luminance goes in the numerator, so the result is in
/// `[1, 21]` for any pair of colors.
#[must_use]
pub fn contrast(background: Color, foreground: Color) -> f64 {
    let bg = background.relative_luminance();
    let fg = foreground.relative_luminance();
    let (lighter, darker) = if bg >= fg { (bg, fg) } else { (fg, bg) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Parse a color string.
///
/// Accepted notations:
/// * `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (alpha is discarded)
/// * CSS named colors (`rebeccapurple`, `teal`, ...)
/// * `rgb()` / `rgba()` with numbers or percentages
/// * `hsl()` / `hsla()`
/// * `oklch()`
///
/// Both the legacy comma syntax and the space/slash syntax are accepted.
///
/// # Errors
///
/// Returns [`ColorParseError`] when the notation is not recognized or a
/// component is out of range.
pub fn parse(input: &str) -> Result<Color, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::UnknownNotation {
            input: input.to_string(),
        });
    }

    if let Some(digits) = trimmed.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| ColorParseError::InvalidHex {
            input: input.to_string(),
        });
    }

    let lower = trimmed.to_ascii_lowercase();
    if lower.contains('(') {
        return parse_function(&lower, input);
    }

    palette::named::from_str(&lower)
        .map(|rgb| Color::from_srgb(rgb.into_format()))
        .ok_or_else(|| ColorParseError::UnknownNotation {
            input: input.to_string(),
        })
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let opaque = match digits.len() {
        3 | 6 => digits,
        4 => &digits[..3],
        8 => &digits[..6],
        _ => return None,
    };
    let rgb: Srgb<u8> = opaque.parse().ok()?;
    Some(Color::from_srgb(rgb.into_format()))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Component {
    Number(f64),
    Percent(f64),
    /// A number with a `deg` suffix; only valid in hue positions.
    Angle(f64),
}

impl Component {
    fn parse(token: &str) -> Option<Self> {
        let value = |raw: &str| raw.parse::<f64>().ok().filter(|v| v.is_finite());
        if let Some(raw) = token.strip_suffix('%') {
            value(raw).map(Self::Percent)
        } else if let Some(raw) = token.strip_suffix("deg") {
            value(raw).map(Self::Angle)
        } else {
            value(token).map(Self::Number)
        }
    }
}

fn parse_function(lower: &str, input: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction {
        input: input.to_string(),
    };
    let out_of_range = || ColorParseError::OutOfRange {
        input: input.to_string(),
    };

    let (name, rest) = lower.split_once('(').ok_or_else(invalid)?;
    let args = rest.strip_suffix(')').ok_or_else(invalid)?;

    let (channels, alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };
    let mut components = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(Component::parse)
        .collect::<Option<Vec<_>>>()
        .ok_or_else(invalid)?;

    // Legacy `rgba(r, g, b, a)` carries alpha as a fourth component.
    let legacy_alpha = if alpha.is_none() && components.len() == 4 {
        components.pop()
    } else {
        None
    };
    let alpha = match alpha {
        Some(raw) => Some(Component::parse(raw).ok_or_else(invalid)?),
        None => legacy_alpha,
    };
    if let Some(alpha) = alpha {
        let in_range = match alpha {
            Component::Number(v) => (0.0..=1.0).contains(&v),
            Component::Percent(v) => (0.0..=100.0).contains(&v),
            Component::Angle(_) => return Err(invalid()),
        };
        if !in_range {
            return Err(out_of_range());
        }
    }

    let [first, second, third] = <[Component; 3]>::try_from(components).map_err(|_| invalid())?;

    match name.trim() {
        "rgb" | "rgba" => {
            let channel = |component: Component| match component {
                Component::Number(v) if (0.0..=255.0).contains(&v) => Ok(v / 255.0),
                Component::Percent(v) if (0.0..=100.0).contains(&v) => Ok(v / 100.0),
                Component::Angle(_) => Err(invalid()),
                _ => Err(out_of_range()),
            };
            Ok(Color::from_srgb(Srgb::<f64>::new(
                channel(first)?,
                channel(second)?,
                channel(third)?,
            )))
        }
        "hsl" | "hsla" => {
            let hue = hue_of(first).ok_or_else(invalid)?;
            let percent = |component: Component| match component {
                Component::Percent(v) if (0.0..=100.0).contains(&v) => Ok(v / 100.0),
                Component::Percent(_) => Err(out_of_range()),
                _ => Err(invalid()),
            };
            let hsl = Hsl::<palette::encoding::Srgb, f64>::new(
                normalize_hue(hue),
                percent(second)?,
                percent(third)?,
            );
            Ok(Color::from_srgb(Srgb::<f64>::from_color(hsl)))
        }
        "oklch" => {
            let lightness = match first {
                Component::Number(v) if (0.0..=1.0).contains(&v) => v,
                Component::Percent(v) if (0.0..=100.0).contains(&v) => v / 100.0,
                Component::Angle(_) => return Err(invalid()),
                _ => return Err(out_of_range()),
            };
            // 100% chroma is 0.4, per CSS Color 4.
            let chroma = match second {
                Component::Number(v) if v >= 0.0 => v,
                Component::Percent(v) if v >= 0.0 => v / 100.0 * 0.4,
                Component::Angle(_) => return Err(invalid()),
                _ => return Err(out_of_range()),
            };
            let hue = hue_of(third).ok_or_else(invalid)?;
            Ok(Color::oklch(lightness, chroma, hue))
        }
        _ => Err(ColorParseError::UnknownNotation {
            input: input.to_string(),
        }),
    }
}

fn hue_of(component: Component) -> Option<f64> {
    match component {
        Component::Number(v) | Component::Angle(v) => Some(v),
        Component::Percent(_) => None,
    }
}

fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can return exactly 360.0 for tiny negative inputs.
    if hue >= 360.0 { 0.0 } else { hue }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn mix_hue(from: f64, to: f64, t: f64) -> f64 {
    let mut delta = to - from;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    normalize_hue(from + delta * t)
}

fn in_gamut(rgb: Srgb<f64>) -> bool {
    [rgb.red, rgb.green, rgb.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

fn clip(rgb: Srgb<f64>) -> Srgb<f64> {
    Srgb::<f64>::new(
        rgb.red.clamp(0.0, 1.0),
        rgb.green.clamp(0.0, 1.0),
        rgb.blue.clamp(0.0, 1.0),
    )
}
