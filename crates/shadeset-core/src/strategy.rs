//! Palette derivation strategies.
//!
//! Each [`Variant`] maps the primary color and the radius to a light and a
//! dark [`PaletteSet`]. Tint and Vibrant derive every non-destructive role
//! from the primary by overriding OKLCH lightness and chroma; Professional
//! keeps a fixed neutral set and only derives the primary accent.

use tracing::debug;

use crate::color::Color;
use crate::contrast::foreground_for;
use crate::options::Variant;
use crate::tokens::{PaletteSet, Radius, Role, TokenValue};

/// Light and dark palette sets produced by one derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct PalettePair {
    pub light: PaletteSet,
    pub dark: PaletteSet,
}

/// Destructive colors stay red whatever the primary hue is.
#[derive(Debug, Clone, Copy)]
struct Destructive {
    fill: &'static str,
    foreground: &'static str,
}

const LIGHT_DESTRUCTIVE: Destructive = Destructive {
    fill: "0 84.2% 60.2%",
    foreground: "60 9.1% 97.8%",
};

const DARK_DESTRUCTIVE: Destructive = Destructive {
    fill: "0 62.8% 30.6%",
    foreground: "0 0% 98%",
};

impl Variant {
    /// Derive both palette sets for `primary`.
    #[must_use]
    pub fn derive(self, primary: Color, radius: Radius) -> PalettePair {
        debug!(variant = %self, %primary, %radius, "deriving palettes");
        match self {
            Self::Tint => tint(primary, radius),
            Self::Vibrant => vibrant(primary, radius),
            Self::Professional => professional(primary, radius),
        }
    }
}

/// Colors a tinted palette is assembled from. Roles share these slots.
#[derive(Debug, Clone, Copy)]
struct Surfaces {
    /// Page background.
    background: Color,
    /// Popover and card background.
    surface: Color,
    /// Text on every surface.
    foreground: Color,
    /// Border, input and muted fill.
    border: Color,
    /// Secondary and accent fill.
    accent: Color,
    /// Primary fill and focus ring.
    primary: Color,
}

impl Surfaces {
    fn palette(self, radius: Radius, destructive: Destructive) -> PaletteSet {
        let primary_foreground = foreground_for(self.primary);
        PaletteSet::from_fn(radius, |role| match role {
            Role::Background => self.background.into(),
            Role::Popover | Role::Card => self.surface.into(),
            Role::Foreground
            | Role::MutedForeground
            | Role::PopoverForeground
            | Role::CardForeground
            | Role::SecondaryForeground
            | Role::AccentForeground => self.foreground.into(),
            Role::Muted | Role::Border | Role::Input => self.border.into(),
            Role::Primary | Role::Ring => self.primary.into(),
            Role::PrimaryForeground => primary_foreground.into(),
            Role::Secondary | Role::Accent => self.accent.into(),
            Role::Destructive => TokenValue::Literal(destructive.fill),
            Role::DestructiveForeground => TokenValue::Literal(destructive.foreground),
        })
    }
}

/// Soft palette: near-white/near-black backgrounds faintly tinted by the primary.
#[must_use]
pub fn tint(primary: Color, radius: Radius) -> PalettePair {
    let light_background = primary.with_lightness(0.98).with_chroma(0.01);
    let light_accent = primary.with_lightness(0.94).with_chroma(0.05);
    let light = Surfaces {
        background: light_background,
        surface: light_background,
        foreground: primary.with_lightness(0.1).with_chroma(0.1),
        border: light_accent,
        accent: light_accent,
        primary: primary.with_lightness(0.5),
    };

    let dark_background = primary.with_lightness(0.2).with_chroma(0.02);
    let dark_accent = primary.with_lightness(0.3).with_chroma(0.08);
    let dark = Surfaces {
        background: dark_background,
        surface: dark_background,
        foreground: primary.with_lightness(0.9).with_chroma(0.05),
        border: dark_accent,
        accent: dark_accent,
        primary: primary.with_lightness(0.7),
    };

    PalettePair {
        light: light.palette(radius, LIGHT_DESTRUCTIVE),
        dark: dark.palette(radius, DARK_DESTRUCTIVE),
    }
}

/// Saturated palette: a colored page background with paler cards and popovers.
#[must_use]
pub fn vibrant(primary: Color, radius: Radius) -> PalettePair {
    let light = Surfaces {
        background: primary.with_lightness(0.8).with_chroma(0.1),
        surface: primary.with_lightness(0.98).with_chroma(0.05),
        foreground: primary.with_lightness(0.2).with_chroma(0.15),
        border: primary.with_lightness(0.7).with_chroma(0.15),
        accent: primary.with_lightness(0.85).with_chroma(0.1),
        primary: primary.with_lightness(0.7).with_chroma(0.2),
    };

    let dark_border = primary.with_lightness(0.4).with_chroma(0.15);
    let dark = Surfaces {
        background: primary.with_lightness(0.05).with_chroma(0.15),
        surface: primary.with_lightness(0.2).with_chroma(0.08),
        foreground: primary.with_lightness(0.95).with_chroma(0.15),
        border: dark_border,
        accent: dark_border,
        primary: primary.with_lightness(0.6).with_chroma(0.2),
    };

    PalettePair {
        light: light.palette(radius, LIGHT_DESTRUCTIVE),
        dark: dark.palette(radius, DARK_DESTRUCTIVE),
    }
}

/// Neutral palette: fixed surfaces, the primary used as-is for the accent.
#[must_use]
pub fn professional(primary: Color, radius: Radius) -> PalettePair {
    let primary_foreground = foreground_for(primary);

    let light = PaletteSet::from_fn(radius, |role| match role {
        Role::Background | Role::Popover | Role::Card => "0 0% 100%".into(),
        Role::Foreground | Role::PopoverForeground | Role::CardForeground | Role::Ring => {
            "20 14.3% 4.1%".into()
        }
        Role::Muted | Role::Secondary | Role::Accent => "60 4.8% 95.9%".into(),
        Role::MutedForeground => "25 5.3% 44.7%".into(),
        Role::Border | Role::Input => "20 5.9% 90%".into(),
        Role::SecondaryForeground | Role::AccentForeground => "24 9.8% 10%".into(),
        Role::Primary => primary.into(),
        Role::PrimaryForeground => primary_foreground.into(),
        Role::Destructive => LIGHT_DESTRUCTIVE.fill.into(),
        Role::DestructiveForeground => LIGHT_DESTRUCTIVE.foreground.into(),
    });

    let dark = PaletteSet::from_fn(radius, |role| match role {
        Role::Background | Role::Popover | Role::Card => "240 10% 3.9%".into(),
        Role::Foreground
        | Role::PopoverForeground
        | Role::CardForeground
        | Role::SecondaryForeground
        | Role::AccentForeground => "0 0% 98%".into(),
        Role::Muted | Role::Border | Role::Input | Role::Secondary | Role::Accent => {
            "240 3.7% 15.9%".into()
        }
        Role::MutedForeground => "240 5% 64.9%".into(),
        Role::Ring => "240 4.9% 83.9%".into(),
        Role::Primary => primary.into(),
        Role::PrimaryForeground => primary_foreground.into(),
        Role::Destructive => DARK_DESTRUCTIVE.fill.into(),
        Role::DestructiveForeground => DARK_DESTRUCTIVE.foreground.into(),
    });

    PalettePair { light, dark }
}

#[cfg(test)]
mod tests {
    use super::{professional, tint, vibrant};
    use crate::color::Color;
    use crate::contrast::foreground_for;
    use crate::options::Variant;
    use crate::tokens::{LengthUnit, Radius, Role, RoleColor, TokenValue};

    fn radius() -> Radius {
        Radius::new(0.5, LengthUnit::Rem)
    }

    fn blue() -> Color {
        Color::parse("#007bff").expect("hex")
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        assert_eq!(Variant::Tint.derive(blue(), radius()), tint(blue(), radius()));
        assert_eq!(
            Variant::Vibrant.derive(blue(), radius()),
            vibrant(blue(), radius())
        );
        assert_eq!(
            Variant::Professional.derive(blue(), radius()),
            professional(blue(), radius())
        );
    }

    #[test]
    fn tint_shares_slots_between_roles() {
        let pair = tint(blue(), radius());
        for set in [&pair.light, &pair.dark] {
            assert_eq!(set.get(Role::Popover), set.get(Role::Background));
            assert_eq!(set.get(Role::Card), set.get(Role::Background));
            assert_eq!(set.get(Role::Muted), set.get(Role::Border));
            assert_eq!(set.get(Role::Input), set.get(Role::Border));
            assert_eq!(set.get(Role::Accent), set.get(Role::Border));
            assert_eq!(set.get(Role::Secondary), set.get(Role::Accent));
            assert_eq!(set.get(Role::Ring), set.get(Role::Primary));
            assert_eq!(set.get(Role::MutedForeground), set.get(Role::Foreground));
        }
    }

    #[test]
    fn tint_light_background_is_pale_and_dark_background_is_deep() {
        let pair = tint(blue(), radius());
        let light_bg = pair.light.get(Role::Background).encoded().expect("derived");
        let dark_bg = pair.dark.get(Role::Background).encoded().expect("derived");
        assert!(light_bg.lightness >= 95, "{light_bg}");
        assert!(dark_bg.lightness <= 20, "{dark_bg}");
    }

    #[test]
    fn vibrant_uses_a_separate_surface_for_cards() {
        let pair = vibrant(blue(), radius());
        for set in [&pair.light, &pair.dark] {
            assert_ne!(set.get(Role::Card), set.get(Role::Background));
            assert_eq!(set.get(Role::Card), set.get(Role::Popover));
            assert_eq!(set.get(Role::Ring), set.get(Role::Primary));
        }
        assert_eq!(pair.dark.get(Role::Accent), pair.dark.get(Role::Border));
    }

    #[test]
    fn destructive_literals_ignore_the_primary() {
        for primary in [blue(), Color::parse("green").expect("named")] {
            for pair in [tint(primary, radius()), vibrant(primary, radius())] {
                assert_eq!(
                    pair.light.get(Role::Destructive),
                    TokenValue::Literal("0 84.2% 60.2%")
                );
                assert_eq!(
                    pair.light.get(Role::DestructiveForeground),
                    TokenValue::Literal("60 9.1% 97.8%")
                );
                assert_eq!(
                    pair.dark.get(Role::Destructive),
                    TokenValue::Literal("0 62.8% 30.6%")
                );
                assert_eq!(
                    pair.dark.get(Role::DestructiveForeground),
                    TokenValue::Literal("0 0% 98%")
                );
            }
        }
    }

    #[test]
    fn professional_only_derives_the_primary() {
        let pair = professional(blue(), radius());
        let expected = RoleColor {
            hue: 211,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(pair.light.get(Role::Primary).encoded(), Some(expected));
        assert_eq!(pair.dark.get(Role::Primary).encoded(), Some(expected));
        assert_eq!(
            pair.light.get(Role::PrimaryForeground),
            TokenValue::from(foreground_for(blue()))
        );

        for (role, value) in pair.light.roles().chain(pair.dark.roles()) {
            let derived = matches!(role, Role::Primary | Role::PrimaryForeground);
            assert_eq!(value.is_literal(), !derived, "{role}");
        }
        assert_eq!(
            pair.light.get(Role::Background),
            TokenValue::Literal("0 0% 100%")
        );
        assert_eq!(
            pair.dark.get(Role::Ring),
            TokenValue::Literal("240 4.9% 83.9%")
        );
    }

    #[test]
    fn tinted_variants_keep_the_primary_hue() {
        let primary = blue();
        for pair in [tint(primary, radius()), vibrant(primary, radius())] {
            for (role, value) in pair.light.roles().chain(pair.dark.roles()) {
                match value.derived() {
                    Some(color) => assert_eq!(color.hue(), primary.hue(), "{role}"),
                    None => assert!(
                        matches!(role, Role::Destructive | Role::DestructiveForeground),
                        "{role}"
                    ),
                }
            }
        }
    }

    #[test]
    fn radius_is_copied_into_both_sets() {
        let radius = Radius::new(2.0, LengthUnit::Px);
        for variant in Variant::ALL {
            let pair = variant.derive(blue(), radius);
            assert_eq!(pair.light.radius(), radius);
            assert_eq!(pair.dark.radius(), radius);
        }
    }
}
