//! Design tokens: role names, encoded values and palette sets.

use std::fmt;
use std::str::FromStr;

use crate::color::Color;

/// Named color slot in a palette. Declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Background,
    Foreground,
    Muted,
    MutedForeground,
    Popover,
    PopoverForeground,
    Card,
    CardForeground,
    Border,
    Input,
    Primary,
    PrimaryForeground,
    Secondary,
    SecondaryForeground,
    Accent,
    AccentForeground,
    Destructive,
    DestructiveForeground,
    Ring,
}

impl Role {
    pub const COUNT: usize = 19;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Background,
        Self::Foreground,
        Self::Muted,
        Self::MutedForeground,
        Self::Popover,
        Self::PopoverForeground,
        Self::Card,
        Self::CardForeground,
        Self::Border,
        Self::Input,
        Self::Primary,
        Self::PrimaryForeground,
        Self::Secondary,
        Self::SecondaryForeground,
        Self::Accent,
        Self::AccentForeground,
        Self::Destructive,
        Self::DestructiveForeground,
        Self::Ring,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Custom property name without the leading `--`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Foreground => "foreground",
            Self::Muted => "muted",
            Self::MutedForeground => "muted-foreground",
            Self::Popover => "popover",
            Self::PopoverForeground => "popover-foreground",
            Self::Card => "card",
            Self::CardForeground => "card-foreground",
            Self::Border => "border",
            Self::Input => "input",
            Self::Primary => "primary",
            Self::PrimaryForeground => "primary-foreground",
            Self::Secondary => "secondary",
            Self::SecondaryForeground => "secondary-foreground",
            Self::Accent => "accent",
            Self::AccentForeground => "accent-foreground",
            Self::Destructive => "destructive",
            Self::DestructiveForeground => "destructive-foreground",
            Self::Ring => "ring",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches("--");
        Self::ALL
            .into_iter()
            .find(|role| role.name() == name)
            .ok_or(())
    }
}

/// HSL triplet as used in style custom properties: `"<h> <s>% <l>%"`.
///
/// Each component is rounded to the nearest integer independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoleColor {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl RoleColor {
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let (hue, saturation, lightness) = color.to_hsl();
        Self {
            hue: hue.round().clamp(0.0, 360.0) as u16,
            saturation: saturation.round().clamp(0.0, 100.0) as u8,
            lightness: lightness.round().clamp(0.0, 100.0) as u8,
        }
    }
}

impl From<Color> for RoleColor {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl fmt::Display for RoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

/// Value of one role in a palette set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenValue {
    /// Derived from the primary color; encoded when rendered.
    Derived(Color),
    /// Fixed HSL text that does not depend on the input.
    Literal(&'static str),
}

impl TokenValue {
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// The perceptual color, for derived values.
    #[must_use]
    pub const fn derived(self) -> Option<Color> {
        match self {
            Self::Derived(color) => Some(color),
            Self::Literal(_) => None,
        }
    }

    /// The rounded HSL encoding, for derived values.
    #[must_use]
    pub fn encoded(self) -> Option<RoleColor> {
        self.derived().map(RoleColor::from_color)
    }
}

impl From<Color> for TokenValue {
    fn from(color: Color) -> Self {
        Self::Derived(color)
    }
}

impl From<&'static str> for TokenValue {
    fn from(literal: &'static str) -> Self {
        Self::Literal(literal)
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Derived(color) => RoleColor::from_color(*color).fmt(f),
            Self::Literal(text) => f.write_str(text),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TokenValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Unit appended to the radius token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum LengthUnit {
    #[default]
    Rem,
    Em,
    Px,
}

impl LengthUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rem => "rem",
            Self::Em => "em",
            Self::Px => "px",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rem" => Ok(Self::Rem),
            "em" => Ok(Self::Em),
            "px" => Ok(Self::Px),
            other => Err(format!("unknown length unit: {other:?} (expected rem, em or px)")),
        }
    }
}

/// Corner radius token, e.g. `0.5rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Radius {
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Radius {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One appearance's worth of tokens: every [`Role`] plus the radius.
///
/// Built once through [`PaletteSet::from_fn`] and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteSet {
    values: [TokenValue; Role::COUNT],
    radius: Radius,
}

impl PaletteSet {
    /// Build a set by asking `value_of` for every role in output order.
    pub fn from_fn<F>(radius: Radius, mut value_of: F) -> Self
    where
        F: FnMut(Role) -> TokenValue,
    {
        Self {
            values: Role::ALL.map(&mut value_of),
            radius,
        }
    }

    #[must_use]
    pub const fn get(&self, role: Role) -> TokenValue {
        self.values[role.index()]
    }

    #[must_use]
    pub const fn radius(&self) -> Radius {
        self.radius
    }

    /// Roles and their values in output order (radius excluded).
    pub fn roles(&self) -> impl Iterator<Item = (Role, TokenValue)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// `(name, value)` for every declaration, radius last.
    pub fn declarations(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        self.roles()
            .map(|(role, value)| (role.name(), value.to_string()))
            .chain(std::iter::once(("radius", self.radius.to_string())))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PaletteSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(Role::COUNT + 1))?;
        for (role, value) in self.roles() {
            map.serialize_entry(role.name(), &value)?;
        }
        map.serialize_entry("radius", &self.radius)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{LengthUnit, PaletteSet, Radius, Role, RoleColor, TokenValue};
    use crate::color::Color;

    #[test]
    fn role_order_and_names_are_stable() {
        let names: Vec<_> = Role::ALL.iter().map(|role| role.name()).collect();
        assert_eq!(names.first(), Some(&"background"));
        assert_eq!(names.last(), Some(&"ring"));
        assert_eq!(names.len(), 19);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        for (position, role) in Role::ALL.iter().enumerate() {
            assert_eq!(role.index(), position);
        }
    }

    #[test]
    fn roles_parse_from_property_names() {
        assert_eq!("--muted-foreground".parse::<Role>(), Ok(Role::MutedForeground));
        assert_eq!("ring".parse::<Role>(), Ok(Role::Ring));
        assert_eq!("radius".parse::<Role>(), Err(()));
    }

    #[test]
    fn role_color_renders_as_hsl_triplet() {
        let color = RoleColor {
            hue: 211,
            saturation: 100,
            lightness: 50,
        };
        assert_eq!(color.to_string(), "211 100% 50%");
        let blue = RoleColor::from_color(Color::parse("#007bff").expect("hex"));
        assert_eq!(blue, color);
    }

    #[test]
    fn radius_renders_like_a_css_length() {
        assert_eq!(Radius::new(0.5, LengthUnit::Rem).to_string(), "0.5rem");
        assert_eq!(Radius::new(2.0, LengthUnit::Rem).to_string(), "2rem");
        assert_eq!(Radius::new(0.0001, LengthUnit::Rem).to_string(), "0.0001rem");
        assert_eq!(Radius::new(8.0, LengthUnit::Px).to_string(), "8px");
        assert_eq!("EM".parse::<LengthUnit>(), Ok(LengthUnit::Em));
        assert!("pt".parse::<LengthUnit>().is_err());
    }

    #[test]
    fn palette_set_lists_every_role_then_radius() {
        let set = PaletteSet::from_fn(Radius::new(1.0, LengthUnit::Rem), |role| {
            if role == Role::Destructive {
                TokenValue::Literal("0 84.2% 60.2%")
            } else {
                Color::BLACK.into()
            }
        });
        let declarations: Vec<_> = set.declarations().collect();
        assert_eq!(declarations.len(), Role::COUNT + 1);
        assert_eq!(declarations[0], ("background", "0 0% 0%".to_string()));
        assert_eq!(declarations[16], ("destructive", "0 84.2% 60.2%".to_string()));
        assert_eq!(declarations[19], ("radius", "1rem".to_string()));
        assert!(set.get(Role::Destructive).is_literal());
    }
}
