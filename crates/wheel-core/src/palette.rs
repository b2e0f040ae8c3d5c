//! Wheel slice colors.
//!
//! Option `i` is drawn in `palette[i mod palette.len()]`, so a short palette
//! cycles around the wheel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WheelError, WheelResult};

/// Colors used for a fresh wheel.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5",
];

/// Green/red pair used by simple yes/no mode.
pub const SIMPLE_MODE_PALETTE: &[&str] = &["#4CAF50", "#F44336"];

/// A `#RRGGBB` color, stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse a hex color. Accepts `#RRGGBB` or `RRGGBB` in any case.
    pub fn parse(input: &str) -> WheelResult<Self> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(WheelError::InvalidColor(input.to_string()));
        }
        Ok(Self(format!("#{}", hex.to_ascii_uppercase())))
    }

    /// Wrap a constant already in `#RRGGBB` upper-case form.
    pub(crate) fn trusted(hex: &str) -> Self {
        Self(hex.to_string())
    }

    /// The `#RRGGBB` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&self.0[range], 16).unwrap_or_default()
        };
        (channel(1..3), channel(3..5), channel(5..7))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Color {
    type Error = WheelError;

    fn try_from(value: String) -> WheelResult<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

/// An ordered, non-empty list of slice colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Color>", into = "Vec<Color>")]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build a palette from colors. Returns `None` for an empty list.
    pub fn new(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    /// The palette used by simple yes/no mode.
    pub fn simple_mode() -> Self {
        Self::from_constants(SIMPLE_MODE_PALETTE)
    }

    fn from_constants(hexes: &[&str]) -> Self {
        Self {
            colors: hexes.iter().map(|h| Color::trusted(h)).collect(),
        }
    }

    /// All palette slots.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Number of palette slots.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; a palette has at least one slot.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for the option at `index`.
    pub fn color_for(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    /// Colors for the first `count` options.
    pub fn assign(&self, count: usize) -> Vec<Color> {
        (0..count).map(|i| self.color_for(i).clone()).collect()
    }

    /// Override the slot at `index`.
    ///
    /// A slot past the end first grows the palette by repeating its cycle, so
    /// every option up to `index` keeps the color it had before.
    pub fn set_slot(&mut self, index: usize, color: Color) {
        let cycle = self.colors.len();
        while self.colors.len() <= index {
            let next = self.colors[self.colors.len() % cycle].clone();
            self.colors.push(next);
        }
        self.colors[index] = color;
    }
}

impl TryFrom<Vec<Color>> for Palette {
    type Error = WheelError;

    fn try_from(colors: Vec<Color>) -> WheelResult<Self> {
        Self::new(colors).ok_or_else(|| WheelError::InvalidColor("empty palette".to_string()))
    }
}

impl From<Palette> for Vec<Color> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_constants(DEFAULT_PALETTE)
    }
}
