//! Colors and the shared theme.
//!
//! `Color` doubles as the pixel format of every [`Surface`](crate::Surface):
//! straight (non-premultiplied) RGBA, one byte per channel.

use serde::{Deserialize, Serialize};

/// RGBA color, 8 bits per channel.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable, Deserialize, Serialize)]
#[serde(try_from = "ColorRepr", into = "[u8; 4]")]
pub struct Color {
    /// Red component.
    pub r: u8,
    /// Green component.
    pub g: u8,
    /// Blue component.
    pub b: u8,
    /// Alpha component (255 = opaque).
    pub a: u8,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Solid black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Solid white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Pure red.
    pub const RED: Self = Self::rgb(255, 0, 0);
    /// Pure blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Cyan.
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    /// Lime green.
    pub const LIME: Self = Self::rgb(0, 255, 0);
    /// Yellow.
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    /// Mid gray.
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    /// Dark gray (lighter than [`Color::DIMGRAY`], as in the X11 palette).
    pub const DARKGRAY: Self = Self::rgb(169, 169, 169);
    /// Dim gray.
    pub const DIMGRAY: Self = Self::rgb(105, 105, 105);

    /// Creates a color from RGBA bytes.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from RGB bytes.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates a color from a hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        Self::rgba(
            ((hex >> 24) & 0xFF) as u8,
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Returns a new color with different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::rgba(self.r, self.g, self.b, a)
    }

    /// Returns true if the color has no coverage at all.
    #[must_use]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Composites `self` over `dst` (source-over, straight alpha).
    #[must_use]
    pub fn over(self, dst: Self) -> Self {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = u32::from(self.a);
        let da = u32::from(dst.a) * (255 - sa) / 255;
        let out_a = sa + da;
        if out_a == 0 {
            return Self::TRANSPARENT;
        }

        let mix = |s: u8, d: u8| ((u32::from(s) * sa + u32::from(d) * da) / out_a) as u8;
        Self::rgba(
            mix(self.r, dst.r),
            mix(self.g, dst.g),
            mix(self.b, dst.b),
            out_a as u8,
        )
    }

    /// Parses `#RRGGBB` or `#RRGGBBAA`.
    fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.strip_prefix('#')?;
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::hex((value << 8) | 0xFF)),
            8 => Some(Self::hex(value)),
            _ => None,
        }
    }
}

impl From<Color> for [u8; 4] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b, color.a]
    }
}

/// Accepted config spellings: `[r, g, b]`, `[r, g, b, a]` or `"#RRGGBB[AA]"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Rgb([u8; 3]),
    Rgba([u8; 4]),
    Hex(String),
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Rgb([r, g, b]) => Ok(Self::rgb(r, g, b)),
            ColorRepr::Rgba([r, g, b, a]) => Ok(Self::rgba(r, g, b, a)),
            ColorRepr::Hex(text) => {
                Self::parse_hex(&text).ok_or_else(|| format!("invalid color literal: {text}"))
            }
        }
    }
}

/// Shared style defaults.
///
/// A theme is read by value when options are built; changing it later never
/// touches widgets that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Screen background, also the default fill behind opaque widgets.
    pub background: Color,
    /// Primary text color.
    pub text: Color,
    /// Muted text (placeholders).
    pub text_muted: Color,
    /// Track color for sliders and switches.
    pub track: Color,
    /// Handle color for sliders and switches.
    pub handle: Color,
    /// Panel behind switches.
    pub panel: Color,
    /// Highlight behind the slider value tag.
    pub highlight: Color,
}

impl Theme {
    /// Black screen, white text, gray tracks, blue handles.
    pub const DARK: Self = Self {
        background: Color::BLACK,
        text: Color::WHITE,
        text_muted: Color::GRAY,
        track: Color::DARKGRAY,
        handle: Color::BLUE,
        panel: Color::DIMGRAY,
        highlight: Color::RED,
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::DARK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        let color = Color::hex(0xFF00_00FF);
        assert_eq!(color, Color::RED);
    }

    #[test]
    fn test_over_opaque_and_clear() {
        assert_eq!(Color::RED.over(Color::BLUE), Color::RED);
        assert_eq!(Color::TRANSPARENT.over(Color::BLUE), Color::BLUE);
    }

    #[test]
    fn test_over_half_alpha() {
        let half_white = Color::WHITE.with_alpha(128);
        let mixed = half_white.over(Color::BLACK);
        assert_eq!(mixed.a, 255);
        assert!((i32::from(mixed.r) - 128).abs() <= 1);
    }

    #[test]
    fn test_over_onto_transparent_keeps_color() {
        let glyph = Color::WHITE.with_alpha(100);
        let out = glyph.over(Color::TRANSPARENT);
        assert_eq!(out, glyph);
    }

    #[test]
    fn test_color_from_config() {
        #[derive(Deserialize)]
        struct Entry {
            a: Color,
            b: Color,
            c: Color,
        }
        let entry: Entry = toml::from_str("a = [1, 2, 3]\nb = [1, 2, 3, 4]\nc = \"#ff000080\"").unwrap();
        assert_eq!(entry.a, Color::rgb(1, 2, 3));
        assert_eq!(entry.b, Color::rgba(1, 2, 3, 4));
        assert_eq!(entry.c, Color::RED.with_alpha(0x80));
    }

    #[test]
    fn test_bad_color_literal_rejected() {
        #[derive(Deserialize)]
        #[allow(dead_code)]
        struct Entry {
            a: Color,
        }
        assert!(toml::from_str::<Entry>("a = \"red\"").is_err());
    }
}
