//! Text rasterization using the embedded Noto Sans Mono bitmaps.
//!
//! The face is monospace, so every character advances by the same width and
//! text metrics are exact without rendering. Requested point sizes snap to
//! the nearest embedded raster height; italic is a synthetic slant.

use noto_sans_mono_bitmap::{get_raster, get_raster_width, FontWeight, RasterHeight};

use crate::style::Color;
use crate::surface::Surface;

/// Raster heights compiled into the binary.
const HEIGHTS: [u32; 4] = [16, 20, 24, 32];

/// Horizontal slant of the synthetic italic, as a fraction of the line height.
const ITALIC_SLANT: u32 = 4;

/// A sized, styled text renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    requested: u32,
    line_height: u32,
    bold: bool,
    italic: bool,
}

impl Font {
    /// Creates a font for the requested size and style.
    #[must_use]
    pub fn new(size: u32, bold: bool, italic: bool) -> Self {
        let line_height = HEIGHTS
            .iter()
            .copied()
            .min_by_key(|h| h.abs_diff(size))
            .unwrap_or(HEIGHTS[0]);

        Self {
            requested: size,
            line_height,
            bold,
            italic,
        }
    }

    fn raster_height(&self) -> RasterHeight {
        match self.line_height {
            16 => RasterHeight::Size16,
            20 => RasterHeight::Size20,
            24 => RasterHeight::Size24,
            _ => RasterHeight::Size32,
        }
    }

    fn weight(&self) -> FontWeight {
        if self.bold {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }

    /// The size the caller asked for.
    #[must_use]
    pub const fn requested_size(&self) -> u32 {
        self.requested
    }

    /// Height of one rendered line in pixels.
    #[must_use]
    pub const fn line_height(&self) -> i32 {
        self.line_height as i32
    }

    /// Advance width of one character in pixels.
    #[must_use]
    pub fn char_width(&self) -> i32 {
        get_raster_width(self.weight(), self.raster_height()) as i32
    }

    /// Extra width added on the right by the italic slant.
    fn slant_width(&self) -> i32 {
        if self.italic {
            (self.line_height / ITALIC_SLANT) as i32
        } else {
            0
        }
    }

    /// Size of `text` once rendered.
    #[must_use]
    pub fn size(&self, text: &str) -> (i32, i32) {
        let count = text.chars().count() as i32;
        let width = if count == 0 {
            0
        } else {
            count * self.char_width() + self.slant_width()
        };
        (width, self.line_height())
    }

    /// Renders `text` onto a fresh transparent surface.
    ///
    /// Glyph coverage becomes alpha; characters missing from the embedded set
    /// fall back to `?`.
    #[must_use]
    pub fn render(&self, text: &str, color: Color) -> Surface {
        let (width, height) = self.size(text);
        let mut surface = Surface::new(width, height);
        let advance = self.char_width();
        let slant = self.slant_width();

        let (weight, raster_height) = (self.weight(), self.raster_height());

        for (i, ch) in text.chars().enumerate() {
            let Some(raster) = get_raster(ch, weight, raster_height).or_else(|| get_raster('?', weight, raster_height)) else {
                continue;
            };

            let x0 = i as i32 * advance;
            let rows = raster.raster();
            let row_count = rows.len().max(1) as i32;
            for (y, row) in rows.iter().enumerate() {
                let y = y as i32;
                let shift = if slant > 0 { slant * (row_count - 1 - y) / row_count } else { 0 };
                for (x, &intensity) in row.iter().enumerate() {
                    if intensity == 0 {
                        continue;
                    }
                    let alpha = (u32::from(intensity) * u32::from(color.a) / 255) as u8;
                    surface.blend(x0 + x as i32 + shift, y, color.with_alpha(alpha));
                }
            }
        }

        surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_snaps_to_embedded_heights() {
        assert_eq!(Font::new(10, false, false).line_height(), 16);
        assert_eq!(Font::new(19, false, false).line_height(), 20);
        assert_eq!(Font::new(24, false, false).line_height(), 24);
        assert_eq!(Font::new(48, false, false).line_height(), 32);
    }

    #[test]
    fn test_monospace_metrics() {
        let font = Font::new(16, false, false);
        let cw = font.char_width();
        assert!(cw > 0);
        assert_eq!(font.size("abcd"), (4 * cw, 16));
        assert_eq!(font.size(""), (0, 16));
    }

    #[test]
    fn test_italic_is_wider() {
        let upright = Font::new(16, false, false);
        let slanted = Font::new(16, false, true);
        assert!(slanted.size("x").0 > upright.size("x").0);
    }

    #[test]
    fn test_render_matches_measure_and_has_ink() {
        let font = Font::new(20, true, false);
        let surface = font.render("Hi", Color::WHITE);

        assert_eq!(surface.size(), font.size("Hi"));
        assert!(surface.pixels().iter().any(|p| p.a > 0));
    }

    #[test]
    fn test_render_is_deterministic() {
        let font = Font::new(16, false, true);
        assert_eq!(font.render("same", Color::RED), font.render("same", Color::RED));
    }
}
