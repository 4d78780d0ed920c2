//! Owned RGBA raster buffers and the drawing primitives widgets use.
//!
//! Primitives write their color straight into the buffer (no blending), the
//! way a fill on an alpha surface behaves. Only [`Surface::blit`] composites.

use crate::layout::Rect;
use crate::style::Color;

/// An owned RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl Surface {
    /// Creates a fully transparent surface. Negative sizes clamp to zero.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    /// Creates a surface filled with one color.
    #[must_use]
    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub const fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// The surface's own rect, at the origin.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Row-major pixels.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Pixels as raw RGBA bytes, ready for an image encoder or a texture upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Reads a pixel; `None` outside the surface.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Writes a pixel, ignoring out-of-bounds coordinates.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Composites `color` over the pixel at `(x, y)`.
    #[inline]
    pub fn blend(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }

    /// Fills the whole surface.
    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Fills a rect clipped to the surface.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(clip) = rect.intersection(&self.rect()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            let row = (y * self.width) as usize;
            let start = row + clip.x as usize;
            self.pixels[start..start + clip.width as usize].fill(color);
        }
    }

    /// Draws a rectangle.
    ///
    /// `width == 0` fills it, otherwise an outline `width` pixels thick is
    /// drawn inside the rect. `radius > 0` rounds the corners. Returns the
    /// rect that was drawn.
    pub fn draw_rect(&mut self, rect: Rect, color: Color, width: i32, radius: i32) -> Rect {
        let radius = radius.clamp(0, rect.width.min(rect.height) / 2);
        if width <= 0 && radius == 0 {
            self.fill_rect(rect, color);
            return rect;
        }

        let inner = if width > 0 {
            Some((rect.inflate(-2 * width, -2 * width), (radius - width).max(0)))
        } else {
            None
        };

        let Some(clip) = rect.intersection(&self.rect()) else {
            return rect;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                if !in_rounded_rect(&rect, radius, x, y) {
                    continue;
                }
                if let Some((inner_rect, inner_radius)) = inner {
                    if inner_rect.width > 0
                        && inner_rect.height > 0
                        && in_rounded_rect(&inner_rect, inner_radius, x, y)
                    {
                        continue;
                    }
                }
                self.put(x, y, color);
            }
        }
        rect
    }

    /// Draws a circle centered on `center`.
    ///
    /// `width == 0` fills the disk, otherwise a ring `width` pixels thick is
    /// drawn. Returns the bounding rect of the circle.
    pub fn draw_circle(&mut self, center: (f32, f32), radius: f32, color: Color, width: i32) -> Rect {
        let bounds = circle_bounds(center, radius);
        let inner = if width > 0 { radius - width as f32 } else { -1.0 };

        let Some(clip) = bounds.intersection(&self.rect()) else {
            return bounds;
        };
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                let dx = x as f32 + 0.5 - center.0;
                let dy = y as f32 + 0.5 - center.1;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist <= radius && dist > inner {
                    self.put(x, y, color);
                }
            }
        }
        bounds
    }

    /// Composites `src` onto this surface with its top-left at `dest`.
    pub fn blit(&mut self, src: &Self, dest: (i32, i32)) {
        let target = Rect::new(dest.0, dest.1, src.width, src.height);
        let Some(clip) = target.intersection(&self.rect()) else {
            return;
        };
        for y in clip.y..clip.bottom() {
            let sy = y - dest.1;
            for x in clip.x..clip.right() {
                let pixel = src.pixels[(sy * src.width + (x - dest.0)) as usize];
                if !pixel.is_transparent() {
                    self.blend(x, y, pixel);
                }
            }
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| (y * self.width + x) as usize)
    }
}

/// Pixel-space bounding box of a circle, as returned by `draw_circle`.
#[must_use]
pub fn circle_bounds(center: (f32, f32), radius: f32) -> Rect {
    let left = (center.0 - radius).floor() as i32;
    let top = (center.1 - radius).floor() as i32;
    let right = (center.0 + radius).ceil() as i32;
    let bottom = (center.1 + radius).ceil() as i32;
    Rect::new(left, top, right - left, bottom - top)
}

/// Tests the pixel center of `(x, y)` against a rect with rounded corners.
fn in_rounded_rect(rect: &Rect, radius: i32, x: i32, y: i32) -> bool {
    if !rect.contains(x, y) {
        return false;
    }
    if radius <= 0 {
        return true;
    }

    let r = radius as f32;
    let px = x as f32 + 0.5;
    let py = y as f32 + 0.5;
    let left = (rect.x + radius) as f32;
    let right = (rect.right() - radius) as f32;
    let top = (rect.y + radius) as f32;
    let bottom = (rect.bottom() - radius) as f32;

    let cx = px.clamp(left, right);
    let cy = py.clamp(top, bottom);
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= r * r
}
