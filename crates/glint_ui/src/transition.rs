//! Full-screen wipe: horizontal bands slide off alternating edges.

use serde::Deserialize;

use crate::layout::Rect;
use crate::style::Color;
use crate::surface::Surface;
use crate::widget::Drawable;

/// Options for [`HorizontalRectangleSwipeTransition`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionOptions {
    /// Number of equal bands the display height is split into.
    pub bands: u32,
    /// Pixels per second each band travels.
    pub speed: f32,
    /// Band color.
    pub color: Color,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            bands: 3,
            speed: 300.0,
            color: Color::WHITE,
        }
    }
}

/// Even bands slide right, odd bands slide left, until the top band has
/// left the display.
#[derive(Debug, Clone)]
pub struct HorizontalRectangleSwipeTransition {
    options: TransitionOptions,
    bands: Vec<Rect>,
    travelled: f32,
    transitioning: bool,
    image: Surface,
}

impl HorizontalRectangleSwipeTransition {
    /// Covers a `width` x `height` display.
    #[must_use]
    pub fn new(width: i32, height: i32, options: TransitionOptions) -> Self {
        let count = options.bands.max(1) as i32;
        let division = height.max(0) / count;
        let bands = (0..count)
            .map(|i| Rect::new(0, division * i, width.max(0), division))
            .collect();

        let mut transition = Self {
            options,
            bands,
            travelled: 0.0,
            transitioning: width > 0,
            image: Surface::new(width, height),
        };
        transition.redraw();
        transition
    }

    /// Advances the wipe by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.transitioning {
            return;
        }

        self.travelled += self.options.speed * dt.max(0.0);
        self.redraw();

        let lead = self.band_offset(0);
        if lead >= self.image.width() {
            self.transitioning = false;
            tracing::debug!(travelled = self.travelled, "transition complete");
        }
    }

    /// Returns true until the wipe has finished.
    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Band rects at their current positions.
    #[must_use]
    pub fn bands(&self) -> Vec<Rect> {
        self.bands
            .iter()
            .enumerate()
            .map(|(i, band)| band.translate(self.band_offset(i), 0))
            .collect()
    }

    fn band_offset(&self, index: usize) -> i32 {
        let offset = self.travelled.floor() as i32;
        if index % 2 == 0 {
            offset
        } else {
            -offset
        }
    }

    fn redraw(&mut self) {
        self.image.fill(Color::TRANSPARENT);
        for band in self.bands() {
            self.image.fill_rect(band, self.options.color);
        }
    }
}

impl Drawable for HorizontalRectangleSwipeTransition {
    fn image(&self) -> &Surface {
        &self.image
    }

    fn bounds(&self) -> Rect {
        self.image.rect()
    }
}
