//! A vertical list of centered text rows on one opaque surface.

use serde::{Deserialize, Serialize};

use super::core::{Drawable, Widget, WidgetState};
use crate::font::Font;
use crate::layout::{Anchor, Rect};
use crate::style::{Color, Theme};
use crate::surface::Surface;

/// Style options for a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TableOptions {
    /// Bold weight.
    pub bold: bool,
    /// Synthetic italic.
    pub italic: bool,
    /// Fill behind the rows.
    pub background: Color,
}

impl TableOptions {
    /// Defaults drawn from `theme`.
    #[must_use]
    pub const fn themed(theme: &Theme) -> Self {
        Self {
            bold: false,
            italic: false,
            background: theme.background,
        }
    }
}

impl Default for TableOptions {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

/// Rows of text, one per line, stacked in order.
#[derive(Debug, Clone)]
pub struct Table {
    state: WidgetState,
    rows: Vec<String>,
    image: Surface,
}

impl Table {
    /// Renders `lines` with a row pitch of `text_size`.
    ///
    /// The image's horizontal center sits on `destination.0` and its top half
    /// a row above `destination.1`.
    #[must_use]
    pub fn new<S: AsRef<str>>(
        destination: (i32, i32),
        lines: &[S],
        text_color: Color,
        text_size: u32,
        options: TableOptions,
    ) -> Self {
        let font = Font::new(text_size, options.bold, options.italic);
        let pitch = text_size as i32;
        let rendered: Vec<Surface> = lines
            .iter()
            .map(|line| font.render(line.as_ref(), text_color))
            .collect();

        let width = rendered.iter().map(Surface::width).max().unwrap_or(0);
        let mut image = Surface::filled(width, pitch * rendered.len() as i32, options.background);
        for (row, text) in rendered.iter().enumerate() {
            let x = (width - text.width()) / 2;
            image.blit(text, (x, row as i32 * pitch));
        }

        let first_height = rendered.first().map_or(0, Surface::height);
        let state = WidgetState::new(
            (destination.0, destination.1 - first_height / 2),
            Anchor::MidTop,
            image.size(),
        );

        Self {
            state,
            rows: lines.iter().map(|line| line.as_ref().to_owned()).collect(),
            image,
        }
    }

    /// The rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl Drawable for Table {
    fn image(&self) -> &Surface {
        &self.image
    }

    fn bounds(&self) -> Rect {
        self.state.rect
    }
}

impl Widget for Table {}
