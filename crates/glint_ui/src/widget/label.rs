//! Static text on a cached surface.

use serde::{Deserialize, Serialize};

use super::core::{outlines_enabled, Drawable, Widget, WidgetState};
use crate::font::Font;
use crate::layout::{Anchor, Rect};
use crate::style::{Color, Theme};
use crate::surface::Surface;

/// Style options for a [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LabelOptions {
    /// Bold weight.
    pub bold: bool,
    /// Synthetic italic.
    pub italic: bool,
    /// Panel drawn behind the text, covering the whole image.
    pub text_background: Option<Color>,
    /// Corner radius of the panel.
    pub text_background_radius: i32,
    /// Outline thickness of the panel; 0 fills it.
    pub text_background_width: i32,
    /// Fill used when `transparent` is false.
    pub background: Color,
    /// Extra total width and height around the text.
    pub margin: [i32; 2],
    /// Leave the area around the text transparent.
    pub transparent: bool,
    /// Which point of the image sits on the destination.
    pub orientation: Anchor,
    /// Red outline around the text, cyan around the image.
    pub draw_borders: bool,
}

impl LabelOptions {
    /// Defaults drawn from `theme`.
    #[must_use]
    pub fn themed(theme: &Theme) -> Self {
        Self {
            bold: false,
            italic: false,
            text_background: None,
            text_background_radius: 0,
            text_background_width: 0,
            background: theme.background,
            margin: [0, 0],
            transparent: true,
            orientation: Anchor::Center,
            draw_borders: false,
        }
    }
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

/// Text rendered once at construction.
#[derive(Debug, Clone)]
pub struct Label {
    state: WidgetState,
    text: String,
    image: Surface,
}

impl Label {
    /// Renders `text` and anchors it at `destination`.
    #[must_use]
    pub fn new(
        destination: (i32, i32),
        text: impl Into<String>,
        text_color: Color,
        text_size: u32,
        options: LabelOptions,
    ) -> Self {
        let text = text.into();
        let font = Font::new(text_size, options.bold, options.italic);
        let rendered = font.render(&text, text_color);

        let (tw, th) = rendered.size();
        let [mx, my] = options.margin;
        let mut image = Surface::new(tw + mx, th + my);
        if !options.transparent {
            image.fill(options.background);
        }
        if let Some(panel) = options.text_background {
            image.draw_rect(
                image.rect(),
                panel,
                options.text_background_width,
                options.text_background_radius,
            );
        }

        let text_rect = rendered.rect().with_anchor(Anchor::Center, image.rect().center());
        image.blit(&rendered, (text_rect.x, text_rect.y));

        if outlines_enabled(options.draw_borders) {
            image.draw_rect(text_rect, Color::RED, 2, 0);
            image.draw_rect(image.rect(), Color::CYAN, 2, 0);
        }

        let state = WidgetState::new(destination, options.orientation, image.size());
        Self { state, text, image }
    }

    /// The rendered text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the label, keeping only its surface.
    #[must_use]
    pub fn into_image(self) -> Surface {
        self.image
    }
}

impl Drawable for Label {
    fn image(&self) -> &Surface {
        &self.image
    }

    fn bounds(&self) -> Rect {
        self.state.rect
    }
}

impl Widget for Label {}
