//! Single-line text entry with a caption.
//!
//! Text is bounded twice: a hard character cap (`max_length`) checked before
//! a key is accepted, and a soft pixel cap checked after rendering. A
//! character that would push the text past the bar's inner width is dropped
//! before the image is rebuilt, so an overflowing string is never shown.

use serde::{Deserialize, Serialize};

use super::core::{outlines_enabled, Drawable, Widget, WidgetFlags, WidgetResponse, WidgetState};
use crate::font::Font;
use crate::input::{Event, EventBatch, Key};
use crate::layout::{Anchor, HorizontalAlign, Rect};
use crate::style::{Color, Theme};
use crate::surface::Surface;

/// Style and validation options for an [`InputField`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputFieldOptions {
    /// Bold caption and input.
    pub bold: bool,
    /// Italic caption and input.
    pub italic: bool,
    /// Bold caption only.
    pub label_bold: bool,
    /// Italic caption only.
    pub label_italic: bool,
    /// Bold input only.
    pub input_bold: bool,
    /// Italic input only.
    pub input_italic: bool,
    /// Caption alignment above the bar.
    pub label_align: HorizontalAlign,
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Placeholder color.
    pub placeholder_color: Color,
    /// Length below which [`InputField::meets_min_length`] is false.
    pub min_length: usize,
    /// Hard cap on the number of characters.
    pub max_length: usize,
    /// Bar background; `None` leaves the bar undrawn.
    pub input_background: Option<Color>,
    /// Corner radius of the bar background.
    pub input_background_radius: i32,
    /// Outline thickness of the bar background; 0 fills it.
    pub input_background_width: i32,
    /// Horizontal and vertical padding inside the bar.
    pub input_margin: [i32; 2],
    /// Fill behind the whole widget.
    pub background: Color,
    /// Debug outlines around caption, text, bar and image.
    pub draw_borders: bool,
}

impl InputFieldOptions {
    /// Defaults drawn from `theme`.
    #[must_use]
    pub fn themed(theme: &Theme) -> Self {
        Self {
            bold: false,
            italic: false,
            label_bold: false,
            label_italic: false,
            input_bold: false,
            input_italic: false,
            label_align: HorizontalAlign::Center,
            placeholder: String::new(),
            placeholder_color: theme.text_muted,
            min_length: 0,
            max_length: 100,
            input_background: None,
            input_background_radius: 0,
            input_background_width: 1,
            input_margin: [0, 0],
            background: theme.background,
            draw_borders: false,
        }
    }
}

impl Default for InputFieldOptions {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

/// A captioned, focusable text box.
#[derive(Debug, Clone)]
pub struct InputField {
    state: WidgetState,
    options: InputFieldOptions,
    title: Surface,
    title_rect: Rect,
    font: Font,
    input_color: Color,
    placeholder_rect: Rect,
    /// Bar in image-local coordinates.
    bar: Rect,
    input: String,
    input_rect: Rect,
    rest_image: Surface,
    image: Surface,
}

impl InputField {
    /// Lays out the caption above an empty bar and anchors the result's
    /// center at `destination`.
    ///
    /// The bar is at least `input_width` and at least the padded placeholder.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        destination: (i32, i32),
        label: &str,
        label_color: Color,
        label_size: u32,
        input_color: Color,
        input_size: u32,
        input_width: (i32, i32),
        options: InputFieldOptions,
    ) -> Self {
        let title_font = Font::new(
            label_size,
            options.bold || options.label_bold,
            options.italic || options.label_italic,
        );
        let title = title_font.render(label, label_color);

        let font = Font::new(
            input_size,
            options.bold || options.input_bold,
            options.italic || options.input_italic,
        );
        let placeholder = font.render(&options.placeholder, options.placeholder_color);

        let [mx, my] = options.input_margin;
        let padded = Rect::from_size(placeholder.width() + 2 * mx, placeholder.height() + 2 * my);
        let bar_size = padded.union(&Rect::from_size(input_width.0, input_width.1)).size();

        let canvas = (bar_size.0.max(title.width()), bar_size.1 + title.height());
        let title_x = match options.label_align {
            HorizontalAlign::Left => 0,
            HorizontalAlign::Center => (canvas.0 - title.width()) / 2,
            HorizontalAlign::Right => canvas.0 - title.width(),
        };
        let title_rect = Rect::new(title_x, 0, title.width(), title.height());
        let bar = Rect::anchored(Anchor::MidTop, (canvas.0 / 2, title_rect.bottom()), bar_size);
        let placeholder_rect = placeholder.rect().with_anchor(Anchor::Center, bar.center());

        let mut field = Self {
            state: WidgetState::new(destination, Anchor::Center, canvas),
            options,
            title,
            title_rect,
            font,
            input_color,
            placeholder_rect,
            bar,
            input: String::new(),
            input_rect: placeholder_rect,
            rest_image: Surface::new(0, 0),
            image: Surface::new(0, 0),
        };
        field.rest_image = field.compose(&placeholder, placeholder_rect);
        field.image = field.rest_image.clone();
        field
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.input
    }

    /// Returns true once the text reaches `min_length` characters.
    #[must_use]
    pub fn meets_min_length(&self) -> bool {
        self.input.chars().count() >= self.options.min_length
    }

    /// Returns true while the field accepts keys.
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.state.flags.has(WidgetFlags::FOCUSED)
    }

    /// The input bar in screen coordinates, i.e. the focus hit area.
    #[must_use]
    pub const fn input_bar(&self) -> Rect {
        self.bar.translate(self.state.rect.x, self.state.rect.y)
    }

    /// Empties the field and shows the placeholder again.
    pub fn clear(&mut self) {
        self.input.clear();
        self.input_rect = self.placeholder_rect;
        self.image = self.rest_image.clone();
        self.state.place(self.image.size());
    }

    /// Draws the full widget with `text` (input or placeholder) in the bar.
    fn compose(&self, text: &Surface, text_rect: Rect) -> Surface {
        let (w, h) = self.state.rect.size();
        let mut image = Surface::filled(w, h, self.options.background);

        if let Some(bar_color) = self.options.input_background {
            image.draw_rect(
                self.bar,
                bar_color,
                self.options.input_background_width,
                self.options.input_background_radius,
            );
        }
        image.blit(&self.title, (self.title_rect.x, self.title_rect.y));
        image.blit(text, (text_rect.x, text_rect.y));

        if outlines_enabled(self.options.draw_borders) {
            image.draw_rect(image.rect(), Color::LIME, 2, 0);
            image.draw_rect(self.title_rect, Color::RED, 2, 0);
            image.draw_rect(text_rect, Color::YELLOW, 2, 0);
            image.draw_rect(self.bar, Color::CYAN, 2, 0);
        }
        image
    }

    /// Applies one key to the text. Returns true if the text changed.
    fn apply_key(&mut self, key: Key, text: Option<char>) -> bool {
        match key {
            Key::Enter | Key::Tab | Key::Escape => false,
            Key::Backspace => self.input.pop().is_some(),
            _ => match text.filter(|ch| !ch.is_control()) {
                Some(ch) if self.input.chars().count() < self.options.max_length => {
                    self.input.push(ch);
                    true
                }
                _ => false,
            },
        }
    }

    /// Renders the current text, dropping trailing characters that overflow
    /// the bar's inner width.
    fn render_input(&mut self) -> Option<Surface> {
        let inner = 2 * self.options.input_margin[0];
        loop {
            if self.input.is_empty() {
                return None;
            }
            let rendered = self.font.render(&self.input, self.input_color);
            if self.bar.width - rendered.width() >= inner {
                return Some(rendered);
            }
            let dropped = self.input.pop();
            tracing::trace!(?dropped, "input field overflow, character rejected");
        }
    }
}

impl Drawable for InputField {
    fn image(&self) -> &Surface {
        &self.image
    }

    fn bounds(&self) -> Rect {
        self.state.rect
    }
}

impl Widget for InputField {
    fn update(&mut self, events: &EventBatch) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        let was_focused = self.is_focused();
        let before = self.input.clone();
        let mut edited = false;

        for event in events {
            match *event {
                Event::PointerDown { x, y, .. } => {
                    let hit = self.input_bar().contains(x, y);
                    self.state.flags.assign(WidgetFlags::FOCUSED, hit);
                }
                Event::KeyDown { key, text } if self.is_focused() => {
                    edited |= self.apply_key(key, text);
                }
                _ => {}
            }
        }

        let focused = self.is_focused();
        if focused != was_focused {
            response.focused = focused;
            response.unfocused = !focused;
            tracing::debug!(focused, "input field focus changed");
        }

        if edited {
            match self.render_input() {
                Some(rendered) => {
                    let text_rect = rendered.rect().with_anchor(Anchor::Center, self.bar.center());
                    self.image = self.compose(&rendered, text_rect);
                    self.input_rect = text_rect;
                }
                None => {
                    self.image = self.rest_image.clone();
                    self.input_rect = self.placeholder_rect;
                }
            }
            response.changed = self.input != before;
        }

        self.state.place(self.image.size());
        response
    }
}
