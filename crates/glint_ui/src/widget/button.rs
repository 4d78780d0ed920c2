//! Text button with idle, hover and pressed faces.

use std::fmt;

use serde::Deserialize;

use super::core::{Drawable, Widget, WidgetFlags, WidgetResponse, WidgetState};
use crate::font::Font;
use crate::input::{Event, EventBatch};
use crate::layout::{Anchor, Rect};
use crate::style::Color;
use crate::surface::Surface;

/// Callback fired once per completed click.
pub type ButtonAction = Box<dyn FnMut()>;

/// Colors and weight of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Text color at rest.
    pub idle: Color,
    /// Text color under the pointer.
    pub hover: Color,
    /// Text color while held.
    pub pressed: Color,
    /// Fill behind the text.
    pub background: Color,
    /// Bold weight.
    pub bold: bool,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            idle: Color::WHITE,
            hover: Color::DARKGRAY,
            pressed: Color::DIMGRAY,
            background: Color::BLACK,
            bold: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Idle,
    Hover,
    Pressed,
}

/// A clickable text button.
pub struct Button {
    state: WidgetState,
    text: String,
    idle: Surface,
    hover: Surface,
    pressed: Surface,
    face: Face,
    action: ButtonAction,
}

impl Button {
    /// Builds a button with the default style centered on `center`.
    #[must_use]
    pub fn new(
        center: (i32, i32),
        text: impl Into<String>,
        text_size: u32,
        action: impl FnMut() + 'static,
    ) -> Self {
        Self::with_style(center, text, text_size, ButtonStyle::default(), action)
    }

    /// Builds a button with explicit colors.
    #[must_use]
    pub fn with_style(
        center: (i32, i32),
        text: impl Into<String>,
        text_size: u32,
        style: ButtonStyle,
        action: impl FnMut() + 'static,
    ) -> Self {
        let text = text.into();
        let font = Font::new(text_size, style.bold, false);
        let face = |color: Color| {
            let rendered = font.render(&text, color);
            let mut image = Surface::filled(rendered.width(), rendered.height(), style.background);
            image.blit(&rendered, (0, 0));
            image
        };
        let (idle, hover, pressed) = (face(style.idle), face(style.hover), face(style.pressed));

        Self {
            state: WidgetState::new(center, Anchor::Center, idle.size()),
            text,
            idle,
            hover,
            pressed,
            face: Face::Idle,
            action: Box::new(action),
        }
    }

    /// The button caption.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true between a press on the button and the next release.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Returns true if the pointer was over the button last frame.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("text", &self.text)
            .field("state", &self.state)
            .field("face", &self.face)
            .finish_non_exhaustive()
    }
}

impl Drawable for Button {
    fn image(&self) -> &Surface {
        match self.face {
            Face::Idle => &self.idle,
            Face::Hover => &self.hover,
            Face::Pressed => &self.pressed,
        }
    }

    fn bounds(&self) -> Rect {
        self.state.rect
    }
}

impl Widget for Button {
    fn update(&mut self, events: &EventBatch) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        let (px, py) = events.pointer();
        let hovered = self.state.rect.contains(px, py);
        self.state.flags.assign(WidgetFlags::HOVERED, hovered);

        for event in events {
            match event {
                Event::PointerDown { .. } if hovered => {
                    self.state.flags.set(WidgetFlags::PRESSED | WidgetFlags::DRAGGING);
                }
                Event::PointerUp { .. } => {
                    if self.state.is_pressed() {
                        tracing::debug!(text = %self.text, "button clicked");
                        (self.action)();
                        response.clicked = true;
                    }
                    self.state.flags.clear(WidgetFlags::PRESSED | WidgetFlags::DRAGGING);
                }
                _ => {}
            }
        }

        self.face = if self.state.flags.has(WidgetFlags::PRESSED | WidgetFlags::DRAGGING) {
            Face::Pressed
        } else if hovered {
            Face::Hover
        } else {
            Face::Idle
        };
        self.state.place(self.image().size());
        response
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counting_button() -> (Button, Rc<Cell<u32>>) {
        let count = Rc::new(Cell::new(0));
        let hits = Rc::clone(&count);
        let button = Button::new((640, 630), "Click Me", 40, move || hits.set(hits.get() + 1));
        (button, count)
    }

    #[test]
    fn test_press_then_release_fires_once() {
        let (mut button, count) = counting_button();
        let (x, y) = button.bounds().center();

        button.update(&EventBatch::new((x, y), vec![Event::press(x, y)]));
        assert!(button.is_pressed());
        assert_eq!(count.get(), 0);

        let response = button.update(&EventBatch::new((x, y), vec![Event::release(x, y)]));
        assert!(response.clicked);
        assert_eq!(count.get(), 1);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_release_outside_still_fires() {
        let (mut button, count) = counting_button();
        let (x, y) = button.bounds().center();

        button.update(&EventBatch::new((x, y), vec![Event::press(x, y)]));
        button.update(&EventBatch::new((0, 0), vec![Event::motion(0, 0), Event::release(0, 0)]));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_lone_release_never_fires() {
        let (mut button, count) = counting_button();
        let (x, y) = button.bounds().center();

        let response = button.update(&EventBatch::new((x, y), vec![Event::release(x, y)]));
        assert!(!response.clicked);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_press_away_from_button_is_ignored() {
        let (mut button, count) = counting_button();
        button.update(&EventBatch::new((0, 0), vec![Event::press(0, 0), Event::release(0, 0)]));
        assert!(!button.is_pressed());
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_face_priority() {
        let (mut button, _) = counting_button();
        let idle = button.image().clone();
        let (x, y) = button.bounds().center();

        button.update(&EventBatch::idle((x, y)));
        assert!(button.is_hovered());
        let hover = button.image().clone();
        assert_ne!(hover, idle);

        button.update(&EventBatch::new((x, y), vec![Event::press(x, y)]));
        let pressed = button.image().clone();
        assert_ne!(pressed, hover);

        // Pressed wins even with the pointer elsewhere.
        button.update(&EventBatch::idle((0, 0)));
        assert_eq!(button.image(), &pressed);

        button.update(&EventBatch::new((0, 0), vec![Event::release(0, 0)]));
        assert_eq!(button.image(), &idle);
    }
}
