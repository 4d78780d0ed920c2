//! Binary toggle whose handle slides along a track.

use serde::{Deserialize, Serialize};

use super::core::{Drawable, Widget, WidgetFlags, WidgetResponse, WidgetState};
use crate::input::{Event, EventBatch};
use crate::layout::{Anchor, Rect};
use crate::style::{Color, Theme};
use crate::surface::Surface;

/// Style and motion options for a [`Switch`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SwitchOptions {
    /// Track color.
    pub track_color: Color,
    /// Handle color.
    pub handle_color: Color,
    /// Panel behind the track.
    pub background: Color,
    /// Total extra width and height of the panel around the track.
    pub padding: i32,
    /// Pixels the handle moves per frame.
    pub step: i32,
    /// Track corner radius.
    pub track_radius: i32,
}

impl SwitchOptions {
    /// Defaults drawn from `theme`.
    #[must_use]
    pub const fn themed(theme: &Theme) -> Self {
        Self {
            track_color: theme.track,
            handle_color: theme.handle,
            background: theme.panel,
            padding: 10,
            step: 10,
            track_radius: 25,
        }
    }
}

impl Default for SwitchOptions {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

/// An on/off switch.
#[derive(Debug, Clone)]
pub struct Switch {
    state: WidgetState,
    options: SwitchOptions,
    /// Track in image-local coordinates.
    track: Rect,
    /// Bounding square of the handle in image-local coordinates.
    handle: Rect,
    track_image: Surface,
    image: Surface,
}

impl Switch {
    /// Builds a switch, off, with a `width` x `height` track centered on
    /// `destination`.
    #[must_use]
    pub fn new(destination: (i32, i32), width: i32, height: i32, options: SwitchOptions) -> Self {
        let (width, height) = (width.max(1), height.max(1));
        let panel = Rect::from_size(width, height).inflate(options.padding.max(0), options.padding.max(0));
        let mut track_image = Surface::filled(panel.width, panel.height, options.background);

        let track = Rect::anchored(Anchor::Center, track_image.rect().center(), (width, height));
        track_image.draw_rect(track, options.track_color, 0, options.track_radius);

        let handle = Rect::new(track.x, track.y, height, height);
        let mut switch = Self {
            state: WidgetState::new(destination, Anchor::Center, track_image.size()),
            options,
            track,
            handle,
            image: Surface::new(0, 0),
            track_image,
        };
        switch.redraw();
        switch
    }

    /// Returns true when the switch is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        self.state.flags.has(WidgetFlags::TOGGLED)
    }

    /// Returns true once the handle has reached the end matching its state.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        if self.is_on() {
            self.handle.right() >= self.track.right()
        } else {
            self.handle.x <= self.track.x
        }
    }

    /// Handle bounds in screen coordinates.
    #[must_use]
    pub const fn handle_rect(&self) -> Rect {
        self.handle.translate(self.state.rect.x, self.state.rect.y)
    }

    /// Track bounds in screen coordinates.
    #[must_use]
    pub const fn track(&self) -> Rect {
        self.track.translate(self.state.rect.x, self.state.rect.y)
    }

    /// Advances the handle one step toward its target end.
    fn slide(&mut self) {
        let step = self.options.step.max(1);
        let x = if self.is_on() {
            (self.handle.x + step).min(self.track.right() - self.handle.width)
        } else {
            (self.handle.x - step).max(self.track.x)
        };
        self.handle.x = x.max(self.track.x);
    }

    fn redraw(&mut self) {
        let mut image = self.track_image.clone();
        let radius = self.handle.height as f32 / 2.0;
        let center = (self.handle.x as f32 + radius, self.handle.y as f32 + radius);
        image.draw_circle(center, radius, self.options.handle_color, 0);
        self.image = image;
    }
}

impl Drawable for Switch {
    fn image(&self) -> &Surface {
        &self.image
    }

    fn bounds(&self) -> Rect {
        self.state.rect
    }
}

impl Widget for Switch {
    fn update(&mut self, events: &EventBatch) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        for event in events {
            if let Event::PointerDown { x, y, .. } = *event {
                if self.handle_rect().contains(x, y) {
                    self.state.flags.toggle(WidgetFlags::TOGGLED);
                    response.changed = !response.changed;
                    tracing::debug!(on = self.is_on(), "switch toggled");
                }
            }
        }

        if !self.is_settled() {
            self.slide();
        }
        self.redraw();
        self.state.place(self.image.size());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn switch() -> Switch {
        Switch::new((1000, 300), 100, 50, SwitchOptions::default())
    }

    fn click_handle(switch: &mut Switch) -> WidgetResponse {
        let (x, y) = switch.handle_rect().center();
        switch.update(&EventBatch::new((x, y), vec![Event::press(x, y)]))
    }

    #[test]
    fn test_switch_layout() {
        let switch = switch();
        assert_eq!(switch.image().size(), (110, 60));
        assert_eq!(switch.bounds().center(), (1000, 300));
        assert_eq!(switch.handle_rect().x, switch.track().x);
        assert!(switch.is_settled());
    }

    #[test]
    fn test_click_toggles_once() {
        let mut switch = switch();
        let response = click_handle(&mut switch);
        assert!(response.changed);
        assert!(switch.is_on());
    }

    #[test]
    fn test_miss_does_not_toggle() {
        let mut switch = switch();
        let track = switch.track();
        let response = switch.update(&EventBatch::new((0, 0), vec![Event::press(track.right() - 5, track.y + 5)]));
        assert!(!response.changed);
        assert!(!switch.is_on());
    }

    #[test]
    fn test_handle_moves_by_step_without_overshoot() {
        let mut switch = switch();
        let start = switch.handle_rect().x;
        click_handle(&mut switch);
        assert_eq!(switch.handle_rect().x, start + 10);

        let idle = EventBatch::idle((0, 0));
        let mut frames = 1;
        while !switch.is_settled() {
            let before = switch.handle_rect().x;
            switch.update(&idle);
            let moved = switch.handle_rect().x - before;
            assert!(moved > 0 && moved <= 10);
            frames += 1;
            assert!(frames < 100);
        }
        assert_eq!(switch.handle_rect().right(), switch.track().right());

        switch.update(&idle);
        assert_eq!(switch.handle_rect().right(), switch.track().right());
    }

    #[test]
    fn test_toggle_back_returns_left() {
        let mut switch = switch();
        click_handle(&mut switch);
        let idle = EventBatch::idle((0, 0));
        for _ in 0..10 {
            switch.update(&idle);
        }

        let response = click_handle(&mut switch);
        assert!(response.changed);
        assert!(!switch.is_on());
        for _ in 0..10 {
            switch.update(&idle);
        }
        assert_eq!(switch.handle_rect().x, switch.track().x);
    }

    #[test]
    fn test_odd_remainder_clamps() {
        let options = SwitchOptions {
            step: 7,
            ..SwitchOptions::default()
        };
        let mut switch = Switch::new((100, 100), 64, 20, options);
        click_handle(&mut switch);
        let idle = EventBatch::idle((0, 0));
        for _ in 0..20 {
            switch.update(&idle);
            assert!(switch.handle_rect().right() <= switch.track().right());
        }
        assert!(switch.is_settled());
    }
}
