//! Core widget types and traits.

use crate::input::EventBatch;
use crate::layout::{Anchor, Rect};
use crate::surface::Surface;

/// Unique identifier for a widget on a [`Stage`](crate::Stage).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Transient interaction flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Pointer is over the widget.
    pub const HOVERED: u32 = 1 << 0;
    /// A press started on the widget and has not been released.
    pub const PRESSED: u32 = 1 << 1;
    /// The widget is tracking a drag.
    pub const DRAGGING: u32 = 1 << 2;
    /// The widget accepts keyboard input.
    pub const FOCUSED: u32 = 1 << 3;
    /// The widget's binary state is on.
    pub const TOGGLED: u32 = 1 << 4;

    /// No flags set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Toggles a flag.
    #[inline]
    pub fn toggle(&mut self, flag: u32) {
        self.0 ^= flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Placement and interaction state shared by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetState {
    /// Point the image is anchored to, in the parent's coordinates.
    pub destination: (i32, i32),
    /// Which point of the image sits on `destination`.
    pub anchor: Anchor,
    /// Current placement of the image.
    pub rect: Rect,
    /// Interaction flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates state for an image of `size` anchored at `destination`.
    #[must_use]
    pub const fn new(destination: (i32, i32), anchor: Anchor, size: (i32, i32)) -> Self {
        Self {
            destination,
            anchor,
            rect: Rect::anchored(anchor, destination, size),
            flags: WidgetFlags::new(),
        }
    }

    /// Re-derives `rect` for an image of `size`.
    #[inline]
    pub fn place(&mut self, size: (i32, i32)) {
        self.rect = Rect::anchored(self.anchor, self.destination, size);
    }

    /// Converts a screen point into image-local coordinates.
    #[inline]
    #[must_use]
    pub const fn to_local(&self, point: (i32, i32)) -> (i32, i32) {
        (point.0 - self.rect.x, point.1 - self.rect.y)
    }

    /// Returns true if the widget is hovered.
    #[inline]
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.flags.has(WidgetFlags::HOVERED)
    }

    /// Returns true if the widget is pressed.
    #[inline]
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.flags.has(WidgetFlags::PRESSED)
    }
}

/// Response from widget update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// A full press/release cycle completed.
    pub clicked: bool,
    /// Widget gained keyboard focus.
    pub focused: bool,
    /// Widget lost keyboard focus.
    pub unfocused: bool,
    /// Widget value or binary state changed.
    pub changed: bool,
}

impl WidgetResponse {
    /// Returns true if anything happened.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.clicked || self.focused || self.unfocused || self.changed
    }
}

/// Anything the host can composite: an image and where it goes.
pub trait Drawable {
    /// The buffer to composite this frame.
    fn image(&self) -> &Surface;

    /// Where `image` goes, in the parent's coordinates.
    fn bounds(&self) -> Rect;
}

/// A drawable that reacts to input.
///
/// `update` is called once per frame with that frame's events, even when the
/// batch is empty, and is the only place widget state changes.
pub trait Widget: Drawable {
    /// Consumes a frame of input and re-renders if needed.
    fn update(&mut self, events: &EventBatch) -> WidgetResponse {
        let _ = events;
        WidgetResponse::default()
    }
}

/// Debug outlines are on when the widget asks for them or the
/// `debug_overlay` feature forces them.
#[inline]
pub(crate) const fn outlines_enabled(requested: bool) -> bool {
    requested || cfg!(feature = "debug_overlay")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_assign_and_toggle() {
        let mut flags = WidgetFlags::new();
        flags.assign(WidgetFlags::FOCUSED, true);
        assert!(flags.has(WidgetFlags::FOCUSED));

        flags.toggle(WidgetFlags::FOCUSED);
        assert!(!flags.has(WidgetFlags::FOCUSED));

        flags.set(WidgetFlags::PRESSED | WidgetFlags::DRAGGING);
        flags.clear(WidgetFlags::PRESSED);
        assert!(flags.has(WidgetFlags::DRAGGING));
        assert!(!flags.has(WidgetFlags::PRESSED));
    }

    #[test]
    fn test_state_place_keeps_anchor() {
        let mut state = WidgetState::new((100, 50), Anchor::Center, (20, 10));
        assert_eq!(state.rect, Rect::new(90, 45, 20, 10));

        state.place((41, 7));
        assert_eq!(state.rect.anchor_point(Anchor::Center), (100, 50));
        assert_eq!(state.to_local((100, 50)), (20, 3));
    }
}
