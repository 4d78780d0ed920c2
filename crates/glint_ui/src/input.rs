//! Input events and the per-frame event batch.
//!
//! Producers (a platform thread, a replay script) push [`Event`]s through an
//! [`EventSender`]. The frame loop drains the [`EventQueue`] once per frame
//! into an [`EventBatch`], which every widget's `update` reads.

use crossbeam_channel::{unbounded, Receiver, Sender};

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button (scroll wheel click).
    Middle,
}

/// Keyboard key.
///
/// Keys that produce text carry it in [`Event::KeyDown`]'s `text`; the key
/// itself only matters for the editing keys listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Tab key.
    Tab,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Space bar.
    Space,
    /// Any key that produces a printable character.
    Character,
    /// A modifier or otherwise unnamed key (shift, ctrl, function keys).
    Other,
}

/// One input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A mouse button went down at `(x, y)`.
    PointerDown {
        /// Pointer X.
        x: i32,
        /// Pointer Y.
        y: i32,
        /// Which button.
        button: MouseButton,
    },
    /// A mouse button went up at `(x, y)`.
    PointerUp {
        /// Pointer X.
        x: i32,
        /// Pointer Y.
        y: i32,
        /// Which button.
        button: MouseButton,
    },
    /// The pointer moved to `(x, y)`.
    PointerMove {
        /// Pointer X.
        x: i32,
        /// Pointer Y.
        y: i32,
    },
    /// A key was pressed.
    KeyDown {
        /// The key.
        key: Key,
        /// Text the key produced, if any.
        text: Option<char>,
    },
    /// The host asked to quit.
    Quit,
}

impl Event {
    /// Left-button press at `(x, y)`.
    #[must_use]
    pub const fn press(x: i32, y: i32) -> Self {
        Self::PointerDown { x, y, button: MouseButton::Left }
    }

    /// Left-button release at `(x, y)`.
    #[must_use]
    pub const fn release(x: i32, y: i32) -> Self {
        Self::PointerUp { x, y, button: MouseButton::Left }
    }

    /// Pointer motion to `(x, y)`.
    #[must_use]
    pub const fn motion(x: i32, y: i32) -> Self {
        Self::PointerMove { x, y }
    }

    /// A key press without text.
    #[must_use]
    pub const fn key(key: Key) -> Self {
        Self::KeyDown { key, text: None }
    }

    /// A key press producing `ch`.
    #[must_use]
    pub const fn char(ch: char) -> Self {
        let key = if ch == ' ' { Key::Space } else { Key::Character };
        Self::KeyDown { key, text: Some(ch) }
    }

    /// Pointer position carried by the event, if any.
    #[must_use]
    pub const fn position(&self) -> Option<(i32, i32)> {
        match *self {
            Self::PointerDown { x, y, .. } | Self::PointerUp { x, y, .. } | Self::PointerMove { x, y } => {
                Some((x, y))
            }
            Self::KeyDown { .. } | Self::Quit => None,
        }
    }
}

/// The events of one frame plus the pointer position after them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBatch {
    events: Vec<Event>,
    pointer: (i32, i32),
}

impl EventBatch {
    /// Creates a batch. `pointer` is where the pointer was before these
    /// events; pointer events in the batch move it forward.
    #[must_use]
    pub fn new(pointer: (i32, i32), events: Vec<Event>) -> Self {
        let pointer = events.iter().rev().find_map(Event::position).unwrap_or(pointer);
        Self { events, pointer }
    }

    /// A batch with no events and the pointer at `pointer`.
    #[must_use]
    pub fn idle(pointer: (i32, i32)) -> Self {
        Self::new(pointer, Vec::new())
    }

    /// Events in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter()
    }

    /// Current pointer position (after the whole batch).
    #[must_use]
    pub const fn pointer(&self) -> (i32, i32) {
        self.pointer
    }

    /// Number of events in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the batch holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns true if a quit was requested this frame.
    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| matches!(e, Event::Quit))
    }
}

impl<'a> IntoIterator for &'a EventBatch {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Cloneable producer half of an [`EventQueue`].
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<Event>,
}

impl EventSender {
    /// Sends an event. Returns false if the queue is gone.
    pub fn send(&self, event: Event) -> bool {
        self.sender.send(event).is_ok()
    }
}

/// Frame-loop side of the event channel.
///
/// Remembers the last pointer position across frames so idle frames still
/// hit-test against where the pointer actually is.
#[derive(Debug)]
pub struct EventQueue {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    pointer: (i32, i32),
}

impl EventQueue {
    /// Creates an empty queue with the pointer at the origin.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            pointer: (0, 0),
        }
    }

    /// Returns a new producer handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Drains everything queued so far into one batch.
    pub fn poll(&mut self) -> EventBatch {
        let events: Vec<Event> = self.receiver.try_iter().collect();
        let batch = EventBatch::new(self.pointer, events);
        self.pointer = batch.pointer();
        batch
    }

    /// Last known pointer position.
    #[must_use]
    pub const fn pointer(&self) -> (i32, i32) {
        self.pointer
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
