//! # GLINT UI
//!
//! Surface-cached widgets for a software raster.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       FRAME PIPELINE                     │
//! ├──────────────────────────────────────────────────────────┤
//! │  EventQueue → EventBatch → Widget::update → Stage blit   │
//! │       ↓            ↓              ↓              ↓       │
//! │  any thread   pointer pos   re-render on     one pass,   │
//! │               + events      state change     back→front  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Widgets never fail once built. Bad options degrade to something drawable;
//! only config loading and strict scale validation return [`UiError`].

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod font;
pub mod input;
pub mod layout;
pub mod render;
pub mod style;
pub mod surface;
pub mod transition;
pub mod widget;

pub use config::{ActionMap, DisplayConfig, UiConfig, WidgetSpec};
pub use error::{UiError, UiResult};
pub use font::Font;
pub use input::{Event, EventBatch, EventQueue, EventSender, Key, MouseButton};
pub use layout::{Anchor, HorizontalAlign, Rect, VerticalSide};
pub use render::Stage;
pub use style::{Color, Theme};
pub use surface::Surface;
pub use transition::{HorizontalRectangleSwipeTransition, TransitionOptions};
pub use widget::{
    Button, ButtonStyle, Drawable, InputField, InputFieldOptions, Label, LabelOptions, Slider,
    SliderBounds, SliderOptions, Switch, SwitchOptions, Table, TableOptions, Widget, WidgetId,
    WidgetResponse,
};
