//! Widget system.
//!
//! Every widget owns a pre-rendered [`Surface`](crate::Surface) and a
//! placement rect, and re-renders only when its state changes.

mod button;
mod core;
mod input_field;
mod label;
mod slider;
mod switch;
mod table;

pub use button::{Button, ButtonAction, ButtonStyle};
pub use self::core::{Drawable, Widget, WidgetFlags, WidgetId, WidgetResponse, WidgetState};
pub use input_field::{InputField, InputFieldOptions};
pub use label::{Label, LabelOptions};
pub use slider::{snap_to_step, Slider, SliderBounds, SliderOptions};
pub use switch::{Switch, SwitchOptions};
pub use table::{Table, TableOptions};
