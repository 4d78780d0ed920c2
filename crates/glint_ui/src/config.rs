//! Scene configuration loaded from TOML.
//!
//! ```toml
//! [theme]
//! background = "#000000"
//!
//! [display]
//! width = 1280
//! height = 720
//!
//! [[widgets]]
//! kind = "slider"
//! at = [640, 360]
//! track = [300, 5]
//! radius = 7.5
//! bounds = [-100, 100]
//! ```
//!
//! Option keys left out of a widget entry are filled from `[theme]`.
//! Unknown keys are ignored.

use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{UiError, UiResult};
use crate::style::{Color, Theme};
use crate::transition::TransitionOptions;
use crate::widget::{
    Button, ButtonStyle, InputField, InputFieldOptions, Label, LabelOptions, Slider, SliderBounds,
    SliderOptions, Switch, SwitchOptions, Table, TableOptions, Widget,
};

/// Named callbacks that scene buttons can refer to.
pub type ActionMap = HashMap<String, Rc<dyn Fn()>>;

/// A whole scene: theme, display size and widgets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Shared colors.
    pub theme: Theme,
    /// Target surface.
    pub display: DisplayConfig,
    /// Wipe played over the first frames.
    pub transition: Option<TransitionOptions>,
    /// Widgets, back to front.
    pub widgets: Vec<WidgetSpec>,
}

/// Size and pacing of the target surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
    /// Frames per second used to derive the frame delta.
    pub fps: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 60,
        }
    }
}

impl UiConfig {
    /// Parses a scene from TOML text.
    pub fn from_toml_str(text: &str) -> UiResult<Self> {
        let config: Self = toml::from_str(text)?;
        if config.display.width <= 0 || config.display.height <= 0 {
            return Err(UiError::InvalidConfig(format!(
                "display must be positive, got {}x{}",
                config.display.width, config.display.height
            )));
        }
        Ok(config)
    }

    /// Reads and parses a scene file.
    pub fn from_file(path: impl AsRef<Path>) -> UiResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|err| UiError::ConfigRead {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded scene config");
        Self::from_toml_str(&text)
    }

    /// Builds every widget in order.
    pub fn build_widgets(&self, actions: &ActionMap) -> UiResult<Vec<Box<dyn Widget>>> {
        self.widgets
            .iter()
            .map(|spec| spec.build(&self.theme, actions))
            .collect()
    }
}

const fn default_text_size() -> u32 {
    20
}

/// One widget entry, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WidgetSpec {
    /// A [`Label`].
    Label {
        /// Destination point.
        at: (i32, i32),
        /// Text.
        text: String,
        /// Text color; theme text if absent.
        color: Option<Color>,
        /// Text size.
        #[serde(default = "default_text_size")]
        size: u32,
        /// Style options.
        options: Option<toml::Table>,
    },
    /// An [`InputField`].
    InputField {
        /// Center point.
        at: (i32, i32),
        /// Caption above the bar.
        label: String,
        /// Caption color; theme text if absent.
        label_color: Option<Color>,
        /// Caption size.
        #[serde(default = "default_text_size")]
        label_size: u32,
        /// Typed text color; theme text if absent.
        input_color: Option<Color>,
        /// Typed text size.
        #[serde(default = "default_text_size")]
        input_size: u32,
        /// Minimum bar size.
        input_width: (i32, i32),
        /// Style options.
        options: Option<toml::Table>,
    },
    /// A [`Slider`].
    Slider {
        /// Center point.
        at: (i32, i32),
        /// Track size.
        track: (i32, i32),
        /// Handle radius.
        radius: f32,
        /// End values or captions.
        bounds: SliderBounds,
        /// Style options.
        options: Option<toml::Table>,
    },
    /// A [`Table`].
    Table {
        /// Top-center point.
        at: (i32, i32),
        /// Rows.
        rows: Vec<String>,
        /// Text color; theme text if absent.
        color: Option<Color>,
        /// Text size and row pitch.
        #[serde(default = "default_text_size")]
        size: u32,
        /// Style options.
        options: Option<toml::Table>,
    },
    /// A [`Switch`].
    Switch {
        /// Center point.
        at: (i32, i32),
        /// Track width.
        width: i32,
        /// Track height.
        height: i32,
        /// Style options.
        options: Option<toml::Table>,
    },
    /// A [`Button`].
    Button {
        /// Center point.
        at: (i32, i32),
        /// Caption.
        text: String,
        /// Caption size.
        #[serde(default = "default_text_size")]
        size: u32,
        /// Name looked up in the [`ActionMap`].
        action: String,
        /// Colors.
        style: Option<ButtonStyle>,
    },
}

impl WidgetSpec {
    /// The `kind` tag of this entry.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Label { .. } => "label",
            Self::InputField { .. } => "input_field",
            Self::Slider { .. } => "slider",
            Self::Table { .. } => "table",
            Self::Switch { .. } => "switch",
            Self::Button { .. } => "button",
        }
    }

    /// Builds the widget. Fails for buttons naming an unknown action and for
    /// option values of the wrong type.
    pub fn build(&self, theme: &Theme, actions: &ActionMap) -> UiResult<Box<dyn Widget>> {
        let widget: Box<dyn Widget> = match self {
            Self::Label { at, text, color, size, options } => Box::new(Label::new(
                *at,
                text.as_str(),
                color.unwrap_or(theme.text),
                *size,
                merge_options(LabelOptions::themed(theme), options.as_ref())?,
            )),
            Self::InputField {
                at,
                label,
                label_color,
                label_size,
                input_color,
                input_size,
                input_width,
                options,
            } => Box::new(InputField::new(
                *at,
                label,
                label_color.unwrap_or(theme.text),
                *label_size,
                input_color.unwrap_or(theme.text),
                *input_size,
                *input_width,
                merge_options(InputFieldOptions::themed(theme), options.as_ref())?,
            )),
            Self::Slider { at, track, radius, bounds, options } => Box::new(Slider::new(
                *at,
                *track,
                *radius,
                bounds.clone(),
                merge_options(SliderOptions::themed(theme), options.as_ref())?,
            )),
            Self::Table { at, rows, color, size, options } => Box::new(Table::new(
                *at,
                rows.as_slice(),
                color.unwrap_or(theme.text),
                *size,
                merge_options(TableOptions::themed(theme), options.as_ref())?,
            )),
            Self::Switch { at, width, height, options } => Box::new(Switch::new(
                *at,
                *width,
                *height,
                merge_options(SwitchOptions::themed(theme), options.as_ref())?,
            )),
            Self::Button { at, text, size, action, style } => {
                let callback = actions
                    .get(action)
                    .cloned()
                    .ok_or_else(|| UiError::UnknownAction(action.clone()))?;
                Box::new(Button::with_style(
                    *at,
                    text.as_str(),
                    *size,
                    style.unwrap_or_default(),
                    move || callback(),
                ))
            }
        };
        tracing::trace!(kind = self.kind(), "built widget");
        Ok(widget)
    }
}

/// Lays the keys given in a scene file over theme-derived options.
fn merge_options<T>(themed: T, overrides: Option<&toml::Table>) -> UiResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let Some(overrides) = overrides else {
        return Ok(themed);
    };
    let mut merged = match toml::Value::try_from(themed) {
        Ok(toml::Value::Table(table)) => table,
        Ok(other) => {
            return Err(UiError::InvalidConfig(format!(
                "options must be a table, got {}",
                other.type_str()
            )))
        }
        Err(err) => return Err(UiError::InvalidConfig(err.to_string())),
    };
    merged.extend(overrides.iter().map(|(key, value)| (key.clone(), value.clone())));
    Ok(toml::Value::Table(merged).try_into()?)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::input::{Event, EventBatch};

    const SCENE: &str = r##"
[theme]
background = "#101010"

[display]
width = 800
height = 600

[[widgets]]
kind = "label"
at = [400, 50]
text = "Hello"
options = { margin = [10, 4], text_background = [0, 0, 255] }

[[widgets]]
kind = "slider"
at = [400, 200]
track = [300, 5]
radius = 7.5
bounds = ["10", 20]
options = { step = 2.0 }

[[widgets]]
kind = "button"
at = [400, 500]
text = "Go"
action = "go"
"##;

    #[test]
    fn test_parse_scene() {
        let config = UiConfig::from_toml_str(SCENE).unwrap();
        assert_eq!(config.theme.background, Color::rgb(16, 16, 16));
        assert_eq!(config.theme.text, Color::WHITE);
        assert_eq!(config.display.width, 800);
        assert_eq!(config.display.fps, 60);
        let kinds: Vec<_> = config.widgets.iter().map(WidgetSpec::kind).collect();
        assert_eq!(kinds, ["label", "slider", "button"]);
    }

    #[test]
    fn test_build_scene_wires_actions() {
        let config = UiConfig::from_toml_str(SCENE).unwrap();
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut actions = ActionMap::new();
        actions.insert("go".to_owned(), Rc::new(move || counter.set(counter.get() + 1)));

        let mut widgets = config.build_widgets(&actions).unwrap();
        assert_eq!(widgets.len(), 3);

        let button = &mut widgets[2];
        let (x, y) = button.bounds().center();
        button.update(&EventBatch::new((x, y), vec![Event::press(x, y)]));
        button.update(&EventBatch::new((x, y), vec![Event::release(x, y)]));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let config = UiConfig::from_toml_str(SCENE).unwrap();
        let err = config.build_widgets(&ActionMap::new()).err();
        assert_eq!(err, Some(UiError::UnknownAction("go".to_owned())));
    }

    #[test]
    fn test_bad_toml_is_invalid_config() {
        let err = UiConfig::from_toml_str("[display\nwidth = 3").unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig(_)));

        let err = UiConfig::from_toml_str("[display]\nwidth = 0").unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = UiConfig::from_file("/nonexistent/scene.toml").unwrap_err();
        assert!(matches!(err, UiError::ConfigRead { .. }));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = UiConfig::from_toml_str("").unwrap();
        assert_eq!(config.display, DisplayConfig::default());
        assert!(config.widgets.is_empty());
        assert!(config.transition.is_none());
    }

    #[test]
    fn test_partial_options_follow_scene_theme() {
        let scene = r##"
[theme]
background = "#204060"

[[widgets]]
kind = "label"
at = [100, 100]
text = "Hi"
options = { transparent = false, margin = [8, 8] }
"##;
        let config = UiConfig::from_toml_str(scene).unwrap();
        let widgets = config.build_widgets(&ActionMap::new()).unwrap();
        assert_eq!(widgets[0].image().get(0, 0), Some(Color::rgb(32, 64, 96)));
    }

    #[test]
    fn test_merge_keeps_themed_keys() {
        let theme = Theme {
            track: Color::rgb(9, 99, 199),
            ..Theme::default()
        };
        let overrides: toml::Table = toml::from_str("step = 5.0").unwrap();
        let options = merge_options(SliderOptions::themed(&theme), Some(&overrides)).unwrap();
        assert_eq!(options.track_color, Color::rgb(9, 99, 199));
        assert_eq!(options.step, 5.0);

        let untouched = merge_options(SliderOptions::themed(&theme), None).unwrap();
        assert_eq!(untouched, SliderOptions::themed(&theme));
    }

    #[test]
    fn test_mistyped_option_is_invalid_config() {
        let overrides: toml::Table = toml::from_str("transparent = \"yes\"").unwrap();
        let err = merge_options(LabelOptions::default(), Some(&overrides)).unwrap_err();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }
}
