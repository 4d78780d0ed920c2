//! Horizontal slider with captions, a draggable handle and a value tag.
//!
//! ## Value mapping
//!
//! ```text
//!   min caption              max caption
//!   track.x ───────●──────── track.right()
//!                  │
//!   value = min + (x - track.x) * (max - min) / track.width
//! ```
//!
//! With a step other than 1 the value is rounded to the nearest step and the
//! handle is moved to the rounded position. The bounds themselves are never
//! snapped.

use serde::{Deserialize, Serialize};

use super::core::{Drawable, Widget, WidgetFlags, WidgetResponse, WidgetState};
use super::label::{Label, LabelOptions};
use crate::error::{UiError, UiResult};
use crate::font::Font;
use crate::input::{Event, EventBatch};
use crate::layout::{Anchor, Rect, VerticalSide};
use crate::style::{Color, Theme};
use crate::surface::{circle_bounds, Surface};

/// Corner radius requested for the track; clamped to half its height.
const TRACK_RADIUS: i32 = 30;

/// What the two ends of a slider mean.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "[BoundValue; 2]")]
pub enum SliderBounds {
    /// A numeric range; enables values, snapping and the hover tag.
    Numeric {
        /// Value at the left end.
        min: f64,
        /// Value at the right end.
        max: f64,
        /// Caption text as written; formatted from `min` and `max` when absent.
        captions: Option<(String, String)>,
    },
    /// Two captions with no numeric meaning.
    Labeled {
        /// Left caption.
        low: String,
        /// Right caption.
        high: String,
    },
}

impl SliderBounds {
    /// A numeric range. Fails unless both ends are finite and `min < max`.
    pub fn numeric(min: f64, max: f64) -> UiResult<Self> {
        if min.is_finite() && max.is_finite() && min < max {
            Ok(Self::Numeric {
                min,
                max,
                captions: None,
            })
        } else {
            Err(UiError::InvalidScale { min, max })
        }
    }

    /// Two plain captions.
    #[must_use]
    pub fn labeled(low: impl Into<String>, high: impl Into<String>) -> Self {
        Self::Labeled {
            low: low.into(),
            high: high.into(),
        }
    }

    /// Numeric if both captions parse as numbers forming a valid range,
    /// otherwise labeled. The captions are displayed as given either way.
    #[must_use]
    pub fn from_captions(low: &str, high: &str) -> Self {
        match (low.trim().parse::<f64>(), high.trim().parse::<f64>()) {
            (Ok(min), Ok(max)) => match Self::numeric(min, max) {
                Ok(_) => Self::Numeric {
                    min,
                    max,
                    captions: Some((low.to_owned(), high.to_owned())),
                },
                Err(err) => {
                    tracing::warn!(%err, "slider scale unusable, falling back to captions");
                    Self::labeled(low, high)
                }
            },
            _ => Self::labeled(low, high),
        }
    }

    /// `(min, max)` in numeric mode.
    #[must_use]
    pub const fn range(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Numeric { min, max, .. } => Some((min, max)),
            Self::Labeled { .. } => None,
        }
    }

    /// Returns true in numeric mode.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric { .. })
    }

    fn captions(&self) -> (String, String) {
        match self {
            Self::Numeric {
                captions: Some(captions),
                ..
            } => captions.clone(),
            Self::Numeric { min, max, .. } => (format_number(*min), format_number(*max)),
            Self::Labeled { low, high } => (low.clone(), high.clone()),
        }
    }
}

/// One end of a slider as written in a config file.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoundValue {
    Number(f64),
    Text(String),
}

impl From<[BoundValue; 2]> for SliderBounds {
    fn from([low, high]: [BoundValue; 2]) -> Self {
        match (low, high) {
            (BoundValue::Number(min), BoundValue::Number(max)) => Self::numeric(min, max)
                .unwrap_or_else(|err| {
                    tracing::warn!(%err, "slider scale unusable, falling back to captions");
                    Self::labeled(format_number(min), format_number(max))
                }),
            (low, high) => Self::from_captions(&low.into_text(), &high.into_text()),
        }
    }
}

impl BoundValue {
    fn into_text(self) -> String {
        match self {
            Self::Number(n) => format_number(n),
            Self::Text(text) => text,
        }
    }
}

/// Formats integral values without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Formats a slider value with as many decimals as the step has (max 3).
fn format_value(value: f64, step: f64) -> String {
    let decimals = (0..=3)
        .find(|&d| {
            let scaled = step * 10f64.powi(d);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(3) as usize;
    if decimals == 0 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.decimals$}")
    }
}

/// Rounds `value` to the nearest step above `min`.
///
/// Values at or beyond either bound, and any value when `step` is 1, come
/// back unchanged. Exact half steps round down.
#[must_use]
pub fn snap_to_step(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if (step - 1.0).abs() < f64::EPSILON || step <= 0.0 || value <= min || value >= max {
        return value;
    }

    let mut snapped = min + step * ((value - min) / step).floor();
    if value - snapped > step / 2.0 {
        snapped += step;
    }
    snapped.clamp(min, max)
}

/// Style and behaviour options for a [`Slider`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderOptions {
    /// Track color.
    pub track_color: Color,
    /// Handle fill.
    pub handle_color: Color,
    /// Optional ring around the handle.
    pub handle_outline: Option<Color>,
    /// Ring thickness.
    pub handle_outline_width: i32,
    /// Caption text size; defaults to 4/3 of the handle radius.
    pub label_size: Option<u32>,
    /// Caption color.
    pub caption_color: Color,
    /// Gap between the handle area and the captions or value tag.
    pub gap: i32,
    /// Bold captions.
    pub bold: bool,
    /// Italic captions.
    pub italic: bool,
    /// Quantization unit; 1 disables snapping.
    pub step: f64,
    /// Fill used when `transparent` is false.
    pub background: Color,
    /// Leave the area around track and captions transparent.
    pub transparent: bool,
    /// Show the value tag while dragging (numeric mode only).
    pub hover: bool,
    /// Side of the handle the value tag goes on.
    pub hover_position: VerticalSide,
    /// Value tag text color.
    pub hover_color: Color,
    /// Value tag panel color.
    pub hover_background: Color,
    /// Value tag text size.
    pub hover_size: u32,
}

impl SliderOptions {
    /// Defaults drawn from `theme`.
    #[must_use]
    pub fn themed(theme: &Theme) -> Self {
        Self {
            track_color: theme.track,
            handle_color: theme.handle,
            handle_outline: None,
            handle_outline_width: 1,
            label_size: None,
            caption_color: theme.text,
            gap: 2,
            bold: false,
            italic: false,
            step: 1.0,
            background: theme.background,
            transparent: true,
            hover: true,
            hover_position: VerticalSide::Bottom,
            hover_color: theme.text,
            hover_background: theme.highlight,
            hover_size: 10,
        }
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::themed(&Theme::default())
    }
}

/// A draggable handle on a track between two captions.
#[derive(Debug, Clone)]
pub struct Slider {
    state: WidgetState,
    options: SliderOptions,
    bounds: SliderBounds,
    value: Option<f64>,
    radius: f32,
    /// Track in image-local coordinates.
    track: Rect,
    /// Handle center in image-local coordinates.
    handle: (f32, f32),
    /// Track and captions only.
    caption_image: Surface,
    /// Captions plus the handle, no value tag.
    rest_image: Surface,
    image: Surface,
}

impl Slider {
    /// Builds a slider whose track is `track_size` and whose handle starts
    /// at the left end.
    #[must_use]
    pub fn new(
        destination: (i32, i32),
        track_size: (i32, i32),
        handle_radius: f32,
        bounds: SliderBounds,
        mut options: SliderOptions,
    ) -> Self {
        if !bounds.is_numeric() {
            options.hover = false;
        }
        if !(options.step > 0.0 && options.step.is_finite()) {
            tracing::warn!(step = options.step, "slider step must be positive, snapping disabled");
            options.step = 1.0;
        }

        let (track_w, track_h) = (track_size.0.max(1), track_size.1.max(1));
        let radius = handle_radius.max(1.0);
        let area = Rect::from_size(
            track_w + (2.0 * radius).round() as i32,
            (2 * radius as i32).max(track_h),
        );

        let label_size = options.label_size.unwrap_or((4.0 * radius / 3.0) as u32);
        let caption_options = LabelOptions {
            bold: options.bold,
            italic: options.italic,
            ..LabelOptions::default()
        };
        let (low_text, high_text) = bounds.captions();
        let low = Label::new((0, 0), low_text, options.caption_color, label_size, caption_options);
        let high = Label::new((0, 0), high_text, options.caption_color, label_size, caption_options);
        let (low_w, low_h) = low.image().size();
        let high_w = high.image().width();

        // A tag above the handle needs room the captions don't provide.
        let headroom = if options.hover && options.hover_position == VerticalSide::Top {
            Font::new(options.hover_size, false, false).line_height() + 2 * options.gap
        } else {
            0
        };
        let area = area.translate(0, headroom);

        let canvas = (
            area.width + low_w / 2 + high_w / 2,
            area.bottom() + low_h + options.gap,
        );
        let mut caption_image = if options.transparent {
            Surface::new(canvas.0, canvas.1)
        } else {
            Surface::filled(canvas.0, canvas.1, options.background)
        };

        let track = Rect::anchored(Anchor::Center, (canvas.0 / 2, area.center().1), (track_w, track_h));
        caption_image.draw_rect(track, options.track_color, 0, TRACK_RADIUS);

        let caption_y = area.bottom() + options.gap;
        for (label, x) in [(&low, track.x), (&high, track.right())] {
            let at = label.image().rect().with_anchor(Anchor::MidTop, (x, caption_y));
            caption_image.blit(label.image(), (at.x, at.y));
        }

        let value = bounds.range().map(|(min, _)| min);
        let handle = (track.x as f32, track.center().1 as f32);
        let mut slider = Self {
            state: WidgetState::new(destination, Anchor::Center, caption_image.size()),
            options,
            bounds,
            value,
            radius,
            track,
            handle,
            caption_image,
            rest_image: Surface::new(0, 0),
            image: Surface::new(0, 0),
        };
        slider.rest_image = slider.draw_handle();
        slider.image = slider.rest_image.clone();
        slider
    }

    /// Current value; `None` for labeled sliders.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// The slider's bounds.
    #[must_use]
    pub const fn slider_bounds(&self) -> &SliderBounds {
        &self.bounds
    }

    /// Returns true while the handle is being dragged.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.state.flags.has(WidgetFlags::DRAGGING)
    }

    /// Track rect in screen coordinates.
    #[must_use]
    pub const fn track(&self) -> Rect {
        self.track.translate(self.state.rect.x, self.state.rect.y)
    }

    /// Handle center in screen coordinates.
    #[must_use]
    pub fn handle_center(&self) -> (f32, f32) {
        (
            self.handle.0 + self.state.rect.x as f32,
            self.handle.1 + self.state.rect.y as f32,
        )
    }

    /// Moves the handle to `value` (clamped and snapped). Returns false for
    /// labeled sliders.
    pub fn set_value(&mut self, value: f64) -> bool {
        let Some((min, max)) = self.bounds.range() else {
            return false;
        };
        let value = snap_to_step(value.clamp(min, max), min, max, self.options.step);
        self.value = Some(value);
        self.handle.0 = self.value_to_x(value, min, max);
        self.rest_image = self.draw_handle();
        self.image = self.rest_image.clone();
        true
    }

    fn value_to_x(&self, value: f64, min: f64, max: f64) -> f32 {
        let x = self.track.x as f64 + (value - min) * (self.track.width as f64 / (max - min));
        x.clamp(self.track.x as f64, self.track.right() as f64) as f32
    }

    /// Screen-space disk test against the handle.
    fn handle_hit(&self, x: i32, y: i32) -> bool {
        let (cx, cy) = self.handle_center();
        let dx = x as f32 + 0.5 - cx;
        let dy = y as f32 + 0.5 - cy;
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Moves the handle under the pointer. Returns true if the value changed.
    fn drag_to(&mut self, pointer_x: i32) -> bool {
        let local_x = (pointer_x - self.state.rect.x).clamp(self.track.x, self.track.right()) as f32;
        let before = self.value;

        self.handle.0 = match self.bounds.range() {
            Some((min, max)) => {
                let raw = min + (f64::from(local_x) - self.track.x as f64) * ((max - min) / self.track.width as f64);
                let value = snap_to_step(raw.clamp(min, max), min, max, self.options.step);
                self.value = Some(value);
                if (self.options.step - 1.0).abs() < f64::EPSILON {
                    local_x
                } else {
                    self.value_to_x(value, min, max)
                }
            }
            None => local_x,
        };

        self.rest_image = self.draw_handle();
        self.image = match self.value {
            Some(value) if self.options.hover => self.draw_value_tag(value),
            _ => self.rest_image.clone(),
        };
        self.value != before
    }

    fn draw_handle(&self) -> Surface {
        let mut image = self.caption_image.clone();
        image.draw_circle(self.handle, self.radius, self.options.handle_color, 0);
        if let Some(outline) = self.options.handle_outline {
            image.draw_circle(self.handle, self.radius, outline, self.options.handle_outline_width);
        }
        image
    }

    /// Rest image plus a freshly built value tag next to the handle.
    fn draw_value_tag(&self, value: f64) -> Surface {
        let circle = circle_bounds(self.handle, self.radius);
        let (anchor, at) = match self.options.hover_position {
            VerticalSide::Bottom => (Anchor::MidTop, (circle.center().0, circle.bottom() + self.options.gap)),
            VerticalSide::Top => (Anchor::MidBottom, (circle.center().0, circle.y - self.options.gap)),
        };
        let tag = Label::new(
            at,
            format_value(value, self.options.step),
            self.options.hover_color,
            self.options.hover_size,
            LabelOptions {
                orientation: anchor,
                text_background: Some(self.options.hover_background),
                text_background_radius: 2,
                margin: [10, 0],
                ..LabelOptions::default()
            },
        );

        let mut image = self.rest_image.clone();
        let placed = tag.bounds();
        image.blit(tag.image(), (placed.x, placed.y));
        image
    }
}

impl Drawable for Slider {
    fn image(&self) -> &Surface {
        &self.image
    }

    fn bounds(&self) -> Rect {
        self.state.rect
    }
}

impl Widget for Slider {
    fn update(&mut self, events: &EventBatch) -> WidgetResponse {
        let mut response = WidgetResponse::default();

        for event in events {
            match *event {
                Event::PointerDown { x, y, .. } if self.handle_hit(x, y) => {
                    if !self.is_dragging() {
                        tracing::debug!(value = ?self.value, "slider drag started");
                    }
                    self.state.flags.set(WidgetFlags::DRAGGING);
                }
                Event::PointerUp { .. } if self.is_dragging() => {
                    self.state.flags.clear(WidgetFlags::DRAGGING);
                    if self.options.hover {
                        self.image = self.rest_image.clone();
                    }
                    tracing::debug!(value = ?self.value, "slider drag ended");
                }
                Event::PointerMove { x, .. } if self.is_dragging() => {
                    response.changed |= self.drag_to(x);
                }
                _ => {}
            }
        }

        self.state.place(self.image.size());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric_slider(step: f64) -> Slider {
        let options = SliderOptions {
            step,
            ..SliderOptions::default()
        };
        Slider::new((640, 360), (300, 5), 7.5, SliderBounds::numeric(0.0, 100.0).unwrap(), options)
    }

    fn grab(slider: &mut Slider) {
        let (cx, cy) = slider.handle_center();
        slider.update(&EventBatch::new((0, 0), vec![Event::press(cx as i32, cy as i32)]));
    }

    fn move_to_local(slider: &mut Slider, local_x: i32) -> WidgetResponse {
        let track = slider.track();
        let (x, y) = (track.x + local_x, track.y);
        slider.update(&EventBatch::new((0, 0), vec![Event::motion(x, y)]))
    }

    #[test]
    fn test_snap_examples() {
        assert_eq!(snap_to_step(23.0, 0.0, 100.0, 10.0), 20.0);
        assert_eq!(snap_to_step(27.0, 0.0, 100.0, 10.0), 30.0);
        assert_eq!(snap_to_step(25.0, 0.0, 100.0, 10.0), 20.0);
        assert_eq!(snap_to_step(0.0, 0.0, 100.0, 10.0), 0.0);
        assert_eq!(snap_to_step(100.0, 0.0, 100.0, 10.0), 100.0);
    }

    #[test]
    fn test_snap_step_one_passes_through() {
        assert_eq!(snap_to_step(23.4, 0.0, 100.0, 1.0), 23.4);
    }

    #[test]
    fn test_snap_clamps_to_max() {
        assert_eq!(snap_to_step(95.0, 0.0, 100.0, 60.0), 100.0);
    }

    #[test]
    fn test_snap_with_offset_minimum() {
        assert_eq!(snap_to_step(-73.0, -100.0, 100.0, 10.0), -70.0);
        assert_eq!(snap_to_step(-77.0, -100.0, 100.0, 10.0), -80.0);
    }

    #[test]
    fn test_bounds_from_captions() {
        assert_eq!(SliderBounds::from_captions("10", "20").range(), Some((10.0, 20.0)));
        assert!(!SliderBounds::from_captions("ooga booga", "tiny tim").is_numeric());
        assert!(!SliderBounds::from_captions("5", "5").is_numeric());
        assert_eq!(
            SliderBounds::numeric(5.0, 1.0),
            Err(UiError::InvalidScale { min: 5.0, max: 1.0 })
        );
    }

    #[test]
    fn test_bounds_from_config() {
        #[derive(Deserialize)]
        struct Ends {
            a: SliderBounds,
            b: SliderBounds,
            c: SliderBounds,
        }
        let ends: Ends = toml::from_str("a = [-100, 100]\nb = [\"low\", \"high\"]\nc = [\"10\", 20]").unwrap();
        assert_eq!(ends.a.range(), Some((-100.0, 100.0)));
        assert_eq!(ends.b, SliderBounds::labeled("low", "high"));
        assert_eq!(ends.c.range(), Some((10.0, 20.0)));
    }

    #[test]
    fn test_initial_value_is_min() {
        let slider = numeric_slider(1.0);
        assert_eq!(slider.value(), Some(0.0));
        assert_eq!(slider.handle_center().0, slider.track().x as f32);
        assert_eq!(slider.bounds().center(), (640, 360));
    }

    #[test]
    fn test_drag_maps_pointer_to_value() {
        let mut slider = numeric_slider(1.0);
        grab(&mut slider);
        assert!(slider.is_dragging());

        let response = move_to_local(&mut slider, 150);
        assert!(response.changed);
        assert!((slider.value().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_stays_in_range_for_any_pointer() {
        let mut slider = numeric_slider(1.0);
        grab(&mut slider);

        for local_x in (-400..=700).step_by(37) {
            move_to_local(&mut slider, local_x);
            let value = slider.value().unwrap();
            assert!((0.0..=100.0).contains(&value), "{value} at {local_x}");
        }

        move_to_local(&mut slider, -50);
        assert_eq!(slider.value(), Some(0.0));
        move_to_local(&mut slider, 5000);
        assert!((slider.value().unwrap() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_snaps_handle_to_step() {
        let mut slider = numeric_slider(10.0);
        grab(&mut slider);

        // 69 px of 300 is 23.
        move_to_local(&mut slider, 69);
        assert_eq!(slider.value(), Some(20.0));
        let track = slider.track();
        assert!((slider.handle_center().0 - (track.x + 60) as f32).abs() < 1e-3);

        // 81 px is 27.
        move_to_local(&mut slider, 81);
        assert_eq!(slider.value(), Some(30.0));
    }

    #[test]
    fn test_release_ends_drag_and_drops_tag() {
        let mut slider = numeric_slider(1.0);
        grab(&mut slider);
        move_to_local(&mut slider, 120);
        let tagged = slider.image().clone();

        slider.update(&EventBatch::new((0, 0), vec![Event::release(0, 0)]));
        assert!(!slider.is_dragging());
        assert_ne!(slider.image(), &tagged);

        // Motion after release does nothing.
        let response = move_to_local(&mut slider, 10);
        assert!(!response.changed);
        assert!((slider.value().unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_press_off_handle_does_not_grab() {
        let mut slider = numeric_slider(1.0);
        let track = slider.track();
        slider.update(&EventBatch::new((0, 0), vec![Event::press(track.right() - 2, track.y)]));
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_labeled_slider_has_no_value() {
        let mut slider = Slider::new(
            (465, 435),
            (300, 5),
            7.5,
            SliderBounds::labeled("ooga booga", "tiny tim"),
            SliderOptions::default(),
        );
        assert_eq!(slider.value(), None);
        assert!(!slider.set_value(3.0));

        grab(&mut slider);
        assert!(slider.is_dragging());
        let before = slider.handle_center().0;
        move_to_local(&mut slider, 100);
        assert_eq!(slider.value(), None);
        assert!(slider.handle_center().0 > before);
    }

    #[test]
    fn test_set_value_clamps_and_snaps() {
        let mut slider = numeric_slider(5.0);
        assert!(slider.set_value(42.0));
        assert_eq!(slider.value(), Some(40.0));
        assert!(slider.set_value(500.0));
        assert_eq!(slider.value(), Some(100.0));
        assert_eq!(slider.handle_center().0, slider.track().right() as f32);
    }

    #[test]
    fn test_value_tag_precision_follows_step() {
        assert_eq!(format_value(20.0, 10.0), "20");
        assert_eq!(format_value(0.5, 0.25), "0.50");
        assert_eq!(format_value(1.25, 0.5), "1.2");
    }

    #[test]
    fn test_bad_step_disables_snapping() {
        let mut slider = numeric_slider(-3.0);
        grab(&mut slider);
        move_to_local(&mut slider, 69);
        assert!((slider.value().unwrap() - 23.0).abs() < 1e-9);
    }

    const TAG: Color = Color::rgb(1, 2, 3);

    fn tagged_slider(bounds: SliderBounds, hover_position: VerticalSide) -> Slider {
        let options = SliderOptions {
            hover_background: TAG,
            hover_position,
            ..SliderOptions::default()
        };
        Slider::new((640, 360), (300, 5), 7.5, bounds, options)
    }

    /// Image rows holding value tag panel pixels.
    fn tag_rows(image: &Surface) -> Vec<i32> {
        (0..image.height())
            .filter(|&y| (0..image.width()).any(|x| image.get(x, y) == Some(TAG)))
            .collect()
    }

    #[test]
    fn test_value_tag_sits_below_handle() {
        let mut slider = tagged_slider(SliderBounds::numeric(0.0, 100.0).unwrap(), VerticalSide::Bottom);
        assert!(tag_rows(slider.image()).is_empty());

        grab(&mut slider);
        move_to_local(&mut slider, 150);
        let rows = tag_rows(slider.image());
        let (_, handle_y) = slider.handle;
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&y| y as f32 > handle_y + slider.radius), "{rows:?}");

        slider.update(&EventBatch::new((0, 0), vec![Event::release(0, 0)]));
        assert!(tag_rows(slider.image()).is_empty());
        assert_eq!(slider.image(), &slider.rest_image);
    }

    #[test]
    fn test_value_tag_sits_above_handle() {
        let mut slider = tagged_slider(SliderBounds::numeric(0.0, 100.0).unwrap(), VerticalSide::Top);
        grab(&mut slider);
        move_to_local(&mut slider, 150);

        let rows = tag_rows(slider.image());
        let (_, handle_y) = slider.handle;
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|&y| (y as f32) < handle_y - slider.radius), "{rows:?}");
    }

    #[test]
    fn test_top_tag_keeps_destination_centered() {
        let slider = tagged_slider(SliderBounds::numeric(0.0, 100.0).unwrap(), VerticalSide::Top);
        let below = tagged_slider(SliderBounds::numeric(0.0, 100.0).unwrap(), VerticalSide::Bottom);
        assert!(slider.image().height() > below.image().height());
        assert_eq!(slider.bounds().center(), (640, 360));
    }

    #[test]
    fn test_labeled_slider_never_shows_tag() {
        let mut slider = tagged_slider(SliderBounds::labeled("ooga booga", "tiny tim"), VerticalSide::Bottom);
        grab(&mut slider);
        move_to_local(&mut slider, 150);
        move_to_local(&mut slider, 40);

        assert!(slider.is_dragging());
        assert!(tag_rows(slider.image()).is_empty());
        assert_eq!(slider.image(), &slider.rest_image);
    }

    #[test]
    fn test_numeric_captions_keep_source_text() {
        let bounds = SliderBounds::from_captions("010", "1e2");
        assert_eq!(bounds.range(), Some((10.0, 100.0)));
        assert_eq!(bounds.captions(), ("010".to_owned(), "1e2".to_owned()));

        let formatted = SliderBounds::numeric(-100.0, 10.5).unwrap();
        assert_eq!(formatted.captions(), ("-100".to_owned(), "10.5".to_owned()));
    }
}
