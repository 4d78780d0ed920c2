//! Frame driver: owns widgets, feeds them input and composites them.
//!
//! ```text
//! EventQueue::poll ─► Stage::update_all ─► Stage::composite ─► host
//!                       (one update per       (blit in insertion
//!                        widget per frame)     order, back to front)
//! ```

use crate::input::EventBatch;
use crate::style::Color;
use crate::surface::Surface;
use crate::widget::{Drawable, Widget, WidgetId, WidgetResponse};

/// Widgets drawn back to front in insertion order.
pub struct Stage {
    widgets: Vec<(WidgetId, Box<dyn Widget>)>,
    background: Color,
    next_id: u64,
}

impl Stage {
    /// Creates an empty stage that clears to `background`.
    #[must_use]
    pub fn new(background: Color) -> Self {
        Self {
            widgets: Vec::with_capacity(16),
            background,
            next_id: 1,
        }
    }

    /// Adds a widget on top of the existing ones.
    pub fn add(&mut self, widget: impl Widget + 'static) -> WidgetId {
        self.add_boxed(Box::new(widget))
    }

    /// Adds an already boxed widget on top of the existing ones.
    pub fn add_boxed(&mut self, widget: Box<dyn Widget>) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;
        self.widgets.push((id, widget));
        id
    }

    /// Removes a widget. Returns it if it was present.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let index = self.widgets.iter().position(|(wid, _)| *wid == id)?;
        Some(self.widgets.remove(index).1)
    }

    /// Looks up a widget.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets
            .iter()
            .find(|(wid, _)| *wid == id)
            .map(|(_, widget)| widget.as_ref())
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Returns true if the stage has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Clear color.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Runs one update per widget and returns the non-empty responses.
    pub fn update_all(&mut self, events: &EventBatch) -> Vec<(WidgetId, WidgetResponse)> {
        self.widgets
            .iter_mut()
            .filter_map(|(id, widget)| {
                let response = widget.update(events);
                response.any().then_some((*id, response))
            })
            .collect()
    }

    /// Clears `target` and blits every widget onto it.
    pub fn composite(&self, target: &mut Surface) {
        target.fill(self.background);
        for (_, widget) in &self.widgets {
            draw(target, widget.as_ref());
        }
    }

    /// Composites onto a fresh `width` x `height` surface.
    #[must_use]
    pub fn render(&self, width: i32, height: i32) -> Surface {
        let mut frame = Surface::new(width, height);
        self.composite(&mut frame);
        frame
    }
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage")
            .field("widgets", &self.widgets.len())
            .field("background", &self.background)
            .finish()
    }
}

/// Blits any drawable at its bounds.
pub fn draw(target: &mut Surface, drawable: &(impl Drawable + ?Sized)) {
    let bounds = drawable.bounds();
    target.blit(drawable.image(), (bounds.x, bounds.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Event;
    use crate::widget::{Label, LabelOptions, Switch, SwitchOptions};

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut stage = Stage::new(Color::BLACK);
        let a = stage.add(Label::new((10, 10), "a", Color::WHITE, 16, LabelOptions::default()));
        let b = stage.add(Label::new((10, 10), "b", Color::WHITE, 16, LabelOptions::default()));
        assert!(a < b);
        assert_eq!(stage.len(), 2);

        assert!(stage.remove(a).is_some());
        assert!(stage.get(a).is_none());
        assert!(stage.get(b).is_some());
        assert!(stage.remove(a).is_none());
    }

    #[test]
    fn test_update_reports_only_active_widgets() {
        let mut stage = Stage::new(Color::BLACK);
        stage.add(Label::new((10, 10), "static", Color::WHITE, 16, LabelOptions::default()));
        let switch = Switch::new((200, 200), 100, 50, SwitchOptions::default());
        let (x, y) = switch.handle_rect().center();
        let id = stage.add(switch);

        let responses = stage.update_all(&EventBatch::new((x, y), vec![Event::press(x, y)]));
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].0, id);
        assert!(responses[0].1.changed);
    }

    #[test]
    fn test_composite_clears_and_draws() {
        let mut stage = Stage::new(Color::BLACK);
        let options = LabelOptions {
            transparent: false,
            background: Color::BLUE,
            margin: [20, 20],
            ..LabelOptions::default()
        };
        stage.add(Label::new((50, 50), "x", Color::WHITE, 16, options));

        let frame = stage.render(100, 100);
        assert_eq!(frame.get(0, 0), Some(Color::BLACK));
        let bounds = stage.get(WidgetId::new(1)).unwrap().bounds();
        assert_eq!(frame.get(bounds.x, bounds.y), Some(Color::BLUE));
    }
}
