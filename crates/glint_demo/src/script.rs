//! Scripted input timeline read from the scene file's `[[script]]` entries.

use anyhow::{bail, Result};
use glint_ui::{Event, Key};
use serde::Deserialize;

/// The part of a scene file the demo reads on top of `UiConfig`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    /// Steps in any order; sorted by frame on load.
    pub script: Vec<Step>,
}

/// Input delivered before a given frame is polled.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Frame index, starting at 0.
    pub frame: u64,
    /// What happens.
    #[serde(flatten)]
    pub input: Input,
}

/// One scripted input.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum Input {
    /// Left button down.
    Press { at: (i32, i32) },
    /// Left button up.
    Release { at: (i32, i32) },
    /// Pointer motion.
    Move { at: (i32, i32) },
    /// Printable text, one key event per character.
    Type { text: String },
    /// A named editing key.
    Key { key: String },
}

impl Script {
    /// Parses the `[[script]]` entries of a scene and sorts them by frame.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let mut script: Self = toml::from_str(text)?;
        script.script.sort_by_key(|step| step.frame);
        Ok(script)
    }

    /// Events due on `frame`, in file order.
    pub fn events_for(&self, frame: u64) -> Result<Vec<Event>> {
        let mut events = Vec::new();
        for step in self.script.iter().filter(|step| step.frame == frame) {
            step.input.push_events(&mut events)?;
        }
        Ok(events)
    }

    /// Last frame with scripted input.
    pub fn last_frame(&self) -> Option<u64> {
        self.script.last().map(|step| step.frame)
    }
}

impl Input {
    fn push_events(&self, events: &mut Vec<Event>) -> Result<()> {
        match self {
            Self::Press { at } => events.push(Event::press(at.0, at.1)),
            Self::Release { at } => events.push(Event::release(at.0, at.1)),
            Self::Move { at } => events.push(Event::motion(at.0, at.1)),
            Self::Type { text } => events.extend(text.chars().map(Event::char)),
            Self::Key { key } => events.push(Event::key(parse_key(key)?)),
        }
        Ok(())
    }
}

fn parse_key(name: &str) -> Result<Key> {
    let key = match name.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Key::Escape,
        "enter" | "return" => Key::Enter,
        "tab" => Key::Tab,
        "backspace" => Key::Backspace,
        "delete" => Key::Delete,
        "up" => Key::Up,
        "down" => Key::Down,
        "left" => Key::Left,
        "right" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        other => bail!("unknown key name in script: {other}"),
    };
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_sorted_and_expanded() {
        let script = Script::from_toml_str(
            r#"
[[script]]
frame = 5
input = "type"
text = "hi"

[[script]]
frame = 2
input = "press"
at = [10, 20]

[[script]]
frame = 5
input = "key"
key = "Backspace"
"#,
        )
        .unwrap();

        assert_eq!(script.last_frame(), Some(5));
        assert_eq!(script.events_for(2).unwrap(), vec![Event::press(10, 20)]);
        assert_eq!(
            script.events_for(5).unwrap(),
            vec![Event::char('h'), Event::char('i'), Event::key(Key::Backspace)]
        );
        assert!(script.events_for(3).unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_fails() {
        let script = Script::from_toml_str("[[script]]\nframe = 0\ninput = \"key\"\nkey = \"hyper\"").unwrap();
        assert!(script.events_for(0).is_err());
    }

    #[test]
    fn test_scene_without_script() {
        let script = Script::from_toml_str("[display]\nwidth = 10").unwrap();
        assert_eq!(script.last_frame(), None);
    }
}
