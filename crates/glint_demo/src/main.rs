//! # GLINT Demo
//!
//! Headless host loop:
//! ```text
//! scene.toml ─► UiConfig ─► Stage
//!           └─► Script ─► EventSender ─► EventQueue::poll ─► update_all
//!                                                          └─► composite ─► PNG
//! ```

mod script;

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_ui::{
    render, ActionMap, EventQueue, HorizontalRectangleSwipeTransition, Stage, Surface, UiConfig,
};
use tracing_subscriber::EnvFilter;

use crate::script::Script;

const DEFAULT_SCENE: &str = include_str!("../scenes/demo.toml");

/// Replays a scene headlessly and writes the final frame.
#[derive(Debug, Parser)]
#[command(name = "glint_demo", version, about)]
struct Args {
    /// Scene file; the built-in demo scene if omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Frames to run. Defaults to one second past the last scripted input.
    #[arg(short, long)]
    frames: Option<u64>,

    /// Where to write the last frame as PNG.
    #[arg(short, long, default_value = "glint_frame.png")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let text = match &args.config {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading scene {}", path.display()))?,
        None => DEFAULT_SCENE.to_owned(),
    };
    let config = UiConfig::from_toml_str(&text).context("parsing scene")?;
    let script = Script::from_toml_str(&text).context("parsing script")?;

    let clicks = Rc::new(Cell::new(0u32));
    let actions = demo_actions(&clicks);

    let mut stage = Stage::new(config.theme.background);
    for widget in config.build_widgets(&actions)? {
        stage.add_boxed(widget);
    }
    tracing::info!(widgets = stage.len(), "scene built");

    let fps = u64::from(config.display.fps.max(1));
    let frames = args
        .frames
        .unwrap_or_else(|| script.last_frame().map_or(fps, |last| last + fps));
    let dt = 1.0 / fps as f32;

    let mut transition = config
        .transition
        .map(|options| HorizontalRectangleSwipeTransition::new(config.display.width, config.display.height, options));

    let mut queue = EventQueue::new();
    let sender = queue.sender();
    let mut frame = Surface::new(config.display.width, config.display.height);
    let started = Instant::now();

    for index in 0..frames {
        for event in script.events_for(index)? {
            sender.send(event);
        }

        let batch = queue.poll();
        if batch.quit_requested() {
            tracing::info!(frame = index, "quit requested");
            break;
        }

        for (id, response) in stage.update_all(&batch) {
            tracing::debug!(frame = index, widget = id.raw(), ?response, "widget responded");
        }
        stage.composite(&mut frame);

        if let Some(wipe) = transition.as_mut().filter(|wipe| wipe.is_transitioning()) {
            wipe.update(dt);
            render::draw(&mut frame, wipe);
        }
    }

    tracing::info!(
        frames,
        clicks = clicks.get(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "replay finished"
    );

    save_png(&frame, &args.output)?;
    tracing::info!(path = %args.output.display(), "frame written");
    Ok(())
}

fn demo_actions(clicks: &Rc<Cell<u32>>) -> ActionMap {
    let mut actions = ActionMap::new();

    let counter = Rc::clone(clicks);
    actions.insert(
        "greet".to_owned(),
        Rc::new(move || {
            counter.set(counter.get() + 1);
            tracing::info!(count = counter.get(), "hi there");
        }),
    );
    actions
}

fn save_png(frame: &Surface, path: &Path) -> Result<()> {
    let (width, height) = frame.size();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, frame.as_bytes().to_vec())
        .context("frame buffer does not match its size")?;
    buffer
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}
