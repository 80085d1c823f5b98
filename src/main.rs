//! Replays a recorded input trace against a settings store and logs the
//! resulting camera pose.
//!
//! ```text
//! orbitpad <trace.json> [settings.toml]
//! ```
//!
//! Without a settings file the defaults are used. With one, settings load
//! from it and, if the trace opens the panel, are written back.

use std::path::{Path, PathBuf};

use orbitpad::input::InputEvent;
use orbitpad::settings::{KeyValueStore, MemoryStore, TomlFileStore};
use orbitpad::{OrbitpadError, Session, Viewport};
use serde::Deserialize;

/// A recorded input session.
#[derive(Debug, Deserialize)]
struct Trace {
    /// Starting viewport.
    #[serde(default)]
    viewport: Viewport,
    /// Keep the settings panel open, saving after every event.
    #[serde(default)]
    panel_open: bool,
    /// Events in arrival order.
    events: Vec<InputEvent>,
}

impl Trace {
    fn load(path: &Path) -> Result<Self, OrbitpadError> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| OrbitpadError::TraceParse(e.to_string()))
    }
}

fn replay<S: KeyValueStore>(
    mut session: Session<S>,
    trace: Trace,
) -> Result<Viewport, OrbitpadError> {
    let mut viewport = trace.viewport;
    session.panel_mut().set_open(trace.panel_open);

    let total = trace.events.len();
    let consumed = trace
        .events
        .into_iter()
        .filter(|event| session.handle_event(*event, &mut viewport))
        .count();
    log::info!("replayed {total} events, {consumed} consumed by the camera");

    if trace.panel_open {
        session.save()?;
    }
    Ok(viewport)
}

fn run(
    trace_path: &Path,
    settings_path: Option<PathBuf>,
) -> Result<(), OrbitpadError> {
    let trace = Trace::load(trace_path)?;
    let viewport = match settings_path {
        Some(path) => {
            log::info!("using settings store {}", path.display());
            replay(Session::new(TomlFileStore::open(&path)?), trace)?
        }
        None => replay(Session::new(MemoryStore::new()), trace)?,
    };

    let pose = viewport.pose;
    log::info!(
        "final pose: pivot {} rotation {} size {}",
        pose.pivot,
        pose.rotation,
        pose.size
    );
    log::info!("final eye position {}", pose.eye());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let Some(trace_path) = args.next() else {
        log::error!("Usage: orbitpad <trace.json> [settings.toml]");
        std::process::exit(1);
    };
    let settings_path = args.next().map(PathBuf::from);

    if let Err(e) = run(Path::new(&trace_path), settings_path) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
