//! Input handling: event types, held-state tracking, and per-event
//! snapshots consumed by the camera operator.

/// Platform-agnostic input events and snapshots.
pub mod event;
/// `winit` window-event conversions.
#[cfg(feature = "winit")]
pub mod platform;
/// Folds raw events into snapshots.
pub mod tracker;

pub use event::{EventKind, HeldButtons, InputEvent, InputSnapshot, MouseButton};
pub use tracker::InputTracker;
