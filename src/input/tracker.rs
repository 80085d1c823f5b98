//! Folds the raw event stream into per-event snapshots.
//!
//! The `InputTracker` owns all transient input state (held modifiers, held
//! buttons, last cursor position). It sits between raw window events and the
//! [`CameraOperator`](crate::camera::CameraOperator).

use glam::Vec2;

use super::event::{EventKind, HeldButtons, InputEvent, InputSnapshot};
use crate::gesture::Modifiers;

/// Tracks modifier/button state and produces [`InputSnapshot`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(snapshot) = tracker.handle_event(event) {
///     let consumed = operator.on_input_event(&snapshot, &mut viewport);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct InputTracker {
    /// Modifiers held as of the last `ModifiersChanged`.
    modifiers: Modifiers,
    /// Buttons held as of the last press/release.
    buttons: HeldButtons,
    /// Last absolute cursor position, for turning positions into deltas.
    last_cursor: Option<Vec2>,
}

impl InputTracker {
    /// Create a tracker with nothing held.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently held modifiers.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Currently held buttons.
    #[must_use]
    pub fn buttons(&self) -> HeldButtons {
        self.buttons
    }

    /// Forget all held state, e.g. when the viewport loses focus and
    /// release events may never arrive.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Process a raw event. Returns a snapshot for pointer and scroll
    /// motion; state-only events return `None`.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<InputSnapshot> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                let pos = Vec2::new(x, y);
                let delta =
                    self.last_cursor.map_or(Vec2::ZERO, |last| pos - last);
                self.last_cursor = Some(pos);
                Some(self.snapshot(EventKind::PointerMove, delta))
            }
            InputEvent::PointerDelta { dx, dy } => {
                Some(self.snapshot(EventKind::PointerMove, Vec2::new(dx, dy)))
            }
            InputEvent::Scroll { dx, dy } => {
                Some(self.snapshot(EventKind::Scroll, Vec2::new(dx, dy)))
            }
            InputEvent::MouseButton { button, pressed } => {
                if pressed {
                    self.buttons.press(button);
                } else {
                    self.buttons.release(button);
                }
                None
            }
            InputEvent::ModifiersChanged { modifiers } => {
                self.modifiers = modifiers;
                None
            }
        }
    }

    fn snapshot(&self, kind: EventKind, delta: Vec2) -> InputSnapshot {
        InputSnapshot {
            kind,
            delta,
            modifiers: self.modifiers,
            buttons: self.buttons,
        }
    }
}
