//! Conversions from `winit` window events.

use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::ModifiersState;

use super::event::{InputEvent, InputSnapshot, MouseButton};
use super::tracker::InputTracker;
use crate::gesture::Modifiers;

/// Pixel-equivalent distance of one notched scroll line.
const LINE_DELTA_PIXELS: f32 = 3.0;

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Other(3),
            winit::event::MouseButton::Forward => Self::Other(4),
            winit::event::MouseButton::Other(id) => Self::Other(id),
        }
    }
}

impl From<ModifiersState> for Modifiers {
    fn from(state: ModifiersState) -> Self {
        Self {
            control: state.control_key(),
            shift: state.shift_key(),
            option: state.alt_key(),
            command: state.super_key(),
        }
    }
}

/// Convert a winit scroll delta into the crate's convention.
///
/// winit reports positive Y for scrolling up; the gesture math treats
/// positive Y as "down", matching pointer coordinates.
#[must_use]
pub fn scroll_delta(delta: MouseScrollDelta) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => {
            (-x * LINE_DELTA_PIXELS, -y * LINE_DELTA_PIXELS)
        }
        MouseScrollDelta::PixelDelta(pos) => (-pos.x as f32, -pos.y as f32),
    }
}

/// Translate a window event into an [`InputEvent`], if it is one the
/// tracker cares about.
#[must_use]
pub fn to_input_event(event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            })
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let (dx, dy) = scroll_delta(*delta);
            Some(InputEvent::Scroll { dx, dy })
        }
        WindowEvent::MouseInput { state, button, .. } => {
            Some(InputEvent::MouseButton {
                button: (*button).into(),
                pressed: *state == ElementState::Pressed,
            })
        }
        WindowEvent::ModifiersChanged(modifiers) => {
            Some(InputEvent::ModifiersChanged {
                modifiers: modifiers.state().into(),
            })
        }
        _ => None,
    }
}

impl InputTracker {
    /// Feed a winit window event; see [`InputTracker::handle_event`].
    pub fn handle_window_event(
        &mut self,
        event: &WindowEvent,
    ) -> Option<InputSnapshot> {
        if let WindowEvent::Focused(false) = event {
            self.reset();
            return None;
        }
        to_input_event(event).and_then(|e| self.handle_event(e))
    }
}
