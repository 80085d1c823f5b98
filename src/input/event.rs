use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::gesture::Modifiers;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputTracker`](super::InputTracker), which folds
/// button and modifier changes into its state and turns motion events into
/// [`InputSnapshot`]s for the camera operator.
///
/// Serialized with an internal `type` tag so replay traces stay readable:
/// ```json
/// { "type": "scroll", "dx": 0.0, "dy": 3.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels (down is positive).
        y: f32,
    },
    /// Relative pointer motion, for hosts that report deltas directly.
    PointerDelta {
        /// Horizontal motion.
        dx: f32,
        /// Vertical motion (down is positive).
        dy: f32,
    },
    /// Scroll wheel or two-finger trackpad scroll.
    Scroll {
        /// Horizontal scroll.
        dx: f32,
        /// Vertical scroll (down is positive).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Full set of modifiers now held.
        modifiers: Modifiers,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
    /// Any further button (back, forward, vendor buttons).
    Other(u16),
}

/// What kind of event a snapshot describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Pointer motion.
    PointerMove,
    /// Scroll motion.
    Scroll,
    /// Anything else (clicks, key presses); never drives the camera.
    Other,
}

/// Mouse buttons currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldButtons {
    left: bool,
    right: bool,
    middle: bool,
    /// Bitset of held `Other` button ids. Ids past the last bit share it.
    other: [u64; 4],
}

impl HeldButtons {
    /// Nothing held.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        middle: false,
        other: [0; 4],
    };

    const OTHER_BITS: u16 = 256;

    fn other_bit(id: u16) -> (usize, u64) {
        let index = id.min(Self::OTHER_BITS - 1);
        (usize::from(index / 64), 1 << (index % 64))
    }

    /// Held set built from a list of buttons.
    #[must_use]
    pub fn from_buttons(buttons: &[MouseButton]) -> Self {
        let mut held = Self::NONE;
        for button in buttons {
            held.press(*button);
        }
        held
    }

    /// Record a press.
    pub fn press(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.left = true,
            MouseButton::Right => self.right = true,
            MouseButton::Middle => self.middle = true,
            MouseButton::Other(id) => {
                let (word, bit) = Self::other_bit(id);
                self.other[word] |= bit;
            }
        }
    }

    /// Record a release.
    pub fn release(&mut self, button: MouseButton) {
        match button {
            MouseButton::Left => self.left = false,
            MouseButton::Right => self.right = false,
            MouseButton::Middle => self.middle = false,
            MouseButton::Other(id) => {
                let (word, bit) = Self::other_bit(id);
                self.other[word] &= !bit;
            }
        }
    }

    /// Whether the left button is held.
    #[must_use]
    pub fn left(self) -> bool {
        self.left
    }

    /// Whether the right button is held.
    #[must_use]
    pub fn right(self) -> bool {
        self.right
    }

    /// Whether the middle button is held.
    #[must_use]
    pub fn middle(self) -> bool {
        self.middle
    }

    /// Number of distinct held buttons outside left/right/middle.
    #[must_use]
    pub fn other(self) -> u32 {
        self.other.iter().map(|word| word.count_ones()).sum()
    }

    /// Total number of held buttons.
    #[must_use]
    pub fn count(self) -> u32 {
        u32::from(self.left)
            + u32::from(self.right)
            + u32::from(self.middle)
            + self.other()
    }
}

/// Everything the camera operator needs to know about one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSnapshot {
    /// Event kind.
    pub kind: EventKind,
    /// Raw 2D motion delta in host units.
    pub delta: Vec2,
    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
    /// Mouse buttons held during the event.
    pub buttons: HeldButtons,
}

impl InputSnapshot {
    /// Scroll snapshot with nothing held.
    #[must_use]
    pub fn scroll(delta: Vec2) -> Self {
        Self {
            kind: EventKind::Scroll,
            delta,
            modifiers: Modifiers::NONE,
            buttons: HeldButtons::NONE,
        }
    }

    /// Pointer-move snapshot with nothing held.
    #[must_use]
    pub fn pointer(delta: Vec2) -> Self {
        Self {
            kind: EventKind::PointerMove,
            ..Self::scroll(delta)
        }
    }

    /// Builder: set held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Builder: set held buttons.
    #[must_use]
    pub fn with_buttons(mut self, buttons: HeldButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Scroll and pointer-move events belong to the camera once this layer
    /// is active; the host must not handle them natively.
    #[must_use]
    pub fn is_camera_motion(&self) -> bool {
        matches!(self.kind, EventKind::PointerMove | EventKind::Scroll)
    }
}
