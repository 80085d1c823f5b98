use std::fmt;

use serde::{Deserialize, Serialize};

use super::modifiers::Modifiers;

/// Which kind of motion triggered an event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Continuous pointer (cursor) motion.
    Pointer,
    /// Scroll-wheel or two-finger trackpad scroll.
    #[default]
    Scroll,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Pointer => Self::Scroll,
            Self::Scroll => Self::Pointer,
        }
    }
}

/// Mouse-button state that a gesture requires.
///
/// `LeftAndRight` is the chord of both primary buttons held together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ButtonChord {
    /// No button held.
    #[default]
    None,
    /// Left button.
    Left,
    /// Right button.
    Right,
    /// Middle button.
    Middle,
    /// Left and right buttons together.
    LeftAndRight,
}

impl ButtonChord {
    /// All chords in menu order.
    pub const ALL: [Self; 5] = [
        Self::None,
        Self::Left,
        Self::Right,
        Self::Middle,
        Self::LeftAndRight,
    ];

    /// Short label, `None` for [`ButtonChord::None`].
    #[must_use]
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Left => Some("Left Button"),
            Self::Right => Some("Right Button"),
            Self::Middle => Some("Middle Button"),
            Self::LeftAndRight => Some("Left + Right Buttons"),
        }
    }
}

/// The modifiers, button and axis that make up one gesture.
///
/// A live event classifies to a `Gesture`; a [`Binding`] stores the
/// `Gesture` that triggers its camera action.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Gesture {
    /// Held modifier keys.
    pub modifiers: Modifiers,
    /// Held mouse buttons.
    pub button: ButtonChord,
    /// Motion axis.
    pub axis: Axis,
}

impl Gesture {
    /// Plain scroll with nothing held.
    pub const SCROLL: Self = Self {
        modifiers: Modifiers::NONE,
        button: ButtonChord::None,
        axis: Axis::Scroll,
    };

    /// Gesture on `axis` with nothing held.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Self::SCROLL
        }
    }

    /// Builder: require these modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Builder: require this button chord.
    #[must_use]
    pub fn with_button(mut self, button: ButtonChord) -> Self {
        self.button = button;
        self
    }

    /// Bare gestures (nothing held) only make sense on the scroll axis; a bare
    /// cursor gesture would capture every hover movement.
    #[must_use]
    pub fn forces_scroll(&self) -> bool {
        self.modifiers.is_empty() && self.button == ButtonChord::None
    }

    /// Apply the forced-scroll rule.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.forces_scroll() {
            self.axis = Axis::Scroll;
        }
        self
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.modifiers.is_empty() {
            write!(f, "{} + ", self.modifiers)?;
        }
        f.write_str(match self.axis {
            Axis::Pointer => "Cursor",
            Axis::Scroll => "Scroll",
        })?;
        if let Some(label) = self.button.label() {
            write!(f, " + {label}")?;
        }
        Ok(())
    }
}

/// Per-axis sign flips applied to the input delta.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(default)]
pub struct Inversion {
    /// Negate horizontal motion.
    pub x: bool,
    /// Negate vertical motion.
    pub y: bool,
}

impl Inversion {
    /// No inversion.
    pub const NONE: Self = Self { x: false, y: false };

    /// Multiplier for the X component: `-1.0` when inverted, else `1.0`.
    #[must_use]
    pub fn sign_x(self) -> f32 {
        if self.x {
            -1.0
        } else {
            1.0
        }
    }

    /// Multiplier for the Y component: `-1.0` when inverted, else `1.0`.
    #[must_use]
    pub fn sign_y(self) -> f32 {
        if self.y {
            -1.0
        } else {
            1.0
        }
    }
}

/// A user-configurable gesture → camera action mapping.
///
/// `trigger == None` is the inert binding: it never matches. Corrupted
/// persisted codes load as inert bindings.
///
/// In TOML an inert binding is written as `unbound = true`, so a preset can
/// leave out `trigger` and keep the default gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "BindingPatch", from = "BindingPatch")]
pub struct Binding {
    /// Gesture that fires the action.
    pub trigger: Option<Gesture>,
    /// Axis inversion applied to the delta when the binding fires.
    pub invert: Inversion,
}

/// Serialized form of a [`Binding`], where every field is optional.
///
/// Applied over a base binding, so fields a preset leaves out keep the
/// base's values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct BindingPatch {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    unbound: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger: Option<Gesture>,
    invert: InversionPatch,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
struct InversionPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    x: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    y: Option<bool>,
}

impl BindingPatch {
    /// Overlay the fields this patch sets onto `base`.
    pub(crate) fn apply_to(self, base: Binding) -> Binding {
        let trigger = if self.unbound {
            None
        } else {
            self.trigger.or(base.trigger)
        };
        Binding {
            trigger,
            invert: Inversion {
                x: self.invert.x.unwrap_or(base.invert.x),
                y: self.invert.y.unwrap_or(base.invert.y),
            },
        }
    }
}

impl From<Binding> for BindingPatch {
    fn from(binding: Binding) -> Self {
        Self {
            unbound: binding.is_inert(),
            trigger: binding.trigger,
            invert: InversionPatch {
                x: Some(binding.invert.x),
                y: Some(binding.invert.y),
            },
        }
    }
}

impl From<BindingPatch> for Binding {
    fn from(patch: BindingPatch) -> Self {
        patch.apply_to(Self::INERT)
    }
}

impl Binding {
    /// A binding that never matches.
    pub const INERT: Self = Self {
        trigger: None,
        invert: Inversion::NONE,
    };

    /// Binding fired by `gesture`, without inversion.
    #[must_use]
    pub fn new(gesture: Gesture) -> Self {
        Self {
            trigger: Some(gesture),
            invert: Inversion::NONE,
        }
    }

    /// Builder: set the inversion flags.
    #[must_use]
    pub fn inverted(mut self, x: bool, y: bool) -> Self {
        self.invert = Inversion { x, y };
        self
    }

    /// Whether the binding never fires.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.trigger.is_none()
    }

    /// Whether the live gesture fires this binding. Inversion is ignored.
    #[must_use]
    pub fn matches(&self, live: &Gesture) -> bool {
        self.trigger.as_ref() == Some(live)
    }
}

/// The three camera transforms a binding can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraAction {
    /// Orbit the camera.
    Rotate,
    /// Translate the pivot in the view plane.
    Pan,
    /// Scale the orbit size.
    Zoom,
}

impl CameraAction {
    /// All actions in dispatch priority order.
    pub const ALL: [Self; 3] = [Self::Rotate, Self::Pan, Self::Zoom];

    /// Zoom is one-dimensional, so only rotate and pan honour X inversion.
    #[must_use]
    pub fn uses_invert_x(self) -> bool {
        !matches!(self, Self::Zoom)
    }

    /// Display name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rotate => "Rotate",
            Self::Pan => "Pan",
            Self::Zoom => "Zoom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::Modifier;

    #[test]
    fn matches_ignores_inversion() {
        let gesture = Gesture::new(Axis::Scroll)
            .with_modifiers(Modifiers::only(Modifier::Shift));
        let binding = Binding::new(gesture).inverted(true, true);
        assert!(binding.matches(&gesture));
    }

    #[test]
    fn matches_requires_every_field() {
        let gesture = Gesture::new(Axis::Pointer)
            .with_modifiers(Modifiers::only(Modifier::Control))
            .with_button(ButtonChord::Left);
        let binding = Binding::new(gesture);

        let other_axis = Gesture {
            axis: Axis::Scroll,
            ..gesture
        };
        let other_button = gesture.with_button(ButtonChord::Right);
        let extra_modifier = gesture
            .with_modifiers(gesture.modifiers.with(Modifier::Shift));

        assert!(!binding.matches(&other_axis));
        assert!(!binding.matches(&other_button));
        assert!(!binding.matches(&extra_modifier));
    }

    #[test]
    fn patch_overlays_only_the_fields_it_sets() {
        let base = Binding::new(Gesture::SCROLL).inverted(true, true);
        let patch = BindingPatch {
            invert: InversionPatch {
                x: None,
                y: Some(false),
            },
            ..BindingPatch::default()
        };
        assert_eq!(
            patch.apply_to(base),
            Binding::new(Gesture::SCROLL).inverted(true, false)
        );

        let unbound = BindingPatch {
            unbound: true,
            ..BindingPatch::default()
        };
        assert!(unbound.apply_to(base).is_inert());
    }

    #[test]
    fn inert_binding_never_matches() {
        for gesture in [Gesture::SCROLL, Gesture::new(Axis::Pointer)] {
            assert!(!Binding::INERT.matches(&gesture));
        }
    }

    #[test]
    fn bare_cursor_gesture_normalizes_to_scroll() {
        assert_eq!(Gesture::new(Axis::Pointer).normalized().axis, Axis::Scroll);
        let held = Gesture::new(Axis::Pointer).with_button(ButtonChord::Left);
        assert_eq!(held.normalized().axis, Axis::Pointer);
    }

    #[test]
    fn display_reads_modifiers_axis_button() {
        let gesture = Gesture::new(Axis::Pointer)
            .with_modifiers(Modifiers::only(Modifier::Shift))
            .with_button(ButtonChord::LeftAndRight);
        assert_eq!(
            gesture.to_string(),
            "Shift + Cursor + Left + Right Buttons"
        );
        assert_eq!(Gesture::SCROLL.to_string(), "Scroll");
    }
}
