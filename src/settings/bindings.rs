use serde::{Deserialize, Serialize};

use crate::gesture::{
    Axis, Binding, BindingPatch, CameraAction, Gesture, Modifier, Modifiers,
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "BindingOptionsPatch")]
/// The gesture bound to each camera action.
///
/// Defaults suit a trackpad: two-finger scroll orbits, Shift + scroll pans,
/// Command + scroll zooms. A preset that sets only part of a binding keeps
/// that binding's defaults for the rest.
pub struct BindingOptions {
    /// Orbit binding.
    pub rotate: Binding,
    /// Pan binding.
    pub pan: Binding,
    /// Zoom binding.
    pub zoom: Binding,
}

impl Default for BindingOptions {
    fn default() -> Self {
        Self {
            rotate: Binding::new(Gesture::new(Axis::Scroll))
                .inverted(true, true),
            pan: Binding::new(
                Gesture::new(Axis::Scroll)
                    .with_modifiers(Modifiers::only(Modifier::Shift)),
            )
            .inverted(false, true),
            zoom: Binding::new(
                Gesture::new(Axis::Scroll)
                    .with_modifiers(Modifiers::only(Modifier::Command)),
            ),
        }
    }
}

/// Deserialized form of [`BindingOptions`], overlaid on the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BindingOptionsPatch {
    rotate: BindingPatch,
    pan: BindingPatch,
    zoom: BindingPatch,
}

impl From<BindingOptionsPatch> for BindingOptions {
    fn from(patch: BindingOptionsPatch) -> Self {
        let defaults = Self::default();
        Self {
            rotate: patch.rotate.apply_to(defaults.rotate),
            pan: patch.pan.apply_to(defaults.pan),
            zoom: patch.zoom.apply_to(defaults.zoom),
        }
    }
}

impl BindingOptions {
    /// Binding for `action`.
    #[must_use]
    pub fn get(&self, action: CameraAction) -> &Binding {
        match action {
            CameraAction::Rotate => &self.rotate,
            CameraAction::Pan => &self.pan,
            CameraAction::Zoom => &self.zoom,
        }
    }

    /// Mutable binding for `action`.
    pub fn get_mut(&mut self, action: CameraAction) -> &mut Binding {
        match action {
            CameraAction::Rotate => &mut self.rotate,
            CameraAction::Pan => &mut self.pan,
            CameraAction::Zoom => &mut self.zoom,
        }
    }
}
