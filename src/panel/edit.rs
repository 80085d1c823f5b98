use serde::{Deserialize, Serialize};

use crate::gesture::{
    Binding, ButtonChord, CameraAction, Gesture, Inversion, Modifier,
};
use crate::settings::{Settings, ZoomOptions};

/// One edit issued by the settings panel.
///
/// Serialized with an `edit` tag so a host UI can send edits as JSON, e.g.
/// `{"edit": "toggle_modifier", "action": "pan", "modifier": "shift"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "edit", rename_all = "snake_case")]
pub enum PanelEdit {
    /// Toggle one modifier of an action's binding.
    ToggleModifier {
        /// Binding being edited.
        action: CameraAction,
        /// Modifier to flip.
        modifier: Modifier,
    },
    /// Choose the mouse button chord of an action's binding.
    SetButton {
        /// Binding being edited.
        action: CameraAction,
        /// New chord.
        button: ButtonChord,
    },
    /// Switch an action's binding between scroll and cursor motion.
    ToggleAxis {
        /// Binding being edited.
        action: CameraAction,
    },
    /// Flip horizontal inversion. Ignored for zoom.
    ToggleInvertX {
        /// Binding being edited.
        action: CameraAction,
    },
    /// Flip vertical inversion.
    ToggleInvertY {
        /// Binding being edited.
        action: CameraAction,
    },
    /// Set the global cursor speed.
    SetGlobalCursorSpeed {
        /// New value.
        value: f32,
    },
    /// Set the pointer delta multiplier.
    SetPointerMultiplier {
        /// New value.
        value: f32,
    },
    /// Set degrees of rotation per delta unit.
    SetRotateSpeed {
        /// New value.
        value: f32,
    },
    /// Set pan speed.
    SetPanSpeed {
        /// New value.
        value: f32,
    },
    /// Set the per-event zoom ratio; clamped to [`ZoomOptions::RATIO_RANGE`].
    SetZoomRatio {
        /// New value.
        value: f32,
    },
    /// Set the smallest zoom size.
    SetZoomMin {
        /// New value.
        value: f32,
    },
    /// Set the largest zoom size.
    SetZoomMax {
        /// New value.
        value: f32,
    },
}

impl PanelEdit {
    /// Whether the panel should offer this edit for `binding`.
    ///
    /// Axis toggling is unavailable while the forced-scroll rule pins the
    /// binding to scroll, and zoom has no X inversion.
    #[must_use]
    pub fn is_enabled(&self, binding: &Binding) -> bool {
        match *self {
            Self::ToggleAxis { .. } => binding
                .trigger
                .is_some_and(|gesture| !gesture.forces_scroll()),
            Self::ToggleInvertX { action } => action.uses_invert_x(),
            _ => true,
        }
    }
}

/// Gesture the editor starts from; an inert binding edits as bare scroll.
fn editable(binding: &Binding) -> Gesture {
    binding.trigger.unwrap_or(Gesture::SCROLL)
}

impl Settings {
    /// Apply a panel edit. Returns `true` if anything changed.
    ///
    /// Gesture edits re-apply the forced-scroll rule, so clearing the last
    /// modifier and button of a cursor binding moves it back to scroll.
    pub fn apply_edit(&mut self, edit: PanelEdit) -> bool {
        let before = self.clone();
        match edit {
            PanelEdit::ToggleModifier { action, modifier } => {
                self.edit_gesture(action, |gesture| {
                    gesture.modifiers.toggle(modifier);
                });
            }
            PanelEdit::SetButton { action, button } => {
                self.edit_gesture(action, |gesture| gesture.button = button);
            }
            PanelEdit::ToggleAxis { action } => {
                if edit.is_enabled(self.bindings.get(action)) {
                    self.edit_gesture(action, |gesture| {
                        gesture.axis = gesture.axis.toggled();
                    });
                }
            }
            PanelEdit::ToggleInvertX { action } => {
                if action.uses_invert_x() {
                    self.edit_invert(action, |invert| invert.x = !invert.x);
                }
            }
            PanelEdit::ToggleInvertY { action } => {
                self.edit_invert(action, |invert| invert.y = !invert.y);
            }
            PanelEdit::SetGlobalCursorSpeed { value } => {
                self.speed.global_cursor_speed = value;
            }
            PanelEdit::SetPointerMultiplier { value } => {
                self.speed.pointer_multiplier = value;
            }
            PanelEdit::SetRotateSpeed { value } => {
                self.speed.rotate_speed = value;
            }
            PanelEdit::SetPanSpeed { value } => self.speed.pan_speed = value,
            PanelEdit::SetZoomRatio { value } => {
                let (lo, hi) = ZoomOptions::RATIO_RANGE;
                self.zoom.ratio = value.max(lo).min(hi);
            }
            PanelEdit::SetZoomMin { value } => self.zoom.min = value,
            PanelEdit::SetZoomMax { value } => self.zoom.max = value,
        }
        let changed = *self != before;
        if changed {
            log::debug!("panel edit applied: {edit:?}");
        }
        changed
    }

    fn edit_gesture(
        &mut self,
        action: CameraAction,
        edit: impl FnOnce(&mut Gesture),
    ) {
        let binding = self.bindings.get_mut(action);
        let mut gesture = editable(binding);
        edit(&mut gesture);
        binding.trigger = Some(gesture.normalized());
    }

    /// Inversion edits bind an inert binding to bare scroll first, so the
    /// edit is something a save can persist.
    fn edit_invert(
        &mut self,
        action: CameraAction,
        edit: impl FnOnce(&mut Inversion),
    ) {
        let binding = self.bindings.get_mut(action);
        binding.trigger = Some(editable(binding));
        edit(&mut binding.invert);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{Axis, Modifiers};
    use crate::settings::{KeyValueStore, MemoryStore, PersistKeys};

    #[test]
    fn toggling_modifier_edits_only_that_binding() {
        let mut settings = Settings::default();
        let changed = settings.apply_edit(PanelEdit::ToggleModifier {
            action: CameraAction::Zoom,
            modifier: Modifier::Control,
        });
        assert!(changed);
        let zoom = settings.bindings.zoom.trigger.unwrap();
        assert_eq!(
            zoom.modifiers,
            Modifiers::only(Modifier::Command).with(Modifier::Control)
        );
        assert_eq!(settings.bindings.pan, Settings::default().bindings.pan);
    }

    #[test]
    fn clearing_modifiers_forces_scroll() {
        let mut settings = Settings::default();
        settings.bindings.pan = Binding::new(
            Gesture::new(Axis::Pointer)
                .with_modifiers(Modifiers::only(Modifier::Shift)),
        );
        let _ = settings.apply_edit(PanelEdit::ToggleModifier {
            action: CameraAction::Pan,
            modifier: Modifier::Shift,
        });
        assert_eq!(settings.bindings.pan.trigger, Some(Gesture::SCROLL));
    }

    #[test]
    fn axis_toggle_disabled_for_bare_gesture() {
        let mut settings = Settings::default();
        let edit = PanelEdit::ToggleAxis {
            action: CameraAction::Rotate,
        };
        assert!(!edit.is_enabled(&settings.bindings.rotate));
        assert!(!settings.apply_edit(edit));
        assert_eq!(
            settings.bindings.rotate.trigger.map(|g| g.axis),
            Some(Axis::Scroll)
        );

        let _ = settings.apply_edit(PanelEdit::SetButton {
            action: CameraAction::Rotate,
            button: ButtonChord::Middle,
        });
        assert!(edit.is_enabled(&settings.bindings.rotate));
        assert!(settings.apply_edit(edit));
        assert_eq!(
            settings.bindings.rotate.trigger.map(|g| g.axis),
            Some(Axis::Pointer)
        );
    }

    #[test]
    fn zoom_ignores_invert_x() {
        let mut settings = Settings::default();
        let edit = PanelEdit::ToggleInvertX {
            action: CameraAction::Zoom,
        };
        assert!(!edit.is_enabled(&settings.bindings.zoom));
        assert!(!settings.apply_edit(edit));
        assert!(settings.apply_edit(PanelEdit::ToggleInvertY {
            action: CameraAction::Zoom,
        }));
        assert!(settings.bindings.zoom.invert.y);
        assert!(!settings.bindings.zoom.invert.x);
    }

    #[test]
    fn invert_toggles_flip() {
        let mut settings = Settings::default();
        let _ = settings.apply_edit(PanelEdit::ToggleInvertX {
            action: CameraAction::Rotate,
        });
        assert!(!settings.bindings.rotate.invert.x);
        assert!(settings.bindings.rotate.invert.y);
    }

    #[test]
    fn editing_inert_binding_starts_from_scroll() {
        let mut settings = Settings::default();
        settings.bindings.pan = Binding::INERT;
        let _ = settings.apply_edit(PanelEdit::ToggleModifier {
            action: CameraAction::Pan,
            modifier: Modifier::Option,
        });
        assert_eq!(
            settings.bindings.pan.trigger,
            Some(
                Gesture::SCROLL
                    .with_modifiers(Modifiers::only(Modifier::Option))
            )
        );
    }

    #[test]
    fn inverting_inert_binding_binds_it_to_scroll() {
        let mut settings = Settings::default();
        settings.bindings.zoom = Binding::INERT;
        assert!(settings.apply_edit(PanelEdit::ToggleInvertY {
            action: CameraAction::Zoom,
        }));
        assert_eq!(
            settings.bindings.zoom,
            Binding::new(Gesture::SCROLL).inverted(false, true)
        );

        let mut store = MemoryStore::new();
        settings.save_to_store(&mut store, &PersistKeys::default());
        assert_eq!(
            store.get_int("orbitpad_controlZoom"),
            Some(10_000_002)
        );
    }

    #[test]
    fn zoom_ratio_is_clamped() {
        let mut settings = Settings::default();
        let _ = settings.apply_edit(PanelEdit::SetZoomRatio { value: 3.0 });
        assert_eq!(settings.zoom.ratio, 1.0);
        let _ = settings.apply_edit(PanelEdit::SetZoomRatio { value: 0.0 });
        assert_eq!(settings.zoom.ratio, 0.1);
        let _ = settings.apply_edit(PanelEdit::SetZoomRatio { value: 0.6 });
        assert_eq!(settings.zoom.ratio, 0.6);
    }

    #[test]
    fn sensitivity_edits_apply() {
        let mut settings = Settings::default();
        assert!(settings.apply_edit(PanelEdit::SetPanSpeed { value: 0.3 }));
        assert!(!settings.apply_edit(PanelEdit::SetPanSpeed { value: 0.3 }));
        let _ = settings.apply_edit(PanelEdit::SetZoomMax { value: 50.0 });
        assert_eq!(settings.speed.pan_speed, 0.3);
        assert_eq!(settings.zoom.max, 50.0);
    }

    #[test]
    fn edits_parse_from_json() {
        let edit: PanelEdit = serde_json::from_str(
            r#"{"edit": "set_button", "action": "pan",
                "button": "left_and_right"}"#,
        )
        .unwrap();
        assert_eq!(
            edit,
            PanelEdit::SetButton {
                action: CameraAction::Pan,
                button: ButtonChord::LeftAndRight,
            }
        );
    }
}
