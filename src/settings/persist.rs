//! Settings ⇄ flat key-value store.
//!
//! Bindings persist as packed integer codes (see [`crate::gesture::code`]),
//! sensitivities as floats. A missing key never overwrites the in-memory
//! value, so a fresh store leaves every default in place.

use super::store::KeyValueStore;
use super::Settings;
use crate::gesture::{code, Binding, CameraAction};

/// Builds the `<prefix>_<name>` keys settings persist under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistKeys {
    prefix: String,
}

impl Default for PersistKeys {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX)
    }
}

impl PersistKeys {
    /// Prefix used when the host does not choose one.
    pub const DEFAULT_PREFIX: &'static str = "orbitpad";

    /// Keys under `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Full key for `name`.
    #[must_use]
    pub fn key(&self, name: &str) -> String {
        format!("{}_{name}", self.prefix)
    }

    /// Full key holding the binding code for `action`.
    #[must_use]
    pub fn binding_key(&self, action: CameraAction) -> String {
        self.key(match action {
            CameraAction::Rotate => "controlRotation",
            CameraAction::Pan => "controlPan",
            CameraAction::Zoom => "controlZoom",
        })
    }
}

/// Float-valued settings, by key name.
#[derive(Debug, Clone, Copy)]
enum FloatField {
    RotateSpeed,
    PanSpeed,
    ZoomRatio,
    ZoomMin,
    ZoomMax,
    PointerMultiplier,
    GlobalCursorSpeed,
}

impl FloatField {
    const ALL: [Self; 7] = [
        Self::RotateSpeed,
        Self::PanSpeed,
        Self::ZoomRatio,
        Self::ZoomMin,
        Self::ZoomMax,
        Self::PointerMultiplier,
        Self::GlobalCursorSpeed,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::RotateSpeed => "rotateSpeed",
            Self::PanSpeed => "panSpeed",
            Self::ZoomRatio => "zoomRatio",
            Self::ZoomMin => "zoomMin",
            Self::ZoomMax => "zoomMax",
            Self::PointerMultiplier => "pointerMultiplier",
            Self::GlobalCursorSpeed => "globalCursorSpeed",
        }
    }

    fn get(self, settings: &Settings) -> f32 {
        match self {
            Self::RotateSpeed => settings.speed.rotate_speed,
            Self::PanSpeed => settings.speed.pan_speed,
            Self::ZoomRatio => settings.zoom.ratio,
            Self::ZoomMin => settings.zoom.min,
            Self::ZoomMax => settings.zoom.max,
            Self::PointerMultiplier => settings.speed.pointer_multiplier,
            Self::GlobalCursorSpeed => settings.speed.global_cursor_speed,
        }
    }

    fn get_mut(self, settings: &mut Settings) -> &mut f32 {
        match self {
            Self::RotateSpeed => &mut settings.speed.rotate_speed,
            Self::PanSpeed => &mut settings.speed.pan_speed,
            Self::ZoomRatio => &mut settings.zoom.ratio,
            Self::ZoomMin => &mut settings.zoom.min,
            Self::ZoomMax => &mut settings.zoom.max,
            Self::PointerMultiplier => &mut settings.speed.pointer_multiplier,
            Self::GlobalCursorSpeed => {
                &mut settings.speed.global_cursor_speed
            }
        }
    }
}

impl Settings {
    /// Overwrite every value that `store` holds under `keys`.
    ///
    /// Missing keys keep the current value. Keys holding the wrong type are
    /// skipped with a warning. Undecodable binding codes load as
    /// [`Binding::INERT`].
    pub fn load_from_store<S: KeyValueStore + ?Sized>(
        &mut self,
        store: &S,
        keys: &PersistKeys,
    ) {
        for action in CameraAction::ALL {
            let key = keys.binding_key(action);
            if let Some(code) = store.get_int(&key) {
                *self.bindings.get_mut(action) = code::decode_or_inert(code);
            } else if store.contains(&key) {
                log::warn!("settings key {key} is not an integer, ignoring");
            }
        }

        for field in FloatField::ALL {
            let key = keys.key(field.name());
            if let Some(value) = store.get_float(&key) {
                *field.get_mut(self) = value;
            } else if store.contains(&key) {
                log::warn!("settings key {key} is not a float, ignoring");
            }
        }

        log::debug!("loaded settings from store");
    }

    /// Write every persisted value to `store` under `keys`.
    ///
    /// Inert bindings have no code and are left untouched in the store, so
    /// saving straight after loading never rewrites a corrupted entry.
    pub fn save_to_store<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        keys: &PersistKeys,
    ) {
        for action in CameraAction::ALL {
            let binding: &Binding = self.bindings.get(action);
            if let Some(code) = code::encode_binding(binding) {
                store.set_int(&keys.binding_key(action), code);
            }
        }
        for field in FloatField::ALL {
            store.set_float(&keys.key(field.name()), field.get(self));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::store::{MemoryStore, StoreValue};

    #[test]
    fn keys_are_prefixed() {
        let keys = PersistKeys::new("TPP");
        assert_eq!(keys.key("panSpeed"), "TPP_panSpeed");
        assert_eq!(
            keys.binding_key(CameraAction::Rotate),
            "TPP_controlRotation"
        );
        assert_eq!(
            PersistKeys::default().binding_key(CameraAction::Zoom),
            "orbitpad_controlZoom"
        );
    }

    #[test]
    fn empty_store_keeps_defaults() {
        let mut settings = Settings::default();
        settings.load_from_store(&MemoryStore::new(), &PersistKeys::default());
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn defaults_persist_under_expected_keys() {
        let keys = PersistKeys::default();
        let mut store = MemoryStore::new();
        Settings::default().save_to_store(&mut store, &keys);

        assert_eq!(store.len(), 10);
        assert_eq!(store.get_int("orbitpad_controlRotation"), Some(11_000_002));
        assert_eq!(store.get_int("orbitpad_controlPan"), Some(10_010_002));
        assert_eq!(store.get_int("orbitpad_controlZoom"), Some(102));
        assert_eq!(store.get_float("orbitpad_rotateSpeed"), Some(5.0));
        assert_eq!(store.get_float("orbitpad_zoomMax"), Some(1_000_000.0));
        assert_eq!(
            store.get_float("orbitpad_pointerMultiplier"),
            Some(0.1)
        );
    }

    #[test]
    fn load_overwrites_only_present_keys() {
        let keys = PersistKeys::default();
        let mut store = MemoryStore::new();
        store.set_float("orbitpad_panSpeed", 0.4);
        // Shift + Command + Scroll
        store.set_int("orbitpad_controlZoom", 10_102);

        let mut settings = Settings::default();
        settings.load_from_store(&store, &keys);

        assert_eq!(settings.speed.pan_speed, 0.4);
        assert_eq!(settings.speed.rotate_speed, 5.0);
        let zoom = settings.bindings.zoom.trigger.unwrap();
        assert!(zoom.modifiers.shift && zoom.modifiers.command);
        assert_eq!(
            settings.bindings.rotate,
            Settings::default().bindings.rotate
        );
    }

    #[test]
    fn wrong_types_are_ignored() {
        let keys = PersistKeys::default();
        let mut store = MemoryStore::new();
        store.set_float("orbitpad_controlPan", 3.0);
        store.set_int("orbitpad_zoomMin", 2);

        let mut settings = Settings::default();
        settings.load_from_store(&store, &keys);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn corrupted_code_loads_inert_and_is_not_rewritten() {
        let keys = PersistKeys::default();
        let mut store = MemoryStore::new();
        Settings::default().save_to_store(&mut store, &keys);
        store.set_int("orbitpad_controlPan", 57);
        let before = store.clone();

        let mut settings = Settings::default();
        settings.load_from_store(&store, &keys);
        assert!(settings.bindings.pan.is_inert());

        settings.save_to_store(&mut store, &keys);
        assert_eq!(store, before);
        assert_eq!(
            store.get("orbitpad_controlPan"),
            Some(StoreValue::Int(57))
        );
    }

    #[test]
    fn save_after_load_is_identity() {
        let keys = PersistKeys::new("TPP");
        let mut store = MemoryStore::new();
        store.set_int("TPP_controlRotation", 1_000_091);
        store.set_int("TPP_controlPan", 22);
        store.set_int("TPP_controlZoom", 100_001);
        store.set_float("TPP_rotateSpeed", 2.5);
        store.set_float("TPP_panSpeed", 0.33);
        store.set_float("TPP_zoomRatio", 0.8);
        store.set_float("TPP_zoomMin", 0.5);
        store.set_float("TPP_zoomMax", 40.0);
        store.set_float("TPP_pointerMultiplier", 0.07);
        store.set_float("TPP_globalCursorSpeed", 1.3);
        let before = store.clone();

        let mut settings = Settings::default();
        settings.load_from_store(&store, &keys);
        settings.save_to_store(&mut store, &keys);

        assert_eq!(store, before);
    }
}
