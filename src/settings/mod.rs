//! Session-scoped camera-control settings with TOML preset support.
//!
//! [`Settings`] holds the three gesture bindings and every sensitivity. It is
//! an explicit object handed to the
//! [`CameraOperator`](crate::camera::CameraOperator); nothing here is global.
//! Two persistence paths exist:
//!
//! - the flat key-value store ([`store`], [`persist`]), where bindings are
//!   packed integer codes;
//! - whole-object TOML presets ([`Settings::load`] / [`Settings::save`]).

mod bindings;
/// Settings ⇄ key-value store mapping.
pub mod persist;
mod speed;
/// Flat key-value stores.
pub mod store;
mod zoom;

use std::path::Path;

pub use bindings::BindingOptions;
pub use persist::PersistKeys;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use speed::SpeedOptions;
pub use store::{KeyValueStore, MemoryStore, StoreValue, TomlFileStore};
pub use zoom::ZoomOptions;

use crate::error::OrbitpadError;

/// Top-level settings container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[zoom]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Settings {
    /// Gesture bindings for rotate, pan and zoom.
    #[schemars(skip)]
    pub bindings: BindingOptions,
    /// Cursor scaling and rotate/pan sensitivities.
    pub speed: SpeedOptions,
    /// Zoom parameters.
    pub zoom: ZoomOptions,
}

impl Settings {
    /// Generate JSON Schema describing the UI-exposed settings.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Settings)
    }

    /// Load settings from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failure or invalid TOML.
    pub fn load(path: &Path) -> Result<Self, OrbitpadError> {
        let content = std::fs::read_to_string(path).map_err(OrbitpadError::Io)?;
        toml::from_str(&content)
            .map_err(|e| OrbitpadError::SettingsParse(e.to_string()))
    }

    /// Save settings to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), OrbitpadError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrbitpadError::SettingsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(OrbitpadError::Io)?;
        }
        std::fs::write(path, content).map_err(OrbitpadError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{Axis, Binding, ButtonChord, Gesture};

    #[test]
    fn default_round_trips_through_toml() {
        let settings = Settings::default();
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn inert_binding_round_trips_through_toml() {
        let mut settings = Settings::default();
        settings.bindings.pan = Binding::INERT;
        settings.bindings.rotate = Binding::new(
            Gesture::new(Axis::Pointer).with_button(ButtonChord::Middle),
        );
        let toml_str = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(settings, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[zoom]
ratio = 0.8

[bindings.zoom.trigger]
axis = "pointer"
button = "right"
"#;
        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.zoom.ratio, 0.8);
        assert_eq!(settings.zoom.min, 0.01);
        assert_eq!(settings.speed, SpeedOptions::default());
        assert_eq!(
            settings.bindings.zoom,
            Binding::new(
                Gesture::new(Axis::Pointer).with_button(ButtonChord::Right)
            )
        );
        assert_eq!(settings.bindings.rotate, BindingOptions::default().rotate);
    }

    #[test]
    fn invert_only_preset_keeps_default_trigger() {
        let settings: Settings =
            toml::from_str("[bindings.zoom.invert]\ny = true\n").unwrap();
        let defaults = BindingOptions::default();
        assert!(!settings.bindings.zoom.is_inert());
        assert_eq!(settings.bindings.zoom.trigger, defaults.zoom.trigger);
        assert!(settings.bindings.zoom.invert.y);
        assert!(!settings.bindings.zoom.invert.x);

        let settings: Settings =
            toml::from_str("[bindings.rotate.invert]\nx = false\n").unwrap();
        assert_eq!(
            settings.bindings.rotate,
            defaults.rotate.inverted(false, true)
        );
    }

    #[test]
    fn unbound_flag_disables_binding() {
        let settings: Settings =
            toml::from_str("[bindings.pan]\nunbound = true\n").unwrap();
        assert!(settings.bindings.pan.is_inert());
        assert_eq!(settings.bindings.zoom, BindingOptions::default().zoom);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets").join("laptop.toml");
        let mut settings = Settings::default();
        settings.speed.pan_speed = 0.25;
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(&dir.path().join("nope.toml"));
        assert!(matches!(result, Err(OrbitpadError::Io(_))));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Settings::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("speed"));
        assert!(props.contains_key("zoom"));
        assert!(!props.contains_key("bindings"));

        let zoom = &props["zoom"]["properties"];
        assert!(zoom.get("ratio").is_some());
        assert!(zoom.get("min").is_some());
        assert!(zoom.get("speed").is_none());
        assert!(zoom.get("max_delta").is_none());

        let speed = &props["speed"]["properties"];
        assert!(speed.get("global_cursor_speed").is_some());
        assert!(speed.get("pointer_multiplier").is_some());
    }
}
