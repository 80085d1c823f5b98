use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Speed", inline)]
#[serde(default)]
/// Cursor scaling and rotate/pan sensitivities.
pub struct SpeedOptions {
    /// Multiplier applied to every delta, scroll and pointer alike.
    #[schemars(title = "Global Cursor Speed", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub global_cursor_speed: f32,
    /// Extra multiplier for pointer deltas, which run much larger than
    /// scroll deltas.
    #[schemars(title = "Cursor Speed Multiplier", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub pointer_multiplier: f32,
    /// Degrees of rotation per unit of delta.
    #[schemars(title = "Rotate Speed", range(min = 0.0, max = 20.0), extend("step" = 0.5))]
    pub rotate_speed: f32,
    /// Pan distance per unit of delta, relative to the zoom size.
    #[schemars(title = "Pan Speed", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub pan_speed: f32,
}

impl Default for SpeedOptions {
    fn default() -> Self {
        Self {
            global_cursor_speed: 1.0,
            pointer_multiplier: 0.1,
            rotate_speed: 5.0,
            pan_speed: 0.1,
        }
    }
}
