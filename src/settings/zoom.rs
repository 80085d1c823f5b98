use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Zoom", inline)]
#[serde(default)]
/// Multiplicative zoom parameters.
pub struct ZoomOptions {
    /// Delta-to-zoom scale before clamping.
    #[schemars(skip)]
    pub speed: f32,
    /// Per-event clamp on the scaled delta; also the normalizer that maps it
    /// into `[-1, 1]`.
    #[schemars(skip)]
    pub max_delta: f32,
    /// Largest fractional size change per event.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub ratio: f32,
    /// Smallest allowed size.
    #[schemars(title = "Zoom Min", range(min = 0.0))]
    pub min: f32,
    /// Largest allowed size.
    #[schemars(title = "Zoom Max", range(min = 0.0))]
    pub max: f32,
}

impl ZoomOptions {
    /// Bounds of [`ZoomOptions::ratio`] as exposed in the settings panel.
    pub const RATIO_RANGE: (f32, f32) = (0.1, 1.0);
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            speed: 0.7,
            max_delta: 10.0,
            ratio: 0.5,
            min: 0.01,
            max: 1_000_000.0,
        }
    }
}
