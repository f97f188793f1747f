use std::f32::consts::FRAC_PI_2;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene Root", inline)]
#[serde(default)]
/// Slow turn of the group that holds every body.
///
/// `rotation.y = elapsed * spin_rate + progress * scroll_turn`, wrapped to
/// [0, 2π).
pub struct RootOptions {
    /// Continuous spin in rad/s.
    #[schemars(title = "Spin Rate", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub spin_rate: f32,
    /// Extra turn in radians at full scroll progress.
    #[schemars(title = "Scroll Turn", range(min = 0.0, max = 6.3), extend("step" = 0.1))]
    pub scroll_turn: f32,
}

impl Default for RootOptions {
    fn default() -> Self {
        Self {
            spin_rate: 0.05,
            scroll_turn: FRAC_PI_2,
        }
    }
}
