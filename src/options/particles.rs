use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_finite, check_max};
use crate::error::ConfigError;
use crate::util::color::Color;

/// Most particles a field may hold.
pub const MAX_PARTICLES: usize = 1000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Particles", inline)]
#[serde(default)]
/// Sparkle field scattered around the scene.
pub struct ParticleOptions {
    /// Whether the field is generated at all.
    #[schemars(title = "Show Particles")]
    pub enabled: bool,
    /// Number of particles.
    #[schemars(title = "Count", range(min = 0, max = 1000))]
    pub count: usize,
    /// Side length of the cube particles are scattered in, centered on the
    /// origin.
    pub extent: f32,
    /// Sprite size.
    pub size: f32,
    /// Drift speed multiplier.
    #[schemars(title = "Speed", range(min = 0.0, max = 2.0), extend("step" = 0.01))]
    pub speed: f32,
    /// Sprite opacity.
    #[schemars(title = "Opacity", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub opacity: f32,
    /// Sprite color.
    #[schemars(with = "String")]
    pub color: Color,
    /// Maximum distance a particle wanders from its home position.
    pub drift: f32,
}

impl ParticleOptions {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_max("particles.count", self.count, MAX_PARTICLES)?;
        check_finite(
            "particles",
            &[self.extent, self.size, self.speed, self.opacity, self.drift],
        )
    }
}

impl Default for ParticleOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            count: 100,
            extent: 30.0,
            size: 1.2,
            speed: 0.15,
            opacity: 0.3,
            color: Color::BRAND_GREEN,
            drift: 0.5,
        }
    }
}
