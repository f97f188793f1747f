//! Exponential smoothing used to ease the camera toward its target.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Refresh rate at which a per-frame factor and its time-based equivalent
/// agree.
pub const REFERENCE_FPS: f32 = 60.0;

/// Per-frame factor the landing page camera was tuned with.
pub const REFERENCE_FACTOR: f32 = 0.02;

/// How far the camera closes the gap to its target each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Damping {
    /// Close a fixed fraction of the gap every frame, regardless of how
    /// long the frame took. Convergence speed scales with frame rate.
    PerFrame {
        /// Fraction in (0, 1].
        factor: f32,
    },
    /// Close `1 - exp(-rate * dt)` of the gap, independent of frame rate.
    Exponential {
        /// Decay rate in 1/s, > 0.
        rate: f32,
    },
}

impl Damping {
    /// Time-based damping that matches `factor` per frame at `fps`.
    #[must_use]
    pub fn matching_per_frame(factor: f32, fps: f32) -> Self {
        Self::Exponential {
            rate: -(1.0 - factor).ln() * fps,
        }
    }

    /// Blend weight toward the target for a tick of `dt` seconds.
    ///
    /// A tick that does not advance time does not move the camera in either
    /// mode, so re-ticking the same instant is idempotent.
    #[must_use]
    pub fn alpha(&self, dt: f32) -> f32 {
        if dt <= 0.0 {
            return 0.0;
        }
        match *self {
            Self::PerFrame { factor } => factor,
            Self::Exponential { rate } => 1.0 - (-rate * dt).exp(),
        }
    }

    /// Reject factors outside (0, 1] and non-positive rates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::PerFrame { factor } => {
                if !(factor > 0.0 && factor <= 1.0) {
                    return Err(ConfigError::InvalidDamping(format!(
                        "per-frame factor {factor} outside (0, 1]"
                    )));
                }
            }
            Self::Exponential { rate } => {
                if !(rate.is_finite() && rate > 0.0) {
                    return Err(ConfigError::InvalidDamping(format!(
                        "exponential rate {rate} must be finite and positive"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self::matching_per_frame(REFERENCE_FACTOR, REFERENCE_FPS)
    }
}
