//! Camera target as a smooth function of time and scroll progress.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the camera wants to be, given elapsed seconds and an externally
/// injected progress signal in [0, 1] (page scroll on the landing page).
///
/// ```text
/// x = base.x + sin(p·π)·scroll_orbit + sin(t·sway_rate)·sway_amplitude
/// y = base.y + cos(p·π/2)·scroll_lift
/// z = base.z − p·scroll_dolly
/// ```
///
/// Zeroing the scroll terms gives a purely time-driven camera; zeroing
/// the sway gives the scroll-coupled one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Camera Path", inline)]
#[serde(default)]
pub struct CameraPath {
    /// Target at zero progress with no sway (lift excluded).
    pub base: [f32; 3],
    /// How far the camera dollies in along -Z over the full progress range.
    pub scroll_dolly: f32,
    /// Peak sideways swing at half progress.
    pub scroll_orbit: f32,
    /// Height at zero progress, easing to zero at full progress.
    pub scroll_lift: f32,
    /// Amplitude of the time-driven sideways sway.
    pub sway_amplitude: f32,
    /// Angular rate of the sway in rad/s.
    pub sway_rate: f32,
}

impl CameraPath {
    /// Pure time-driven sway around `base`, ignoring scroll.
    #[must_use]
    pub fn time_driven(base: [f32; 3], amplitude: f32, rate: f32) -> Self {
        Self {
            base,
            scroll_dolly: 0.0,
            scroll_orbit: 0.0,
            scroll_lift: 0.0,
            sway_amplitude: amplitude,
            sway_rate: rate,
        }
    }

    /// A target that never moves.
    #[must_use]
    pub fn fixed(position: [f32; 3]) -> Self {
        Self::time_driven(position, 0.0, 0.0)
    }

    /// Evaluate the target. `progress` is clamped to [0, 1]; non-finite
    /// progress counts as zero.
    #[must_use]
    pub fn target(&self, elapsed: f32, progress: f32) -> Vec3 {
        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let base = Vec3::from_array(self.base);
        let sway = (elapsed * self.sway_rate).sin() * self.sway_amplitude;
        Vec3::new(
            base.x + (p * PI).sin() * self.scroll_orbit + sway,
            base.y + (p * FRAC_PI_2).cos() * self.scroll_lift,
            base.z - p * self.scroll_dolly,
        )
    }
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            base: [0.0, 0.0, 14.0],
            scroll_dolly: 6.0,
            scroll_orbit: 5.0,
            scroll_lift: 2.0,
            sway_amplitude: 0.0,
            sway_rate: 0.1,
        }
    }
}
