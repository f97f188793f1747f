//! Rocking, bobbing pill capsules.

use super::traits::{anchored, BodyMotion, MotionInput};
use crate::animation::transform::Transform;

/// Capsules rock about X and Z and bob along Y, each on its own local
/// clock.
///
/// ```text
/// rotation.x = rest.x + Δsin(0.5·τ)·0.3
/// rotation.z = rest.z + Δcos(0.3·τ)·0.2
/// position.y = rest.y + Δsin(0.4·τ)·0.3
/// ```
///
/// where `Δf(k·τ) = f(k·(φ + τ)) − f(k·φ)` shifts each wave by the body's
/// phase φ while keeping it zero at τ = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleMotion {
    /// Frequency of the X rock.
    pub rock_x_rate: f32,
    /// Amplitude of the X rock in radians.
    pub rock_x_amplitude: f32,
    /// Frequency of the Z rock.
    pub rock_z_rate: f32,
    /// Amplitude of the Z rock in radians.
    pub rock_z_amplitude: f32,
    /// Frequency of the vertical bob.
    pub bob_rate: f32,
    /// Amplitude of the vertical bob.
    pub bob_amplitude: f32,
}

impl Default for CapsuleMotion {
    fn default() -> Self {
        Self {
            rock_x_rate: 0.5,
            rock_x_amplitude: 0.3,
            rock_z_rate: 0.3,
            rock_z_amplitude: 0.2,
            bob_rate: 0.4,
            bob_amplitude: 0.3,
        }
    }
}

impl BodyMotion for CapsuleMotion {
    fn pose(&self, input: &MotionInput) -> Transform {
        let (phase, t) = (input.phase, input.local_time);
        let mut pose = input.rest;
        pose.rotation.x += anchored(|x| (x * self.rock_x_rate).sin(), phase, t)
            * self.rock_x_amplitude;
        pose.rotation.z += anchored(|x| (x * self.rock_z_rate).cos(), phase, t)
            * self.rock_z_amplitude;
        pose.position.y += anchored(|x| (x * self.bob_rate).sin(), phase, t)
            * self.bob_amplitude;
        pose
    }

    fn name(&self) -> &'static str {
        "capsule"
    }
}
