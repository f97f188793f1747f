//! Gently bobbing glass orbs.

use super::traits::{BodyMotion, MotionInput};
use crate::animation::transform::Transform;

/// `position.y = rest.y + sin(0.5·τ)·0.2`; nothing else moves. Hover wobble
/// comes from the optional float modifier, not from here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbMotion {
    /// Bob frequency.
    pub bob_rate: f32,
    /// Bob amplitude.
    pub bob_amplitude: f32,
}

impl Default for OrbMotion {
    fn default() -> Self {
        Self {
            bob_rate: 0.5,
            bob_amplitude: 0.2,
        }
    }
}

impl BodyMotion for OrbMotion {
    fn pose(&self, input: &MotionInput) -> Transform {
        let mut pose = input.rest;
        pose.position.y +=
            (input.local_time * self.bob_rate).sin() * self.bob_amplitude;
        pose
    }

    fn name(&self) -> &'static str {
        "orb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bobs_on_y_only() {
        let m = OrbMotion::default();
        let rest = Transform::from_arrays([0.0, 5.0, -3.0], [0.0; 3], 1.8);
        let pose = m.pose(&MotionInput {
            rest,
            phase: 0.0,
            local_time: 0.5,
        });
        let expected = 5.0 + (0.5f32 * 0.5).sin() * 0.2;
        assert!((pose.position.y - expected).abs() < 1e-6);
        assert_eq!(pose.position.x, 0.0);
        assert_eq!(pose.position.z, -3.0);
        assert_eq!(pose.rotation, rest.rotation);
    }
}
