//! Freely tumbling molecules.

use super::traits::{BodyMotion, MotionInput};
use crate::animation::transform::Transform;

/// Molecules tumble at constant angular rates about X and Y instead of
/// oscillating: `rotation.x = rest.x + 0.3·τ`, `rotation.y = rest.y + 0.2·τ`.
///
/// Phase has no visible effect on a linear tumble, so it is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoleculeMotion {
    /// Tumble rate about X in rad/s.
    pub x_rate: f32,
    /// Tumble rate about Y in rad/s.
    pub y_rate: f32,
}

impl Default for MoleculeMotion {
    fn default() -> Self {
        Self {
            x_rate: 0.3,
            y_rate: 0.2,
        }
    }
}

impl BodyMotion for MoleculeMotion {
    fn pose(&self, input: &MotionInput) -> Transform {
        let mut pose = input.rest;
        pose.rotation.x += input.local_time * self.x_rate;
        pose.rotation.y += input.local_time * self.y_rate;
        pose
    }

    fn name(&self) -> &'static str {
        "molecule"
    }
}
