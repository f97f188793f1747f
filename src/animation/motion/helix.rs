//! Slow constant spin of the central helix.

use super::traits::{BodyMotion, MotionInput};
use crate::animation::transform::Transform;

/// `rotation.y = rest.y + spin_rate·τ`. The strand geometry itself is
/// never rebuilt; only this rigid rotation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelixMotion {
    /// Spin about Y in rad/s.
    pub spin_rate: f32,
}

impl Default for HelixMotion {
    fn default() -> Self {
        Self { spin_rate: 0.2 }
    }
}

impl BodyMotion for HelixMotion {
    fn pose(&self, input: &MotionInput) -> Transform {
        let mut pose = input.rest;
        pose.rotation.y += input.local_time * self.spin_rate;
        pose
    }

    fn name(&self) -> &'static str {
        "helix"
    }
}
