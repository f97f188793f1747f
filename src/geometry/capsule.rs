//! Pill capsule dimensions: a cylinder capped by two hemispheres.

use glam::Vec3;

/// Capsule shape in body-local space, long axis along +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleShape {
    /// Radius of the cylinder and both caps.
    pub radius: f32,
    /// Length of the cylindrical body, excluding caps.
    pub body_length: f32,
}

impl CapsuleShape {
    /// The pill used by the landing-page scene.
    pub const PILL: Self = Self {
        radius: 0.3,
        body_length: 0.6,
    };

    /// Tip-to-tip height.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.body_length + 2.0 * self.radius
    }

    /// Centers of the top and bottom hemispheres.
    #[must_use]
    pub fn cap_centers(&self) -> [Vec3; 2] {
        let half = self.body_length / 2.0;
        [Vec3::new(0.0, half, 0.0), Vec3::new(0.0, -half, 0.0)]
    }
}

impl Default for CapsuleShape {
    fn default() -> Self {
        Self::PILL
    }
}
