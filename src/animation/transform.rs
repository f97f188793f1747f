//! Per-frame body pose.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

/// Position, XYZ Euler rotation (radians) and uniform scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Euler angles applied in X, Y, Z order.
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
}

impl Transform {
    /// Identity pose.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: 1.0,
    };

    /// Pose from raw config arrays.
    #[must_use]
    pub fn from_arrays(
        position: [f32; 3],
        rotation: [f32; 3],
        scale: f32,
    ) -> Self {
        Self {
            position: Vec3::from_array(position),
            rotation: Vec3::from_array(rotation),
            scale,
        }
    }

    /// Rotation as a quaternion.
    #[must_use]
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Local → parent matrix (scale, then rotate, then translate).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            self.quat(),
            self.position,
        )
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.rotation.is_finite()
            && self.scale.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
