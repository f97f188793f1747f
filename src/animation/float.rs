//! Hover wobble layered on top of a body's own motion.

use glam::Vec3;

use super::motion::anchored;
use super::transform::Transform;
use crate::options::FloatOptions;

/// Secondary perturbation for floating bodies.
///
/// With `θ(t) = t / 4 · speed`:
///
/// ```text
/// Δrotation.x = Δcos(θ) / 8  · rotation_intensity
/// Δrotation.y = Δsin(θ) / 8  · rotation_intensity
/// Δrotation.z = Δsin(θ) / 20 · rotation_intensity
/// Δposition.y = Δsin(θ) / 10 · float_intensity
/// ```
///
/// each anchored at the body's phase so the offset is zero at local time
/// zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatModifier {
    speed: f32,
    rotation_intensity: f32,
    float_intensity: f32,
}

impl FloatModifier {
    /// Modifier from config.
    pub fn new(options: &FloatOptions) -> Self {
        Self {
            speed: options.speed,
            rotation_intensity: options.rotation_intensity,
            float_intensity: options.float_intensity,
        }
    }

    fn theta(&self, t: f32) -> f32 {
        t / 4.0 * self.speed
    }

    /// Rotation offset at the given phase and local time.
    pub fn rotation_offset(&self, phase: f32, local_time: f32) -> Vec3 {
        let dcos = anchored(|t| self.theta(t).cos(), phase, local_time);
        let dsin = anchored(|t| self.theta(t).sin(), phase, local_time);
        Vec3::new(dcos / 8.0, dsin / 8.0, dsin / 20.0) * self.rotation_intensity
    }

    /// Vertical bob at the given phase and local time.
    pub fn height_offset(&self, phase: f32, local_time: f32) -> f32 {
        anchored(|t| self.theta(t).sin(), phase, local_time) / 10.0
            * self.float_intensity
    }

    /// Add the wobble to `pose` in place.
    pub fn apply(&self, pose: &mut Transform, phase: f32, local_time: f32) {
        pose.rotation += self.rotation_offset(phase, local_time);
        pose.position.y += self.height_offset(phase, local_time);
    }

    /// Pose of a part sitting at `offset` inside a floating group centered
    /// on its parent's origin. The group bobs and tilts, carrying the part
    /// around the origin with it.
    pub fn part_transform(
        &self,
        offset: Vec3,
        phase: f32,
        local_time: f32,
    ) -> Transform {
        let mut group = Transform::IDENTITY;
        self.apply(&mut group, phase, local_time);
        Transform {
            position: group.position + group.quat() * offset,
            ..group
        }
    }
}
