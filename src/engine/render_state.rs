//! Copy-out snapshots handed to renderers.
//!
//! Nothing here borrows from the scene; a renderer may keep or mutate a
//! snapshot freely without touching animation state.

use glam::{Mat4, Vec3};
use serde::Serialize;

use crate::animation::{ParticleState, Transform};
use crate::camera::CameraState;
use crate::options::BodyKind;
use crate::scene::BodyId;
use crate::util::color::Color;
use crate::util::hash::hash_vec3_slices;

/// One body's pose for the current frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyState {
    /// Stable id.
    pub id: BodyId,
    /// Body type.
    pub kind: BodyKind,
    /// Body color.
    pub color: Color,
    /// Pose relative to the scene root.
    pub transform: Transform,
    /// Part poses relative to the body (molecule atoms, in template
    /// order). Empty for single-part bodies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<Transform>,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    /// Number of ticks processed so far.
    pub frame: u64,
    /// Scene time in seconds.
    pub elapsed: f32,
    /// Scroll progress in [0, 1] used for this frame.
    pub scroll_progress: f32,
    /// Pose of the group holding every body.
    pub root: Transform,
    /// Bodies in registration order.
    pub bodies: Vec<BodyState>,
    /// Ambient particles (outside the root group).
    pub particles: Vec<ParticleState>,
    /// Camera eye and look-at point.
    pub camera: CameraState,
}

/// Per-body GPU instance data: world matrix and RGBA color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    /// Column-major world matrix (root × body).
    pub model: [[f32; 4]; 4],
    /// Linear RGBA.
    pub color: [f32; 4],
}

impl BodyState {
    /// World matrix under the given root pose.
    #[must_use]
    pub fn world_matrix(&self, root: &Transform) -> Mat4 {
        root.matrix() * self.transform.matrix()
    }
}

impl RenderState {
    /// Look up a body by id.
    pub fn body(&self, id: BodyId) -> Option<&BodyState> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// GPU instance list for every body, in registration order.
    pub fn instances(&self) -> Vec<InstanceRaw> {
        self.bodies
            .iter()
            .map(|body| InstanceRaw {
                model: body.world_matrix(&self.root).to_cols_array_2d(),
                color: body.color.with_alpha(1.0),
            })
            .collect()
    }

    /// Bit-exact digest of every pose in the frame. Excludes the frame
    /// counter, so re-ticking at the same time leaves it unchanged.
    pub fn digest(&self) -> u64 {
        let mut poses = Vec::with_capacity(self.bodies.len() * 3 + 4);
        for pose in std::iter::once(&self.root).chain(
            self.bodies
                .iter()
                .flat_map(|b| std::iter::once(&b.transform).chain(&b.parts)),
        ) {
            poses.push(pose.position);
            poses.push(pose.rotation);
            poses.push(Vec3::splat(pose.scale));
        }
        let particles: Vec<Vec3> =
            self.particles.iter().map(|p| p.position).collect();
        let camera = [self.camera.position, self.camera.look_at];
        hash_vec3_slices(&[&poses, &particles, &camera])
    }

    /// Whether every number in the frame is finite.
    pub fn is_finite(&self) -> bool {
        self.root.is_finite()
            && self.bodies.iter().all(|b| {
                b.transform.is_finite()
                    && b.parts.iter().all(Transform::is_finite)
            })
            && self.particles.iter().all(|p| p.position.is_finite())
            && self.camera.position.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(body: Transform, root: Transform) -> RenderState {
        RenderState {
            frame: 1,
            elapsed: 0.0,
            scroll_progress: 0.0,
            root,
            bodies: vec![BodyState {
                id: BodyId(0),
                kind: BodyKind::Orb,
                color: Color::MINT,
                transform: body,
                parts: Vec::new(),
            }],
            particles: Vec::new(),
            camera: CameraState {
                position: Vec3::new(0.0, 0.0, 14.0),
                look_at: Vec3::ZERO,
            },
        }
    }

    #[test]
    fn instance_matrix_composes_root_and_body() {
        let body = Transform {
            position: Vec3::new(2.0, 0.0, 0.0),
            ..Transform::IDENTITY
        };
        let root = Transform {
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            ..Transform::IDENTITY
        };
        let instances = state_with(body, root).instances();
        assert_eq!(instances.len(), 1);
        let model = Mat4::from_cols_array_2d(&instances[0].model);
        let origin = model.transform_point3(Vec3::ZERO);
        // A quarter turn about +Y takes +X to -Z.
        assert!((origin - Vec3::new(0.0, 0.0, -2.0)).length() < 1e-5);
        assert_eq!(instances[0].color[3], 1.0);
    }

    #[test]
    fn instance_raw_is_tightly_packed() {
        assert_eq!(size_of::<InstanceRaw>(), 80);
        let raw = [InstanceRaw {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0; 4],
        }];
        assert_eq!(bytemuck::cast_slice::<InstanceRaw, f32>(&raw).len(), 20);
    }

    #[test]
    fn digest_ignores_frame_counter() {
        let a = state_with(Transform::IDENTITY, Transform::IDENTITY);
        let mut b = a.clone();
        b.frame = 99;
        assert_eq!(a.digest(), b.digest());
        b.bodies[0].transform.position.y = 1e-6;
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn digest_covers_parts() {
        let mut a = state_with(Transform::IDENTITY, Transform::IDENTITY);
        a.bodies[0].parts = vec![Transform::IDENTITY; 2];
        let mut b = a.clone();
        b.bodies[0].parts[1].position.x = 0.5;
        assert_ne!(a.digest(), b.digest());
        b.bodies[0].parts[1].position.x = f32::NAN;
        assert!(!b.is_finite());
    }

    #[test]
    fn serializes_to_json() {
        let state = state_with(Transform::IDENTITY, Transform::IDENTITY);
        let json = serde_json::to_value(&state).unwrap();
        assert!(json["bodies"][0].get("parts").is_none());
        assert_eq!(json["bodies"][0]["kind"], "orb");
        assert_eq!(json["bodies"][0]["color"], "#a7f3d0");
        assert_eq!(json["bodies"][0]["id"], 0);
    }
}
