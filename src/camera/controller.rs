use glam::Vec3;
use serde::Serialize;

use super::core::Camera;
use super::damping::Damping;
use super::path::CameraPath;
use crate::options::CameraOptions;

/// Copy-out view of the camera for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    /// Eye position.
    pub position: Vec3,
    /// Look-at point (always the origin).
    pub look_at: Vec3,
}

/// Damped camera that eases toward a time/scroll-driven target while always
/// looking at the origin.
///
/// A continuous exponential smoothing filter with no discrete states.
#[derive(Debug, Clone)]
pub struct CameraController {
    position: Vec3,
    path: CameraPath,
    damping: Damping,
    camera: Camera,
}

impl CameraController {
    /// Controller starting at the configured position.
    pub fn new(options: &CameraOptions) -> Self {
        let position = Vec3::from_array(options.position);
        Self {
            position,
            path: options.path.clone(),
            damping: options.damping,
            camera: Camera {
                eye: position,
                target: Vec3::ZERO,
                up: Vec3::Y,
                aspect: options.aspect,
                fovy: options.fovy,
                znear: options.znear,
                zfar: options.zfar,
            },
        }
    }

    /// Advance one frame: `elapsed` is the scene clock after this tick,
    /// `dt` the time it advanced by, `progress` the external scroll signal.
    pub fn update(&mut self, elapsed: f32, dt: f32, progress: f32) {
        let target = self.path.target(elapsed, progress);
        let alpha = self.damping.alpha(dt);
        self.position += (target - self.position) * alpha;
        self.camera.eye = self.position;
    }

    /// Current eye position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Target the controller is currently easing toward.
    pub fn target(&self, elapsed: f32, progress: f32) -> Vec3 {
        self.path.target(elapsed, progress)
    }

    /// Update the viewport aspect ratio used for projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
        }
    }

    /// Perspective camera at the current eye position.
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Snapshot for renderers.
    pub fn state(&self) -> CameraState {
        CameraState {
            position: self.position,
            look_at: Vec3::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with(path: CameraPath, damping: Damping) -> CameraOptions {
        CameraOptions {
            position: [0.0, 0.0, 14.0],
            path,
            damping,
            ..CameraOptions::default()
        }
    }

    #[test]
    fn converges_monotonically_to_constant_target() {
        let target = Vec3::new(4.0, -2.0, 6.0);
        let mut ctrl = CameraController::new(&options_with(
            CameraPath::fixed(target.to_array()),
            Damping::default(),
        ));
        let dt = 1.0 / 60.0;
        let mut last = ctrl.position().distance(target);
        let mut frames = 0;
        for i in 1..=2000 {
            ctrl.update(i as f32 * dt, dt, 0.0);
            let d = ctrl.position().distance(target);
            assert!(d <= last, "frame {i}: {d} > {last}");
            last = d;
            frames = i;
            if d < 1e-3 {
                break;
            }
        }
        assert!(last < 1e-3, "did not converge: {last}");
        assert!(frames < 1000);
    }

    #[test]
    fn per_frame_mode_closes_fixed_fraction() {
        let mut ctrl = CameraController::new(&options_with(
            CameraPath::fixed([0.0, 0.0, 4.0]),
            Damping::PerFrame { factor: 0.02 },
        ));
        // 14 → 4 gap is 10; one frame closes 2%.
        ctrl.update(0.1, 0.1, 0.0);
        assert!((ctrl.position().z - 13.8).abs() < 1e-5);
    }

    #[test]
    fn zero_dt_leaves_camera_in_place() {
        let mut ctrl = CameraController::new(&CameraOptions::default());
        let before = ctrl.position();
        ctrl.update(0.0, 0.0, 0.5);
        assert_eq!(ctrl.position(), before);
    }

    #[test]
    fn always_looks_at_origin() {
        let mut ctrl = CameraController::new(&CameraOptions::default());
        for i in 0..10 {
            ctrl.update(i as f32 * 0.1, 0.1, 0.3);
            assert_eq!(ctrl.state().look_at, Vec3::ZERO);
            assert_eq!(ctrl.camera().target, Vec3::ZERO);
        }
    }

    #[test]
    fn resize_ignores_zero_dimensions() {
        let mut ctrl = CameraController::new(&CameraOptions::default());
        ctrl.resize(1920, 1080);
        let aspect = ctrl.camera().aspect;
        ctrl.resize(0, 1080);
        assert_eq!(ctrl.camera().aspect, aspect);
        assert!((aspect - 16.0 / 9.0).abs() < 1e-6);
    }
}
