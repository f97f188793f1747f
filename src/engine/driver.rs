//! Frame Driver: one tick advances the clock, then every animator, then the
//! camera, then notifies the listener.

use super::clock::SceneClock;
use super::render_state::{BodyState, RenderState};
use crate::camera::CameraController;
use crate::options::SceneConfig;
use crate::scene::Scene;

/// Callback invoked with the fresh render state after every tick.
pub type FrameListener = Box<dyn FnMut(&RenderState)>;

/// Owns the clock, the scene arena and the camera, and is their sole
/// mutator. Hosts call [`tick`](Self::tick) once per displayed frame;
/// the driver never paces, retries or skips frames on its own.
pub struct FrameDriver {
    clock: SceneClock,
    scene: Scene,
    camera: CameraController,
    /// External scroll signal in [0, 1].
    scroll_progress: f32,
    frame: u64,
    listener: Option<FrameListener>,
}

impl FrameDriver {
    /// Compose the scene and place the camera. `config` must be valid.
    #[must_use]
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            clock: SceneClock::new(),
            scene: Scene::compose(config),
            camera: CameraController::new(&config.camera),
            scroll_progress: 0.0,
            frame: 0,
            listener: None,
        }
    }

    /// Tick at absolute scene time `elapsed` (seconds since start).
    pub fn tick(&mut self, elapsed: f32) {
        let dt = self.clock.advance_to(elapsed);
        self.step(dt);
    }

    /// Tick by a frame delta instead of an absolute time.
    pub fn tick_delta(&mut self, dt: f32) {
        let dt = self.clock.advance_by(dt);
        self.step(dt);
    }

    fn step(&mut self, dt: f32) {
        let elapsed = self.clock.elapsed();

        self.scene.animate(dt);
        self.scene.update_ambient(elapsed, self.scroll_progress);
        self.camera.update(elapsed, dt, self.scroll_progress);
        self.frame += 1;

        log::trace!(
            "frame {} at {elapsed:.3}s (dt {dt:.4}s), camera {:?}",
            self.frame,
            self.camera.position()
        );

        if self.listener.is_some() {
            let state = self.render_state();
            if let Some(listener) = self.listener.as_mut() {
                listener(&state);
            }
        }
    }

    /// Snapshot the current frame.
    #[must_use]
    pub fn render_state(&self) -> RenderState {
        RenderState {
            frame: self.frame,
            elapsed: self.clock.elapsed(),
            scroll_progress: self.scroll_progress,
            root: self.scene.root(),
            bodies: self
                .scene
                .bodies()
                .iter()
                .map(|body| BodyState {
                    id: body.id(),
                    kind: body.kind(),
                    color: body.color(),
                    transform: body.transform(),
                    parts: body.parts().to_vec(),
                })
                .collect(),
            particles: self.scene.particles().states(),
            camera: self.camera.state(),
        }
    }

    /// Set the scroll signal; NaN counts as zero, others clamp to [0, 1].
    /// Takes effect on the next tick.
    pub fn set_scroll_progress(&mut self, progress: f32) {
        self.scroll_progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
    }

    /// Current scroll signal.
    pub fn scroll_progress(&self) -> f32 {
        self.scroll_progress
    }

    /// Register (or replace) the per-frame listener.
    pub fn set_listener(&mut self, listener: FrameListener) {
        self.listener = Some(listener);
    }

    /// Drop the per-frame listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// The scene arena.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera controller.
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// Forward a viewport resize to the camera.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    /// Scene clock.
    pub fn clock(&self) -> SceneClock {
        self.clock
    }

    /// Ticks processed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl std::fmt::Debug for FrameDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameDriver")
            .field("clock", &self.clock)
            .field("scene", &self.scene)
            .field("scroll_progress", &self.scroll_progress)
            .field("frame", &self.frame)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}
