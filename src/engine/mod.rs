//! Scene lifecycle: build a scene from config, tick it from any host loop,
//! read copy-out snapshots, dispose.
//!
//! ```
//! use helix_scene::engine::init_scene;
//! use helix_scene::options::SceneConfig;
//!
//! let mut scene = init_scene(&SceneConfig::default())?;
//! scene.tick(0.016)?;
//! let frame = scene.render_state()?;
//! assert_eq!(frame.bodies.len(), 17);
//! scene.dispose()?;
//! assert!(scene.tick(0.032).is_err());
//! # Ok::<(), helix_scene::error::SceneError>(())
//! ```

mod accessors;
pub mod clock;
pub mod driver;
pub mod render_state;

pub use clock::SceneClock;
pub use driver::{FrameDriver, FrameListener};
pub use render_state::{BodyState, InstanceRaw, RenderState};

use crate::error::SceneError;
use crate::options::SceneConfig;

/// Validate `config` and build a ready-to-tick scene.
///
/// # Errors
///
/// Returns [`SceneError::Config`] when the configuration is invalid. This
/// is the only place configuration errors surface; ticks never fail on a
/// live handle.
pub fn init_scene(config: &SceneConfig) -> Result<SceneHandle, SceneError> {
    config.validate()?;
    let driver = FrameDriver::new(config);
    log::debug!("scene initialized: {driver:?}");
    Ok(SceneHandle {
        driver: Some(driver),
    })
}

/// Opaque handle to a live scene.
///
/// Every operation fails fast with [`SceneError::Disposed`] once
/// [`dispose`](Self::dispose) has been called.
#[derive(Debug)]
pub struct SceneHandle {
    /// `None` after disposal; dropping the driver drops the listener.
    driver: Option<FrameDriver>,
}

// =============================================================================
// Lifecycle
// =============================================================================

impl SceneHandle {
    /// Same as [`init_scene`].
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Config`] when the configuration is invalid.
    pub fn new(config: &SceneConfig) -> Result<Self, SceneError> {
        init_scene(config)
    }

    pub(crate) fn driver(&self) -> Result<&FrameDriver, SceneError> {
        self.driver.as_ref().ok_or(SceneError::Disposed)
    }

    fn driver_mut(&mut self) -> Result<&mut FrameDriver, SceneError> {
        self.driver.as_mut().ok_or(SceneError::Disposed)
    }

    /// Advance to absolute scene time `elapsed` (seconds since start).
    ///
    /// Repeating the previous time is a no-op step; non-finite or
    /// backwards input is logged and treated the same way.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn tick(&mut self, elapsed: f32) -> Result<(), SceneError> {
        self.driver_mut()?.tick(elapsed);
        Ok(())
    }

    /// Advance by a frame delta in seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn tick_delta(&mut self, dt: f32) -> Result<(), SceneError> {
        self.driver_mut()?.tick_delta(dt);
        Ok(())
    }

    /// Feed the page scroll signal (clamped to [0, 1]) into the camera path
    /// and root spin.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn set_scroll_progress(
        &mut self,
        progress: f32,
    ) -> Result<(), SceneError> {
        self.driver_mut()?.set_scroll_progress(progress);
        Ok(())
    }

    /// Call `listener` with the fresh render state after every tick,
    /// replacing any previous listener.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn set_frame_listener(
        &mut self,
        listener: impl FnMut(&RenderState) + 'static,
    ) -> Result<(), SceneError> {
        self.driver_mut()?.set_listener(Box::new(listener));
        Ok(())
    }

    /// Remove the frame listener, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn clear_frame_listener(&mut self) -> Result<(), SceneError> {
        self.driver_mut()?.clear_listener();
        Ok(())
    }

    /// Update the projection aspect ratio for a new viewport size.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn resize(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<(), SceneError> {
        self.driver_mut()?.resize(width, height);
        Ok(())
    }

    /// Release the scene. The frame listener is dropped immediately and no
    /// further callbacks fire.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] if already disposed.
    pub fn dispose(&mut self) -> Result<(), SceneError> {
        let driver = self.driver.take().ok_or(SceneError::Disposed)?;
        log::debug!(
            "scene disposed after {} frames ({:.2}s)",
            driver.frame(),
            driver.clock().elapsed()
        );
        Ok(())
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.driver.is_none()
    }
}
