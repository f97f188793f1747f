use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::check_finite;
use crate::camera::{CameraPath, Damping};
use crate::error::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera start pose, projection, and easing parameters.
pub struct CameraOptions {
    /// Eye position before the first tick.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Viewport aspect ratio until the host reports a size.
    #[schemars(skip)]
    pub aspect: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// How quickly the camera closes on its target.
    pub damping: Damping,
    /// Target as a function of time and scroll progress.
    pub path: CameraPath,
}

impl CameraOptions {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        check_finite("camera.position", &self.position)?;
        check_finite(
            "camera.projection",
            &[self.fovy, self.aspect, self.znear, self.zfar],
        )?;
        if self.fovy <= 0.0 || self.fovy >= 180.0 {
            return Err(ConfigError::InvalidProjection(format!(
                "fovy must be in (0, 180) degrees, got {}",
                self.fovy
            )));
        }
        if self.aspect <= 0.0 {
            return Err(ConfigError::InvalidProjection(format!(
                "aspect must be positive, got {}",
                self.aspect
            )));
        }
        if self.znear <= 0.0 || self.zfar <= self.znear {
            return Err(ConfigError::InvalidProjection(format!(
                "need 0 < znear < zfar, got znear {} and zfar {}",
                self.znear, self.zfar
            )));
        }
        check_finite("camera.path.base", &self.path.base)?;
        check_finite(
            "camera.path",
            &[
                self.path.scroll_dolly,
                self.path.scroll_orbit,
                self.path.scroll_lift,
                self.path.sway_amplitude,
                self.path.sway_rate,
            ],
        )?;
        self.damping.validate()
    }
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 14.0],
            fovy: 50.0,
            aspect: 1.6,
            znear: 0.1,
            zfar: 100.0,
            damping: Damping::default(),
            path: CameraPath::default(),
        }
    }
}
