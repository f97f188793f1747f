//! Camera system for the background scene.
//!
//! A damped camera that eases toward a target path driven by time and an
//! optional external scroll signal, plus the perspective camera and GPU
//! uniform handed to renderers.

/// Damped camera controller.
pub mod controller;
/// Core camera struct and GPU uniform types.
pub mod core;
/// Exponential smoothing modes.
pub mod damping;
/// Time/scroll driven camera target.
pub mod path;

pub use controller::{CameraController, CameraState};
pub use damping::Damping;
pub use path::CameraPath;
