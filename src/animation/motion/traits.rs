//! Core trait for per-kind body motion.

use std::sync::Arc;

use crate::animation::transform::Transform;

/// Everything a motion may read about the body it animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionInput {
    /// Pose the body was registered with.
    pub rest: Transform,
    /// Phase offset fixed at creation.
    pub phase: f32,
    /// Body-local time: the integral of its speed over scene time.
    pub local_time: f32,
}

/// Computes a body's pose from its rest pose and local time.
///
/// Implementations must be pure functions of [`MotionInput`] and return
/// the rest pose at `local_time == 0`, so a fresh scene ticked at zero
/// shows every body exactly where it was configured.
pub trait BodyMotion: Send + Sync {
    /// Pose at the given input.
    fn pose(&self, input: &MotionInput) -> Transform;

    /// Optional name for debugging/logging.
    fn name(&self) -> &'static str {
        "unnamed"
    }
}

/// Type alias for shared motion references.
pub type SharedMotion = Arc<dyn BodyMotion>;

/// Create a shared motion from any [`BodyMotion`] implementation.
pub fn shared<M: BodyMotion + 'static>(motion: M) -> SharedMotion {
    Arc::new(motion)
}

/// `f(phase + t) - f(phase)`: a periodic term shifted by `phase` that is
/// zero at `t = 0`.
#[inline]
pub(crate) fn anchored(f: impl Fn(f32) -> f32, phase: f32, t: f32) -> f32 {
    f(phase + t) - f(phase)
}
