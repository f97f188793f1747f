//! Procedural animation for the decorative bodies.
//!
//! - [`Transform`]: the per-frame pose every animator produces
//! - [`motion`]: per-kind motions (capsule, molecule, orb, helix)
//! - [`FloatModifier`]: secondary hover wobble
//! - [`ParticleField`]: the sparkle field

pub mod float;
pub mod motion;
pub mod particles;
pub mod transform;

pub use float::FloatModifier;
pub use motion::{motion_for, BodyMotion, MotionInput, SharedMotion};
pub use particles::{ParticleField, ParticleState};
pub use transform::Transform;
