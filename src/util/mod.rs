//! Shared utilities: hex colors, host frame timing, and float hashing used
//! for frame reproducibility checks.

pub mod color;
pub mod frame_timing;
pub mod hash;
