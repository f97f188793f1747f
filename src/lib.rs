// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Procedural animated 3D background scene: a spinning DNA double helix
//! surrounded by rocking capsules, tumbling molecules, bobbing glass orbs
//! and drifting particles, seen through a smoothly damped camera.
//!
//! The crate is renderer-agnostic. It owns the scene clock and every
//! body's pose; a host loop ticks it once per displayed frame and draws
//! from copy-out snapshots.
//!
//! # Key entry points
//!
//! - [`engine::init_scene`] / [`engine::SceneHandle`] - build, tick,
//!   snapshot and dispose a scene
//! - [`options::SceneConfig`] - TOML/JSON scene configuration with the
//!   landing-page composition as its default
//! - [`geometry::build_helix`] - the double-helix curve builder
//! - [`animation`] - per-kind body motion, float wobble and particles
//! - [`camera`] - damped camera following a time/scroll-driven path
//!
//! # Frame order
//!
//! Each tick advances the [`engine::SceneClock`], then every body in
//! registration order, then the scene root and particles, then the camera,
//! and finally notifies the frame listener.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod options;
pub mod scene;
pub mod util;
#[cfg(feature = "web")]
pub mod web;
