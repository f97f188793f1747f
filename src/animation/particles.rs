//! Sparkle field: small sprites wandering around fixed home positions.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;
use serde::Serialize;

use super::motion::anchored;
use crate::options::ParticleOptions;
use crate::util::color::Color;

/// Copy-out view of one particle for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParticleState {
    /// World position (before the scene root transform).
    pub position: Vec3,
    /// Sprite size.
    pub size: f32,
}

/// Particles scattered uniformly in a cube, each drifting on its own
/// Lissajous path anchored at its home position.
#[derive(Debug, Clone)]
pub struct ParticleField {
    homes: Vec<Vec3>,
    phases: Vec<Vec3>,
    positions: Vec<Vec3>,
    speed: f32,
    drift: f32,
    size: f32,
    opacity: f32,
    color: Color,
}

impl ParticleField {
    /// Scatter `options.count` particles using `rng`. A disabled field is
    /// empty.
    pub fn new(options: &ParticleOptions, rng: &mut impl Rng) -> Self {
        let count = if options.enabled { options.count } else { 0 };
        let half = options.extent.abs() / 2.0;

        let mut homes = Vec::with_capacity(count);
        let mut phases = Vec::with_capacity(count);
        for _ in 0..count {
            homes.push(Vec3::new(
                scatter(rng, half),
                scatter(rng, half),
                scatter(rng, half),
            ));
            phases.push(Vec3::new(
                rng.random_range(0.0..TAU),
                rng.random_range(0.0..TAU),
                rng.random_range(0.0..TAU),
            ));
        }

        Self {
            positions: homes.clone(),
            homes,
            phases,
            speed: options.speed,
            drift: options.drift,
            size: options.size,
            opacity: options.opacity,
            color: options.color,
        }
    }

    /// Move every particle to its position at scene time `elapsed`.
    pub fn update(&mut self, elapsed: f32) {
        let w = self.speed * TAU;
        let t = elapsed * w;
        let amp = self.drift / 2.0;
        for ((pos, home), phase) in self
            .positions
            .iter_mut()
            .zip(&self.homes)
            .zip(&self.phases)
        {
            let offset = Vec3::new(
                anchored(f32::sin, phase.x, t),
                anchored(f32::sin, phase.y, t * 0.8),
                anchored(f32::sin, phase.z, t * 1.3),
            ) * amp;
            let next = *home + offset;
            *pos = if next.is_finite() { next } else { *home };
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.homes.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.homes.is_empty()
    }

    /// Current positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Sprite opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sprite color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Snapshot of every particle.
    pub fn states(&self) -> Vec<ParticleState> {
        self.positions
            .iter()
            .map(|&position| ParticleState {
                position,
                size: self.size,
            })
            .collect()
    }
}

/// Uniform coordinate in `[-half, half)`; a zero-size cube collapses to 0.
fn scatter(rng: &mut impl Rng, half: f32) -> f32 {
    if half > 0.0 {
        rng.random_range(-half..half)
    } else {
        0.0
    }
}
