//! DNA double-helix construction.
//!
//! Two parametric spirals half a turn apart, with cross-links (base-pair
//! rungs) at a fixed index stride. The geometry is built once and only ever
//! rotated as a rigid whole afterwards.

use std::f32::consts::TAU;

use glam::Vec3;
use serde::Serialize;

use super::segment::Segment;
use super::spline::catmull_rom;
use crate::util::color::Color;

/// A base-pair rung joining the two strands at one sample index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossLink {
    /// Sample index shared by both strand points.
    pub index: usize,
    /// Point on strand A.
    pub a: Vec3,
    /// Point on strand B.
    pub b: Vec3,
}

/// Static double-helix geometry in the helix body's local space.
///
/// Both strands always hold the same number of points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HelixGeometry {
    strand_a: Vec<Vec3>,
    strand_b: Vec<Vec3>,
    links: Vec<CrossLink>,
}

/// How a renderer should draw the strands: tube thickness, per-strand
/// color and curve sampling density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HelixStyle {
    /// Colors of strand A and strand B.
    pub strand_colors: [Color; 2],
    /// Tube radius around each strand curve.
    pub tube_radius: f32,
    /// Catmull-Rom samples per strand span.
    pub tube_segments_per_span: usize,
}

/// Build helix geometry.
///
/// For `i` in `0..segments`, with `f = i / segments`, both strands sit at
/// height `f * vertical_span - vertical_span / 2`; strand A is at angle
/// `f * turns * 2π` and strand B is diametrically opposite. Indices
/// `k * link_stride` for `k < segments / link_stride` also emit a
/// cross-link, so the link count is `segments / link_stride` (floor).
///
/// Zero segments yield empty strands, and a zero stride yields no links.
#[must_use]
pub fn build_helix(
    segments: usize,
    vertical_span: f32,
    turns: f32,
    radius: f32,
    link_stride: usize,
) -> HelixGeometry {
    let mut strand_a = Vec::with_capacity(segments);
    let mut strand_b = Vec::with_capacity(segments);
    let link_count = segments.checked_div(link_stride).unwrap_or(0);
    let mut links = Vec::with_capacity(link_count);

    for i in 0..segments {
        let f = i as f32 / segments as f32;
        let y = f * vertical_span - vertical_span / 2.0;
        let angle = f * turns * TAU;
        let (sin, cos) = angle.sin_cos();

        let a = Vec3::new(radius * cos, y, radius * sin);
        // Negating x/z is the half-turn offset without a second sin/cos,
        // keeping the pair exactly 2·radius apart.
        let b = Vec3::new(-a.x, y, -a.z);
        strand_a.push(a);
        strand_b.push(b);

        if link_stride > 0 && i % link_stride == 0 && links.len() < link_count
        {
            links.push(CrossLink { index: i, a, b });
        }
    }

    HelixGeometry {
        strand_a,
        strand_b,
        links,
    }
}

impl HelixGeometry {
    /// Strand A sample points, bottom to top.
    pub fn strand_a(&self) -> &[Vec3] {
        &self.strand_a
    }

    /// Strand B sample points, bottom to top.
    pub fn strand_b(&self) -> &[Vec3] {
        &self.strand_b
    }

    /// Cross-links in index order.
    pub fn links(&self) -> &[CrossLink] {
        &self.links
    }

    /// Number of samples per strand.
    pub fn len(&self) -> usize {
        self.strand_a.len()
    }

    /// Whether the strands are empty.
    pub fn is_empty(&self) -> bool {
        self.strand_a.is_empty()
    }

    /// Whether a tube can be fitted through the strands (needs two points).
    pub fn can_fit_curve(&self) -> bool {
        self.strand_a.len() >= 2
    }

    /// Cylinder placements for every rung.
    pub fn rungs(&self) -> Vec<Segment> {
        self.links
            .iter()
            .map(|link| Segment::between(link.a, link.b))
            .collect()
    }

    /// Smooth Catmull-Rom samples through each strand for tube meshing.
    ///
    /// Strands too short to fit a curve are returned as-is.
    pub fn strand_curves(
        &self,
        segments_per_span: usize,
    ) -> (Vec<Vec3>, Vec<Vec3>) {
        (
            catmull_rom(&self.strand_a, segments_per_span),
            catmull_rom(&self.strand_b, segments_per_span),
        )
    }
}
