//! Placement of a cylinder spanning two points (bonds and helix rungs).

use glam::{Quat, Vec3};

/// Rest pose of a unit cylinder stretched between two points.
///
/// The cylinder's local axis is +Y, matching the usual cylinder mesh
/// convention; `orientation` rotates +Y onto the start→end direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point.
    pub start: Vec3,
    /// End point.
    pub end: Vec3,
    /// Midpoint, where the cylinder is centered.
    pub midpoint: Vec3,
    /// Rotation taking +Y onto the segment direction.
    pub orientation: Quat,
    /// Distance between the endpoints.
    pub length: f32,
}

impl Segment {
    /// Place a segment between `start` and `end`.
    ///
    /// Coincident endpoints have no direction to normalize; they get the
    /// identity orientation and zero length instead of NaNs.
    #[must_use]
    pub fn between(start: Vec3, end: Vec3) -> Self {
        let delta = end - start;
        let orientation = match delta.try_normalize() {
            Some(dir) => Quat::from_rotation_arc(Vec3::Y, dir),
            None => {
                log::warn!(
                    "zero-length segment at {start}; using identity orientation"
                );
                Quat::IDENTITY
            }
        };
        Self {
            start,
            end,
            midpoint: (start + end) * 0.5,
            orientation,
            length: delta.length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_maps_y_onto_direction() {
        let s = Segment::between(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0));
        assert!((s.length - 2.0).abs() < 1e-6);
        assert_eq!(s.midpoint, Vec3::new(1.0, 0.0, 0.0));
        let axis = s.orientation * Vec3::Y;
        assert!((axis - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn antiparallel_direction_is_handled() {
        let s = Segment::between(Vec3::Y, Vec3::NEG_Y);
        let axis = s.orientation * Vec3::Y;
        assert!((axis - Vec3::NEG_Y).length() < 1e-5);
    }

    #[test]
    fn zero_length_gets_identity_not_nan() {
        let p = Vec3::new(0.3, -1.0, 2.0);
        let s = Segment::between(p, p);
        assert_eq!(s.orientation, Quat::IDENTITY);
        assert_eq!(s.length, 0.0);
        assert!(s.midpoint.is_finite());
    }
}
