//! Float hashing for bit-exact frame comparisons.

use std::hash::{Hash, Hasher};

use glam::Vec3;

/// Hash a single [`Vec3`] by converting each component to bits.
pub fn hash_vec3(v: &Vec3, hasher: &mut impl Hasher) {
    v.x.to_bits().hash(hasher);
    v.y.to_bits().hash(hasher);
    v.z.to_bits().hash(hasher);
}

/// Hash every point of a slice, length first.
///
/// Bit-exact: `0.0` and `-0.0` hash differently, which is what frame
/// reproducibility checks want.
pub fn hash_vec3_slice(slice: &[Vec3], hasher: &mut impl Hasher) {
    slice.len().hash(hasher);
    for v in slice {
        hash_vec3(v, hasher);
    }
}

/// Digest of multiple [`Vec3`] slices as a `u64`.
pub fn hash_vec3_slices(slices: &[&[Vec3]]) -> u64 {
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    slices.len().hash(&mut hasher);
    for slice in slices {
        hash_vec3_slice(slice, &mut hasher);
    }
    hasher.finish()
}
