//! Per-kind body motions.
//!
//! Each body kind has a motion that maps (rest pose, phase, local time) to a
//! pose. Motions never read other bodies, so they compose independently.

mod capsule;
mod helix;
mod molecule;
mod orb;
mod traits;

pub use capsule::CapsuleMotion;
pub use helix::HelixMotion;
pub use molecule::MoleculeMotion;
pub use orb::OrbMotion;
pub(crate) use traits::anchored;
pub use traits::{shared, BodyMotion, MotionInput, SharedMotion};

use crate::options::BodyKind;

/// Default motion for a body kind. The helix spins at `helix_spin_rate`.
pub fn motion_for(kind: BodyKind, helix_spin_rate: f32) -> SharedMotion {
    match kind {
        BodyKind::Helix => shared(HelixMotion {
            spin_rate: helix_spin_rate,
        }),
        BodyKind::Capsule => shared(CapsuleMotion::default()),
        BodyKind::Molecule => shared(MoleculeMotion::default()),
        BodyKind::Orb => shared(OrbMotion::default()),
    }
}
