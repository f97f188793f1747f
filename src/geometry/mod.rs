//! Static geometry built once at scene construction.
//!
//! - [`helix`]: the double-helix curve builder
//! - [`spline`]: Catmull-Rom sampling for strand tubes
//! - [`segment`]: cylinder placement between two points (bonds, rungs)
//! - [`molecule`]: the ball-and-stick molecule template
//! - [`capsule`]: pill dimensions

pub mod capsule;
pub mod helix;
pub mod molecule;
pub mod segment;
pub mod spline;

pub use capsule::CapsuleShape;
pub use helix::{build_helix, CrossLink, HelixGeometry, HelixStyle};
pub use molecule::{Atom, Bond, MoleculeTemplate};
pub use segment::Segment;
