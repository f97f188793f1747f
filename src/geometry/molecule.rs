//! Ball-and-stick molecule template shared by every molecule body.

use glam::Vec3;

use super::segment::Segment;
use crate::util::color::Color;

/// One atom sphere in molecule-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Atom {
    /// Offset from the molecule origin.
    pub offset: Vec3,
    /// Sphere radius.
    pub radius: f32,
    /// Sphere color.
    pub color: Color,
}

/// A bond between two atoms, by index into [`MoleculeTemplate::atoms`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// First atom index.
    pub from: usize,
    /// Second atom index.
    pub to: usize,
}

/// Atoms plus bonds, in the molecule's local frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeTemplate {
    /// Atom spheres.
    pub atoms: Vec<Atom>,
    /// Bonds between atoms.
    pub bonds: Vec<Bond>,
    /// Radius of the bond cylinders.
    pub bond_radius: f32,
}

impl MoleculeTemplate {
    /// Central atom with five satellites: three in the XY plane and two on
    /// the Z axis, each bonded to the center.
    #[must_use]
    pub fn standard() -> Self {
        let atom = |offset: [f32; 3], radius: f32, color: Color| Atom {
            offset: Vec3::from_array(offset),
            radius,
            color,
        };
        let atoms = vec![
            atom([0.0, 0.0, 0.0], 0.35, Color::BRAND_GREEN),
            atom([0.9, 0.0, 0.0], 0.25, Color::from_bytes(0x10, 0xb9, 0x81)),
            atom([-0.7, 0.7, 0.0], 0.25, Color::from_bytes(0x5e, 0xfc, 0x82)),
            atom([-0.7, -0.7, 0.0], 0.25, Color::from_bytes(0x00, 0x96, 0x24)),
            atom([0.0, 0.0, 0.9], 0.28, Color::MINT),
            atom([0.0, 0.0, -0.9], 0.28, Color::BRAND_GREEN),
        ];
        let bonds = (1..atoms.len()).map(|to| Bond { from: 0, to }).collect();
        Self {
            atoms,
            bonds,
            bond_radius: 0.05,
        }
    }

    /// Cylinder placements for every bond whose atom indices are valid.
    ///
    /// Bonds that reference a missing atom are skipped.
    pub fn bond_segments(&self) -> Vec<Segment> {
        self.bonds
            .iter()
            .filter_map(|bond| {
                let from = self.atoms.get(bond.from)?;
                let to = self.atoms.get(bond.to)?;
                Some(Segment::between(from.offset, to.offset))
            })
            .collect()
    }
}

impl Default for MoleculeTemplate {
    fn default() -> Self {
        Self::standard()
    }
}
