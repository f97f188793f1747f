use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::check_finite;
use crate::error::ConfigError;
use crate::util::color::Color;

/// Decorative body type; selects the motion applied each frame.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// The DNA double helix; spins about Y.
    Helix,
    /// Pill capsule; rocks and bobs on its own local clock.
    Capsule,
    /// Ball-and-stick molecule; tumbles freely.
    Molecule,
    /// Glass orb; bobs gently.
    Orb,
}

impl BodyKind {
    /// Lowercase name, as used in configs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Helix => "helix",
            Self::Capsule => "capsule",
            Self::Molecule => "molecule",
            Self::Orb => "orb",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Secondary hover wobble layered on a body's rotation and height.
pub struct FloatOptions {
    /// Wobble frequency multiplier.
    pub speed: f32,
    /// Scale of the rotation perturbation.
    pub rotation_intensity: f32,
    /// Scale of the vertical bob.
    pub float_intensity: f32,
}

impl FloatOptions {
    /// Wobble applied to each atom of a molecule.
    pub const ATOM: Self = Self {
        speed: 2.0,
        rotation_intensity: 0.3,
        float_intensity: 0.3,
    };
}

impl Default for FloatOptions {
    /// The glass orb wobble.
    fn default() -> Self {
        Self {
            speed: 1.5,
            rotation_intensity: 1.0,
            float_intensity: 0.5,
        }
    }
}

fn default_scale() -> f32 {
    1.0
}

fn default_speed() -> f32 {
    1.0
}

/// One decorative body in the scene composition.
///
/// `kind` and `position` are required; everything else has a default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct BodySpec {
    /// Body type.
    pub kind: BodyKind,
    /// Base position.
    pub position: [f32; 3],
    /// Base rotation as XYZ Euler angles in radians.
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Uniform scale; must not be negative.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Body color.
    #[serde(default)]
    #[schemars(with = "String")]
    pub color: Color,
    /// Local-time multiplier. Zero freezes the body, negative runs it
    /// backwards.
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Fixed phase offset. Drawn from the scene RNG when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<f32>,
    /// Optional hover wobble.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float: Option<FloatOptions>,
}

impl BodySpec {
    /// Body of `kind` at `position` with default rotation, scale, color
    /// and speed.
    #[must_use]
    pub fn new(kind: BodyKind, position: [f32; 3]) -> Self {
        Self {
            kind,
            position,
            rotation: [0.0; 3],
            scale: 1.0,
            color: Color::default(),
            speed: 1.0,
            phase: None,
            float: None,
        }
    }

    /// Pill capsule.
    #[must_use]
    pub fn capsule(
        position: [f32; 3],
        rotation: [f32; 3],
        scale: f32,
        color: Color,
        speed: f32,
    ) -> Self {
        Self {
            rotation,
            scale,
            color,
            speed,
            ..Self::new(BodyKind::Capsule, position)
        }
    }

    /// Ball-and-stick molecule.
    #[must_use]
    pub fn molecule(position: [f32; 3], scale: f32) -> Self {
        Self {
            scale,
            ..Self::new(BodyKind::Molecule, position)
        }
    }

    /// Floating glass orb with the default wobble.
    #[must_use]
    pub fn orb(position: [f32; 3], scale: f32, color: Color) -> Self {
        Self {
            scale,
            color,
            float: Some(FloatOptions::default()),
            ..Self::new(BodyKind::Orb, position)
        }
    }

    /// Set an explicit phase offset.
    #[must_use]
    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = Some(phase);
        self
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), ConfigError> {
        let field = |name: &str| format!("bodies[{index}].{name}");
        check_finite(&field("position"), &self.position)?;
        check_finite(&field("rotation"), &self.rotation)?;
        check_finite(&field("scale"), &[self.scale])?;
        check_finite(&field("speed"), &[self.speed])?;
        if let Some(phase) = self.phase {
            check_finite(&field("phase"), &[phase])?;
        }
        if let Some(float) = self.float {
            check_finite(
                &field("float"),
                &[
                    float.speed,
                    float.rotation_intensity,
                    float.float_intensity,
                ],
            )?;
        }
        if self.scale < 0.0 {
            return Err(ConfigError::NegativeScale {
                field: field("scale"),
                scale: self.scale,
            });
        }
        Ok(())
    }
}
