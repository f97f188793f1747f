use std::sync::Arc;

use glam::Vec3;
use serde::Serialize;

use crate::animation::{FloatModifier, MotionInput, SharedMotion, Transform};
use crate::geometry::{CapsuleShape, HelixGeometry, MoleculeTemplate};
use crate::options::{BodyKind, BodySpec, FloatOptions};
use crate::util::color::Color;

// ---------------------------------------------------------------------------
// BodyId
// ---------------------------------------------------------------------------

/// Stable identifier of a body: its registration index in the scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
#[serde(transparent)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Index into the scene's body arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ---------------------------------------------------------------------------
// BodyShape
// ---------------------------------------------------------------------------

/// Static geometry a renderer needs to draw a body. Shared geometry is
/// reference-counted so every molecule points at one template.
#[derive(Debug, Clone)]
pub enum BodyShape {
    /// Double-helix strands and rungs.
    Helix(Arc<HelixGeometry>),
    /// Pill capsule.
    Capsule(CapsuleShape),
    /// Ball-and-stick molecule.
    Molecule(Arc<MoleculeTemplate>),
    /// Sphere of the given radius.
    Orb {
        /// Sphere radius before body scale.
        radius: f32,
    },
}

/// Radius of an orb sphere before scaling.
pub const ORB_RADIUS: f32 = 0.5;

/// Phase step between neighboring parts of one body, so parts wobble out
/// of step with each other.
const PART_PHASE_STEP: f32 = 1.618_034;

// ---------------------------------------------------------------------------
// PartFloat
// ---------------------------------------------------------------------------

/// Independent hover wobble for each part of a compound body (the atoms of
/// a molecule).
#[derive(Debug, Clone)]
struct PartFloat {
    modifier: FloatModifier,
    offsets: Vec<Vec3>,
}

impl PartFloat {
    fn for_shape(shape: &BodyShape) -> Option<Self> {
        match shape {
            BodyShape::Molecule(template) => Some(Self {
                modifier: FloatModifier::new(&FloatOptions::ATOM),
                offsets: template.atoms.iter().map(|a| a.offset).collect(),
            }),
            _ => None,
        }
    }

    fn rest(&self) -> Vec<Transform> {
        self.offsets
            .iter()
            .map(|&position| Transform {
                position,
                ..Transform::IDENTITY
            })
            .collect()
    }

    fn poses(&self, phase: f32, local_time: f32) -> Vec<Transform> {
        self.offsets
            .iter()
            .enumerate()
            .map(|(i, &offset)| {
                let part_phase = (i as f32).mul_add(PART_PHASE_STEP, phase);
                self.modifier.part_transform(offset, part_phase, local_time)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// BodyInstance
// ---------------------------------------------------------------------------

/// One decorative body: immutable identity and animation parameters plus
/// the pose derived for the current frame.
#[derive(Clone)]
pub struct BodyInstance {
    id: BodyId,
    kind: BodyKind,
    rest: Transform,
    color: Color,
    speed: f32,
    /// Assigned once at creation and never reset.
    phase: f32,
    shape: BodyShape,
    motion: SharedMotion,
    float: Option<FloatModifier>,
    part_float: Option<PartFloat>,
    /// Integral of `speed` over scene time.
    local_time: f32,
    transform: Transform,
    /// Part poses relative to the body; empty for single-part bodies.
    parts: Vec<Transform>,
}

impl BodyInstance {
    pub(crate) fn new(
        id: BodyId,
        spec: &BodySpec,
        shape: BodyShape,
        motion: SharedMotion,
        phase: f32,
    ) -> Self {
        let rest =
            Transform::from_arrays(spec.position, spec.rotation, spec.scale);
        let part_float = PartFloat::for_shape(&shape);
        let parts = part_float.as_ref().map_or_else(Vec::new, PartFloat::rest);
        Self {
            id,
            kind: spec.kind,
            rest,
            color: spec.color,
            speed: spec.speed,
            phase,
            shape,
            motion,
            float: spec.float.as_ref().map(FloatModifier::new),
            part_float,
            local_time: 0.0,
            transform: rest,
            parts,
        }
    }

    /// Advance local time by `dt · speed` and recompute the pose.
    ///
    /// A non-finite pose keeps the previous frame's transform.
    pub(crate) fn advance(&mut self, dt: f32) {
        self.local_time += dt * self.speed;

        let input = MotionInput {
            rest: self.rest,
            phase: self.phase,
            local_time: self.local_time,
        };
        let mut pose = self.motion.pose(&input);
        if let Some(float) = &self.float {
            float.apply(&mut pose, self.phase, self.local_time);
        }
        let parts = self
            .part_float
            .as_ref()
            .map(|parts| parts.poses(self.phase, self.local_time));

        let parts_finite = parts
            .as_ref()
            .is_none_or(|parts| parts.iter().all(Transform::is_finite));
        if pose.is_finite() && parts_finite {
            self.transform = pose;
            if let Some(parts) = parts {
                self.parts = parts;
            }
        } else {
            log::warn!(
                "body {} ({}) produced a non-finite pose at local time {}; \
                 holding previous transform",
                self.id.0,
                self.motion.name(),
                self.local_time
            );
        }
    }

    /// Stable id.
    pub fn id(&self) -> BodyId {
        self.id
    }

    /// Body type.
    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    /// Configured pose.
    pub fn rest(&self) -> Transform {
        self.rest
    }

    /// Pose for the current frame.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Poses of the body's parts (molecule atoms) relative to the body,
    /// in template order. Empty for single-part bodies.
    pub fn parts(&self) -> &[Transform] {
        &self.parts
    }

    /// Body color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Local-time multiplier.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Phase offset assigned at creation.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Accumulated local time.
    pub fn local_time(&self) -> f32 {
        self.local_time
    }

    /// Static geometry for rendering.
    pub fn shape(&self) -> &BodyShape {
        &self.shape
    }
}

impl std::fmt::Debug for BodyInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BodyInstance")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("motion", &self.motion.name())
            .field("speed", &self.speed)
            .field("phase", &self.phase)
            .field("local_time", &self.local_time)
            .field("transform", &self.transform)
            .field("parts", &self.parts.len())
            .finish_non_exhaustive()
    }
}
