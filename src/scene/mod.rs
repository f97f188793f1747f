//! Scene Composition: a flat arena of decorative bodies plus the static
//! geometry and ambient layers they share.
//!
//! Bodies are registered once from a [`SceneConfig`] (helix first, then the
//! configured bodies in order) and never added or removed afterwards. Ids
//! are registration indices, so iteration order is deterministic.

mod body;

use std::f32::consts::TAU;
use std::sync::Arc;

pub use body::{BodyId, BodyInstance, BodyShape, ORB_RADIUS};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{motion_for, ParticleField, SharedMotion, Transform};
use crate::geometry::{
    build_helix, CapsuleShape, HelixGeometry, HelixStyle, MoleculeTemplate,
};
use crate::options::{BodyKind, BodySpec, RootOptions, SceneConfig};

/// Upper bound (exclusive) of randomly drawn body phases.
pub const PHASE_RANGE: f32 = 100.0;

/// Phase RNG: seeded when the config pins a seed, OS entropy otherwise.
fn scene_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The authoritative scene. Owns every body in registration order.
pub struct Scene {
    /// Bodies in registration order; `bodies[i].id() == BodyId(i)`.
    bodies: Vec<BodyInstance>,
    next_body_id: u32,
    helix: Option<Arc<HelixGeometry>>,
    helix_style: HelixStyle,
    molecule: Arc<MoleculeTemplate>,
    particles: ParticleField,
    root_options: RootOptions,
    /// Pose of the group holding every body (particles sit outside it).
    root: Transform,
    /// Bumped once per animation step.
    generation: u64,
}

impl Scene {
    /// Build the scene described by `config`.
    ///
    /// `config` is assumed valid; see [`SceneConfig::validate`].
    #[must_use]
    pub fn compose(config: &SceneConfig) -> Self {
        let mut rng = scene_rng(config.seed);
        let mut scene = Self {
            bodies: Vec::with_capacity(config.bodies.len() + 1),
            next_body_id: 0,
            helix: None,
            helix_style: config.helix.style(),
            molecule: Arc::new(MoleculeTemplate::standard()),
            particles: ParticleField::new(&config.particles, &mut rng),
            root_options: config.root,
            root: Transform::IDENTITY,
            generation: 0,
        };

        let helix = &config.helix;
        if helix.enabled {
            let geometry = Arc::new(build_helix(
                helix.segments,
                helix.vertical_span,
                helix.turns,
                helix.radius,
                helix.link_stride,
            ));
            let spec = BodySpec {
                scale: helix.scale,
                color: helix.strand_colors[0],
                speed: helix.speed,
                phase: Some(0.0),
                ..BodySpec::new(BodyKind::Helix, helix.position)
            };
            let _ = scene.register(
                &spec,
                BodyShape::Helix(Arc::clone(&geometry)),
                motion_for(BodyKind::Helix, helix.spin_rate),
                &mut rng,
            );
            scene.helix = Some(geometry);
        }

        for spec in &config.bodies {
            let shape = scene.shape_for(spec.kind);
            let _ = scene.register(
                spec,
                shape,
                motion_for(spec.kind, helix.spin_rate),
                &mut rng,
            );
        }

        log::debug!(
            "composed scene: {} bodies, {} particles, helix {}",
            scene.bodies.len(),
            scene.particles.len(),
            scene.helix.as_ref().map_or(0, |h| h.len()),
        );
        scene
    }

    fn shape_for(&self, kind: BodyKind) -> BodyShape {
        match kind {
            BodyKind::Helix => BodyShape::Helix(
                self.helix.clone().unwrap_or_default(),
            ),
            BodyKind::Capsule => BodyShape::Capsule(CapsuleShape::PILL),
            BodyKind::Molecule => {
                BodyShape::Molecule(Arc::clone(&self.molecule))
            }
            BodyKind::Orb => BodyShape::Orb {
                radius: ORB_RADIUS,
            },
        }
    }

    /// Register one body. Its phase is fixed here and never changes.
    fn register(
        &mut self,
        spec: &BodySpec,
        shape: BodyShape,
        motion: SharedMotion,
        rng: &mut StdRng,
    ) -> BodyId {
        let id = BodyId(self.next_body_id);
        self.next_body_id += 1;
        let phase = spec
            .phase
            .unwrap_or_else(|| rng.random_range(0.0..PHASE_RANGE));
        self.bodies
            .push(BodyInstance::new(id, spec, shape, motion, phase));
        id
    }

    // -- Per-frame updates --

    /// Advance every body by `dt` seconds of scene time, in registration
    /// order.
    pub(crate) fn animate(&mut self, dt: f32) {
        for body in &mut self.bodies {
            body.advance(dt);
        }
        self.generation += 1;
    }

    /// Update the root group and particle field for scene time `elapsed`
    /// and scroll `progress`.
    pub(crate) fn update_ambient(&mut self, elapsed: f32, progress: f32) {
        let spin = elapsed * self.root_options.spin_rate
            + progress * self.root_options.scroll_turn;
        self.root.rotation.y = spin.rem_euclid(TAU);
        self.particles.update(elapsed);
    }

    // -- Queries --

    /// Bodies in registration order.
    pub fn bodies(&self) -> &[BodyInstance] {
        &self.bodies
    }

    /// Look up a body by id.
    pub fn body(&self, id: BodyId) -> Option<&BodyInstance> {
        self.bodies.get(id.index())
    }

    /// Number of registered bodies (including the helix).
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no bodies are registered.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Helix geometry, if the helix is enabled.
    pub fn helix_geometry(&self) -> Option<&HelixGeometry> {
        self.helix.as_deref()
    }

    /// Strand colors, tube radius and sampling density for the helix.
    pub fn helix_style(&self) -> HelixStyle {
        self.helix_style
    }

    /// Smooth strand curves at the configured tube detail, or `None` when
    /// the helix is disabled.
    pub fn helix_strand_curves(&self) -> Option<(Vec<Vec3>, Vec<Vec3>)> {
        self.helix.as_ref().map(|geometry| {
            geometry.strand_curves(self.helix_style.tube_segments_per_span)
        })
    }

    /// Template shared by every molecule body.
    pub fn molecule_template(&self) -> &MoleculeTemplate {
        &self.molecule
    }

    /// Ambient particle field.
    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    /// Current pose of the group holding every body.
    pub fn root(&self) -> Transform {
        self.root
    }

    /// Number of animation steps taken.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("bodies", &self.bodies.len())
            .field("particles", &self.particles.len())
            .field("helix", &self.helix.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}
