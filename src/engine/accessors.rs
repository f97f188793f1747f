//! Read-only queries on [`SceneHandle`].

use glam::Vec3;

use super::render_state::{InstanceRaw, RenderState};
use super::SceneHandle;
use crate::camera::core::{Camera, CameraUniform};
use crate::error::SceneError;
use crate::geometry::{HelixGeometry, HelixStyle, MoleculeTemplate};
use crate::scene::Scene;

// ── Snapshots ──

impl SceneHandle {
    /// Copy-out snapshot of the current frame.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn render_state(&self) -> Result<RenderState, SceneError> {
        Ok(self.driver()?.render_state())
    }

    /// GPU instance list (world matrix + color) for every body.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn instances(&self) -> Result<Vec<InstanceRaw>, SceneError> {
        Ok(self.driver()?.render_state().instances())
    }

    /// Bit-exact digest of the current poses; see [`RenderState::digest`].
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn digest(&self) -> Result<u64, SceneError> {
        Ok(self.driver()?.render_state().digest())
    }
}

// ── Camera ──

impl SceneHandle {
    /// Perspective camera at the current eye position.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn camera(&self) -> Result<Camera, SceneError> {
        Ok(self.driver()?.camera().camera())
    }

    /// Camera uniform ready for upload.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn camera_uniform(&self) -> Result<CameraUniform, SceneError> {
        Ok(CameraUniform::from_camera(&self.camera()?))
    }
}

// ── Static geometry ──

impl SceneHandle {
    /// Helix strands and rungs, built once at init. `None` when the helix
    /// is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn helix_geometry(
        &self,
    ) -> Result<Option<&HelixGeometry>, SceneError> {
        Ok(self.driver()?.scene().helix_geometry())
    }

    /// Strand colors, tube radius and tube detail for the helix.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn helix_style(&self) -> Result<HelixStyle, SceneError> {
        Ok(self.driver()?.scene().helix_style())
    }

    /// Smooth strand curves sampled at the configured tube detail. `None`
    /// when the helix is disabled.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn helix_strand_curves(
        &self,
    ) -> Result<Option<(Vec<Vec3>, Vec<Vec3>)>, SceneError> {
        Ok(self.driver()?.scene().helix_strand_curves())
    }

    /// Atom and bond layout shared by every molecule.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn molecule_template(&self) -> Result<&MoleculeTemplate, SceneError> {
        Ok(self.driver()?.scene().molecule_template())
    }

    /// Read-only view of the scene arena.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Disposed`] after disposal.
    pub fn scene(&self) -> Result<&Scene, SceneError> {
        Ok(self.driver()?.scene())
    }
}
