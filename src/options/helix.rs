use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{check_finite, check_max};
use crate::error::ConfigError;
use crate::geometry::HelixStyle;
use crate::util::color::Color;

/// Most samples a strand may have.
pub const MAX_SEGMENTS: usize = 512;
/// Largest cross-link stride.
pub const MAX_LINK_STRIDE: usize = 64;
/// Most tube samples per strand span.
pub const MAX_TUBE_SEGMENTS_PER_SPAN: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Helix", inline)]
#[serde(default)]
/// Central DNA helix: curve parameters plus its pose and styling.
pub struct HelixOptions {
    /// Whether the helix body is registered.
    #[schemars(title = "Show Helix")]
    pub enabled: bool,
    /// Samples per strand.
    #[schemars(title = "Segments", range(min = 1, max = 512))]
    pub segments: usize,
    /// Height covered by the strands, centered on the body origin.
    pub vertical_span: f32,
    /// Full turns over the vertical span.
    pub turns: f32,
    /// Distance of each strand from the helix axis.
    pub radius: f32,
    /// Emit a cross-link every `link_stride` samples.
    #[schemars(title = "Link Stride", range(min = 1, max = 64))]
    pub link_stride: usize,
    /// Body position.
    pub position: [f32; 3],
    /// Uniform body scale.
    pub scale: f32,
    /// Spin about Y in rad/s.
    #[schemars(title = "Spin Rate", range(min = -2.0, max = 2.0), extend("step" = 0.05))]
    pub spin_rate: f32,
    /// Local-time multiplier.
    pub speed: f32,
    /// Colors of strand A and strand B.
    #[schemars(with = "[String; 2]")]
    pub strand_colors: [Color; 2],
    /// Tube radius for the strands.
    pub tube_radius: f32,
    /// Catmull-Rom samples per strand span for tube fitting.
    #[schemars(title = "Tube Detail", range(min = 1, max = 32))]
    pub tube_segments_per_span: usize,
}

impl HelixOptions {
    /// Strand styling handed to renderers.
    #[must_use]
    pub fn style(&self) -> HelixStyle {
        HelixStyle {
            strand_colors: self.strand_colors,
            tube_radius: self.tube_radius,
            tube_segments_per_span: self.tube_segments_per_span,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.segments == 0 {
            return Err(ConfigError::ZeroSegments);
        }
        if self.link_stride == 0 {
            return Err(ConfigError::ZeroLinkStride);
        }
        check_max("helix.segments", self.segments, MAX_SEGMENTS)?;
        check_max("helix.link_stride", self.link_stride, MAX_LINK_STRIDE)?;
        check_max(
            "helix.tube_segments_per_span",
            self.tube_segments_per_span,
            MAX_TUBE_SEGMENTS_PER_SPAN,
        )?;
        check_finite(
            "helix",
            &[
                self.vertical_span,
                self.turns,
                self.radius,
                self.scale,
                self.spin_rate,
                self.speed,
                self.tube_radius,
            ],
        )?;
        check_finite("helix.position", &self.position)?;
        if self.radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.radius));
        }
        if self.tube_radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.tube_radius));
        }
        if self.scale < 0.0 {
            return Err(ConfigError::NegativeScale {
                field: "helix.scale".to_owned(),
                scale: self.scale,
            });
        }
        Ok(())
    }
}

impl Default for HelixOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            segments: 60,
            vertical_span: 8.0,
            turns: 2.0,
            radius: 0.8,
            link_stride: 4,
            position: [0.0; 3],
            scale: 1.0,
            spin_rate: 0.2,
            speed: 1.0,
            strand_colors: [
                Color::BRAND_GREEN,
                Color::from_bytes(0x10, 0xb9, 0x81),
            ],
            tube_radius: 0.08,
            tube_segments_per_span: 4,
        }
    }
}
