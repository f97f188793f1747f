//! Scene configuration with TOML preset support.
//!
//! Everything [`crate::engine::init_scene`] needs is consolidated in
//! [`SceneConfig`]: the body registry, helix parameters, camera easing,
//! root spin, and the particle field. Configs serialize to/from TOML so
//! page variants can ship as presets.

mod body;
mod camera;
mod helix;
mod particles;
mod root;

use std::path::Path;

pub use body::{BodyKind, BodySpec, FloatOptions};
pub use camera::CameraOptions;
pub use helix::{
    HelixOptions, MAX_LINK_STRIDE, MAX_SEGMENTS, MAX_TUBE_SEGMENTS_PER_SPAN,
};
pub use particles::{ParticleOptions, MAX_PARTICLES};
pub use root::RootOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SceneError};
use crate::util::color::Color;

/// Top-level scene config. Sections use `#[serde(default)]` so partial TOML
/// files (e.g. only overriding `[camera]`) work; `bodies` replaces the
/// default composition wholesale when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for per-body phase offsets and particle placement. `None`
    /// draws a fresh seed from the OS.
    pub seed: Option<u64>,
    /// The central helix.
    pub helix: HelixOptions,
    /// Decorative bodies in registration order.
    pub bodies: Vec<BodySpec>,
    /// Camera start pose and easing.
    pub camera: CameraOptions,
    /// Spin of the group holding all bodies.
    pub root: RootOptions,
    /// Sparkle field.
    pub particles: ParticleOptions,
}

impl SceneConfig {
    /// The landing-page background: helix at the origin, eight capsules,
    /// three molecules and five glass orbs.
    #[must_use]
    pub fn landing() -> Self {
        let green = Color::BRAND_GREEN;
        let emerald = Color::from_bytes(0x10, 0xb9, 0x81);
        let lime = Color::from_bytes(0x5e, 0xfc, 0x82);
        let forest = Color::from_bytes(0x00, 0x96, 0x24);
        let mint = Color::MINT;

        #[rustfmt::skip]
        let bodies = vec![
            BodySpec::capsule([-5.0, 2.0, -2.0], [0.5, 0.3, 0.8], 1.3, green, 0.6),
            BodySpec::capsule([5.0, -1.0, -3.0], [0.2, 0.8, 0.3], 1.0, emerald, 0.8),
            BodySpec::capsule([-4.0, -3.0, 1.0], [0.8, 0.2, 0.5], 0.9, lime, 0.7),
            BodySpec::capsule([4.0, 3.0, -1.0], [0.3, 0.5, 0.2], 1.1, green, 0.5),
            BodySpec::capsule([6.0, 0.0, 2.0], [0.1, 0.9, 0.4], 0.85, forest, 0.9),
            BodySpec::capsule([-6.0, 1.0, -1.0], [0.6, 0.4, 0.1], 1.2, emerald, 0.65),
            BodySpec::capsule([0.0, 5.0, -4.0], [1.0, 0.2, 0.3], 0.95, mint, 0.75),
            BodySpec::capsule([0.0, -5.0, 3.0], [0.4, 0.7, 0.9], 1.05, green, 0.55),
            BodySpec::molecule([7.0, -4.0, -6.0], 1.0),
            BodySpec::molecule([-7.0, 4.0, -5.0], 0.8),
            BodySpec::molecule([3.0, -6.0, 4.0], 0.7),
            BodySpec::orb([-3.0, 5.0, -3.0], 1.8, mint),
            BodySpec::orb([3.0, -5.0, -2.0], 1.5, lime),
            BodySpec::orb([0.0, 0.0, -8.0], 2.5, green),
            BodySpec::orb([-8.0, 0.0, 0.0], 1.3, emerald),
            BodySpec::orb([8.0, 2.0, -4.0], 1.6, mint),
        ];

        Self {
            seed: None,
            helix: HelixOptions::default(),
            bodies,
            camera: CameraOptions::default(),
            root: RootOptions::default(),
            particles: ParticleOptions::default(),
        }
    }

    /// Helix, camera and root defaults with no extra bodies or particles.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            bodies: Vec::new(),
            particles: ParticleOptions {
                enabled: false,
                ..ParticleOptions::default()
            },
            ..Self::landing()
        }
    }

    /// Check every section; the first problem found is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.helix.validate()?;
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }
        self.camera.validate()?;
        check_finite(
            "root",
            &[self.root.spin_rate, self.root.scroll_turn],
        )?;
        self.particles.validate()
    }

    /// Generate JSON Schema describing the config.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(SceneConfig)
    }

    /// Parse a TOML string. Missing sections use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, SceneError> {
        toml::from_str(content).map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Parse a JSON string (the form web hosts pass across the boundary).
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] on malformed JSON.
    pub fn from_json_str(content: &str) -> Result<Self, SceneError> {
        serde_json::from_str(content)
            .map_err(|e| SceneError::Parse(e.to_string()))
    }

    /// Load a config from a TOML file. Missing sections use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file can't be read, or
    /// [`SceneError::Parse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path).map_err(SceneError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save the config to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), SceneError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SceneError::Parse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(SceneError::Io)?;
        }
        std::fs::write(path, content).map_err(SceneError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::landing()
    }
}

/// Reject NaN/infinite values, naming `field` in the error.
pub(crate) fn check_finite(
    field: &str,
    values: &[f32],
) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(ConfigError::NonFinite {
            field: field.to_owned(),
        })
    }
}

pub(crate) fn check_max(
    field: &str,
    value: usize,
    max: usize,
) -> Result<(), ConfigError> {
    if value <= max {
        Ok(())
    } else {
        Err(ConfigError::TooLarge {
            field: field.to_owned(),
            value,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Damping;

    #[test]
    fn landing_composition() {
        let cfg = SceneConfig::landing();
        let count = |kind| cfg.bodies.iter().filter(|b| b.kind == kind).count();
        assert_eq!(count(BodyKind::Capsule), 8);
        assert_eq!(count(BodyKind::Molecule), 3);
        assert_eq!(count(BodyKind::Orb), 5);
        assert!(cfg.helix.enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn default_round_trips_through_toml() {
        let cfg = SceneConfig {
            seed: Some(7),
            ..SceneConfig::default()
        };
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed = SceneConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r##"
seed = 3

[helix]
segments = 40
turns = 4.0

[[bodies]]
kind = "orb"
position = [0.0, 5.0, -3.0]
scale = 1.8
color = "#a7f3d0"
"##;
        let cfg = SceneConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.helix.segments, 40);
        assert_eq!(cfg.helix.radius, 0.8);
        assert_eq!(cfg.bodies.len(), 1);
        let orb = &cfg.bodies[0];
        assert_eq!(orb.kind, BodyKind::Orb);
        assert_eq!(orb.speed, 1.0);
        assert_eq!(orb.rotation, [0.0; 3]);
        assert_eq!(orb.color, Color::MINT);
        assert_eq!(cfg.camera, CameraOptions::default());
    }

    #[test]
    fn missing_required_body_fields_fail_to_parse() {
        let no_kind = "[[bodies]]\nposition = [0.0, 0.0, 0.0]\n";
        assert!(matches!(
            SceneConfig::from_toml_str(no_kind),
            Err(SceneError::Parse(_))
        ));
        let no_position = "[[bodies]]\nkind = \"capsule\"\n";
        assert!(SceneConfig::from_toml_str(no_position).is_err());
    }

    #[test]
    fn bad_color_fails_to_parse() {
        let toml_str =
            "[[bodies]]\nkind = \"orb\"\nposition = [0.0, 0.0, 0.0]\ncolor = \"teal\"\n";
        assert!(SceneConfig::from_toml_str(toml_str).is_err());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut cfg = SceneConfig::bare();
        cfg.bodies.push(BodySpec {
            scale: -1.0,
            ..BodySpec::new(BodyKind::Capsule, [0.0; 3])
        });
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeScale {
                field: "bodies[0].scale".to_owned(),
                scale: -1.0
            })
        );

        let mut cfg = SceneConfig::bare();
        cfg.helix.segments = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSegments));

        let mut cfg = SceneConfig::bare();
        cfg.helix.link_stride = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroLinkStride));

        let mut cfg = SceneConfig::bare();
        cfg.bodies.push(BodySpec::new(BodyKind::Orb, [f32::NAN, 0.0, 0.0]));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonFinite { .. })
        ));

        let mut cfg = SceneConfig::bare();
        cfg.camera.damping = Damping::PerFrame { factor: 0.0 };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDamping(_))
        ));
    }

    #[test]
    fn counts_are_capped_at_their_advertised_maximum() {
        let mut cfg = SceneConfig::bare();
        cfg.helix.segments = MAX_SEGMENTS;
        cfg.particles.count = MAX_PARTICLES;
        assert!(cfg.validate().is_ok());

        cfg.helix.segments = MAX_SEGMENTS + 1;
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooLarge {
                field: "helix.segments".to_owned(),
                value: MAX_SEGMENTS + 1,
                max: MAX_SEGMENTS,
            })
        );

        let mut cfg = SceneConfig::bare();
        cfg.particles.count = MAX_PARTICLES + 1;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooLarge { .. })
        ));

        let mut cfg = SceneConfig::bare();
        cfg.helix.tube_segments_per_span = 1000;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TooLarge { .. })
        ));
    }

    #[test]
    fn negative_speed_and_zero_scale_are_valid() {
        let mut cfg = SceneConfig::bare();
        cfg.bodies.push(BodySpec {
            speed: -2.0,
            scale: 0.0,
            ..BodySpec::new(BodyKind::Capsule, [0.0; 3])
        });
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn json_config_parses() {
        let json = r#"{"seed": 1, "bodies": [{"kind": "molecule", "position": [1, 2, 3]}]}"#;
        let cfg = SceneConfig::from_json_str(json).unwrap();
        assert_eq!(cfg.bodies[0].kind, BodyKind::Molecule);
        assert_eq!(cfg.bodies[0].position, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(SceneConfig::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        for key in ["seed", "helix", "bodies", "camera", "root", "particles"] {
            assert!(props.contains_key(key), "missing {key}");
        }
        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!(
            "helix-scene-presets-{}",
            std::process::id()
        ));
        let path = dir.join("calm.toml");
        let cfg = SceneConfig {
            seed: Some(11),
            ..SceneConfig::bare()
        };
        cfg.save(&path).unwrap();
        assert_eq!(SceneConfig::load(&path).unwrap(), cfg);
        assert_eq!(SceneConfig::list_presets(&dir), vec!["calm".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
