//! Crate-level error types.

use std::fmt;

/// Invalid scene configuration, reported synchronously by
/// [`crate::engine::init_scene`] and [`crate::options::SceneConfig::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A body was configured with a negative scale.
    NegativeScale {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected scale.
        scale: f32,
    },
    /// A numeric field is NaN or infinite.
    NonFinite {
        /// Dotted path of the offending field.
        field: String,
    },
    /// The helix was configured with zero segments.
    ZeroSegments,
    /// The helix was configured with a cross-link stride of zero.
    ZeroLinkStride,
    /// The helix radius or its tube radius is negative.
    NegativeRadius(f32),
    /// Camera damping is outside its valid range.
    InvalidDamping(String),
    /// A color string is not of the form `#rrggbb`.
    InvalidColor(String),
    /// Camera projection parameters cannot produce a finite matrix.
    InvalidProjection(String),
    /// A count exceeds its supported maximum.
    TooLarge {
        /// Dotted path of the offending field.
        field: String,
        /// The rejected value.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeScale { field, scale } => {
                write!(f, "`{field}` must not be negative (got {scale})")
            }
            Self::NonFinite { field } => {
                write!(f, "field `{field}` is not a finite number")
            }
            Self::ZeroSegments => {
                write!(f, "helix must have at least one segment")
            }
            Self::ZeroLinkStride => {
                write!(f, "helix link stride must be at least 1")
            }
            Self::NegativeRadius(r) => {
                write!(f, "helix radii must not be negative (got {r})")
            }
            Self::InvalidDamping(msg) => {
                write!(f, "invalid camera damping: {msg}")
            }
            Self::InvalidColor(s) => {
                write!(f, "invalid color `{s}` (expected #rrggbb)")
            }
            Self::InvalidProjection(msg) => {
                write!(f, "invalid camera projection: {msg}")
            }
            Self::TooLarge { field, value, max } => {
                write!(f, "`{field}` is {value}, at most {max} is supported")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors produced by the helix-scene crate.
#[derive(Debug)]
pub enum SceneError {
    /// Scene configuration failed validation.
    Config(ConfigError),
    /// An operation was attempted on a disposed scene handle.
    Disposed,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON config parsing or serialization failure.
    Parse(String),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Disposed => {
                write!(f, "scene handle used after dispose")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SceneError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
