//! Engine configuration
//!
//! World and physics tunables with file-based load/save. Both TOML and
//! RON are accepted, dispatched on the file extension. Every config type
//! defaults to values that run a sensible world out of the box, and
//! deserialization default-fills missing fields so older config files
//! keep loading.

use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::foundation::math::Aabb;

/// Configuration trait with extension-dispatched file IO
pub trait Config: Serialize + DeserializeOwned + Default {
    /// Load configuration from a `.toml` or `.ron` file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Some("ron") => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Save configuration to a `.toml` or `.ron` file
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };

        std::fs::write(path, contents)?;
        Ok(())
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// World dimensions and entity capacity
    pub world: WorldConfig,

    /// Physics and collision tunables
    pub physics: PhysicsConfig,
}

impl Config for EngineConfig {}

/// World dimensions and entity capacity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// World width in units
    pub width: f32,

    /// World height in units
    pub height: f32,

    /// Maximum number of live entities
    pub max_entities: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 1500.0,
            max_entities: 5000,
        }
    }
}

impl WorldConfig {
    /// World bounds as an AABB rooted at the origin
    pub fn bounds(&self) -> Aabb {
        Aabb::from_position_size(0.0, 0.0, self.width, self.height)
    }
}

/// Physics and collision tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravitational acceleration in units per second squared (+y is down)
    pub gravity: f32,

    /// Fall speed cap applied before collision resolution
    pub max_fall_speed: f32,

    /// Objects buffered per quadtree node before it splits
    pub quadtree_max_objects: usize,

    /// Maximum quadtree subdivision depth
    pub quadtree_max_levels: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 980.0,
            max_fall_speed: 1200.0,
            quadtree_max_objects: 10,
            quadtree_max_levels: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.world.max_entities, 5000);
        assert_eq!(config.physics.max_fall_speed, 1200.0);
        assert_eq!(config.physics.quadtree_max_objects, 10);
        assert_eq!(config.physics.quadtree_max_levels, 5);

        let bounds = config.world.bounds();
        assert_eq!(bounds.width(), 2000.0);
        assert_eq!(bounds.height(), 1500.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = EngineConfig::default();
        config.physics.gravity = 600.0;
        config.world.max_entities = 128;

        let text = toml::to_string_pretty(&config).unwrap();
        let loaded: EngineConfig = toml::from_str(&text).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_default_fill() {
        // An older config naming only some fields still loads
        let loaded: EngineConfig = toml::from_str(
            r#"
            [physics]
            gravity = 500.0
            "#,
        )
        .unwrap();

        assert_eq!(loaded.physics.gravity, 500.0);
        assert_eq!(loaded.physics.max_fall_speed, 1200.0);
        assert_eq!(loaded.world, WorldConfig::default());
    }
}
