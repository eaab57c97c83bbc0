//! # Loader Configuration
//!
//! Read once at startup from TOML:
//!
//! ```toml
//! image_root = "data/sprites"
//! definition_dirs = ["data/vehicles"]
//! fallback_volume_size = [32, 32, 16]
//! ```
//!
//! Every key is optional.

use serde::{Deserialize, Serialize};
use skyway_shared::{Vec3i, DEFAULT_IMAGE_ROOT, FALLBACK_VOXEL_MAP_SIZE, MAX_VOXEL_MAP_CELLS};
use std::path::{Path, PathBuf};

use crate::error::{VehicleError, VehicleResult};

/// Settings for a definition load pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Directory image names are resolved against.
    pub image_root: PathBuf,
    /// Directories scanned for definition documents.
    pub definition_dirs: Vec<PathBuf>,
    /// Dimensions of the stand-in voxel map.
    pub fallback_volume_size: [i32; 3],
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from(DEFAULT_IMAGE_ROOT),
            definition_dirs: Vec::new(),
            fallback_volume_size: FALLBACK_VOXEL_MAP_SIZE.to_array(),
        }
    }
}

impl LoaderConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error on malformed TOML, unknown keys, a negative volume
    /// dimension, or a volume larger than [`MAX_VOXEL_MAP_CELLS`] cells.
    pub fn from_toml_str(text: &str) -> VehicleResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| VehicleError::InvalidConfig(e.to_string()))?;
        if config.fallback_volume_size.iter().any(|&d| d < 0) {
            return Err(VehicleError::InvalidConfig(format!(
                "fallback_volume_size must not be negative: {:?}",
                config.fallback_volume_size
            )));
        }
        match config.fallback_volume_size().volume() {
            Some(cells) if cells <= MAX_VOXEL_MAP_CELLS => {}
            _ => {
                return Err(VehicleError::InvalidConfig(format!(
                    "fallback_volume_size {:?} exceeds {MAX_VOXEL_MAP_CELLS} cells",
                    config.fallback_volume_size
                )))
            }
        }
        Ok(config)
    }

    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or does not parse.
    pub fn load(path: impl AsRef<Path>) -> VehicleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Stand-in voxel map dimensions.
    #[must_use]
    pub const fn fallback_volume_size(&self) -> Vec3i {
        Vec3i::from_array(self.fallback_volume_size)
    }
}
