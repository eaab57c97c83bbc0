//! # Loader Constants
//!
//! Defaults baked into the definition loaders. Most can be overridden through
//! the loader configuration file.

use crate::math::Vec3i;

// =============================================================================
// COLLISION VOLUMES
// =============================================================================

/// Dimensions of the stand-in voxel map handed to definitions without one.
pub const FALLBACK_VOXEL_MAP_SIZE: Vec3i = Vec3i::new(32, 32, 16);

/// Largest cell count a configured stand-in voxel map may have (2 MiB of bits).
pub const MAX_VOXEL_MAP_CELLS: usize = 1 << 24;

// =============================================================================
// ASSETS
// =============================================================================

/// Directory image names are resolved against when no config says otherwise.
pub const DEFAULT_IMAGE_ROOT: &str = "data";

/// File extension of vehicle definition documents.
pub const DEFINITION_EXTENSION: &str = "xml";
