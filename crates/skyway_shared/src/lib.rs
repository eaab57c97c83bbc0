//! # SKYWAY Shared
//!
//! Common types used by the definition loaders and the vehicle runtime.
//!
//! ## RULE
//!
//! This crate must NEVER depend on:
//! - a markup parser
//! - the image pipeline
//!
//! If you need either, put it in `skyway_vehicles`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;
pub mod voxel;

pub use constants::{
    DEFAULT_IMAGE_ROOT, DEFINITION_EXTENSION, FALLBACK_VOXEL_MAP_SIZE, MAX_VOXEL_MAP_CELLS,
};
pub use math::{Vec3, Vec3i};
pub use voxel::VoxelMap;
