//! # SKYWAY Vehicles
//!
//! Data-driven vehicle types for the SKYWAY engine.
//!
//! ## Design Principles
//!
//! 1. **External definitions** - All vehicle data lives in XML files
//! 2. **Keep loading** - A bad entry is reported and skipped, never fatal to the pass
//! 3. **Direction space** - Compass sprite sets become unit vectors once, at load time
//! 4. **Shared, immutable data** - Definitions, images and voxel maps are `Arc`s
//!
//! ## Thread Safety
//!
//! Populate the registry from one thread, then share it. The fallback volume
//! cache alone tolerates concurrent use during loading.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use skyway_vehicles::{BankingState, DirectoryImageResolver, Organisation, VehicleRegistry};
//!
//! let images = Arc::new(DirectoryImageResolver::new("data"));
//! let mut registry = VehicleRegistry::new(images);
//! registry.load_dir("data/vehicles")?;
//!
//! let owner = Organisation::new(1, "Megapol");
//! let mut hawk = registry.create("police_hovercar", &owner)?;
//! hawk.set_banking(BankingState::Ascending);
//! let sprite = hawk.current_sprite();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod definition;
pub mod diagnostics;
pub mod direction;
pub mod error;
pub mod image;
pub mod lookup;
pub mod markup;
pub mod registry;
pub mod sprites;
pub mod vehicle;
pub mod volume_cache;

pub use config::LoaderConfig;
pub use definition::{project_sprites, DefinitionBuilder, SpriteSlot, VehicleDefinition, VehicleType};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use direction::{direction_vector, BankingState, CompassDirection};
pub use error::{VehicleError, VehicleResult};
pub use image::{DirectoryImageResolver, Image, ImageCatalog, ImageHandle, ImageResolver};
pub use lookup::lookup_sprite;
pub use markup::MarkupNode;
pub use registry::{LoadSummary, SharedImageResolver, VehicleRegistry};
pub use sprites::{parse_directional_sprites, SpriteSet};
pub use vehicle::{Organisation, OrganisationId, Vehicle};
pub use volume_cache::FallbackVolumeCache;
