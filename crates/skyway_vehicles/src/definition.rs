//! # Vehicle Definitions
//!
//! A definition is the immutable template for one vehicle type, read from a
//! document like:
//!
//! ```xml
//! <vehicle id="hoverbike" type="flying" sizeX="1" sizeY="2" sizeZ="1">
//!     <flat>      <N>hover/flat_n.png</N> ... </flat>
//!     <ascending> <N>hover/up_n.png</N>   ... </ascending>
//!     <decending> <N>hover/down_n.png</N> ... </decending>
//!     <banking_left>  ... </banking_left>
//!     <banking_right> ... </banking_right>
//! </vehicle>
//! ```
//!
//! ## Direction Space
//!
//! After parsing, every projected sprite is placed in 3D direction space so
//! a renderer can pick the sprite nearest to the movement direction:
//!
//! ```text
//! flat:      normalize(x, y,  0)
//! ascending: normalize(x, y, +1)
//! decending: normalize(x, y, -1)
//! ```
//!
//! Banking sets are parsed and kept but not projected.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use skyway_shared::{Vec3, VoxelMap};

use crate::diagnostics::Diagnostics;
use crate::direction::{direction_vector, BankingState, CompassDirection};
use crate::error::{VehicleError, VehicleResult};
use crate::image::{ImageHandle, ImageResolver};
use crate::markup::MarkupNode;
use crate::sprites::{parse_directional_sprites, SpriteSet};
use crate::volume_cache::FallbackVolumeCache;

/// How a vehicle moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VehicleType {
    /// Road-bound.
    Ground,
    /// Airborne.
    Flying,
}

impl VehicleType {
    /// Parses the `type` attribute. Only the exact lowercase names match.
    #[must_use]
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "ground" => Some(Self::Ground),
            "flying" => Some(Self::Flying),
            _ => None,
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ground => "ground",
            Self::Flying => "flying",
        })
    }
}

/// A sprite placed in direction space.
#[derive(Clone, Debug)]
pub struct SpriteSlot {
    /// Banking set the sprite came from.
    pub banking: BankingState,
    /// Compass key it was listed under.
    pub compass: CompassDirection,
    /// Unit direction vector.
    pub direction: Vec3,
    /// The image, or `None` if it failed to load.
    pub sprite: Option<ImageHandle>,
}

/// Immutable template for one vehicle type.
#[derive(Clone, Debug)]
pub struct VehicleDefinition {
    /// Unique identity.
    pub name: String,
    /// Movement type.
    pub vehicle_type: VehicleType,
    /// Bounding size. Not validated.
    pub size: Vec3,
    /// Parsed sprite sets by banking state, including unprojected ones.
    pub sprites: BTreeMap<BankingState, SpriteSet>,
    /// Projected sprites: flat, then ascending, then descending.
    pub directional_sprites: Vec<SpriteSlot>,
    /// Collision volume, possibly the shared fallback.
    pub voxel_map: Arc<VoxelMap>,
}

impl VehicleDefinition {
    /// Sprite set for a banking state, if the definition has one.
    #[must_use]
    pub fn sprite_set(&self, banking: BankingState) -> Option<&SpriteSet> {
        self.sprites.get(&banking)
    }

    /// Projected sprites belonging to one banking state.
    pub fn slots(&self, banking: BankingState) -> impl Iterator<Item = &SpriteSlot> {
        self.directional_sprites
            .iter()
            .filter(move |slot| slot.banking == banking)
    }
}

/// Places the projectable sprite sets in direction space.
///
/// Sets are visited flat, ascending, descending, each clockwise from north.
/// Secondary compass directions have no vector and are skipped with a
/// warning.
pub fn project_sprites(
    sprites: &BTreeMap<BankingState, SpriteSet>,
    diags: &mut Diagnostics,
) -> Vec<SpriteSlot> {
    let mut slots = Vec::new();

    for banking in BankingState::ALL {
        let (Some(z), Some(set)) = (banking.projection_z(), sprites.get(&banking)) else {
            continue;
        };
        for (&compass, sprite) in set {
            let Some(direction) = direction_vector(compass)
                .and_then(|v| v.with_z(z).try_normalize())
            else {
                diags.warn(format!(
                    "Direction {compass} in <{banking}> is unsupported for 3D projection"
                ));
                continue;
            };
            slots.push(SpriteSlot {
                banking,
                compass,
                direction,
                sprite: sprite.clone(),
            });
        }
    }

    slots
}

/// Builds one [`VehicleDefinition`] from its markup.
pub struct DefinitionBuilder<'a, R: ?Sized> {
    images: &'a R,
    volumes: &'a FallbackVolumeCache,
    voxel_map: Option<Arc<VoxelMap>>,
}

impl<'a, R: ImageResolver + ?Sized> DefinitionBuilder<'a, R> {
    /// Creates a builder resolving images through `images` and taking
    /// stand-in volumes from `volumes`.
    #[must_use]
    pub fn new(images: &'a R, volumes: &'a FallbackVolumeCache) -> Self {
        Self {
            images,
            volumes,
            voxel_map: None,
        }
    }

    /// Attaches an explicit collision volume. The fallback cache is then not
    /// consulted.
    #[must_use]
    pub fn with_voxel_map(mut self, map: Arc<VoxelMap>) -> Self {
        self.voxel_map = Some(map);
        self
    }

    /// Parses `root` into a definition.
    ///
    /// # Errors
    ///
    /// Returns error if `id` is missing or `type` is not `flying`/`ground`.
    /// Every other problem is reported to `diags` and the definition is still
    /// built.
    pub fn build<N: MarkupNode>(
        self,
        root: &N,
        diags: &mut Diagnostics,
    ) -> VehicleResult<VehicleDefinition> {
        diags.set_scope(None);
        let Some(name) = root.attribute("id") else {
            let err = VehicleError::MissingAttribute {
                element: root.tag().to_owned(),
                attribute: "id",
            };
            diags.error(err.to_string());
            return Err(err);
        };
        let name = name.to_owned();
        diags.set_scope(Some(name.as_str()));

        let type_attr = root.attribute("type").unwrap_or_default();
        let Some(vehicle_type) = VehicleType::from_attribute(type_attr) else {
            let err = VehicleError::UnknownVehicleType {
                definition: name,
                found: type_attr.to_owned(),
            };
            diags.error(err.to_string());
            diags.set_scope(None);
            return Err(err);
        };

        let mut read_size = |attr: &str| {
            root.float_attribute(attr).unwrap_or_else(|raw| {
                diags.warn(format!("Invalid {attr} \"{raw}\", using 0"));
                0.0
            })
        };
        let size = Vec3::new(read_size("sizeX"), read_size("sizeY"), read_size("sizeZ"));

        let mut sprites = BTreeMap::new();
        for child in root.child_elements() {
            let Some(banking) = BankingState::from_tag(child.tag()) else {
                diags.error(format!("Unknown vehicle tag \"{}\"", child.tag()));
                continue;
            };
            let set = parse_directional_sprites(&child, self.images, diags);
            if sprites.insert(banking, set).is_some() {
                diags.warn(format!("Replacing sprite set <{banking}>"));
            }
        }

        let directional_sprites = project_sprites(&sprites, diags);

        let voxel_map = match self.voxel_map {
            Some(map) => map,
            None => {
                diags.warn(format!("Using stub voxel map for vehicle \"{name}\""));
                self.volumes.acquire()
            }
        };

        diags.set_scope(None);
        Ok(VehicleDefinition {
            name,
            vehicle_type,
            size,
            sprites,
            directional_sprites,
            voxel_map,
        })
    }
}
