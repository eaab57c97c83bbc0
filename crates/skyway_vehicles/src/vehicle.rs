//! # Runtime Vehicles
//!
//! A vehicle is one instance of a definition, owned by an organisation. The
//! definition is shared, never copied; the organisation is only referenced by
//! id.

use std::fmt;
use std::sync::Arc;

use skyway_shared::Vec3;

use crate::definition::{SpriteSlot, VehicleDefinition};
use crate::direction::BankingState;
use crate::lookup::lookup_sprite;

/// Unique identifier for an organisation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct OrganisationId(pub u32);

impl fmt::Display for OrganisationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "org#{}", self.0)
    }
}

/// A faction that owns vehicles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organisation {
    /// Identifier vehicles refer to.
    pub id: OrganisationId,
    /// Display name.
    pub name: String,
}

impl Organisation {
    /// Creates a new organisation.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: OrganisationId(id),
            name: name.into(),
        }
    }
}

/// A live vehicle built from a definition.
#[derive(Clone, Debug)]
pub struct Vehicle {
    definition: Arc<VehicleDefinition>,
    owner: OrganisationId,
    heading: Vec3,
    banking: BankingState,
}

impl Vehicle {
    /// Creates a level vehicle facing north.
    #[must_use]
    pub fn new(definition: Arc<VehicleDefinition>, owner: &Organisation) -> Self {
        Self {
            definition,
            owner: owner.id,
            heading: Vec3::new(0.0, -1.0, 0.0),
            banking: BankingState::Flat,
        }
    }

    /// The shared definition.
    #[inline]
    #[must_use]
    pub fn definition(&self) -> &Arc<VehicleDefinition> {
        &self.definition
    }

    /// Owning organisation.
    #[inline]
    #[must_use]
    pub const fn owner(&self) -> OrganisationId {
        self.owner
    }

    /// Current unit heading.
    #[inline]
    #[must_use]
    pub const fn heading(&self) -> Vec3 {
        self.heading
    }

    /// Current banking state.
    #[inline]
    #[must_use]
    pub const fn banking(&self) -> BankingState {
        self.banking
    }

    /// Points the vehicle along `direction`. A zero vector is ignored.
    pub fn set_heading(&mut self, direction: Vec3) {
        if let Some(unit) = direction.try_normalize() {
            self.heading = unit;
        }
    }

    /// Changes the banking state.
    pub fn set_banking(&mut self, banking: BankingState) {
        self.banking = banking;
    }

    /// Sprite slot for the current heading and banking state.
    #[must_use]
    pub fn current_sprite(&self) -> Option<&SpriteSlot> {
        lookup_sprite(&self.definition, self.banking, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::DefinitionBuilder;
    use crate::diagnostics::Diagnostics;
    use crate::direction::CompassDirection;
    use crate::image::ImageCatalog;
    use crate::volume_cache::FallbackVolumeCache;

    fn definition() -> Arc<VehicleDefinition> {
        let doc = roxmltree::Document::parse(
            r#"<vehicle id="car" type="ground"><flat><N>n</N><E>e</E><S>s</S><W>w</W></flat></vehicle>"#,
        )
        .unwrap();
        let images = ImageCatalog::with_names(["n", "e", "s", "w"]);
        let cache = FallbackVolumeCache::default();
        let def = DefinitionBuilder::new(&images, &cache)
            .build(&doc.root_element(), &mut Diagnostics::new())
            .unwrap();
        Arc::new(def)
    }

    #[test]
    fn test_vehicle_shares_definition() {
        let def = definition();
        let owner = Organisation::new(7, "Megapol");
        let vehicle = Vehicle::new(Arc::clone(&def), &owner);

        assert!(Arc::ptr_eq(vehicle.definition(), &def));
        assert_eq!(vehicle.owner(), OrganisationId(7));
        assert_eq!(vehicle.banking(), BankingState::Flat);
    }

    #[test]
    fn test_current_sprite_follows_heading() {
        let owner = Organisation::new(1, "Marsec");
        let mut vehicle = Vehicle::new(definition(), &owner);

        assert_eq!(vehicle.current_sprite().unwrap().compass, CompassDirection::N);

        vehicle.set_heading(Vec3::new(-3.0, 0.5, 0.0));
        assert_eq!(vehicle.current_sprite().unwrap().compass, CompassDirection::W);
        assert!((vehicle.heading().length() - 1.0).abs() < 1e-6);

        vehicle.set_heading(Vec3::ZERO);
        assert_eq!(vehicle.current_sprite().unwrap().compass, CompassDirection::W);

        vehicle.set_banking(BankingState::Ascending);
        assert!(vehicle.current_sprite().is_none());
    }
}
