//! # Sprite Lookup
//!
//! Picks the sprite to draw for a movement direction: among the slots of the
//! requested banking state, the one whose direction has the largest dot
//! product with the movement direction wins. On a tie the slot projected
//! first wins.

use skyway_shared::Vec3;

use crate::definition::{SpriteSlot, VehicleDefinition};
use crate::direction::BankingState;

/// Returns the slot nearest in angle to `direction`.
///
/// `direction` should be unit length; only the ordering of dot products
/// matters, so any positive scale gives the same answer. Returns `None` if
/// the banking state has no projected slots (always the case for the
/// banking-left and banking-right sets).
#[must_use]
pub fn lookup_sprite(
    definition: &VehicleDefinition,
    banking: BankingState,
    direction: Vec3,
) -> Option<&SpriteSlot> {
    let mut best: Option<(&SpriteSlot, f32)> = None;
    for slot in definition.slots(banking) {
        let score = slot.direction.dot(direction);
        // strict: earlier slots keep ties
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((slot, score));
        }
    }
    best.map(|(slot, _)| slot)
}
