//! # Compass Directions & Banking States
//!
//! Sprite sets are keyed by sixteen compass tokens and grouped by the
//! vehicle's banking state. Only the eight primary directions map onto the
//! ground plane; the other eight are valid keys without a vector.

use skyway_shared::Vec3;
use std::fmt;

/// One of the sixteen named horizontal headings.
///
/// Declaration order is clockwise from north and is the order sprite sets are
/// iterated in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CompassDirection {
    /// North
    N,
    /// North-north-east
    NNE,
    /// North-east
    NE,
    /// North-east-east
    NEE,
    /// East
    E,
    /// South-east-east
    SEE,
    /// South-east
    SE,
    /// South-south-east
    SSE,
    /// South
    S,
    /// South-south-west
    SSW,
    /// South-west
    SW,
    /// South-west-west
    SWW,
    /// West
    W,
    /// North-west-west
    NWW,
    /// North-west
    NW,
    /// North-north-west
    NNW,
}

/// Token table for [`CompassDirection`], in declaration order.
const COMPASS_TOKENS: [(&str, CompassDirection); 16] = [
    ("N", CompassDirection::N),
    ("NNE", CompassDirection::NNE),
    ("NE", CompassDirection::NE),
    ("NEE", CompassDirection::NEE),
    ("E", CompassDirection::E),
    ("SEE", CompassDirection::SEE),
    ("SE", CompassDirection::SE),
    ("SSE", CompassDirection::SSE),
    ("S", CompassDirection::S),
    ("SSW", CompassDirection::SSW),
    ("SW", CompassDirection::SW),
    ("SWW", CompassDirection::SWW),
    ("W", CompassDirection::W),
    ("NWW", CompassDirection::NWW),
    ("NW", CompassDirection::NW),
    ("NNW", CompassDirection::NNW),
];

impl CompassDirection {
    /// All sixteen directions, clockwise from north.
    pub const ALL: [Self; 16] = [
        Self::N,
        Self::NNE,
        Self::NE,
        Self::NEE,
        Self::E,
        Self::SEE,
        Self::SE,
        Self::SSE,
        Self::S,
        Self::SSW,
        Self::SW,
        Self::SWW,
        Self::W,
        Self::NWW,
        Self::NW,
        Self::NNW,
    ];

    /// Parses a markup tag. Matching is exact and case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        COMPASS_TOKENS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|&(_, dir)| dir)
    }

    /// The markup tag for this direction.
    #[must_use]
    pub const fn token(self) -> &'static str {
        COMPASS_TOKENS[self as usize].0
    }

    /// Returns true for the eight directions with a ground-plane vector.
    #[inline]
    #[must_use]
    pub const fn is_primary(self) -> bool {
        direction_vector(self).is_some()
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.token())
    }
}

/// Ground-plane vector for a compass direction.
///
/// Components are in {-1, 0, 1} and the diagonals are NOT unit length;
/// callers normalize. North is -Y. The eight secondary directions return
/// `None`.
#[must_use]
pub const fn direction_vector(dir: CompassDirection) -> Option<Vec3> {
    use CompassDirection as D;
    let (x, y) = match dir {
        D::N => (0.0, -1.0),
        D::NE => (1.0, -1.0),
        D::E => (1.0, 0.0),
        D::SE => (1.0, 1.0),
        D::S => (0.0, 1.0),
        D::SW => (-1.0, 1.0),
        D::W => (-1.0, 0.0),
        D::NW => (-1.0, -1.0),
        D::NNE | D::NEE | D::SEE | D::SSE | D::SSW | D::SWW | D::NWW | D::NNW => return None,
    };
    Some(Vec3::new(x, y, 0.0))
}

/// Visual roll/pitch category selecting which sprite set applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BankingState {
    /// Level flight or driving.
    Flat,
    /// Climbing.
    Ascending,
    /// Diving.
    Descending,
    /// Rolling left.
    BankingLeft,
    /// Rolling right.
    BankingRight,
}

impl BankingState {
    /// All banking states, in projection order.
    pub const ALL: [Self; 5] = [
        Self::Flat,
        Self::Ascending,
        Self::Descending,
        Self::BankingLeft,
        Self::BankingRight,
    ];

    /// Parses a definition child tag.
    ///
    /// The descending set is spelled `decending` in definition files.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.tag() == tag)
    }

    /// The definition child tag for this state.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Ascending => "ascending",
            Self::Descending => "decending",
            Self::BankingLeft => "banking_left",
            Self::BankingRight => "banking_right",
        }
    }

    /// Vertical component applied before normalization, or `None` if sprites
    /// of this state are not placed in direction space.
    ///
    /// Banking sets are kept on the definition but have no projection yet.
    #[must_use]
    pub const fn projection_z(self) -> Option<f32> {
        match self {
            Self::Flat => Some(0.0),
            Self::Ascending => Some(1.0),
            Self::Descending => Some(-1.0),
            Self::BankingLeft | Self::BankingRight => None,
        }
    }
}

impl fmt::Display for BankingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_vectors_are_unit_grid_steps() {
        let primaries: Vec<_> = CompassDirection::ALL
            .into_iter()
            .filter_map(direction_vector)
            .collect();
        assert_eq!(primaries.len(), 8);
        for v in primaries {
            for c in [v.x, v.y] {
                assert!(c == -1.0 || c == 0.0 || c == 1.0, "component {c}");
            }
            assert_eq!(v.z, 0.0);
            assert!(v.length_squared() > 0.0);
        }
    }

    #[test]
    fn test_vector_table() {
        assert_eq!(direction_vector(CompassDirection::N), Some(Vec3::new(0.0, -1.0, 0.0)));
        assert_eq!(direction_vector(CompassDirection::SE), Some(Vec3::new(1.0, 1.0, 0.0)));
        assert_eq!(direction_vector(CompassDirection::W), Some(Vec3::new(-1.0, 0.0, 0.0)));
        assert_eq!(direction_vector(CompassDirection::NNE), None);
        assert!(!CompassDirection::SWW.is_primary());
        assert!(CompassDirection::NW.is_primary());
    }

    #[test]
    fn test_compass_tokens() {
        for dir in CompassDirection::ALL {
            assert_eq!(CompassDirection::from_token(dir.token()), Some(dir));
        }
        assert_eq!(CompassDirection::from_token("NEE"), Some(CompassDirection::NEE));
        assert_eq!(CompassDirection::from_token("n"), None);
        assert_eq!(CompassDirection::from_token("ENE"), None);
    }

    #[test]
    fn test_banking_tags() {
        assert_eq!(BankingState::from_tag("decending"), Some(BankingState::Descending));
        assert_eq!(BankingState::from_tag("descending"), None);
        assert_eq!(BankingState::from_tag("banking_left"), Some(BankingState::BankingLeft));
        assert_eq!(BankingState::BankingRight.projection_z(), None);
        assert_eq!(BankingState::Ascending.projection_z(), Some(1.0));
    }
}
