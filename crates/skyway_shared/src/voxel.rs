//! Voxel occupancy grids used as collision volumes.
//!
//! A map is built once, then shared read-only behind an `Arc` by every
//! definition that references it.

use crate::math::Vec3i;

/// Bits per occupancy word.
const WORD_BITS: usize = u64::BITS as usize;

/// A dense 3D occupancy grid.
///
/// Cells are stored X-major, one bit per cell. A new map is entirely empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelMap {
    size: Vec3i,
    words: Vec<u64>,
}

impl VoxelMap {
    /// Creates an empty map with the given dimensions.
    ///
    /// Negative extents are treated as zero. Dimensions whose cell count
    /// overflows `usize` yield an empty 0x0x0 map.
    #[must_use]
    pub fn new(size: Vec3i) -> Self {
        let Some(cells) = size.volume() else {
            return Self {
                size: Vec3i::default(),
                words: Vec::new(),
            };
        };
        Self {
            size,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        }
    }

    /// Dimensions the map was created with.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec3i {
        self.size
    }

    /// Returns true if the cell lies inside the map.
    #[inline]
    #[must_use]
    pub const fn contains(&self, cell: Vec3i) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.z >= 0
            && cell.x < self.size.x
            && cell.y < self.size.y
            && cell.z < self.size.z
    }

    fn index(&self, cell: Vec3i) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        // contains() guarantees every component is non-negative
        let (x, y, z) = (cell.x as usize, cell.y as usize, cell.z as usize);
        let (sx, sy) = (self.size.x as usize, self.size.y as usize);
        Some(x + sx * (y + sy * z))
    }

    /// Returns true if the cell is occupied. Out-of-range cells are empty.
    #[must_use]
    pub fn is_solid(&self, cell: Vec3i) -> bool {
        self.index(cell)
            .is_some_and(|i| self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0)
    }

    /// Marks a cell occupied or empty.
    ///
    /// Returns false (and changes nothing) if the cell is out of range.
    pub fn set_solid(&mut self, cell: Vec3i, solid: bool) -> bool {
        let Some(i) = self.index(cell) else {
            return false;
        };
        let bit = 1u64 << (i % WORD_BITS);
        if solid {
            self.words[i / WORD_BITS] |= bit;
        } else {
            self.words[i / WORD_BITS] &= !bit;
        }
        true
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn solid_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_empty() {
        let map = VoxelMap::new(Vec3i::new(32, 32, 16));
        assert_eq!(map.size(), Vec3i::new(32, 32, 16));
        assert_eq!(map.solid_count(), 0);
        assert!(!map.is_solid(Vec3i::new(0, 0, 0)));
    }

    #[test]
    fn test_set_and_query_cells() {
        let mut map = VoxelMap::new(Vec3i::new(4, 4, 4));
        assert!(map.set_solid(Vec3i::new(3, 2, 1), true));
        assert!(map.is_solid(Vec3i::new(3, 2, 1)));
        assert!(!map.is_solid(Vec3i::new(1, 2, 3)));
        assert_eq!(map.solid_count(), 1);

        assert!(map.set_solid(Vec3i::new(3, 2, 1), false));
        assert_eq!(map.solid_count(), 0);
    }

    #[test]
    fn test_overflowing_dimensions_give_empty_map() {
        let mut map = VoxelMap::new(Vec3i::new(i32::MAX, i32::MAX, i32::MAX));
        assert_eq!(map.size(), Vec3i::default());
        assert!(!map.set_solid(Vec3i::new(0, 0, 0), true));
        assert_eq!(map.solid_count(), 0);
    }

    #[test]
    fn test_out_of_range_cells() {
        let mut map = VoxelMap::new(Vec3i::new(2, 2, 2));
        assert!(!map.contains(Vec3i::new(2, 0, 0)));
        assert!(!map.contains(Vec3i::new(0, -1, 0)));
        assert!(!map.set_solid(Vec3i::new(0, 0, 2), true));
        assert!(!map.is_solid(Vec3i::new(-1, 0, 0)));
    }
}
