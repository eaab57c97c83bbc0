//! # Fallback Collision Volumes
//!
//! Definitions without their own voxel map get a shared stand-in. The cache
//! only holds a `Weak` to it: the definitions using the stand-in own it
//! collectively, and it is freed when the last of them goes away. The next
//! request after that builds a fresh one.

use parking_lot::Mutex;
use skyway_shared::{Vec3i, VoxelMap, FALLBACK_VOXEL_MAP_SIZE};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

/// Hands out the shared stand-in voxel map.
#[derive(Debug)]
pub struct FallbackVolumeCache {
    size: Vec3i,
    current: Mutex<Weak<VoxelMap>>,
    constructed: AtomicUsize,
}

impl Default for FallbackVolumeCache {
    fn default() -> Self {
        Self::new(FALLBACK_VOXEL_MAP_SIZE)
    }
}

impl FallbackVolumeCache {
    /// Creates a cache building stand-ins of the given dimensions.
    #[must_use]
    pub fn new(size: Vec3i) -> Self {
        Self {
            size,
            current: Mutex::new(Weak::new()),
            constructed: AtomicUsize::new(0),
        }
    }

    /// Dimensions of the maps this cache builds.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Vec3i {
        self.size
    }

    /// Returns the live stand-in, building one if none is alive.
    ///
    /// The lock covers the whole upgrade-or-build sequence, so concurrent
    /// callers never build two maps for one generation.
    pub fn acquire(&self) -> Arc<VoxelMap> {
        let mut current = self.current.lock();
        if let Some(map) = current.upgrade() {
            return map;
        }
        let map = Arc::new(VoxelMap::new(self.size));
        *current = Arc::downgrade(&map);
        self.constructed.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(size = ?self.size, "built fallback voxel map");
        map
    }

    /// Returns true while some definition still holds the stand-in.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.current.lock().strong_count() > 0
    }

    /// Number of stand-ins built over the cache's lifetime.
    #[must_use]
    pub fn constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }
}
