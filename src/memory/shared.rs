/*!
 * Shared Allocator
 * Thread-safe handle over a single next-fit region
 *
 * Placement and reclamation both read and rewrite the whole chain and the
 * cursor, so every call holds one exclusive lock for its full duration.
 */

use super::allocator::NextFitAllocator;
use super::traits::{RegionInfo, SegmentAllocator};
use super::types::{MemoryResult, RegionStats, SegmentInfo};
use crate::core::types::{Size, Tick};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle; clones share the same region
#[derive(Debug, Clone)]
pub struct SharedAllocator {
    inner: Arc<Mutex<NextFitAllocator>>,
}

impl SharedAllocator {
    pub fn new(region_size: Size) -> MemoryResult<Self> {
        Ok(Self::from_allocator(NextFitAllocator::new(region_size)?))
    }

    pub fn from_allocator(allocator: NextFitAllocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }

    pub fn place(&self, size: Size, now: Tick, lifetime: Tick) -> MemoryResult<bool> {
        self.inner.lock().place(size, now, lifetime)
    }

    pub fn reclaim_expired(&self, now: Tick) -> MemoryResult<Size> {
        self.inner.lock().reclaim_expired(now)
    }

    /// Reclaim then place under one lock, so no other caller observes the gap
    pub fn reclaim_and_place(&self, size: Size, now: Tick, lifetime: Tick) -> MemoryResult<bool> {
        let mut allocator = self.inner.lock();
        allocator.reclaim_expired(now)?;
        allocator.place(size, now, lifetime)
    }

    pub fn snapshot(&self) -> Vec<SegmentInfo> {
        self.inner.lock().snapshot()
    }

    pub fn stats(&self) -> RegionStats {
        self.inner.lock().stats()
    }

    pub fn clock(&self) -> Tick {
        self.inner.lock().clock()
    }

    /// Run `f` against the allocator while holding the lock
    pub fn with<R>(&self, f: impl FnOnce(&NextFitAllocator) -> R) -> R {
        f(&self.inner.lock())
    }
}

impl SegmentAllocator for SharedAllocator {
    fn place(&mut self, size: Size, now: Tick, lifetime: Tick) -> MemoryResult<bool> {
        SharedAllocator::place(self, size, now, lifetime)
    }

    fn reclaim_expired(&mut self, now: Tick) -> MemoryResult<Size> {
        SharedAllocator::reclaim_expired(self, now)
    }

    fn snapshot(&self) -> Vec<SegmentInfo> {
        SharedAllocator::snapshot(self)
    }

    fn last_placement(&self) -> Option<SegmentInfo> {
        self.inner.lock().last_placement()
    }

    fn region_size(&self) -> Size {
        self.inner.lock().region_size()
    }
}

impl RegionInfo for SharedAllocator {
    fn stats(&self) -> RegionStats {
        SharedAllocator::stats(self)
    }
}
