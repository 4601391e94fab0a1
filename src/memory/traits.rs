/*!
 * Memory Traits
 * Placement abstractions consumed by the simulation driver
 */

use super::types::*;
use crate::core::types::{Size, Tick};

/// Lifetime-based segment allocator
pub trait SegmentAllocator {
    /// Try to place a segment of `size` at tick `now` living for `lifetime` ticks.
    ///
    /// `Ok(false)` means no hole was large enough; the layout is left untouched.
    fn place(&mut self, size: Size, now: Tick, lifetime: Tick) -> MemoryResult<bool>;

    /// Turn every segment with `expiry <= now` back into free space, returning the bytes freed
    fn reclaim_expired(&mut self, now: Tick) -> MemoryResult<Size>;

    /// Occupied segments in address order
    fn snapshot(&self) -> Vec<SegmentInfo>;

    /// Segment created by the most recent successful placement, if still present
    fn last_placement(&self) -> Option<SegmentInfo>;

    fn region_size(&self) -> Size;
}

/// Region statistics provider
pub trait RegionInfo {
    fn stats(&self) -> RegionStats;

    /// Get memory pressure level
    fn pressure(&self) -> MemoryPressure {
        self.stats().pressure()
    }
}
