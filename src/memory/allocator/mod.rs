/*!
 * Next-Fit Allocator
 *
 * Placement engine over a [`RegionLayout`] with lifetime-based deallocation.
 *
 * ## Placement
 *
 * Next-fit: the search resumes right after the last placement and wraps to the
 * start of the region, stopping once it reaches the last placement again.
 * A larger hole is split; the remainder stays free right after the new segment.
 *
 * ## Reclamation
 *
 * Segments whose expiry has passed are turned back into holes in one
 * left-to-right pass, merging every run of free or expired intervals.
 */

mod placement;
mod reclaim;

use super::layout::RegionLayout;
use super::traits::{RegionInfo, SegmentAllocator};
use super::types::{MemoryError, MemoryResult, RegionStats, SegmentInfo};
use crate::core::types::{NodeId, Size, Tick};
use log::info;

/// Single-region next-fit allocator
#[derive(Debug, Clone)]
pub struct NextFitAllocator {
    layout: RegionLayout,
    // Last placement; may name a hole once that segment has been reclaimed
    cursor: NodeId,
    // Latest tick observed by any operation
    clock: Tick,
}

impl NextFitAllocator {
    pub fn new(region_size: Size) -> MemoryResult<Self> {
        let layout = RegionLayout::new(region_size)?;
        info!("Region created with {} units as a single hole", region_size);
        Ok(Self {
            cursor: layout.head(),
            layout,
            clock: 0,
        })
    }

    pub fn layout(&self) -> &RegionLayout {
        &self.layout
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    pub fn region_size(&self) -> Size {
        self.layout.region_size()
    }

    pub fn snapshot(&self) -> Vec<SegmentInfo> {
        self.layout
            .iter()
            .filter_map(|(_, node)| SegmentInfo::from_interval(node))
            .collect()
    }

    pub fn last_placement(&self) -> Option<SegmentInfo> {
        self.layout
            .get(self.cursor)
            .and_then(SegmentInfo::from_interval)
    }

    /// Total size of all occupied segments
    pub fn occupied(&self) -> Size {
        self.layout
            .iter()
            .filter(|(_, node)| !node.is_hole())
            .map(|(_, node)| node.size)
            .sum()
    }

    pub fn stats(&self) -> RegionStats {
        let region_size = self.layout.region_size();
        let mut stats = RegionStats {
            region_size,
            occupied: 0,
            free: 0,
            segments: 0,
            holes: 0,
            largest_hole: 0,
            usage_percentage: 0.0,
        };

        for (_, node) in self.layout.iter() {
            if node.is_hole() {
                stats.holes += 1;
                stats.free += node.size;
                stats.largest_hole = stats.largest_hole.max(node.size);
            } else {
                stats.segments += 1;
                stats.occupied += node.size;
            }
        }
        stats.usage_percentage = (stats.occupied as f64 / region_size as f64) * 100.0;
        stats
    }

    /// Reject ticks earlier than the latest one observed
    fn observe(&mut self, now: Tick) -> MemoryResult<()> {
        if now < self.clock {
            return Err(MemoryError::InvalidArgument(format!(
                "clock moved backwards from {} to {}",
                self.clock, now
            )));
        }
        self.clock = now;
        Ok(())
    }
}

impl SegmentAllocator for NextFitAllocator {
    fn place(&mut self, size: Size, now: Tick, lifetime: Tick) -> MemoryResult<bool> {
        NextFitAllocator::place(self, size, now, lifetime)
    }

    fn reclaim_expired(&mut self, now: Tick) -> MemoryResult<Size> {
        NextFitAllocator::reclaim_expired(self, now)
    }

    fn snapshot(&self) -> Vec<SegmentInfo> {
        NextFitAllocator::snapshot(self)
    }

    fn last_placement(&self) -> Option<SegmentInfo> {
        NextFitAllocator::last_placement(self)
    }

    fn region_size(&self) -> Size {
        NextFitAllocator::region_size(self)
    }
}

impl RegionInfo for NextFitAllocator {
    fn stats(&self) -> RegionStats {
        NextFitAllocator::stats(self)
    }
}
