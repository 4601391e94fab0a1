/*!
 * Next-Fit Placement
 * Two-phase hole search and segment placement
 */

use super::NextFitAllocator;
use crate::core::types::{NodeId, Size, Tick};
use crate::memory::types::{MemoryError, MemoryResult};
use log::debug;

/// Hole chosen for a placement together with the interval linking to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    prev: Option<NodeId>,
    hole: NodeId,
}

impl NextFitAllocator {
    /// Place a segment of `size` living `lifetime` ticks from `now`.
    ///
    /// Returns `Ok(false)` when no single hole can hold the segment. Free space
    /// scattered over several holes is never combined.
    pub fn place(&mut self, size: Size, now: Tick, lifetime: Tick) -> MemoryResult<bool> {
        if size == 0 {
            return Err(MemoryError::InvalidArgument(
                "segment size must be positive".into(),
            ));
        }
        let expiry = now.checked_add(lifetime).ok_or_else(|| {
            MemoryError::InvalidArgument(format!(
                "lifetime {} overflows the clock at tick {}",
                lifetime, now
            ))
        })?;
        self.observe(now)?;

        let Some(candidate) = self.find_next_fit(size) else {
            debug!(
                "No hole of {} units at tick {} (largest hole: {})",
                size,
                now,
                self.stats().largest_hole
            );
            return Ok(false);
        };

        let segment = self
            .layout
            .carve_segment(candidate.prev, candidate.hole, size, expiry)?;
        self.cursor = segment;

        if let Some(node) = self.layout.get(segment) {
            debug!(
                "Placed {} units at 0x{:x} at tick {}, departs at {}",
                size, node.location, now, expiry
            );
        }
        debug_assert!(self.layout.validate().is_ok());
        Ok(true)
    }

    /// Search after the cursor first, then wrap to the head and stop at the cursor
    fn find_next_fit(&self, size: Size) -> Option<Candidate> {
        let mut prev = self.cursor;
        for (id, node) in self.layout.iter_from(self.cursor).skip(1) {
            if node.fits(size) {
                return Some(Candidate {
                    prev: Some(prev),
                    hole: id,
                });
            }
            prev = id;
        }

        let mut prev = None;
        for (id, node) in self.layout.iter() {
            if node.fits(size) {
                return Some(Candidate { prev, hole: id });
            }
            if id == self.cursor {
                break;
            }
            prev = Some(id);
        }
        None
    }
}
