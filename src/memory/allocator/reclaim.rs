/*!
 * Expired Segment Reclamation
 * Converts departed segments into holes and merges free runs
 */

use super::NextFitAllocator;
use crate::core::types::{NodeId, Size, Tick};
use crate::memory::types::MemoryResult;
use log::{debug, warn};

impl NextFitAllocator {
    /// Free every segment with `expiry <= now`, merging it with neighbouring holes.
    ///
    /// Returns the total size of the segments freed. Calling it again with the
    /// same `now` changes nothing.
    pub fn reclaim_expired(&mut self, now: Tick) -> MemoryResult<Size> {
        self.observe(now)?;

        let mut reclaimed = 0;
        let mut prev: Option<NodeId> = None;
        let mut current = Some(self.layout.head());

        while let Some(id) = current {
            let Some(node) = self.layout.get(id) else {
                break;
            };
            let reclaimable = node.is_reclaimable(now);
            let expired = node.is_expired(now);
            let node_size = node.size;
            let successor = node.next;
            let successor_state = successor
                .and_then(|next| self.layout.get(next))
                .map(|next| (next.is_reclaimable(now), next.is_expired(now), next.size));

            match successor_state {
                // Merge and look at the merged hole again against its new successor
                Some((true, successor_expired, successor_size)) if reclaimable => {
                    if expired {
                        reclaimed += node_size;
                    }
                    if successor_expired {
                        reclaimed += successor_size;
                    }
                    let merged = self.layout.coalesce(prev, id)?;
                    self.redirect_cursor(id, successor, merged);
                    current = Some(merged);
                }
                _ if expired => {
                    reclaimed += node_size;
                    let hole = self.layout.replace_with_hole(prev, id)?;
                    self.redirect_cursor(id, successor, hole);
                    prev = Some(hole);
                    current = successor;
                }
                _ => {
                    prev = Some(id);
                    current = successor;
                }
            }
        }

        if !self.layout.contains(self.cursor) {
            warn!(
                "Placement cursor {} left the region layout, resetting to head",
                self.cursor
            );
            self.cursor = self.layout.head();
        }

        if reclaimed > 0 {
            debug!("Reclaimed {} units at tick {}", reclaimed, now);
        }
        debug_assert!(self.layout.validate().is_ok());
        Ok(reclaimed)
    }

    /// Point the cursor at `hole` when it named the replaced node or its successor
    fn redirect_cursor(&mut self, replaced: NodeId, successor: Option<NodeId>, hole: NodeId) {
        if self.cursor == replaced || Some(self.cursor) == successor {
            self.cursor = hole;
        }
    }
}
