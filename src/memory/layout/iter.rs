/*!
 * Layout Traversal
 */

use super::RegionLayout;
use crate::core::types::NodeId;
use crate::memory::types::Interval;

/// Address-ordered walk over `(slot, interval)` pairs
pub struct Iter<'a> {
    layout: &'a RegionLayout,
    current: Option<NodeId>,
}

impl<'a> Iter<'a> {
    pub(super) fn new(layout: &'a RegionLayout, start: Option<NodeId>) -> Self {
        Self {
            layout,
            current: start,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (NodeId, &'a Interval);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.layout.get(id)?;
        self.current = node.next;
        Some((id, node))
    }
}
