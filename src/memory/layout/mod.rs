/*!
 * Region Layout
 *
 * Address-ordered chain of intervals covering `[0, region_size)`, stored in an
 * arena and linked by slot index.
 *
 * ## Invariants
 *
 * - The chain starts at address 0 and each interval ends where the next begins
 * - The last interval ends at `region_size`
 * - No two consecutive intervals are both holes
 *
 * Mutations never edit a node's kind in place. A replaced interval releases its
 * slot and a freshly inserted node takes its position in the chain, so any
 * slot index held outside the layout can be compared against the replaced one.
 */

mod iter;

pub use iter::Iter;

use super::types::{Interval, MemoryError, MemoryResult};
use crate::core::types::{NodeId, Size, Tick};

/// Arena-backed chain of holes and segments
#[derive(Debug, Clone)]
pub struct RegionLayout {
    slots: Vec<Option<Interval>>,
    vacant: Vec<NodeId>,
    head: NodeId,
    region_size: Size,
}

impl RegionLayout {
    /// Build the initial state: one hole spanning the whole region
    pub fn new(region_size: Size) -> MemoryResult<Self> {
        if region_size == 0 {
            return Err(MemoryError::InvalidArgument(
                "region size must be positive".into(),
            ));
        }

        Ok(Self {
            slots: vec![Some(Interval::hole(0, region_size, None))],
            vacant: Vec::new(),
            head: 0,
            region_size,
        })
    }

    pub fn region_size(&self) -> Size {
        self.region_size
    }

    pub fn head(&self) -> NodeId {
        self.head
    }

    /// First interval of the chain
    pub fn head_node(&self) -> Option<&Interval> {
        self.get(self.head)
    }

    pub fn get(&self, id: NodeId) -> Option<&Interval> {
        self.slots.get(id).and_then(Option::as_ref)
    }

    /// Whether `id` names an interval currently in the chain
    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    pub fn next_of(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|node| node.next)
    }

    /// Walk the chain in address order from the head
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self, Some(self.head))
    }

    /// Walk the chain in address order starting at `id`
    pub fn iter_from(&self, id: NodeId) -> Iter<'_> {
        Iter::new(self, self.contains(id).then_some(id))
    }

    /// Number of intervals in the chain
    pub fn len(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge `first` and its successor into one hole spanning both.
    ///
    /// `prev` is the interval linking to `first`, or `None` when `first` is the head.
    /// Both slots are released; the returned id names the new hole.
    pub fn coalesce(&mut self, prev: Option<NodeId>, first: NodeId) -> MemoryResult<NodeId> {
        let (location, first_size, second) = {
            let node = self.node(first)?;
            let second = node
                .next
                .ok_or(MemoryError::CorruptionDetected(node.end()))?;
            (node.location, node.size, second)
        };
        let (second_size, after) = {
            let node = self.node(second)?;
            (node.size, node.next)
        };

        let merged = self.insert(Interval::hole(location, first_size + second_size, after));
        self.relink(prev, merged)?;
        self.release(first);
        self.release(second);
        Ok(merged)
    }

    /// Replace `id` with a hole of the same extent and successor
    pub fn replace_with_hole(&mut self, prev: Option<NodeId>, id: NodeId) -> MemoryResult<NodeId> {
        let node = self.node(id)?;
        let hole = Interval::hole(node.location, node.size, node.next);

        let replacement = self.insert(hole);
        self.relink(prev, replacement)?;
        self.release(id);
        Ok(replacement)
    }

    /// Occupy the front of hole `id` with a segment of `size`.
    ///
    /// Leftover space becomes a new trailing hole linked after the segment.
    pub fn carve_segment(
        &mut self,
        prev: Option<NodeId>,
        id: NodeId,
        size: Size,
        expiry: Tick,
    ) -> MemoryResult<NodeId> {
        let hole = self.node(id)?.clone();
        if !hole.fits(size) || size == 0 {
            return Err(MemoryError::CorruptionDetected(hole.location));
        }

        let next = if hole.size > size {
            Some(self.insert(Interval::hole(
                hole.location + size,
                hole.size - size,
                hole.next,
            )))
        } else {
            hole.next
        };

        let segment = self.insert(Interval::segment(hole.location, size, expiry, next));
        self.relink(prev, segment)?;
        self.release(id);
        Ok(segment)
    }

    /// Check the partition and maximal-coalescing invariants
    pub fn validate(&self) -> MemoryResult<()> {
        let mut expected = 0;
        let mut previous_was_hole = false;

        for (_, node) in self.iter() {
            if node.location != expected || node.size == 0 {
                return Err(MemoryError::CorruptionDetected(node.location));
            }
            if previous_was_hole && node.is_hole() {
                return Err(MemoryError::CorruptionDetected(node.location));
            }
            previous_was_hole = node.is_hole();
            expected = node.end();
        }

        if expected != self.region_size {
            return Err(MemoryError::CorruptionDetected(expected));
        }
        Ok(())
    }

    fn node(&self, id: NodeId) -> MemoryResult<&Interval> {
        self.get(id).ok_or(MemoryError::CorruptionDetected(id))
    }

    fn insert(&mut self, interval: Interval) -> NodeId {
        match self.vacant.pop() {
            Some(id) => {
                self.slots[id] = Some(interval);
                id
            }
            None => {
                self.slots.push(Some(interval));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, id: NodeId) {
        if let Some(slot) = self.slots.get_mut(id) {
            if slot.take().is_some() {
                self.vacant.push(id);
            }
        }
    }

    fn relink(&mut self, prev: Option<NodeId>, to: NodeId) -> MemoryResult<()> {
        match prev {
            None => self.head = to,
            Some(prev) => match self.slots.get_mut(prev).and_then(Option::as_mut) {
                Some(node) => node.next = Some(to),
                None => return Err(MemoryError::CorruptionDetected(prev)),
            },
        }
        Ok(())
    }
}
