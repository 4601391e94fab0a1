/*!
 * Simulation Driver
 * Clock-advancing retry loop around a segment allocator
 */

use crate::core::types::{Address, Size, Tick};
use crate::memory::{MemoryError, MemoryResult, SegmentAllocator};
use log::debug;
use serde::{Deserialize, Serialize};

/// Outcome of one `add_segment` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRecord {
    pub size: Size,
    pub placed_at: Tick,
    pub location: Address,
    pub expiry: Tick,
}

/// Summary of the work done by a simulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkReport {
    pub placements: u64,
    pub elapsed_ticks: Tick,
    /// Sum of size x lifetime over every requested segment
    pub total_space_time: u64,
    /// `total_space_time / elapsed_ticks`, absent before the clock has moved
    pub mean_occupancy: Option<f64>,
}

/// Owns the wall clock and drives reclaim-then-place until each request fits
#[derive(Debug)]
pub struct Simulator<A: SegmentAllocator> {
    allocator: A,
    clock: Tick,
    placements: u64,
    total_space_time: u64,
}

impl<A: SegmentAllocator> Simulator<A> {
    pub fn new(allocator: A) -> Self {
        Self {
            allocator,
            clock: 0,
            placements: 0,
            total_space_time: 0,
        }
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn placements(&self) -> u64 {
        self.placements
    }

    /// Place a segment, advancing the clock one tick per failed attempt.
    ///
    /// A segment larger than the region could never be placed and is rejected
    /// before the clock moves.
    pub fn add_segment(&mut self, size: Size, lifetime: Tick) -> MemoryResult<PlacementRecord> {
        let region_size = self.allocator.region_size();
        if size > region_size {
            return Err(MemoryError::ExceedsRegion {
                requested: size,
                region_size,
            });
        }
        if size == 0 {
            return Err(MemoryError::InvalidArgument(
                "segment size must be positive".into(),
            ));
        }

        let started = self.clock + 1;
        loop {
            self.clock += 1;
            self.allocator.reclaim_expired(self.clock)?;
            if self.allocator.place(size, self.clock, lifetime)? {
                break;
            }
        }
        if self.clock > started {
            debug!(
                "Segment of {} units waited {} ticks for a hole",
                size,
                self.clock - started
            );
        }

        self.placements += 1;
        self.total_space_time += (size as u64).saturating_mul(lifetime);

        let placed = self
            .allocator
            .last_placement()
            .ok_or(MemoryError::CorruptionDetected(0))?;
        Ok(PlacementRecord {
            size,
            placed_at: self.clock,
            location: placed.location,
            expiry: placed.expiry,
        })
    }

    pub fn report(&self) -> WalkReport {
        let mean_occupancy =
            (self.clock > 0).then(|| self.total_space_time as f64 / self.clock as f64);
        WalkReport {
            placements: self.placements,
            elapsed_ticks: self.clock,
            total_space_time: self.total_space_time,
            mean_occupancy,
        }
    }
}
