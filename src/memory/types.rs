/*!
 * Memory Types
 * Common types for region layout and placement
 */

use crate::core::limits::{CRITICAL_USAGE_THRESHOLD, HIGH_USAGE_THRESHOLD};
use crate::core::types::{Address, NodeId, Size, Tick};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// A placement that does not fit is not an error; `place` reports it as `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MemoryError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(memory::invalid_argument),
        help("Sizes must be positive and the clock must never move backwards.")
    )]
    InvalidArgument(String),

    #[error("Segment of {requested} units can never fit in a region of {region_size} units")]
    #[diagnostic(
        code(memory::exceeds_region),
        help("Retrying would never succeed. Request at most the region size.")
    )]
    ExceedsRegion { requested: Size, region_size: Size },

    #[error("Region layout corruption detected at 0x{0:x}")]
    #[diagnostic(code(memory::corruption))]
    CorruptionDetected(Address),
}

/// Whether an interval is free or occupied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntervalKind {
    Hole,
    Segment { expiry: Tick },
}

/// One node of the address-ordered chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub location: Address,
    pub size: Size,
    pub kind: IntervalKind,
    #[serde(skip)]
    pub next: Option<NodeId>,
}

impl Interval {
    pub fn hole(location: Address, size: Size, next: Option<NodeId>) -> Self {
        Self {
            location,
            size,
            kind: IntervalKind::Hole,
            next,
        }
    }

    pub fn segment(location: Address, size: Size, expiry: Tick, next: Option<NodeId>) -> Self {
        Self {
            location,
            size,
            kind: IntervalKind::Segment { expiry },
            next,
        }
    }

    /// One past the last address covered
    pub fn end(&self) -> Address {
        self.location + self.size
    }

    pub fn is_hole(&self) -> bool {
        matches!(self.kind, IntervalKind::Hole)
    }

    pub fn expiry(&self) -> Option<Tick> {
        match self.kind {
            IntervalKind::Hole => None,
            IntervalKind::Segment { expiry } => Some(expiry),
        }
    }

    /// Segment whose lifetime has ended at `now`
    pub fn is_expired(&self, now: Tick) -> bool {
        self.expiry().map_or(false, |expiry| expiry <= now)
    }

    /// Hole, or a segment that may be turned into one at `now`
    pub fn is_reclaimable(&self, now: Tick) -> bool {
        self.is_hole() || self.is_expired(now)
    }

    /// Hole large enough for a segment of `size`
    pub fn fits(&self, size: Size) -> bool {
        self.is_hole() && self.size >= size
    }
}

/// Occupied segment as reported to the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentInfo {
    pub location: Address,
    pub size: Size,
    pub expiry: Tick,
}

impl SegmentInfo {
    pub(crate) fn from_interval(interval: &Interval) -> Option<Self> {
        interval.expiry().map(|expiry| Self {
            location: interval.location,
            size: interval.size,
            expiry,
        })
    }
}

/// Region statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionStats {
    pub region_size: Size,
    pub occupied: Size,
    pub free: Size,
    pub segments: usize,
    pub holes: usize,
    pub largest_hole: Size,
    pub usage_percentage: f64,
}

impl RegionStats {
    pub fn pressure(&self) -> MemoryPressure {
        if self.usage_percentage >= CRITICAL_USAGE_THRESHOLD {
            MemoryPressure::Critical
        } else if self.usage_percentage >= HIGH_USAGE_THRESHOLD {
            MemoryPressure::High
        } else if self.usage_percentage >= 60.0 {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }

    /// Free space that cannot serve a request as large as all of it
    pub fn is_fragmented(&self) -> bool {
        self.holes > 1
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
