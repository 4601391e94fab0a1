/*!
 * Segment Memory Simulator Library
 *
 * Next-fit placement of fixed-lifetime segments into a single contiguous
 * region, with the clock-driven driver and command shell built on top.
 */

pub mod config;
pub mod core;
pub mod memory;
pub mod monitoring;
pub mod shell;
pub mod simulation;

// Re-exports
pub use config::{ConfigError, SimConfig};
pub use memory::{
    MemoryError, MemoryResult, NextFitAllocator, RegionInfo, RegionLayout, RegionStats,
    SegmentAllocator, SegmentInfo, SharedAllocator,
};
pub use monitoring::init_tracing;
pub use shell::{Command, Shell, ShellError};
pub use simulation::{run_random_walk, PlacementRecord, Simulator, WalkConfig, WalkReport};
