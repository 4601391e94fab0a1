/*!
 * Core Types
 * Common types used across the simulator
 */

/// Offset of the first unit of an interval within the region
pub type Address = usize;

/// Length of an interval, in abstract units
pub type Size = usize;

/// Discrete tick of the external clock
pub type Tick = u64;

/// Arena slot naming an interval in the region layout
pub type NodeId = usize;
