/*!
 * Simulation
 *
 * External driver for the allocator: owns the wall clock, retries failed
 * placements one tick later, and runs randomized workloads.
 */

mod driver;
mod walk;

pub use driver::{PlacementRecord, Simulator, WalkReport};
pub use walk::{run_random_walk, simulate_random_walk, WalkConfig};
