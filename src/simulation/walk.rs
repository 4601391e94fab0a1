/*!
 * Random Walk
 * Randomized placement workload over a fresh region
 */

use super::driver::{Simulator, WalkReport};
use crate::core::limits::*;
use crate::core::types::{Size, Tick};
use crate::memory::{MemoryError, MemoryResult, NextFitAllocator};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Parameters of a random walk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    pub region_size: Size,
    /// Smallest segment size, inclusive
    pub min_size: Size,
    /// Largest segment size, inclusive
    pub max_size: Size,
    /// Lifetimes are drawn from `1..=max_lifetime`
    pub max_lifetime: Tick,
    /// Number of successful placements to perform
    pub placements: u64,
    /// Fixed seed for reproducible runs
    pub seed: Option<u64>,
}

impl WalkConfig {
    pub fn new(
        region_size: Size,
        min_size: Size,
        max_size: Size,
        max_lifetime: Tick,
        placements: u64,
    ) -> Self {
        Self {
            region_size,
            min_size,
            max_size,
            max_lifetime,
            placements,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> MemoryResult<()> {
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(MemoryError::InvalidArgument(format!(
                "segment sizes must satisfy 1 <= min ({}) <= max ({})",
                self.min_size, self.max_size
            )));
        }
        if self.max_size > self.region_size {
            return Err(MemoryError::ExceedsRegion {
                requested: self.max_size,
                region_size: self.region_size,
            });
        }
        if self.max_lifetime == 0 {
            return Err(MemoryError::InvalidArgument(
                "maximum lifetime must be at least one tick".into(),
            ));
        }
        Ok(())
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_REGION_SIZE,
            DEFAULT_WALK_MIN_SIZE,
            DEFAULT_WALK_MAX_SIZE,
            DEFAULT_WALK_MAX_LIFETIME,
            DEFAULT_WALK_PLACEMENTS,
        )
    }
}

/// Place `config.placements` random segments into a fresh region
pub fn run_random_walk(config: &WalkConfig) -> MemoryResult<WalkReport> {
    Ok(simulate_random_walk(config)?.report())
}

/// Run a random walk and hand back the simulator in its final state
pub fn simulate_random_walk(config: &WalkConfig) -> MemoryResult<Simulator<NextFitAllocator>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut sim = Simulator::new(NextFitAllocator::new(config.region_size)?);

    while sim.placements() < config.placements {
        let size = rng.gen_range(config.min_size..=config.max_size);
        let lifetime = rng.gen_range(1..=config.max_lifetime);
        sim.add_segment(size, lifetime)?;
    }

    let report = sim.report();
    info!(
        "Random walk finished: {} placements over {} ticks, mean occupancy {:?}",
        report.placements, report.elapsed_ticks, report.mean_occupancy
    );
    Ok(sim)
}
