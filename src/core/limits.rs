/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults, thresholds, and environment variable names.
 * Organized by domain for maintainability and discoverability.
 */

use super::types::{Size, Tick};

// =============================================================================
// REGION DEFAULTS
// =============================================================================

/// Region size used when a caller does not specify one
pub const DEFAULT_REGION_SIZE: Size = 100;

/// Usage percentage at or above which the region reports high pressure
pub const HIGH_USAGE_THRESHOLD: f64 = 80.0;

/// Usage percentage at or above which the region reports critical pressure
pub const CRITICAL_USAGE_THRESHOLD: f64 = 95.0;

// =============================================================================
// RANDOM WALK DEFAULTS
// =============================================================================

/// Smallest segment drawn by the default random walk
pub const DEFAULT_WALK_MIN_SIZE: Size = 5;

/// Largest segment drawn by the default random walk
pub const DEFAULT_WALK_MAX_SIZE: Size = 25;

/// Upper bound of the lifetime drawn by the default random walk
pub const DEFAULT_WALK_MAX_LIFETIME: Tick = 20;

/// Placements performed by the default random walk
pub const DEFAULT_WALK_PLACEMENTS: u64 = 10_000;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Name printed by the `N` command when no operator is configured
pub const DEFAULT_OPERATOR_NAME: &str = "memsim";

/// Environment variable overriding the operator name
pub const ENV_OPERATOR: &str = "MEMSIM_OPERATOR";

/// Environment variable fixing the random walk seed
pub const ENV_SEED: &str = "MEMSIM_SEED";

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "MEMSIM_TRACE_JSON";
