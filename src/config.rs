/*!
 * Simulator Configuration
 * Settings loaded from the process environment
 */

use crate::core::limits::{DEFAULT_OPERATOR_NAME, ENV_OPERATOR, ENV_SEED, ENV_TRACE_JSON};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {variable}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Unset the variable or provide a value of the expected type.")
    )]
    InvalidValue { variable: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Printed by the `N` command
    pub operator_name: String,
    /// Seed for random walks; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Emit JSON traces instead of compact text
    pub trace_json: bool,
}

impl SimConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - MEMSIM_OPERATOR: name printed by `N` (default: memsim)
    /// - MEMSIM_SEED: random walk seed (default: entropy)
    /// - MEMSIM_TRACE_JSON: enable JSON trace output (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let operator_name = lookup(ENV_OPERATOR)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_OPERATOR_NAME.to_string());

        let seed = match lookup(ENV_SEED) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    variable: ENV_SEED.to_string(),
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        let trace_json = lookup(ENV_TRACE_JSON)
            .map(|v| v == "1" || v == "true")
            .unwrap_or(false);

        Ok(Self {
            operator_name,
            seed,
            trace_json,
        })
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            operator_name: DEFAULT_OPERATOR_NAME.to_string(),
            seed: None,
            trace_json: false,
        }
    }
}
