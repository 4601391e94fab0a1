/*!
 * Segment Memory Simulator - Main Entry Point
 *
 * Reads shell commands from stdin and writes protocol output to stdout.
 */

use anyhow::Context;
use segment_memory_sim::monitoring::span_operation;
use segment_memory_sim::{init_tracing, Shell, SimConfig};
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let config = SimConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    info!(
        operator = %config.operator_name,
        seed = ?config.seed,
        "Segment memory simulator starting"
    );

    let session = span_operation("session");
    let _entered = session.enter();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdout.lock(), config);
    let result = shell.run(stdin.lock());
    session.record_result(result.is_ok());

    result.context("Shell terminated on an output error")?;
    Ok(())
}
