/*!
 * Command Shell
 *
 * Line-oriented front end for the simulator:
 *
 * - `N` prints the operator name
 * - `C <size>` creates a fresh region and resets the clock
 * - `A <size> <lifetime>` places a segment, waiting as many ticks as needed
 * - `P` prints every segment as `location<TAB>size<TAB>expiry`
 * - `J` prints the same segments as a JSON array
 * - `R <size> <min> <max> <maxLifetime> <placements>` runs a random walk
 * - `E` stops reading input
 */

mod command;
mod errors;

pub use command::Command;
pub use errors::{ShellError, ShellResult};

use crate::config::SimConfig;
use crate::memory::NextFitAllocator;
use crate::simulation::{simulate_random_walk, Simulator};
use log::warn;
use std::io::{BufRead, Write};

/// Whether the shell should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interpreter writing protocol output to `out`
pub struct Shell<W: Write> {
    out: W,
    config: SimConfig,
    sim: Option<Simulator<NextFitAllocator>>,
}

impl<W: Write> Shell<W> {
    pub fn new(out: W, config: SimConfig) -> Self {
        Self {
            out,
            config,
            sim: None,
        }
    }

    /// Read commands until `E` or end of input.
    ///
    /// A failing command is logged and skipped; only output errors abort.
    pub fn run<R: BufRead>(&mut self, input: R) -> ShellResult<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            let command = match Command::parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!("line {}: {}", number + 1, e);
                    continue;
                }
            };

            match self.execute(command) {
                Ok(Flow::Exit) => break,
                Ok(Flow::Continue) => {}
                Err(ShellError::Io(e)) => return Err(ShellError::Io(e)),
                Err(e) => warn!("line {}: {}", number + 1, e),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> ShellResult<Flow> {
        match command {
            Command::Name => {
                writeln!(self.out, "{}", self.config.operator_name)?;
            }
            Command::Create { size } => {
                self.sim = Some(Simulator::new(NextFitAllocator::new(size)?));
            }
            Command::Add { size, lifetime } => {
                let record = self.simulator()?.add_segment(size, lifetime)?;
                writeln!(
                    self.out,
                    "Segment of size {:4} placed at time {:4} at location {:4}, departs at {:4}",
                    record.size, record.placed_at, record.location, record.expiry
                )?;
            }
            Command::Print => {
                let segments = self.simulator()?.allocator().snapshot();
                for segment in segments {
                    writeln!(
                        self.out,
                        "{}\t{}\t{}",
                        segment.location, segment.size, segment.expiry
                    )?;
                }
            }
            Command::Json => {
                let segments = self.simulator()?.allocator().snapshot();
                serde_json::to_writer(&mut self.out, &segments)?;
                writeln!(self.out)?;
            }
            Command::RandomWalk(mut walk) => {
                if walk.seed.is_none() {
                    walk.seed = self.config.seed;
                }
                let sim = simulate_random_walk(&walk)?;
                let report = sim.report();
                self.sim = Some(sim);

                writeln!(
                    self.out,
                    "Number of placements made = {:6}",
                    report.placements
                )?;
                match report.mean_occupancy {
                    Some(mean) => writeln!(self.out, "Mean occupancy of memory = {:8.2}", mean)?,
                    None => writeln!(self.out, "Mean occupancy of memory = {:>8}", "n/a")?,
                }
            }
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    pub fn simulator(&mut self) -> ShellResult<&mut Simulator<NextFitAllocator>> {
        self.sim.as_mut().ok_or(ShellError::NoRegion)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
