/*!
 * Command Parsing
 * One command per line, whitespace-separated tokens
 */

use super::errors::{ShellError, ShellResult};
use crate::core::types::{Size, Tick};
use crate::simulation::WalkConfig;
use std::str::{FromStr, SplitWhitespace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `N`
    Name,
    /// `C <size>`
    Create { size: Size },
    /// `A <size> <lifetime>`
    Add { size: Size, lifetime: Tick },
    /// `P`
    Print,
    /// `J`
    Json,
    /// `R <size> <min> <max> <maxLifetime> <placements>`
    RandomWalk(WalkConfig),
    /// `E`
    Exit,
}

impl Command {
    /// Parse one input line; blank lines yield `None`
    pub fn parse_line(line: &str) -> ShellResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };

        let command = match keyword {
            "N" => Command::Name,
            "C" => Command::Create {
                size: arg(&mut tokens, "C", "size")?,
            },
            "A" => Command::Add {
                size: arg(&mut tokens, "A", "size")?,
                lifetime: arg(&mut tokens, "A", "lifetime")?,
            },
            "P" => Command::Print,
            "J" => Command::Json,
            "R" => Command::RandomWalk(WalkConfig::new(
                arg(&mut tokens, "R", "size")?,
                arg(&mut tokens, "R", "min size")?,
                arg(&mut tokens, "R", "max size")?,
                arg(&mut tokens, "R", "max lifetime")?,
                arg(&mut tokens, "R", "placements")?,
            )),
            "E" => Command::Exit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

fn arg<T: FromStr>(
    tokens: &mut SplitWhitespace<'_>,
    command: &'static str,
    argument: &'static str,
) -> ShellResult<T> {
    let raw = tokens
        .next()
        .ok_or(ShellError::MissingArgument { command, argument })?;
    raw.parse().map_err(|_| ShellError::InvalidNumber {
        argument,
        value: raw.to_string(),
    })
}
