//! Command-line parsing for the flappy binary.

use flappy::GameConfig;
use std::path::PathBuf;

pub const USAGE: &str = "\
Flappy - Terminal Side-Scroller

Usage: flappy [OPTIONS]

Options:
  -W, --width <N>      World width in units (default 480)
  -H, --height <N>     World height in units (default 640)
  -s, --seed <N>       Seed for pipe gaps (default: random)
      --speed <N>      Pipe speed in units per tick (default 10)
      --tick-ms <N>    Milliseconds between ticks (default 17)
      --log-file <P>   Write logs to this file (RUST_LOG sets the level)
  -v, --version        Show version information
  -h, --help           Show this help message

Controls: Space/Enter/Up/left click to flap, P to pause, Q/Esc to quit.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub config: GameConfig,
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(RunOptions),
    Version,
    Help,
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("Missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T, String> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", flag, raw))
}

/// Parse `args` (including the program name at index 0).
pub fn parse_args(args: &[String]) -> Result<CliCommand, String> {
    let mut config = GameConfig::default();
    let mut log_file = None;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-W" | "--width" => {
                config.width = number(args, i, flag)?;
                i += 1;
            }
            "-H" | "--height" => {
                config.height = number(args, i, flag)?;
                i += 1;
            }
            "-s" | "--seed" => {
                config.seed = Some(number(args, i, flag)?);
                i += 1;
            }
            "--speed" => {
                config.pipe_speed = number(args, i, flag)?;
                i += 1;
            }
            "--tick-ms" => {
                config.tick_interval_ms = number(args, i, flag)?;
                i += 1;
            }
            "--log-file" => {
                log_file = Some(PathBuf::from(value(args, i, flag)?));
                i += 1;
            }
            "-v" | "--version" => return Ok(CliCommand::Version),
            "-h" | "--help" => return Ok(CliCommand::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(CliCommand::Run(RunOptions { config, log_file }))
}
