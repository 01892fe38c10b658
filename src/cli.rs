//! Command-line options for the `triptych` binary.

use anyhow::{anyhow, bail, Result};
use colored::*;
use std::path::PathBuf;

/// What the binary was asked to do
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Patterns,
    Render(Options),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Write the recorded timeline as JSON here
    pub json: Option<PathBuf>,
    /// Print the per-track bar grid
    pub grid: bool,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            json: None,
            grid: true,
            verbosity: 0,
        }
    }
}

/// Parse arguments (without the program name)
pub fn parse<I>(args: I) -> Result<Command>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut opts = Options::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--patterns" => return Ok(Command::Patterns),
            "--no-grid" => opts.grid = false,
            "--json" => {
                let path = args
                    .next()
                    .ok_or_else(|| anyhow!("--json needs a file path"))?;
                opts.json = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                let count = u8::try_from(flag.len() - 1).unwrap_or(u8::MAX);
                opts.verbosity = opts.verbosity.saturating_add(count);
            }
            other => bail!("unknown argument '{}' (try --help)", other),
        }
    }
    Ok(Command::Render(opts))
}

/// Print usage information
pub fn print_help() {
    println!("{}", "🎵 Triptych".bold());
    println!("{}", "===========".bold());
    println!();
    println!("Composes DayTriptych on a bar-indexed timeline and prints its sheet.");
    println!();
    println!("{}", "Usage:".green());
    println!("  {} [options]", "triptych".cyan());
    println!();
    println!("{}", "Options:".green());
    println!("  {}   - Write the recorded timeline as JSON", "--json <path>".cyan());
    println!("  {}       - Skip the per-track bar grid", "--no-grid".cyan());
    println!("  {}      - List the beat pattern library", "--patterns".cyan());
    println!("  {}          - Log more (-vv debug, -vvv trace)", "-v".cyan());
    println!("  {}      - Show this help", "-h, --help".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cmd = parse(Vec::<String>::new()).unwrap();
        assert_eq!(cmd, Command::Render(Options::default()));
    }

    #[test]
    fn test_json_and_flags() {
        let cmd = parse(["--json", "out.json", "--no-grid", "-vv"]).unwrap();
        assert_eq!(
            cmd,
            Command::Render(Options {
                json: Some(PathBuf::from("out.json")),
                grid: false,
                verbosity: 2,
            })
        );
    }

    #[test]
    fn test_repeated_verbose_flags_add_up() {
        match parse(["-v", "-v"]).unwrap() {
            Command::Render(opts) => assert_eq!(opts.verbosity, 2),
            other => panic!("Expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_long_verbose_flag_saturates() {
        let flag = format!("-{}", "v".repeat(300));
        match parse([flag]).unwrap() {
            Command::Render(opts) => assert_eq!(opts.verbosity, u8::MAX),
            other => panic!("Expected Render, got {:?}", other),
        }
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(parse(["--no-grid", "--help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_missing_json_path() {
        assert!(parse(["--json"]).is_err());
    }

    #[test]
    fn test_unknown_argument() {
        assert!(parse(["--loud"]).is_err());
    }
}
