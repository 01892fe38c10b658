use anyhow::{Context, Result};
use colored::*;
use triptych::arrangement::catalog::{patterns, tracks};
use triptych::arrangement::{day_triptych, SECTIONS};
use triptych::cli::{self, Command};
use triptych::{logger, sheet};
use triptych_core::timeline::TimelineRecorder;
use triptych_core::BeatPattern;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let opts = match cli::parse(std::env::args().skip(1))? {
        Command::Help => {
            cli::print_help();
            return Ok(());
        }
        Command::Patterns => return print_patterns(),
        Command::Render(opts) => opts,
    };
    logger::init(logger::level_for(opts.verbosity))?;

    let mut recorder = TimelineRecorder::new();
    day_triptych::render(&mut recorder).context("composing DayTriptych")?;

    print!(
        "{}",
        sheet::render(
            "DayTriptych",
            &recorder,
            &SECTIONS,
            &tracks::ALL,
            &day_triptych::config(),
            opts.grid,
        )
    );

    if let Some(path) = opts.json {
        let json = recorder.to_json()?;
        std::fs::write(&path, json)
            .with_context(|| format!("writing timeline to {}", path.display()))?;
        println!("{} {}", "✓ timeline written to".bright_green(), path.display());
    }
    Ok(())
}

fn print_patterns() -> Result<()> {
    println!("{}", "Beat patterns:".green());
    for (name, notation) in patterns::ALL {
        let pattern = BeatPattern::parse(notation)?;
        println!(
            "  {:<15} {}  {} hits",
            name.cyan(),
            pattern,
            pattern.hit_count()
        );
    }
    Ok(())
}
