//! Stderr logging for the `log` facade, backed by `env_logger`.

use log::{LevelFilter, SetLoggerError};

/// Map `-v` repetitions to a level: warn, info, debug, trace
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the logger at `level`; `RUST_LOG` still overrides per module
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
}
