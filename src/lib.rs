//! # Triptych
//!
//! Composes the DayTriptych arrangement with `triptych-core` and presents
//! the result.
//!
//! ## Modules
//!
//! - `arrangement`: the piece itself, plus its track, sample and pattern catalog.
//! - `sheet`: colored terminal summary of a recorded timeline.
//! - `cli`: command-line options.
//! - `logger`: colored stderr backend for the `log` facade.

pub mod arrangement;
pub mod cli;
pub mod logger;
pub mod sheet;
