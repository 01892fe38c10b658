//! Arrangements composed with `triptych-core`.

pub mod catalog;
pub mod day_triptych;

pub use day_triptych::{compose, render, SECTIONS};
