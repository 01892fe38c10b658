//! Arrangement sheet: a terminal summary of a recorded timeline.
//!
//! Shows the sections, a per-track bar grid (media vs. beat patterns) and
//! the gain ramps, colored for the terminal.

use colored::*;
use std::fmt;
use triptych_core::timeline::TimelineRecorder;
use triptych_core::types::time::{bar, to_f64, Bar};
use triptych_core::{Section, SessionConfig, TrackId};

const MEDIA_CELL: &str = "█";
const BEAT_CELL: &str = "•";
const EMPTY_CELL: &str = "·";

/// What a track has in one bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Beat,
    Media,
}

/// Format seconds as m:ss
pub fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Occupancy of `track` for each whole bar in [first, last)
pub fn track_cells(rec: &TimelineRecorder, track: TrackId, first: i64, last: i64) -> Vec<Cell> {
    (first..last)
        .map(|b| {
            let start = bar(b);
            let end = bar(b + 1);
            let has_media = rec
                .placements()
                .any(|p| p.track == track && p.start < end && start < p.end);
            let has_beat = rec.beat_events().any(|e| e.track == track && e.bar == b);
            match (has_media, has_beat) {
                (true, _) => Cell::Media,
                (false, true) => Cell::Beat,
                _ => Cell::Empty,
            }
        })
        .collect()
}

fn cell_str(cell: Cell) -> ColoredString {
    match cell {
        Cell::Media => MEDIA_CELL.cyan(),
        Cell::Beat => BEAT_CELL.yellow(),
        Cell::Empty => EMPTY_CELL.dimmed(),
    }
}

/// Last whole bar covered by the sections
fn arrangement_end(sections: &[Section]) -> i64 {
    sections.iter().map(|s| s.end).max().unwrap_or(1)
}

fn bar_label(b: Bar) -> String {
    if b.is_integer() {
        b.to_integer().to_string()
    } else {
        format!("{}", to_f64(b))
    }
}

/// A recorded arrangement laid out for the terminal
pub struct Sheet<'a> {
    pub title: &'a str,
    pub rec: &'a TimelineRecorder,
    pub sections: &'a [Section],
    pub tracks: &'a [(TrackId, &'a str)],
    pub config: &'a SessionConfig,
    pub show_grid: bool,
}

impl Sheet<'_> {
    fn write_grid(&self, f: &mut fmt::Formatter, first: i64, last: i64) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", "Tracks:".green())?;
        let header: String = (first..last)
            .map(|b| {
                if self.sections.iter().any(|s| s.start == b) {
                    '|'
                } else {
                    ' '
                }
            })
            .collect();
        writeln!(f, "  {:<14} {}", "", header.dimmed())?;
        for (track, role) in self.tracks {
            let cells: String = track_cells(self.rec, *track, first, last)
                .into_iter()
                .map(|c| cell_str(c).to_string())
                .collect();
            writeln!(f, "  {:<14} {}", format!("{} {}", track, role), cells)?;
        }
        writeln!(
            f,
            "  {:<14} {} media  {} beats",
            "",
            MEDIA_CELL.cyan(),
            BEAT_CELL.yellow()
        )
    }

    fn write_ramps(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ramps: Vec<_> = self.rec.gain_directives().filter(|g| g.is_ramp()).collect();
        if ramps.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "{}", "Gain ramps:".green())?;
        for g in ramps {
            if let (Some(start), Some(ramp)) = (g.start_bar, g.ramp) {
                writeln!(
                    f,
                    "  {:<4} {:>6.1} dB @ {:<5} → {:>6.1} dB @ {}",
                    g.track.to_string(),
                    g.value_db,
                    bar_label(start),
                    ramp.end_value_db,
                    bar_label(ramp.end_bar)
                )?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Sheet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let first = self.sections.iter().map(|s| s.start).min().unwrap_or(1);
        let last = arrangement_end(self.sections);
        let length = bar(last - first);

        writeln!(
            f,
            "{} {} BPM, {} bars, {}",
            format!("🎵 {}", self.title).bold(),
            self.config.tempo_bpm,
            last - first,
            format_duration(self.config.seconds_for(length))
        )?;
        if let Some(end) = self.rec.end_bar() {
            if end > bar(last) {
                writeln!(
                    f,
                    "   {}",
                    format!("tail rings on to bar {}", bar_label(end)).dimmed()
                )?;
            }
        }
        writeln!(f)?;

        writeln!(f, "{}", "Sections:".green())?;
        for s in self.sections {
            writeln!(
                f,
                "  {:<18} {:>3}–{:<3} ({} bars, {})",
                s.name.cyan(),
                s.start,
                s.end,
                s.len(),
                format_duration(self.config.seconds_for(bar(s.len())))
            )?;
        }

        if self.show_grid {
            self.write_grid(f, first, last)?;
        }
        self.write_ramps(f)?;

        writeln!(f)?;
        writeln!(
            f,
            "{} placements, {} beat bars, {} gain directives",
            self.rec.placements().count(),
            self.rec.beat_events().count(),
            self.rec.gain_directives().count()
        )
    }
}

/// Render the full sheet for a recorded arrangement
pub fn render(
    title: &str,
    rec: &TimelineRecorder,
    sections: &[Section],
    tracks: &[(TrackId, &str)],
    config: &SessionConfig,
    show_grid: bool,
) -> String {
    Sheet {
        title,
        rec,
        sections,
        tracks,
        config,
        show_grid,
    }
    .to_string()
}
