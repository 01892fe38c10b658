//! Entities emitted to the renderer.
//!
//! Each value is built once, validated, handed to the renderer and never
//! touched again.

use super::beat_pattern::BeatPattern;
use super::time::{bar, to_f64, Bar, BarSpan};
use super::track::{SampleRef, TrackId};
use crate::error::{Result, TimelineError};
use std::fmt;

/// Reject spans that are empty, reversed, or start before bar 1
pub(crate) fn check_span(span: BarSpan, what: &str) -> Result<()> {
    if !span.is_ordered() {
        return Err(TimelineError::InvalidRange(format!(
            "{} {} must start before it ends",
            what, span
        )));
    }
    if span.start < bar(1) {
        return Err(TimelineError::InvalidRange(format!(
            "{} {} starts before bar 1",
            what, span
        )));
    }
    Ok(())
}

/// Continuous media stretched over [start, end)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub sample: SampleRef,
    pub track: TrackId,
    pub start: Bar,
    pub end: Bar,
}

impl Placement {
    /// Validated constructor: `start < end`, `start >= 1`
    pub fn new(sample: SampleRef, track: TrackId, start: Bar, end: Bar) -> Result<Self> {
        check_span(BarSpan::new(start, end), "placement")?;
        Ok(Placement {
            sample,
            track,
            start,
            end,
        })
    }

    pub fn span(&self) -> BarSpan {
        BarSpan::new(self.start, self.end)
    }

    pub fn duration(&self) -> Bar {
        self.end - self.start
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.track, self.sample, self.span())
    }
}

/// One pattern applied to exactly one bar
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatEvent {
    pub sample: SampleRef,
    pub track: TrackId,
    pub bar: i64,
    pub pattern: BeatPattern,
}

impl fmt::Display for BeatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} bar {} \"{}\"",
            self.track, self.sample, self.bar, self.pattern
        )
    }
}

/// Target of a linear gain ramp
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GainRamp {
    pub end_value_db: f64,
    pub end_bar: Bar,
}

/// Set or ramp a track's volume in decibels.
///
/// Without `start_bar` the value applies to the whole track. With only
/// `start_bar` it applies from that bar on. With a ramp the renderer moves
/// linearly from `value_db` at `start_bar` to `end_value_db` at `end_bar`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GainDirective {
    pub track: TrackId,
    pub value_db: f64,
    pub start_bar: Option<Bar>,
    pub ramp: Option<GainRamp>,
}

impl GainDirective {
    /// Constant gain for the whole track
    pub fn flat(track: TrackId, value_db: f64) -> Self {
        GainDirective {
            track,
            value_db,
            start_bar: None,
            ramp: None,
        }
    }

    /// Constant gain from `start_bar` on
    pub fn from_bar(track: TrackId, value_db: f64, start_bar: Bar) -> Result<Self> {
        if start_bar < bar(1) {
            return Err(TimelineError::InvalidRange(format!(
                "gain on {} starts at bar {}, before bar 1",
                track, start_bar
            )));
        }
        Ok(GainDirective {
            track,
            value_db,
            start_bar: Some(start_bar),
            ramp: None,
        })
    }

    /// Linear ramp from `value_db` at `start_bar` to `end_value_db` at `end_bar`
    pub fn ramp(
        track: TrackId,
        value_db: f64,
        start_bar: Bar,
        end_value_db: f64,
        end_bar: Bar,
    ) -> Result<Self> {
        check_span(BarSpan::new(start_bar, end_bar), "gain ramp")?;
        Ok(GainDirective {
            track,
            value_db,
            start_bar: Some(start_bar),
            ramp: Some(GainRamp {
                end_value_db,
                end_bar,
            }),
        })
    }

    pub fn is_ramp(&self) -> bool {
        self.ramp.is_some()
    }

    /// Re-check the ramp invariant on a directive built by hand
    pub fn validate(&self) -> Result<()> {
        match (self.start_bar, self.ramp) {
            (Some(start), Some(ramp)) => {
                check_span(BarSpan::new(start, ramp.end_bar), "gain ramp")
            }
            (None, Some(_)) => Err(TimelineError::InvalidRange(format!(
                "gain ramp on {} has no start bar",
                self.track
            ))),
            (Some(start), None) if start < bar(1) => Err(TimelineError::InvalidRange(format!(
                "gain on {} starts at bar {}, before bar 1",
                self.track, start
            ))),
            _ => Ok(()),
        }
    }

    /// The gain this directive describes at bar `at`.
    ///
    /// Ramps are clamped: the start value before the ramp, the end value
    /// after it.
    pub fn value_at(&self, at: Bar) -> f64 {
        let (start, ramp) = match (self.start_bar, self.ramp) {
            (Some(start), Some(ramp)) => (start, ramp),
            _ => return self.value_db,
        };
        if at <= start {
            return self.value_db;
        }
        if at >= ramp.end_bar {
            return ramp.end_value_db;
        }
        let progress = (at - start) / (ramp.end_bar - start);
        self.value_db + (ramp.end_value_db - self.value_db) * to_f64(progress)
    }
}

impl fmt::Display for GainDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start_bar, self.ramp) {
            (Some(start), Some(ramp)) => write!(
                f,
                "{} gain {}dB @ {} -> {}dB @ {}",
                self.track, self.value_db, start, ramp.end_value_db, ramp.end_bar
            ),
            (Some(start), None) => write!(f, "{} gain {}dB from {}", self.track, self.value_db, start),
            _ => write!(f, "{} gain {}dB", self.track, self.value_db),
        }
    }
}
