//! Expands one-bar beat patterns across a range of bars.
//!
//! The engine is pure: it returns the events and leaves forwarding them to
//! a renderer to the caller.

use crate::error::{Result, TimelineError};
use crate::types::time::{bar, Bar, BarSpan};
use crate::types::{BeatEvent, BeatPattern, SampleRef, TrackId};

/// Whole-bar value of `b`, or `InvalidRange` if it is fractional
fn whole_bar(b: Bar, what: &str) -> Result<i64> {
    if !b.is_integer() {
        return Err(TimelineError::InvalidRange(format!(
            "{} bar {} is not a whole bar",
            what, b
        )));
    }
    Ok(b.to_integer())
}

/// Apply `pattern` to every bar in [start, end).
///
/// Both bounds must be whole bars with `1 <= start < end`. Produces exactly
/// `end - start` events in increasing bar order.
pub fn apply_pattern(
    sample: &SampleRef,
    track: TrackId,
    start: Bar,
    end: Bar,
    pattern: &BeatPattern,
) -> Result<Vec<BeatEvent>> {
    let first = whole_bar(start, "pattern start")?;
    let last = whole_bar(end, "pattern end")?;
    if first >= last || start < bar(1) {
        return Err(TimelineError::InvalidRange(format!(
            "pattern range {} must be ordered and start at bar 1 or later",
            BarSpan::new(start, end)
        )));
    }

    let events: Vec<BeatEvent> = (first..last)
        .map(|m| BeatEvent {
            sample: sample.clone(),
            track,
            bar: m,
            pattern: *pattern,
        })
        .collect();
    log::trace!(
        "expanded \"{}\" on {} over {} bars",
        pattern,
        track,
        events.len()
    );
    Ok(events)
}

/// Parse `notation` and apply it; a malformed pattern yields no events.
pub fn apply_notation(
    sample: &SampleRef,
    track: TrackId,
    start: Bar,
    end: Bar,
    notation: &str,
) -> Result<Vec<BeatEvent>> {
    let pattern = BeatPattern::parse(notation)?;
    apply_pattern(sample, track, start, end, &pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time::bars;

    fn hat() -> SampleRef {
        SampleRef::new("OS_CLOSEDHAT01")
    }

    #[test]
    fn test_one_event_per_bar() {
        let p = BeatPattern::parse("0---0---0---0---").unwrap();
        let events = apply_pattern(&hat(), TrackId(2), bar(5), bar(9), &p).unwrap();
        let bars: Vec<i64> = events.iter().map(|e| e.bar).collect();
        assert_eq!(bars, vec![5, 6, 7, 8]);
        assert!(events.iter().all(|e| e.track == TrackId(2) && e.pattern == p));
    }

    #[test]
    fn test_single_bar() {
        let p = BeatPattern::parse("0---------------").unwrap();
        let events = apply_pattern(&hat(), TrackId(5), bar(30), bar(31), &p).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].bar, 30);
    }

    #[test]
    fn test_rejects_fractional_bounds() {
        let p = BeatPattern::parse("0---------------").unwrap();
        let err = apply_pattern(&hat(), TrackId(5), bars(3, 2), bar(4), &p).unwrap_err();
        assert!(matches!(err, TimelineError::InvalidRange(_)));
    }

    #[test]
    fn test_rejects_empty_and_reversed() {
        let p = BeatPattern::parse("0---------------").unwrap();
        assert!(apply_pattern(&hat(), TrackId(5), bar(4), bar(4), &p).is_err());
        assert!(apply_pattern(&hat(), TrackId(5), bar(9), bar(4), &p).is_err());
        assert!(apply_pattern(&hat(), TrackId(5), bar(0), bar(4), &p).is_err());
    }

    #[test]
    fn test_bad_notation_yields_nothing() {
        let err = apply_notation(&hat(), TrackId(2), bar(1), bar(9), "0---0---0---0--").unwrap_err();
        assert!(matches!(err, TimelineError::InvalidPattern(_)));
    }
}
