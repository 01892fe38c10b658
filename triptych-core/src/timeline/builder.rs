//! Sequential composition API over a renderer.
//!
//! Every call validates its whole output first and only then forwards it to
//! the renderer, so a failing call emits nothing.

use super::renderer::Renderer;
use crate::error::{Result, TimelineError};
use crate::pattern_engine;
use crate::types::time::{bar, Bar, BarSpan};
use crate::types::{BeatEvent, BeatPattern, GainDirective, Placement, SampleRef, Section, TrackId};
use num_traits::{Signed, Zero};
use std::collections::BTreeSet;

/// Number of whole steps of length `step` that fit in `span` (floor division)
fn step_count(span: BarSpan, step: Bar) -> Result<i64> {
    if !step.is_positive() {
        return Err(TimelineError::InvalidRange(format!(
            "step must be positive, got {}",
            step
        )));
    }
    if !span.is_ordered() {
        return Err(TimelineError::InvalidRange(format!(
            "section {} must start before it ends",
            span
        )));
    }
    Ok((span.duration() / step).floor().to_integer())
}

fn check_offset(offset: Bar) -> Result<()> {
    if offset.is_negative() {
        return Err(TimelineError::InvalidRange(format!(
            "offset within a step cannot be negative, got {}",
            offset
        )));
    }
    Ok(())
}

/// Issues placements, beat events and gain directives against a renderer.
///
/// Holds no timeline state of its own; the renderer owns whatever it
/// accumulates.
pub struct TimelineBuilder<'a, R: Renderer + ?Sized> {
    renderer: &'a mut R,
    tracks: Option<&'a BTreeSet<TrackId>>,
}

impl<'a, R: Renderer + ?Sized> TimelineBuilder<'a, R> {
    /// Build against `renderer` without track validation
    pub fn new(renderer: &'a mut R) -> Self {
        Self {
            renderer,
            tracks: None,
        }
    }

    /// Reject tracks outside `tracks` with `UnknownTrack`
    pub fn with_tracks(mut self, tracks: &'a BTreeSet<TrackId>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    fn check_track(&self, track: TrackId) -> Result<()> {
        match self.tracks {
            Some(tracks) if !tracks.contains(&track) => Err(TimelineError::UnknownTrack(track)),
            _ => Ok(()),
        }
    }

    fn emit_media(&mut self, placement: &Placement) {
        log::debug!("media {}", placement);
        self.renderer.place_continuous_media(placement);
    }

    fn emit_beats(&mut self, events: &[BeatEvent]) {
        for event in events {
            log::debug!("beat {}", event);
            self.renderer.place_beat_pattern(event);
        }
    }

    /// Log the section and run `f` against this builder
    pub fn section<T>(
        &mut self,
        section: &Section,
        f: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        log::info!("composing {}", section);
        let out = f(self);
        if let Err(e) = &out {
            log::warn!("section {} aborted: {}", section.name, e);
        }
        out
    }

    /// Stretch `sample` over [start, end) on `track`
    pub fn place_media(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        start: Bar,
        end: Bar,
    ) -> Result<Placement> {
        self.check_track(track)?;
        let placement = Placement::new(sample.into(), track, start, end)?;
        self.emit_media(&placement);
        Ok(placement)
    }

    /// Apply a parsed pattern to every bar in [start, end)
    pub fn apply_pattern(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        start: Bar,
        end: Bar,
        pattern: &BeatPattern,
    ) -> Result<Vec<BeatEvent>> {
        self.check_track(track)?;
        let events = pattern_engine::apply_pattern(&sample.into(), track, start, end, pattern)?;
        self.emit_beats(&events);
        Ok(events)
    }

    /// Apply `0`/`-` notation to every bar in [start, end)
    pub fn beat_pattern(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        start: Bar,
        end: Bar,
        notation: &str,
    ) -> Result<Vec<BeatEvent>> {
        let pattern = BeatPattern::parse(notation)?;
        self.apply_pattern(sample, track, start, end, &pattern)
    }

    /// A single bar of `notation` at `at`
    pub fn beat(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        at: i64,
        notation: &str,
    ) -> Result<BeatEvent> {
        let mut events = self.beat_pattern(sample, track, bar(at), bar(at + 1), notation)?;
        // apply_pattern over one bar yields exactly one event
        events
            .pop()
            .ok_or_else(|| TimelineError::InvalidRange(format!("no bar at {}", at)))
    }

    /// Forward a gain directive after checking its track and ramp
    pub fn apply_gain(&mut self, directive: GainDirective) -> Result<GainDirective> {
        self.check_track(directive.track)?;
        directive.validate()?;
        log::debug!("{}", directive);
        self.renderer.set_track_gain(&directive);
        Ok(directive)
    }

    /// Flat gain for the track
    pub fn set_gain(&mut self, track: TrackId, value_db: f64) -> Result<GainDirective> {
        self.apply_gain(GainDirective::flat(track, value_db))
    }

    /// Linear gain ramp from `value_db` at `start` to `end_value_db` at `end`
    pub fn ramp_gain(
        &mut self,
        track: TrackId,
        value_db: f64,
        start: Bar,
        end_value_db: f64,
        end: Bar,
    ) -> Result<GainDirective> {
        self.apply_gain(GainDirective::ramp(track, value_db, start, end_value_db, end)?)
    }

    /// Place `sample` once per `step` bars of `span`, `offset` into each step,
    /// lasting `duration`.
    ///
    /// Emits `floor(len / step)` placements; a trailing partial step is
    /// dropped.
    pub fn repeat_every(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        span: impl Into<BarSpan>,
        step: Bar,
        offset: Bar,
        duration: Bar,
    ) -> Result<Vec<Placement>> {
        self.check_track(track)?;
        let span = span.into();
        let count = step_count(span, step)?;
        check_offset(offset)?;

        let sample = sample.into();
        let placements = (0..count)
            .map(|k| {
                let start = span.start + step * k + offset;
                Placement::new(sample.clone(), track, start, start + duration)
            })
            .collect::<Result<Vec<_>>>()?;

        for p in &placements {
            self.emit_media(p);
        }
        Ok(placements)
    }

    /// Place `sample` at each whole-bar offset of `span` where `predicate`
    /// holds, lasting `duration`.
    pub fn conditional_place(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        span: impl Into<BarSpan>,
        predicate: impl Fn(i64) -> bool,
        duration: Bar,
    ) -> Result<Vec<Placement>> {
        self.check_track(track)?;
        let span = span.into();
        if !span.is_ordered() {
            return Err(TimelineError::InvalidRange(format!(
                "section {} must start before it ends",
                span
            )));
        }
        if !duration.is_positive() {
            return Err(TimelineError::InvalidRange(format!(
                "duration must be positive, got {}",
                duration
            )));
        }

        let offsets = span.duration().ceil().to_integer();
        let sample = sample.into();
        let placements = (0..offsets)
            .filter(|&o| predicate(o))
            .map(|o| {
                let start = span.start + o;
                Placement::new(sample.clone(), track, start, start + duration)
            })
            .collect::<Result<Vec<_>>>()?;

        for p in &placements {
            self.emit_media(p);
        }
        Ok(placements)
    }

    /// One bar of `notation` every `step` bars of `span`, `offset` bars into
    /// each step. Same floor step count as [`repeat_every`](Self::repeat_every).
    pub fn repeat_pattern_every(
        &mut self,
        sample: impl Into<SampleRef>,
        track: TrackId,
        span: impl Into<BarSpan>,
        step: i64,
        offset: i64,
        notation: &str,
    ) -> Result<Vec<BeatEvent>> {
        self.check_track(track)?;
        let pattern = BeatPattern::parse(notation)?;
        let span = span.into();
        let count = step_count(span, bar(step))?;
        check_offset(bar(offset))?;
        if !span.start.is_integer() {
            return Err(TimelineError::InvalidRange(format!(
                "pattern section {} must start on a whole bar",
                span
            )));
        }

        let sample = sample.into();
        let mut events = Vec::new();
        for k in 0..count {
            let at = span.start + bar(step * k + offset);
            events.extend(pattern_engine::apply_pattern(
                &sample,
                track,
                at,
                at + bar(1),
                &pattern,
            )?);
        }

        self.emit_beats(&events);
        Ok(events)
    }
}

/// Offset predicate for "every other bar" starting on the first bar
pub fn every_other_bar(offset: i64) -> bool {
    (offset % 2).is_zero()
}
