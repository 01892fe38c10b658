//! In-memory renderer that keeps every command in call order.

use super::renderer::{RenderCommand, Renderer};
use crate::types::time::{bar, Bar};
use crate::types::{BeatEvent, GainDirective, Placement, TrackId};
use std::collections::BTreeSet;

/// Records the timeline description instead of rendering audio.
///
/// Commands are kept exactly as issued; overlapping placements are not
/// merged.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimelineRecorder {
    commands: Vec<RenderCommand>,
}

impl TimelineRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn placements(&self) -> impl Iterator<Item = &Placement> {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::PlaceMedia(p) => Some(p),
            _ => None,
        })
    }

    pub fn beat_events(&self) -> impl Iterator<Item = &BeatEvent> {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::PlaceBeat(e) => Some(e),
            _ => None,
        })
    }

    pub fn gain_directives(&self) -> impl Iterator<Item = &GainDirective> {
        self.commands.iter().filter_map(|c| match c {
            RenderCommand::SetGain(g) => Some(g),
            _ => None,
        })
    }

    /// Last tempo set, if any
    pub fn tempo(&self) -> Option<f64> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::SetTempo(bpm) => Some(*bpm),
            _ => None,
        })
    }

    pub fn is_initialized(&self) -> bool {
        self.commands.contains(&RenderCommand::InitSession)
    }

    /// Number of times the session was finalized (0 or 1 for a well-behaved session)
    pub fn finalize_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::FinalizeSession))
            .count()
    }

    /// Every track that received media, beats or gain
    pub fn tracks(&self) -> BTreeSet<TrackId> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::PlaceMedia(p) => Some(p.track),
                RenderCommand::PlaceBeat(e) => Some(e.track),
                RenderCommand::SetGain(g) => Some(g.track),
                _ => None,
            })
            .collect()
    }

    /// Exclusive end of the latest placed material (media or beat bar)
    pub fn end_bar(&self) -> Option<Bar> {
        let media = self.placements().map(|p| p.end);
        let beats = self.beat_events().map(|e| bar(e.bar + 1));
        media.chain(beats).max()
    }

    /// Pretty-printed JSON of the recorded command list
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.commands)
    }
}

impl Renderer for TimelineRecorder {
    fn init_session(&mut self) {
        self.commands.push(RenderCommand::InitSession);
    }

    fn set_tempo(&mut self, bpm: f64) {
        self.commands.push(RenderCommand::SetTempo(bpm));
    }

    fn place_continuous_media(&mut self, placement: &Placement) {
        self.commands.push(RenderCommand::PlaceMedia(placement.clone()));
    }

    fn place_beat_pattern(&mut self, event: &BeatEvent) {
        self.commands.push(RenderCommand::PlaceBeat(event.clone()));
    }

    fn set_track_gain(&mut self, directive: &GainDirective) {
        self.commands.push(RenderCommand::SetGain(*directive));
    }

    fn finalize_session(&mut self) {
        self.commands.push(RenderCommand::FinalizeSession);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time::bars;
    use crate::types::BeatPattern;

    #[test]
    fn test_records_in_call_order() {
        let mut rec = TimelineRecorder::new();
        rec.init_session();
        rec.set_tempo(92.0);
        let p = Placement::new("PAD".into(), TrackId(3), bar(1), bar(9)).unwrap();
        rec.place_continuous_media(&p);
        rec.set_track_gain(&GainDirective::flat(TrackId(3), -10.0));
        rec.finalize_session();

        assert_eq!(rec.commands().len(), 5);
        assert_eq!(rec.commands()[2], RenderCommand::PlaceMedia(p));
        assert_eq!(rec.tempo(), Some(92.0));
        assert!(rec.is_initialized());
        assert_eq!(rec.finalize_count(), 1);
    }

    #[test]
    fn test_end_bar_covers_media_and_beats() {
        let mut rec = TimelineRecorder::new();
        assert_eq!(rec.end_bar(), None);

        let p = Placement::new("CRASH".into(), TrackId(6), bar(9), bars(19, 2)).unwrap();
        rec.place_continuous_media(&p);
        assert_eq!(rec.end_bar(), Some(bars(19, 2)));

        rec.place_beat_pattern(&BeatEvent {
            sample: "HAT".into(),
            track: TrackId(2),
            bar: 12,
            pattern: BeatPattern::parse("0-00-0-000-0-0-0").unwrap(),
        });
        assert_eq!(rec.end_bar(), Some(bar(13)));
        assert_eq!(rec.tracks().len(), 2);
    }

    #[test]
    fn test_replay_into_another_renderer() {
        let mut rec = TimelineRecorder::new();
        rec.set_tempo(92.0);
        rec.set_track_gain(&GainDirective::flat(TrackId(1), -8.0));

        let mut copy = TimelineRecorder::new();
        for cmd in rec.commands() {
            cmd.apply_to(&mut copy);
        }
        assert_eq!(copy, rec);
    }
}
