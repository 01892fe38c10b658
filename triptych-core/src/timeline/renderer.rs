//! The audio-rendering collaborator boundary.
//!
//! Everything past this trait (sample lookup, mixing, effects, playback,
//! how overlapping placements on a track combine) belongs to the renderer.

use crate::types::{BeatEvent, GainDirective, Placement};
use std::fmt;

/// An external engine that turns timeline commands into audio.
pub trait Renderer {
    /// Called once when a session opens
    fn init_session(&mut self) {}

    /// Set the global tempo
    fn set_tempo(&mut self, bpm: f64);

    /// Stretch a sample over a bar range
    fn place_continuous_media(&mut self, placement: &Placement);

    /// Trigger a sample on the pattern's slots within one bar
    fn place_beat_pattern(&mut self, event: &BeatEvent);

    /// Set or ramp a track's gain
    fn set_track_gain(&mut self, directive: &GainDirective);

    /// Called once when a session closes
    fn finalize_session(&mut self) {}
}

/// One call across the renderer boundary
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCommand {
    InitSession,
    SetTempo(f64),
    PlaceMedia(Placement),
    PlaceBeat(BeatEvent),
    SetGain(GainDirective),
    FinalizeSession,
}

impl RenderCommand {
    /// Replay this command against a renderer
    pub fn apply_to<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            RenderCommand::InitSession => renderer.init_session(),
            RenderCommand::SetTempo(bpm) => renderer.set_tempo(*bpm),
            RenderCommand::PlaceMedia(p) => renderer.place_continuous_media(p),
            RenderCommand::PlaceBeat(e) => renderer.place_beat_pattern(e),
            RenderCommand::SetGain(g) => renderer.set_track_gain(g),
            RenderCommand::FinalizeSession => renderer.finalize_session(),
        }
    }
}

impl fmt::Display for RenderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderCommand::InitSession => write!(f, "init"),
            RenderCommand::SetTempo(bpm) => write!(f, "tempo {} BPM", bpm),
            RenderCommand::PlaceMedia(p) => write!(f, "media {}", p),
            RenderCommand::PlaceBeat(e) => write!(f, "beat {}", e),
            RenderCommand::SetGain(g) => write!(f, "{}", g),
            RenderCommand::FinalizeSession => write!(f, "finish"),
        }
    }
}
