//! Session configuration
//!
//! Pure data handed to `Session::open`: tempo, meter, and the set of tracks
//! the arrangement is allowed to address.

use crate::error::{Result, TimelineError};
use crate::types::time::{to_f64, Bar};
use crate::types::TrackId;
use std::collections::BTreeSet;

/// Highest tempo a session accepts
pub const MAX_TEMPO_BPM: f64 = 400.0;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Global tempo in beats per minute
    pub tempo_bpm: f64,
    /// Beats in one bar (4 for 4/4)
    pub beats_per_bar: u32,
    /// Declared tracks; `None` accepts any track id
    pub tracks: Option<BTreeSet<TrackId>>,
}

impl SessionConfig {
    pub fn new(tempo_bpm: f64) -> Self {
        Self {
            tempo_bpm,
            ..Self::default()
        }
    }

    pub fn with_tempo(mut self, tempo_bpm: f64) -> Self {
        self.tempo_bpm = tempo_bpm;
        self
    }

    pub fn with_beats_per_bar(mut self, beats_per_bar: u32) -> Self {
        self.beats_per_bar = beats_per_bar.max(1);
        self
    }

    /// Restrict the session to these tracks; others fail with `UnknownTrack`
    pub fn with_tracks(mut self, tracks: impl IntoIterator<Item = TrackId>) -> Self {
        self.tracks = Some(tracks.into_iter().collect());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tempo_bpm > 0.0 && self.tempo_bpm <= MAX_TEMPO_BPM) {
            return Err(TimelineError::InvalidTempo(self.tempo_bpm));
        }
        Ok(())
    }

    /// Whether `track` may be addressed in this session
    pub fn allows(&self, track: TrackId) -> bool {
        self.tracks.as_ref().map_or(true, |t| t.contains(&track))
    }

    /// Length of one bar in seconds
    pub fn bar_seconds(&self) -> f64 {
        self.beats_per_bar as f64 * 60.0 / self.tempo_bpm
    }

    /// Length of `bars` bars in seconds
    pub fn seconds_for(&self, bars: Bar) -> f64 {
        to_f64(bars) * self.bar_seconds()
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tempo_bpm: 120.0,
            beats_per_bar: 4,
            tracks: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time::bar;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.tempo_bpm, 120.0);
        assert_eq!(config.beats_per_bar, 4);
        assert!(config.allows(TrackId(42)));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tempo_bounds() {
        assert!(SessionConfig::new(0.0).validate().is_err());
        assert!(SessionConfig::new(-92.0).validate().is_err());
        assert!(SessionConfig::new(401.0).validate().is_err());
        assert!(SessionConfig::new(f64::NAN).validate().is_err());
        assert!(SessionConfig::new(400.0).validate().is_ok());
    }

    #[test]
    fn test_declared_tracks() {
        let config = SessionConfig::default().with_tracks((1..=9).map(TrackId));
        assert!(config.allows(TrackId(9)));
        assert!(!config.allows(TrackId(10)));
    }

    #[test]
    fn test_duration_at_92_bpm() {
        let config = SessionConfig::new(92.0);
        // 52 bars of 4/4 at 92 BPM is a little over 2:15
        let secs = config.seconds_for(bar(52));
        assert!((secs - 135.652).abs() < 0.01);
    }
}
