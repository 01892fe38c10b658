use crate::types::TrackId;

/// Errors raised while validating timeline calls.
///
/// Validation is eager: a call that fails emits nothing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TimelineError {
    #[error("invalid range: {0}")]
    InvalidRange(String),
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("unknown track {0}")]
    UnknownTrack(TrackId),
    #[error("invalid tempo {0} BPM (expected 0 < bpm <= 400)")]
    InvalidTempo(f64),
}

pub type Result<T, E = TimelineError> = std::result::Result<T, E>;
