//! # Triptych Core
//!
//! A bar-indexed timeline composition model. Samples are stretched over bar
//! ranges, 16-slot beat patterns are stamped onto bars, and track gain is set
//! or ramped, all against an external [`Renderer`](timeline::Renderer) that
//! owns the actual audio.
//!
//! ## Features
//!
//! - **serde**: Serialize timeline entities and dump a recorded timeline as JSON
//!
//! ## Example
//!
//! ```
//! use triptych_core::timeline::{Session, TimelineRecorder};
//! use triptych_core::types::{bar, TrackId};
//! use triptych_core::SessionConfig;
//!
//! let mut recorder = TimelineRecorder::new();
//! Session::run(&mut recorder, SessionConfig::new(92.0), |t| {
//!     t.place_media("RD_POP_PADCHORD_1", TrackId(3), bar(1), bar(9))?;
//!     t.beat_pattern("OS_CLOSEDHAT01", TrackId(2), bar(5), bar(9), "0---0---0---0---")?;
//!     t.ramp_gain(TrackId(3), -10.0, bar(8), -6.0, bar(9))?;
//!     Ok::<_, triptych_core::TimelineError>(())
//! })?;
//! assert_eq!(recorder.end_bar(), Some(bar(9)));
//! # Ok::<_, triptych_core::TimelineError>(())
//! ```

pub mod config;
pub mod error;
pub mod pattern_engine;
pub mod timeline;
pub mod types;

// Re-export commonly used types
pub use config::SessionConfig;
pub use error::TimelineError;
pub use types::{BeatEvent, BeatPattern, GainDirective, Placement, SampleRef, Section, TrackId};
