// triptych-core/src/types/mod.rs

pub mod beat_pattern;
pub mod event;
pub mod section;
pub mod time;
pub mod track;

pub use beat_pattern::{BeatPattern, SLOTS_PER_BAR};
pub use event::{BeatEvent, GainDirective, GainRamp, Placement};
pub use section::Section;
pub use time::{bar, bars, Bar, BarSpan};
pub use track::{SampleRef, TrackId};
