//! Sixteen-slot beat patterns.
//!
//! One pattern covers exactly one bar, each slot a sixteenth note. The text
//! notation uses `0` for a trigger and `-` for a rest:
//!
//! ```text
//! 0---0---0---0---   four on the floor
//! -0-0-0-0-0-0-0-0   off-beat ghost notes
//! ```

use crate::error::TimelineError;
use std::fmt;
use std::str::FromStr;

/// Number of sixteenth-note slots in one bar
pub const SLOTS_PER_BAR: usize = 16;

const TRIGGER: char = '0';
const REST: char = '-';

/// A one-bar rhythm of 16 trigger/rest slots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct BeatPattern {
    slots: [bool; SLOTS_PER_BAR],
}

impl BeatPattern {
    /// Build a pattern from raw slots
    pub const fn from_slots(slots: [bool; SLOTS_PER_BAR]) -> Self {
        BeatPattern { slots }
    }

    /// Parse `0`/`-` notation. Exactly 16 slots, nothing else.
    pub fn parse(notation: &str) -> Result<Self, TimelineError> {
        let count = notation.chars().count();
        if count != SLOTS_PER_BAR {
            return Err(TimelineError::InvalidPattern(format!(
                "{:?} has {} slots, expected {}",
                notation, count, SLOTS_PER_BAR
            )));
        }

        let mut slots = [false; SLOTS_PER_BAR];
        for (i, c) in notation.chars().enumerate() {
            slots[i] = match c {
                TRIGGER => true,
                REST => false,
                other => {
                    return Err(TimelineError::InvalidPattern(format!(
                        "{:?} has {:?} at slot {}, expected '{}' or '{}'",
                        notation, other, i, TRIGGER, REST
                    )))
                }
            };
        }
        Ok(BeatPattern { slots })
    }

    pub fn slots(&self) -> &[bool; SLOTS_PER_BAR] {
        &self.slots
    }

    /// Whether slot `i` triggers (false for out-of-range slots)
    pub fn is_trigger(&self, i: usize) -> bool {
        self.slots.get(i).copied().unwrap_or(false)
    }

    /// Slot indices that trigger, in order
    pub fn triggers(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, &hit)| hit)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn hit_count(&self) -> usize {
        self.slots.iter().filter(|&&hit| hit).count()
    }

    pub fn is_silent(&self) -> bool {
        self.hit_count() == 0
    }

    /// The `0`/`-` notation for this pattern
    pub fn notation(&self) -> String {
        self.to_string()
    }
}

impl FromStr for BeatPattern {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BeatPattern::parse(s)
    }
}

impl TryFrom<String> for BeatPattern {
    type Error = TimelineError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BeatPattern::parse(&s)
    }
}

impl From<BeatPattern> for String {
    fn from(p: BeatPattern) -> String {
        p.to_string()
    }
}

impl fmt::Display for BeatPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &hit in &self.slots {
            write!(f, "{}", if hit { TRIGGER } else { REST })?;
        }
        Ok(())
    }
}
