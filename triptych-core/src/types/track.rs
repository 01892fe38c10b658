//! Track and sample addressing
//!
//! Tracks carry no state of their own; they are integer addresses the
//! renderer routes placements to. Samples are opaque names resolved by the
//! renderer's asset catalog.

use std::fmt;

/// A renderer track address (1-based by convention)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// Opaque sample identifier, e.g. `RD_POP_PADCHORD_1`
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SampleRef(String);

impl SampleRef {
    pub fn new(name: impl Into<String>) -> Self {
        SampleRef(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SampleRef {
    fn from(name: &str) -> Self {
        SampleRef::new(name)
    }
}

impl From<String> for SampleRef {
    fn from(name: String) -> Self {
        SampleRef(name)
    }
}

impl fmt::Display for SampleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
