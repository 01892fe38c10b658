//! Named bar ranges used to organize an arrangement.

use super::time::{bar, Bar, BarSpan};
use std::fmt;

/// A named contiguous bar range, e.g. "Energetic AM" over bars 9..21.
///
/// Sections exist for readability; the renderer never sees them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub start: i64,
    pub end: i64,
}

impl Section {
    pub const fn new(name: &'static str, start: i64, end: i64) -> Self {
        Section { name, start, end }
    }

    /// First bar as a rational position
    pub fn start_bar(&self) -> Bar {
        bar(self.start)
    }

    /// Exclusive end bar as a rational position
    pub fn end_bar(&self) -> Bar {
        bar(self.end)
    }

    /// Number of whole bars in the section
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 0
    }

    pub fn span(&self) -> BarSpan {
        BarSpan::new(self.start_bar(), self.end_bar())
    }

    /// Position `bars` after the section start (may be fractional)
    pub fn offset(&self, bars: Bar) -> Bar {
        self.start_bar() + bars
    }

    /// Whole-bar offset from the section start
    pub fn at(&self, bars: i64) -> Bar {
        bar(self.start + bars)
    }

    /// Position `bars` before the section end
    pub fn before_end(&self, bars: Bar) -> Bar {
        self.end_bar() - bars
    }

    /// The bar just before the middle of the section: `start + len / 2 - 1`
    pub fn midpoint_bar(&self) -> i64 {
        self.start + self.len().div_euclid(2) - 1
    }

    /// The tail of this section starting `bars` in
    pub fn from_offset(&self, bars: i64) -> BarSpan {
        BarSpan::new(bar(self.start + bars), self.end_bar())
    }

    /// Span from `from` to `to` bars after the section start
    pub fn slice(&self, from: Bar, to: Bar) -> BarSpan {
        BarSpan::new(self.offset(from), self.offset(to))
    }
}

impl From<Section> for BarSpan {
    fn from(section: Section) -> Self {
        section.span()
    }
}

impl From<&Section> for BarSpan {
    fn from(section: &Section) -> Self {
        section.span()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {})", self.name, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::time::bars;

    const DINNER: Section = Section::new("Energetic Dinner", 31, 43);

    #[test]
    fn test_section_len_and_span() {
        assert_eq!(DINNER.len(), 12);
        assert_eq!(DINNER.span(), BarSpan::whole(31, 43));
        assert!(!DINNER.is_empty());
    }

    #[test]
    fn test_offsets() {
        assert_eq!(DINNER.offset(bars(15, 2)), bars(77, 2));
        assert_eq!(DINNER.at(3), bar(34));
        assert_eq!(DINNER.before_end(bar(2)), bar(41));
        assert_eq!(DINNER.from_offset(3), BarSpan::whole(34, 43));
    }

    #[test]
    fn test_midpoint_bar() {
        // 31 + 12 / 2 - 1
        assert_eq!(DINNER.midpoint_bar(), 36);
        assert_eq!(Section::new("odd", 43, 52).midpoint_bar(), 46);
    }
}
