//! Customer Segments

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Errors raised when parsing a segment code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSegment {
    /// The code was empty or whitespace only.
    #[error("segment code must not be empty")]
    Empty,
}

/// An opaque customer segment code such as `p1`.
///
/// Codes are compared exactly; only surrounding whitespace is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment(String);

impl Segment {
    /// Parse a segment code.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSegment::Empty`] when the trimmed code is empty.
    pub fn new(code: &str) -> Result<Self, InvalidSegment> {
        let code = code.trim();

        if code.is_empty() {
            return Err(InvalidSegment::Empty);
        }

        Ok(Self(code.to_owned()))
    }

    /// The segment code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Segment {
    type Err = InvalidSegment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn segment_trims_surrounding_whitespace() -> TestResult {
        let segment: Segment = " p1 ".parse()?;

        assert_eq!(segment.as_str(), "p1");

        Ok(())
    }

    #[test]
    fn segment_rejects_blank_codes() {
        assert_eq!(Segment::new(""), Err(InvalidSegment::Empty));
        assert_eq!(Segment::new("   "), Err(InvalidSegment::Empty));
    }

    #[test]
    fn segment_codes_are_case_sensitive() -> TestResult {
        assert_ne!(Segment::new("p1")?, Segment::new("P1")?);

        Ok(())
    }
}
