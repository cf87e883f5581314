//! Advisory output contract.
//!
//! The prompts ask the model for a fixed number of niche keywords, related
//! keywords and tags, and for a total volume equal to PC plus mobile. None of
//! that is enforced: a result outside these bounds is still returned to the
//! caller, and the deviations are only reported so they can be logged.

use std::fmt;
use std::ops::RangeInclusive;

/// Requested number of niche keywords.
pub const NICHE_KEYWORD_COUNT: RangeInclusive<usize> = 3..=5;

/// Requested number of related keywords (word-cloud input).
pub const RELATED_KEYWORD_COUNT: RangeInclusive<usize> = 10..=15;

/// Requested number of blog tags.
pub const TAG_COUNT: RangeInclusive<usize> = 5..=7;

/// Valid range of a niche keyword's competition score.
pub const COMPETITION_SCORE: RangeInclusive<u32> = 0..=100;

/// A deviation from the requested output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    NicheKeywordCount(usize),
    RelatedKeywordCount(usize),
    TagCount(usize),
    CompetitionScoreOutOfRange { keyword: String, score: u32 },
    PostCountRangeInverted { min: u32, max: u32 },
    VolumeSplitMismatch { total: u64, pc: u64, mobile: u64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NicheKeywordCount(n) => write!(
                f,
                "expected {}-{} niche keywords, got {}",
                NICHE_KEYWORD_COUNT.start(),
                NICHE_KEYWORD_COUNT.end(),
                n
            ),
            Self::RelatedKeywordCount(n) => write!(
                f,
                "expected {}-{} related keywords, got {}",
                RELATED_KEYWORD_COUNT.start(),
                RELATED_KEYWORD_COUNT.end(),
                n
            ),
            Self::TagCount(n) => write!(
                f,
                "expected {}-{} tags, got {}",
                TAG_COUNT.start(),
                TAG_COUNT.end(),
                n
            ),
            Self::CompetitionScoreOutOfRange { keyword, score } => write!(
                f,
                "competition score {} for '{}' is outside 0-100",
                score, keyword
            ),
            Self::PostCountRangeInverted { min, max } => {
                write!(f, "recommended post count min {} exceeds max {}", min, max)
            }
            Self::VolumeSplitMismatch { total, pc, mobile } => write!(
                f,
                "search volume {} does not equal PC {} + mobile {}",
                total, pc, mobile
            ),
        }
    }
}

/// Check a collection size against its requested range.
pub(crate) fn check_count(
    len: usize,
    range: &RangeInclusive<usize>,
    advisory: fn(usize) -> Advisory,
) -> Option<Advisory> {
    if range.contains(&len) {
        None
    } else {
        Some(advisory(len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_count() {
        assert_eq!(check_count(4, &NICHE_KEYWORD_COUNT, Advisory::NicheKeywordCount), None);
        assert_eq!(
            check_count(2, &NICHE_KEYWORD_COUNT, Advisory::NicheKeywordCount),
            Some(Advisory::NicheKeywordCount(2))
        );
        assert_eq!(
            check_count(16, &RELATED_KEYWORD_COUNT, Advisory::RelatedKeywordCount),
            Some(Advisory::RelatedKeywordCount(16))
        );
    }

    #[test]
    fn test_display() {
        let msg = Advisory::VolumeSplitMismatch { total: 10, pc: 3, mobile: 4 }.to_string();
        assert_eq!(msg, "search volume 10 does not equal PC 3 + mobile 4");
        assert_eq!(Advisory::TagCount(3).to_string(), "expected 5-7 tags, got 3");
    }
}
