//! Performance Rating
//!
//! Closed 1-5 scale. Out-of-range values never make it into a record.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{DomainError, DomainResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PerformanceRating(u8);

impl PerformanceRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// All ratings, highest first (filter dropdown order)
    pub const ALL_DESC: [PerformanceRating; 5] = [
        PerformanceRating(5),
        PerformanceRating(4),
        PerformanceRating(3),
        PerformanceRating(2),
        PerformanceRating(1),
    ];

    pub fn new(value: u8) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::RatingOutOfRange(value as i64))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Poor",
            2 => "Below Average",
            3 => "Average",
            4 => "Above Average",
            _ => "Excellent",
        }
    }
}

impl TryFrom<u8> for PerformanceRating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PerformanceRating> for u8 {
    fn from(rating: PerformanceRating) -> Self {
        rating.0
    }
}

impl fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(PerformanceRating::new(0).is_err());
        assert!(PerformanceRating::new(6).is_err());
        assert_eq!(PerformanceRating::new(3).unwrap().value(), 3);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(PerformanceRating::new(1).unwrap().label(), "Poor");
        assert_eq!(PerformanceRating::new(5).unwrap().label(), "Excellent");
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<PerformanceRating>("7").is_err());
        let ok: PerformanceRating = serde_json::from_str("4").unwrap();
        assert_eq!(ok.value(), 4);
    }
}
