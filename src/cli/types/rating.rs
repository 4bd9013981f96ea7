//! `ATTRIBUTE=SCORE` rating arguments.

use crate::error::FederationError;
use std::fmt;
use std::str::FromStr;

/// One player rating given on the command line.
///
/// ```rust
/// use aafl_federation::cli::types::RatingArg;
///
/// let rating: RatingArg = "pace=8".parse().unwrap();
/// assert_eq!(rating.attribute, "pace");
/// assert_eq!(rating.score, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingArg {
    pub attribute: String,
    pub score: i32,
}

impl FromStr for RatingArg {
    type Err = FederationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FederationError::InvalidRating {
            value: s.to_string(),
        };

        let (attribute, score) = s.split_once('=').ok_or_else(invalid)?;
        let attribute = attribute.trim();
        if attribute.is_empty() {
            return Err(invalid());
        }
        let score = score.trim().parse::<i32>().map_err(|_| invalid())?;

        Ok(Self {
            attribute: attribute.to_string(),
            score,
        })
    }
}

impl fmt::Display for RatingArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.attribute, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rating() {
        let rating: RatingArg = "GK=40".parse().unwrap();
        assert_eq!(
            rating,
            RatingArg {
                attribute: "GK".to_string(),
                score: 40
            }
        );
    }

    #[test]
    fn test_parse_rating_trims_whitespace() {
        let rating: RatingArg = " passing = 7 ".parse().unwrap();
        assert_eq!(rating.attribute, "passing");
        assert_eq!(rating.score, 7);
    }

    #[test]
    fn test_parse_negative_rating_accepted() {
        let rating: RatingArg = "discipline=-3".parse().unwrap();
        assert_eq!(rating.score, -3);
    }

    #[test]
    fn test_parse_rating_errors() {
        for input in ["GK", "=40", "GK=", "GK=high", "GK=99999999999"] {
            match input.parse::<RatingArg>() {
                Err(FederationError::InvalidRating { value }) => assert_eq!(value, input),
                other => panic!("Expected InvalidRating for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_display() {
        let rating: RatingArg = "AT=85".parse().unwrap();
        assert_eq!(rating.to_string(), "AT=85");
    }
}
