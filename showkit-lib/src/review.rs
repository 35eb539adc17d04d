//! Theatre reviews, ratings, and owner responses.
//!
//! Aggregation (average rating, counts) and reviewer badges are
//! backend-owned; this module holds the projections plus draft validation
//! so an obviously bad submission never leaves the client.

use crate::ShowkitError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A star rating between 1 and 5 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a rating, rejecting values outside 1..=5.
    pub fn new(stars: u8) -> crate::Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&stars) {
            return Err(ShowkitError::InvalidArgument(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                stars
            ))
            .into());
        }
        Ok(Self(stars))
    }

    pub fn stars(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).map_err(|e| e.to_string())
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for _ in 0..self.0 {
            write!(f, "★")?;
        }
        for _ in self.0..Self::MAX {
            write!(f, "☆")?;
        }
        Ok(())
    }
}

/// Badge the backend assigns to a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerBadge {
    VerifiedVisitor,
    TopReviewer,
    /// Any badge this client version does not know.
    #[serde(other)]
    Unknown,
}

/// A theatre owner's reply to a review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerResponse {
    pub message: String,
    pub responded_at: DateTime<Utc>,
}

/// A published review as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub theatre_id: String,
    pub author: String,
    #[serde(default)]
    pub author_badge: Option<ReviewerBadge>,
    pub rating: Rating,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner_response: Option<OwnerResponse>,
}

/// A review being composed, validated before submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub rating: u8,
    pub comment: String,
}

impl ReviewDraft {
    pub fn new(rating: u8, comment: impl Into<String>) -> Self {
        Self {
            rating,
            comment: comment.into(),
        }
    }

    /// Validate the draft. The backend validates again on submission.
    pub fn validate(&self) -> crate::Result<()> {
        Rating::new(self.rating)?;
        if self.comment.trim().is_empty() {
            return Err(
                ShowkitError::InvalidArgument("comment cannot be empty".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Backend-aggregated rating summary for a theatre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Average rating, one decimal of precision upstream.
    pub average: Decimal,
    /// Number of reviews aggregated.
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(0).is_err());
        assert!(Rating::new(6).is_err());
        for stars in 1..=5 {
            assert_eq!(Rating::new(stars).unwrap().stars(), stars);
        }
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::new(3).unwrap().to_string(), "★★★☆☆");
        assert_eq!(Rating::new(5).unwrap().to_string(), "★★★★★");
    }

    #[test]
    fn test_rating_rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Rating>("3").is_ok());
        assert!(serde_json::from_str::<Rating>("0").is_err());
        assert!(serde_json::from_str::<Rating>("9").is_err());
    }

    #[test]
    fn test_draft_validation() {
        assert!(ReviewDraft::new(4, "Great sound, comfy seats").validate().is_ok());
        assert!(ReviewDraft::new(0, "ok").validate().is_err());
        assert!(ReviewDraft::new(4, "   ").validate().is_err());
    }

    #[test]
    fn test_review_with_owner_response_round_trip() {
        let review = Review {
            id: "rv_1".to_string(),
            theatre_id: "th_1".to_string(),
            author: "asha".to_string(),
            author_badge: Some(ReviewerBadge::VerifiedVisitor),
            rating: Rating::new(4).unwrap(),
            comment: "Projection was crisp".to_string(),
            created_at: Utc::now(),
            updated_at: None,
            owner_response: Some(OwnerResponse {
                message: "Thank you!".to_string(),
                responded_at: Utc::now(),
            }),
        };

        let json = serde_json::to_string(&review).unwrap();
        let parsed: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(review, parsed);
    }
}
