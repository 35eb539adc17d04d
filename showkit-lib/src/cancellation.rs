//! Cancellation eligibility and refund display types.
//!
//! The refund itself is computed by the backend policy endpoint; the
//! client only decides whether the "Cancel Booking" control is offered and
//! renders the quoted figures back to the user.

use crate::booking::{Booking, BookingStatus};
use crate::Money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a booking may be offered the cancel action.
///
/// Cancellable iff not already cancelled, paid, the show time is known,
/// and the show starts strictly after `now`. Gates the UI control only —
/// the backend re-validates on submission.
pub fn can_cancel(booking: &Booking, now: DateTime<Utc>) -> bool {
    if booking.is_cancelled || booking.status == Some(BookingStatus::Cancelled) {
        return false;
    }
    if !booking.is_paid {
        return false;
    }
    match booking.show_time() {
        Some(show_time) => show_time > now,
        None => false,
    }
}

/// Processing status of a refund, as reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Initiated,
    Processing,
    Completed,
    Failed,
    /// Any status value this client version does not know.
    #[serde(other)]
    Unknown,
}

/// One tier of the backend's refund policy, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundTier {
    /// Minimum hours before the show for this tier to apply.
    pub hours_before_show: i64,
    /// Percentage of the paid amount returned.
    pub percentage: Decimal,
}

/// The tiered refund policy, fetched for display before cancellation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundPolicy {
    pub tiers: Vec<RefundTier>,
}

/// A backend-computed refund quote for one booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundQuote {
    pub booking_id: String,
    /// Whether the backend will accept a cancellation right now.
    pub refundable: bool,
    /// Percentage of the paid amount that will be returned.
    pub percentage: Decimal,
    /// The amount that will be returned.
    pub amount: Money,
    /// Backend-supplied explanation when not refundable.
    #[serde(default)]
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::ShowInfo;
    use chrono::Duration;

    fn confirmed_with_show(show_offset: Duration, now: DateTime<Utc>) -> Booking {
        Booking::new("bk_c")
            .paid()
            .with_show(ShowInfo::new("Heat", "Astor").with_time(now + show_offset))
    }

    #[test]
    fn test_cancellable_before_show() {
        let now = Utc::now();
        assert!(can_cancel(&confirmed_with_show(Duration::hours(2), now), now));
    }

    #[test]
    fn test_not_cancellable_at_or_after_show_start() {
        let now = Utc::now();
        // Strictly-after comparison: a show starting this instant is out.
        assert!(!can_cancel(&confirmed_with_show(Duration::zero(), now), now));
        assert!(!can_cancel(
            &confirmed_with_show(-Duration::minutes(5), now),
            now
        ));
    }

    #[test]
    fn test_not_cancellable_without_show_time() {
        let now = Utc::now();
        let booking = Booking::new("bk_n").paid();
        assert!(!can_cancel(&booking, now));

        let show_no_time = Booking::new("bk_m")
            .paid()
            .with_show(ShowInfo::new("Heat", "Astor"));
        assert!(!can_cancel(&show_no_time, now));
    }

    #[test]
    fn test_not_cancellable_unpaid_or_cancelled() {
        let now = Utc::now();
        let unpaid = Booking::new("bk_u")
            .with_show(ShowInfo::new("Heat", "Astor").with_time(now + Duration::hours(1)));
        assert!(!can_cancel(&unpaid, now));

        let already = confirmed_with_show(Duration::hours(1), now).cancelled();
        assert!(!can_cancel(&already, now));
    }

    #[test]
    fn test_refund_status_tolerates_new_values() {
        let status: RefundStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, RefundStatus::Completed);

        let status: RefundStatus = serde_json::from_str("\"escalated\"").unwrap();
        assert_eq!(status, RefundStatus::Unknown);
    }

    #[test]
    fn test_refund_quote_deserializes() {
        let json = r#"{
            "bookingId": "bk_c",
            "refundable": true,
            "percentage": "75",
            "amount": "33750"
        }"#;
        let quote: RefundQuote = serde_json::from_str(json).unwrap();
        assert!(quote.refundable);
        assert_eq!(quote.amount, Money::from_minor(33_750));
        assert!(quote.reason.is_none());
    }
}
