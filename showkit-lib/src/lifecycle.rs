//! Booking lifecycle classification.
//!
//! `classify` is the display engine behind the bookings view: given a
//! backend record and the current time it decides the display state, which
//! actions are offered, and the payment-session countdown for unpaid
//! records. It is pure and total — malformed records fall through to
//! [`BookingState::Unknown`] instead of erroring, because the rendering
//! layer has no recovery path for a failure mid-list.
//!
//! The surrounding UI re-invokes `classify` on a 1 Hz tick purely to
//! refresh countdowns; the tick never drives the model.

use crate::booking::{Booking, BookingStatus};
use crate::cancellation::can_cancel;
use crate::countdown::Countdown;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Payment-session window for a freshly created pending booking.
pub const PENDING_WINDOW_MINUTES: i64 = 30;

/// Retry window after a failed payment attempt.
pub const PAYMENT_FAILED_WINDOW_MINUTES: i64 = 10;

/// Display state of a booking at one evaluation instant.
///
/// Exactly one state applies; matching is in priority order with the
/// terminal states first, so a cancelled-and-paid record reads as
/// cancelled and an expired-but-paid record reads as confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingState {
    /// Cancelled by the user; refund fields may be present. Terminal.
    Cancelled,
    /// Paid and live. Terminal for payment purposes.
    Confirmed,
    /// Awaiting payment inside the session window.
    Pending,
    /// Pending booking whose session window has closed. Hidden.
    PendingExpired,
    /// Failed payment still inside the retry window.
    PaymentFailedRetryable,
    /// Failed payment whose retry window has closed. Hidden.
    PaymentFailedExpired,
    /// Malformed or unrecognized record. Defensive fallback.
    Unknown,
}

impl BookingState {
    /// Whether a session window has run out on this state.
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::PendingExpired | Self::PaymentFailedExpired)
    }
}

/// An action the UI may offer on a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    /// Complete the initial payment (pending bookings).
    CompletePayment,
    /// Retry after a failed payment attempt.
    ContinuePayment,
    /// Download the ticket PDF.
    DownloadTicket,
    /// Re-send the confirmation email.
    ResendEmail,
    /// Show the entry QR code.
    ViewQr,
    /// Cancel the booking (refund per backend policy).
    Cancel,
}

/// Result of classifying one booking at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    /// The display state.
    pub state: BookingState,
    /// Actions the UI should enable, in display order.
    pub actions: Vec<BookingAction>,
    /// Session countdown; present only for the two in-window states.
    pub countdown: Option<Countdown>,
    /// Whether the list view shows this booking at all.
    pub visible: bool,
}

impl Classification {
    /// Whether any action is currently enabled.
    pub fn actionable(&self) -> bool {
        !self.actions.is_empty()
    }

    fn hidden(state: BookingState) -> Self {
        Self {
            state,
            actions: Vec::new(),
            countdown: None,
            visible: false,
        }
    }
}

/// Classify a booking against the current time.
///
/// Pure and O(1): no I/O, no side effects, deterministic for a given
/// `(booking, now)` pair. Every window is anchored on the record's
/// immutable `created_at`.
pub fn classify(booking: &Booking, now: DateTime<Utc>) -> Classification {
    // Terminal states win over everything the status field says.
    if booking.is_cancelled || booking.status == Some(BookingStatus::Cancelled) {
        return Classification {
            state: BookingState::Cancelled,
            actions: Vec::new(),
            countdown: None,
            visible: true,
        };
    }

    if booking.is_paid {
        let mut actions = vec![
            BookingAction::DownloadTicket,
            BookingAction::ResendEmail,
            BookingAction::ViewQr,
        ];
        if can_cancel(booking, now) {
            actions.push(BookingAction::Cancel);
        }
        return Classification {
            state: BookingState::Confirmed,
            actions,
            countdown: None,
            visible: true,
        };
    }

    match booking.status {
        Some(BookingStatus::Pending) => in_window(
            booking,
            now,
            PENDING_WINDOW_MINUTES,
            BookingState::Pending,
            BookingState::PendingExpired,
            BookingAction::CompletePayment,
        ),
        Some(BookingStatus::PaymentFailed) => in_window(
            booking,
            now,
            PAYMENT_FAILED_WINDOW_MINUTES,
            BookingState::PaymentFailedRetryable,
            BookingState::PaymentFailedExpired,
            BookingAction::ContinuePayment,
        ),
        _ => Classification::hidden(BookingState::Unknown),
    }
}

fn in_window(
    booking: &Booking,
    now: DateTime<Utc>,
    window_minutes: i64,
    live: BookingState,
    expired: BookingState,
    action: BookingAction,
) -> Classification {
    // A window cannot be derived without the creation time.
    let Some(created_at) = booking.created_at else {
        return Classification::hidden(BookingState::Unknown);
    };

    let deadline = created_at + Duration::minutes(window_minutes);
    match Countdown::until(deadline, now) {
        Some(countdown) => Classification {
            state: live,
            actions: vec![action],
            countdown: Some(countdown),
            visible: true,
        },
        None => Classification::hidden(expired),
    }
}

/// Filter a fetched list down to the bookings the view renders.
///
/// Display-only: expired sessions are silently dropped here while the
/// backend records stay untouched.
pub fn visible_bookings(bookings: &[Booking], now: DateTime<Utc>) -> Vec<&Booking> {
    bookings
        .iter()
        .filter(|b| classify(b, now).visible)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::ShowInfo;
    use chrono::Duration;

    fn pending_booking(age: Duration, now: DateTime<Utc>) -> Booking {
        Booking::new("bk_pending")
            .with_status(BookingStatus::Pending)
            .with_created_at(now - age)
    }

    fn failed_booking(age: Duration, now: DateTime<Utc>) -> Booking {
        Booking::new("bk_failed")
            .with_status(BookingStatus::PaymentFailed)
            .with_created_at(now - age)
    }

    #[test]
    fn test_cancelled_wins_over_everything() {
        let now = Utc::now();
        let booking = Booking::new("bk_1")
            .with_status(BookingStatus::Pending)
            .with_created_at(now)
            .paid()
            .cancelled();

        let c = classify(&booking, now);
        assert_eq!(c.state, BookingState::Cancelled);
        assert!(!c.actionable());
        assert!(c.countdown.is_none());
        assert!(c.visible);
    }

    #[test]
    fn test_cancelled_status_without_flag() {
        let now = Utc::now();
        let booking = Booking::new("bk_1").with_status(BookingStatus::Cancelled);
        assert_eq!(classify(&booking, now).state, BookingState::Cancelled);
    }

    #[test]
    fn test_paid_is_confirmed() {
        let now = Utc::now();
        let booking = Booking::new("bk_2").paid();

        let c = classify(&booking, now);
        assert_eq!(c.state, BookingState::Confirmed);
        assert!(c.actions.contains(&BookingAction::DownloadTicket));
        assert!(c.actions.contains(&BookingAction::ResendEmail));
        assert!(c.actions.contains(&BookingAction::ViewQr));
        // No show time on record: cancellation is not offered.
        assert!(!c.actions.contains(&BookingAction::Cancel));
        assert!(c.countdown.is_none());
    }

    #[test]
    fn test_confirmed_with_future_show_offers_cancel() {
        let now = Utc::now();
        let booking = Booking::new("bk_3")
            .paid()
            .with_show(ShowInfo::new("Arrival", "Rialto").with_time(now + Duration::hours(6)));

        let c = classify(&booking, now);
        assert_eq!(c.state, BookingState::Confirmed);
        assert!(c.actions.contains(&BookingAction::Cancel));
    }

    #[test]
    fn test_confirmed_after_show_started_no_cancel() {
        let now = Utc::now();
        let booking = Booking::new("bk_4")
            .paid()
            .with_show(ShowInfo::new("Arrival", "Rialto").with_time(now - Duration::minutes(1)));

        let c = classify(&booking, now);
        assert_eq!(c.state, BookingState::Confirmed);
        assert!(!c.actions.contains(&BookingAction::Cancel));
    }

    #[test]
    fn test_pending_in_window() {
        let now = Utc::now();
        let c = classify(&pending_booking(Duration::minutes(29), now), now);

        assert_eq!(c.state, BookingState::Pending);
        assert_eq!(c.actions, vec![BookingAction::CompletePayment]);
        assert!(c.visible);
        assert_eq!(c.countdown.unwrap().to_string(), "1:00");
    }

    #[test]
    fn test_pending_expired() {
        let now = Utc::now();
        let c = classify(&pending_booking(Duration::minutes(31), now), now);

        assert_eq!(c.state, BookingState::PendingExpired);
        assert!(!c.actionable());
        assert!(c.countdown.is_none());
        assert!(!c.visible);
    }

    #[test]
    fn test_pending_expires_exactly_at_the_boundary() {
        let now = Utc::now();
        let c = classify(&pending_booking(Duration::minutes(30), now), now);
        assert_eq!(c.state, BookingState::PendingExpired);
    }

    #[test]
    fn test_payment_failed_retryable() {
        let now = Utc::now();
        let age = Duration::minutes(9) + Duration::seconds(59);
        let c = classify(&failed_booking(age, now), now);

        assert_eq!(c.state, BookingState::PaymentFailedRetryable);
        assert_eq!(c.actions, vec![BookingAction::ContinuePayment]);
        let cd = c.countdown.unwrap();
        assert!(cd.as_millis() > 0);
        assert!(cd.as_millis() <= 60_000);
    }

    #[test]
    fn test_payment_failed_expired() {
        let now = Utc::now();
        let c = classify(&failed_booking(Duration::minutes(10), now), now);
        assert_eq!(c.state, BookingState::PaymentFailedExpired);
        assert!(!c.visible);
    }

    #[test]
    fn test_pending_without_created_at_is_unknown() {
        let now = Utc::now();
        let booking = Booking::new("bk_5").with_status(BookingStatus::Pending);

        let c = classify(&booking, now);
        assert_eq!(c.state, BookingState::Unknown);
        assert!(!c.actionable());
    }

    #[test]
    fn test_statusless_unpaid_record_is_unknown() {
        let now = Utc::now();
        let c = classify(&Booking::new("bk_6"), now);
        assert_eq!(c.state, BookingState::Unknown);
    }

    #[test]
    fn test_visibility_filter_drops_expired() {
        let now = Utc::now();
        let bookings = vec![
            Booking::new("a").paid(),
            pending_booking(Duration::minutes(5), now),
            pending_booking(Duration::minutes(45), now),
            failed_booking(Duration::minutes(3), now),
            failed_booking(Duration::minutes(15), now),
            Booking::new("f").cancelled(),
        ];

        let visible = visible_bookings(&bookings, now);
        let ids: Vec<&str> = visible.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "bk_pending", "bk_failed", "f"]);
    }

    #[test]
    fn test_countdown_refresh_is_anchored_on_created_at() {
        // Re-evaluating one second later shrinks the countdown by exactly
        // one second; the window never drifts with evaluation cadence.
        let now = Utc::now();
        let booking = pending_booking(Duration::minutes(10), now);

        let first = classify(&booking, now).countdown.unwrap();
        let second = classify(&booking, now + Duration::seconds(1))
            .countdown
            .unwrap();
        assert_eq!(first.as_millis() - second.as_millis(), 1_000);
    }
}
