//! # Showkit Domain Library
//!
//! Client-side domain types for a movie-ticket booking and theatre-review
//! platform. The backend owns every business decision (payment capture,
//! refund computation, rating aggregation, badge assignment); this crate
//! holds the read-only projections of those records plus the one piece of
//! client-side logic with real structure: the booking lifecycle classifier.
//!
//! Key properties:
//! - `classify` is a pure, total function of `(Booking, now)` — it never
//!   performs I/O, never panics, and maps malformed input to a fallback
//!   state instead of erroring.
//! - All payment-session windows are computed from the booking's immutable
//!   `created_at`, never from "now minus last check".
//! - Time is read through the [`Clock`] seam so every window and countdown
//!   is deterministically testable.

pub mod booking;
pub mod cancellation;
pub mod clock;
pub mod countdown;
pub mod lifecycle;
pub mod money;
pub mod review;
pub mod theatre;

pub use booking::{Booking, BookingStatus, ShowInfo};
pub use cancellation::{can_cancel, RefundPolicy, RefundQuote, RefundStatus, RefundTier};
pub use clock::{Clock, FixedClock, SystemClock};
pub use countdown::Countdown;
pub use lifecycle::{
    classify, visible_bookings, BookingAction, BookingState, Classification,
    PAYMENT_FAILED_WINDOW_MINUTES, PENDING_WINDOW_MINUTES,
};
pub use money::Money;
pub use review::{OwnerResponse, Rating, RatingSummary, Review, ReviewDraft, ReviewerBadge};
pub use theatre::Theatre;

pub type Result<T> = anyhow::Result<T>;

#[derive(thiserror::Error, Debug)]
pub enum ShowkitError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("other error: {0}")]
    Other(String),
}
