//! Booking records as projected by the backend's booking-list endpoint.
//!
//! The client never mutates a booking; every transition happens server-side
//! and is observed by re-fetching. Fields the backend may omit are optional
//! here so a partial record deserializes instead of failing the whole list.

use crate::cancellation::RefundStatus;
use crate::Money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Backend-assigned booking status.
///
/// A record with no terminal status and `is_paid = true` is confirmed;
/// the backend does not emit a dedicated "confirmed" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    PaymentFailed,
    Cancelled,
}

/// The scheduled screening a booking is for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowInfo {
    /// Movie title.
    pub movie: String,
    /// Theatre name.
    pub theatre: String,
    /// Screen/auditorium label, if the backend provides one.
    #[serde(default)]
    pub screen: Option<String>,
    /// Booked seat labels.
    #[serde(default)]
    pub seats: Vec<String>,
    /// Scheduled start of the screening. Absent on malformed records;
    /// cancellation is never offered without it.
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

impl ShowInfo {
    pub fn new(movie: impl Into<String>, theatre: impl Into<String>) -> Self {
        Self {
            movie: movie.into(),
            theatre: theatre.into(),
            screen: None,
            seats: Vec::new(),
            time: None,
        }
    }

    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    pub fn with_seats(mut self, seats: Vec<String>) -> Self {
        self.seats = seats;
        self
    }
}

/// A seat reservation for a scheduled screening.
///
/// Read-only projection of the backend record. `created_at` is immutable
/// once set; all payment-session windows are derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque identifier.
    pub id: String,
    /// Lifecycle status; absent once the booking is paid and live.
    #[serde(default)]
    pub status: Option<BookingStatus>,
    /// Set once by the backend on successful payment.
    #[serde(default)]
    pub is_paid: bool,
    /// Set once by the backend on cancellation.
    #[serde(default)]
    pub is_cancelled: bool,
    /// Creation time; the anchor for every expiry window.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// The screening this booking is for.
    #[serde(default)]
    pub show: Option<ShowInfo>,
    /// Total paid (or payable) amount.
    #[serde(default)]
    pub total_amount: Option<Money>,
    /// Refund amount; populated only after cancellation.
    #[serde(default)]
    pub refund_amount: Option<Money>,
    /// Refund percentage applied by the backend policy.
    #[serde(default)]
    pub refund_percentage: Option<Decimal>,
    /// Refund processing status.
    #[serde(default)]
    pub refund_status: Option<RefundStatus>,
}

impl Booking {
    /// Create a minimal booking record.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: None,
            is_paid: false,
            is_cancelled: false,
            created_at: None,
            show: None,
            total_amount: None,
            refund_amount: None,
            refund_percentage: None,
            refund_status: None,
        }
    }

    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_show(mut self, show: ShowInfo) -> Self {
        self.show = Some(show);
        self
    }

    pub fn with_total_amount(mut self, amount: Money) -> Self {
        self.total_amount = Some(amount);
        self
    }

    pub fn paid(mut self) -> Self {
        self.is_paid = true;
        self
    }

    pub fn cancelled(mut self) -> Self {
        self.is_cancelled = true;
        self
    }

    /// Scheduled show time, if known.
    pub fn show_time(&self) -> Option<DateTime<Utc>> {
        self.show.as_ref().and_then(|s| s.time)
    }
}
