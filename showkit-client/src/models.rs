//! Wire types specific to individual endpoints.
//!
//! Domain types (bookings, reviews, refund quotes) live in `showkit-lib`;
//! these are the thin envelopes the backend wraps them in.

use serde::{Deserialize, Serialize};
use showkit_lib::{Booking, Review, Theatre};

/// Envelope of the booking-list endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListResponse {
    pub bookings: Vec<Booking>,
}

/// Envelope of the theatre directory endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheatreListResponse {
    pub theatres: Vec<Theatre>,
}

/// Envelope of the per-theatre review listing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListResponse {
    pub reviews: Vec<Review>,
}

/// Where to send the user to complete or retry a payment.
///
/// The payment page itself belongs to the gateway; the client only opens
/// the URL before the session window runs out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRedirect {
    pub booking_id: String,
    pub payment_url: String,
}

/// QR payload for ticket entry, rendered client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketQr {
    pub booking_id: String,
    /// Opaque payload the venue scanner verifies.
    pub data: String,
}

/// Body for review create/update.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPayload {
    pub rating: u8,
    pub comment: String,
}

/// Body for an owner response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondPayload {
    pub message: String,
}

/// Generic message body used by error responses and acknowledgements.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}
