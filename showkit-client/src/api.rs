//! HTTP client for the booking backend.
//!
//! Thin typed wrapper over the REST endpoints: every method is one
//! request/response pair, errors are mapped to [`ClientError`]
//! deterministically, and the session token rides along as a bearer
//! header. No call here retries on its own.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::config::ApiConfig;
use crate::models::{
    BookingListResponse, MessageBody, PaymentRedirect, RespondPayload, ReviewListResponse,
    ReviewPayload, TheatreListResponse, TicketQr,
};
use crate::session::Session;
use crate::{ClientError, Result};
use showkit_lib::{Booking, RefundQuote, Review, ReviewDraft, Theatre};

/// Authenticated client for the Showkit backend.
pub struct ApiClient {
    config: ApiConfig,
    session: Session,
    http: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given backend and session.
    pub fn new(config: ApiConfig, session: Session) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            session,
            http,
        })
    }

    /// The session this client authenticates with.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    /// Fetch the caller's bookings, unfiltered.
    ///
    /// Visibility filtering is a display concern; apply
    /// `showkit_lib::visible_bookings` before rendering.
    pub async fn list_bookings(&self) -> Result<Vec<Booking>> {
        let response: BookingListResponse = self.get("bookings").await?;
        Ok(response.bookings)
    }

    /// Fetch a single booking.
    pub async fn booking(&self, booking_id: &str) -> Result<Booking> {
        self.get(&format!("bookings/{}", booking_id))
            .await
            .map_err(|e| mark_not_found(e, "booking", booking_id))
    }

    /// Start or retry payment; returns the gateway URL to open.
    pub async fn request_payment(&self, booking_id: &str) -> Result<PaymentRedirect> {
        self.post(&format!("bookings/{}/payment", booking_id), &())
            .await
            .map_err(|e| match e {
                ClientError::Api { status: 402, message } | ClientError::Api { status: 409, message } => {
                    ClientError::Payment {
                        booking_id: booking_id.to_string(),
                        reason: message,
                    }
                }
                other => mark_not_found(other, "booking", booking_id),
            })
    }

    /// Backend-computed refund quote for a prospective cancellation.
    pub async fn refund_quote(&self, booking_id: &str) -> Result<RefundQuote> {
        self.get(&format!("bookings/{}/refund-quote", booking_id))
            .await
            .map_err(|e| mark_not_found(e, "booking", booking_id))
    }

    /// Cancel a booking; returns the updated record with refund fields set.
    pub async fn cancel_booking(&self, booking_id: &str) -> Result<Booking> {
        self.post(&format!("bookings/{}/cancel", booking_id), &())
            .await
            .map_err(|e| mark_not_found(e, "booking", booking_id))
    }

    /// Download the ticket PDF.
    pub async fn ticket_pdf(&self, booking_id: &str) -> Result<Vec<u8>> {
        let path = format!("bookings/{}/ticket.pdf", booking_id);
        debug!(path = %path, "GET (bytes)");
        let response = self
            .http
            .get(self.url(&path))
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .send()
            .await
            .map_err(|e| self.request_error(&path, e))?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(ClientError::from)?;
            return Ok(bytes.to_vec());
        }
        Err(mark_not_found(
            error_from_response(response).await,
            "booking",
            booking_id,
        ))
    }

    /// Fetch the entry QR payload for a confirmed booking.
    pub async fn ticket_qr(&self, booking_id: &str) -> Result<TicketQr> {
        self.get(&format!("bookings/{}/qr", booking_id))
            .await
            .map_err(|e| mark_not_found(e, "booking", booking_id))
    }

    /// Ask the backend to re-send the confirmation email.
    pub async fn resend_confirmation(&self, booking_id: &str) -> Result<()> {
        self.post_no_content(&format!("bookings/{}/resend-email", booking_id), &())
            .await
            .map_err(|e| mark_not_found(e, "booking", booking_id))
    }

    // ------------------------------------------------------------------
    // Theatres and reviews
    // ------------------------------------------------------------------

    /// List theatres with their aggregated ratings.
    pub async fn theatres(&self) -> Result<Vec<Theatre>> {
        let response: TheatreListResponse = self.get("theatres").await?;
        Ok(response.theatres)
    }

    /// List reviews for a theatre.
    pub async fn reviews(&self, theatre_id: &str) -> Result<Vec<Review>> {
        let response: ReviewListResponse = self
            .get(&format!("theatres/{}/reviews", theatre_id))
            .await
            .map_err(|e| mark_not_found(e, "theatre", theatre_id))?;
        Ok(response.reviews)
    }

    /// Submit a new review. The draft is validated locally first.
    pub async fn submit_review(&self, theatre_id: &str, draft: &ReviewDraft) -> Result<Review> {
        draft
            .validate()
            .map_err(|e| ClientError::invalid_data("review", e.to_string()))?;
        self.post(
            &format!("theatres/{}/reviews", theatre_id),
            &ReviewPayload {
                rating: draft.rating,
                comment: draft.comment.clone(),
            },
        )
        .await
        .map_err(|e| mark_not_found(e, "theatre", theatre_id))
    }

    /// Update one of the caller's reviews.
    pub async fn update_review(&self, review_id: &str, draft: &ReviewDraft) -> Result<Review> {
        draft
            .validate()
            .map_err(|e| ClientError::invalid_data("review", e.to_string()))?;
        self.put(
            &format!("reviews/{}", review_id),
            &ReviewPayload {
                rating: draft.rating,
                comment: draft.comment.clone(),
            },
        )
        .await
        .map_err(|e| mark_not_found(e, "review", review_id))
    }

    /// Delete one of the caller's reviews.
    pub async fn delete_review(&self, review_id: &str) -> Result<()> {
        let path = format!("reviews/{}", review_id);
        debug!(path = %path, "DELETE");
        let response = self
            .http
            .delete(self.url(&path))
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .send()
            .await
            .map_err(|e| self.request_error(&path, e))?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(mark_not_found(
            error_from_response(response).await,
            "review",
            review_id,
        ))
    }

    /// Post an owner response to a review (theatre-owner accounts only).
    pub async fn respond_to_review(&self, review_id: &str, message: &str) -> Result<Review> {
        if message.trim().is_empty() {
            return Err(ClientError::invalid_data("response", "cannot be empty"));
        }
        self.post(
            &format!("reviews/{}/response", review_id),
            &RespondPayload {
                message: message.to_string(),
            },
        )
        .await
        .map_err(|e| mark_not_found(e, "review", review_id))
    }

    // ------------------------------------------------------------------
    // Request helpers
    // ------------------------------------------------------------------

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path = %path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .send()
            .await
            .map_err(|e| self.request_error(path, e))?;

        handle_response(response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!(path = %path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| self.request_error(path, e))?;

        handle_response(response).await
    }

    async fn post_no_content<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        debug!(path = %path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| self.request_error(path, e))?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(error_from_response(response).await)
    }

    async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        debug!(path = %path, "PUT");
        let response = self
            .http
            .put(self.url(path))
            .header(reqwest::header::AUTHORIZATION, self.session.bearer())
            .json(body)
            .send()
            .await
            .map_err(|e| self.request_error(path, e))?;

        handle_response(response).await
    }

    fn request_error(&self, operation: &str, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                operation: operation.to_string(),
                timeout_ms: self.config.timeout_secs * 1_000,
            }
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    if response.status().is_success() {
        return response.json::<T>().await.map_err(ClientError::from);
    }
    Err(error_from_response(response).await)
}

/// Map a non-success response to a structured error. Consumes the body.
async fn error_from_response(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let retry_after_ms = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(|secs| secs * 1_000);

    let message = response
        .json::<MessageBody>()
        .await
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string()
        });

    match status.as_u16() {
        401 => ClientError::SessionExpired,
        403 => ClientError::Auth(message),
        429 => ClientError::RateLimited {
            retry_after_ms: retry_after_ms.unwrap_or(1_000),
        },
        code => ClientError::Api {
            status: code,
            message,
        },
    }
}

fn mark_not_found(err: ClientError, resource: &str, id: &str) -> ClientError {
    match err {
        ClientError::Api { status: 404, .. } => ClientError::not_found(resource, id),
        other => other,
    }
}
