//! Integration tests for the backend API client.
//!
//! These tests run against a wiremock server; no network access or real
//! backend is required.
//!
//! ```bash
//! cargo test -p showkit-client --test api_integration
//! ```

use showkit_client::{ApiClient, ApiConfig, ClientError, Session};
use showkit_lib::{BookingStatus, ReviewDraft};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(
        ApiConfig::new(server.uri()),
        Session::new("tok_test", "user_1"),
    )
    .expect("client builds")
}

#[tokio::test]
async fn test_list_bookings_sends_bearer_and_parses() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .and(header("Authorization", "Bearer tok_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bookings": [
                {
                    "id": "bk_1",
                    "isPaid": true,
                    "isCancelled": false,
                    "show": {
                        "movie": "Dune",
                        "theatre": "Orpheum",
                        "seats": ["F4"],
                        "time": "2026-08-09T20:00:00Z"
                    }
                },
                {
                    "id": "bk_2",
                    "status": "pending",
                    "isPaid": false,
                    "createdAt": "2026-08-08T12:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let bookings = client_for(&server).list_bookings().await.unwrap();
    assert_eq!(bookings.len(), 2);
    assert!(bookings[0].is_paid);
    assert_eq!(bookings[1].status, Some(BookingStatus::Pending));
}

#[tokio::test]
async fn test_401_maps_to_session_expired() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "message": "token expired" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).list_bookings().await.unwrap_err();
    assert!(matches!(err, ClientError::SessionExpired));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_404_maps_to_not_found_with_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings/bk_missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client_for(&server).booking("bk_missing").await.unwrap_err();
    match err {
        ClientError::NotFound { resource, id } => {
            assert_eq!(resource, "booking");
            assert_eq!(id, "bk_missing");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_429_maps_to_rate_limited_with_retry_after() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "3"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_bookings().await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.retry_after_ms(), Some(3_000));
}

#[tokio::test]
async fn test_refund_quote_then_cancel() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bookings/bk_9/refund-quote"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bookingId": "bk_9",
            "refundable": true,
            "percentage": "75",
            "amount": "33750"
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/bookings/bk_9/cancel"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "bk_9",
            "status": "cancelled",
            "isPaid": true,
            "isCancelled": true,
            "refundAmount": "33750",
            "refundPercentage": "75",
            "refundStatus": "initiated"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let quote = client.refund_quote("bk_9").await.unwrap();
    assert!(quote.refundable);
    assert_eq!(quote.amount.as_minor(), 33_750);

    let cancelled = client.cancel_booking("bk_9").await.unwrap();
    assert!(cancelled.is_cancelled);
    assert_eq!(cancelled.refund_amount.unwrap().as_minor(), 33_750);
}

#[tokio::test]
async fn test_payment_conflict_maps_to_payment_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings/bk_3/payment"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(serde_json::json!({ "message": "session window closed" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server).request_payment("bk_3").await.unwrap_err();
    match err {
        ClientError::Payment { booking_id, reason } => {
            assert_eq!(booking_id, "bk_3");
            assert_eq!(reason, "session window closed");
        }
        other => panic!("expected Payment, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resend_confirmation_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/bookings/bk_1/resend-email"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server)
        .resend_confirmation("bk_1")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_ticket_pdf_returns_raw_bytes() {
    let server = MockServer::start().await;
    let pdf = b"%PDF-1.7 fake".to_vec();

    Mock::given(method("GET"))
        .and(path("/bookings/bk_1/ticket.pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(pdf.clone()))
        .mount(&server)
        .await;

    let bytes = client_for(&server).ticket_pdf("bk_1").await.unwrap();
    assert_eq!(bytes, pdf);
}

#[tokio::test]
async fn test_submit_review_validates_locally_before_sending() {
    let server = MockServer::start().await;
    // No mock mounted: an invalid draft must never reach the wire.

    let err = client_for(&server)
        .submit_review("th_1", &ReviewDraft::new(0, "meh"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidData { .. }));
}

#[tokio::test]
async fn test_submit_and_respond_to_review() {
    let server = MockServer::start().await;

    let review_json = serde_json::json!({
        "id": "rv_1",
        "theatreId": "th_1",
        "author": "user_1",
        "rating": 4,
        "comment": "Great screen",
        "createdAt": "2026-08-08T10:00:00Z"
    });

    Mock::given(method("POST"))
        .and(path("/theatres/th_1/reviews"))
        .respond_with(ResponseTemplate::new(201).set_body_json(review_json.clone()))
        .mount(&server)
        .await;

    let mut responded = review_json.clone();
    responded["ownerResponse"] = serde_json::json!({
        "message": "Thanks for visiting",
        "respondedAt": "2026-08-08T11:00:00Z"
    });
    Mock::given(method("POST"))
        .and(path("/reviews/rv_1/response"))
        .respond_with(ResponseTemplate::new(200).set_body_json(responded))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let review = client
        .submit_review("th_1", &ReviewDraft::new(4, "Great screen"))
        .await
        .unwrap();
    assert_eq!(review.id, "rv_1");
    assert!(review.owner_response.is_none());

    let with_response = client
        .respond_to_review("rv_1", "Thanks for visiting")
        .await
        .unwrap();
    assert!(with_response.owner_response.is_some());
}
