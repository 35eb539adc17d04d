//! Cancel command - refund quote, confirmation, cancellation

use anyhow::Result;
use showkit_lib::{can_cancel, Clock, SystemClock};

use super::Context;
use crate::ui;

pub async fn run(ctx: &Context, booking_id: &str, yes: bool) -> Result<()> {
    let client = ctx.client()?;
    let clock = SystemClock;

    let booking = client.booking(booking_id).await?;

    if !can_cancel(&booking, clock.now()) {
        if booking.is_cancelled {
            ui::info("This booking is already cancelled");
        } else if !booking.is_paid {
            ui::warning("Only paid bookings can be cancelled");
        } else if booking.show_time().is_none() {
            ui::warning("Show time unknown - cancellation unavailable");
        } else {
            ui::warning("The show has already started - cancellation unavailable");
        }
        return Ok(());
    }

    let pb = ui::spinner("Fetching refund quote...");
    let quoted = client.refund_quote(booking_id).await;
    pb.finish_and_clear();
    let quote = quoted?;

    ui::header("Refund quote");
    ui::key_value("Refund rate", &format!("{}%", quote.percentage));
    ui::key_value("Refund amount", &ui::money(&quote.amount));

    if !quote.refundable {
        let reason = quote
            .reason
            .unwrap_or_else(|| "the backend declined a refund for this booking".to_string());
        ui::warning(&reason);
        return Ok(());
    }

    if !yes && !ui::confirm("Cancel this booking?", false)? {
        ui::info("Booking kept");
        return Ok(());
    }

    let pb = ui::spinner("Cancelling...");
    let cancelled = client.cancel_booking(booking_id).await;
    pb.finish_and_clear();
    let booking = cancelled?;

    ui::success("Booking cancelled");
    if let Some(amount) = &booking.refund_amount {
        ui::key_value("Refund", &ui::money(amount));
    }
    if let Some(status) = booking.refund_status {
        ui::key_value("Refund status", &format!("{:?}", status).to_lowercase());
    }

    Ok(())
}
