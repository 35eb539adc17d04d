//! Pay command - complete or retry payment inside the session window

use anyhow::Result;
use showkit_lib::{classify, BookingAction, BookingState, Clock, SystemClock};

use super::Context;
use crate::ui;

pub async fn run(ctx: &Context, booking_id: &str) -> Result<()> {
    let client = ctx.client()?;
    let clock = SystemClock;

    let booking = client.booking(booking_id).await?;
    let classification = classify(&booking, clock.now());

    let payable = classification.actions.iter().any(|a| {
        matches!(
            a,
            BookingAction::CompletePayment | BookingAction::ContinuePayment
        )
    });

    if !payable {
        match classification.state {
            BookingState::Confirmed => ui::info("This booking is already paid"),
            BookingState::Cancelled => ui::info("This booking was cancelled"),
            state if state.is_expired() => {
                ui::warning("The payment session has expired - please book again")
            }
            _ => ui::warning("This booking cannot be paid right now"),
        }
        return Ok(());
    }

    if let Some(countdown) = classification.countdown {
        ui::info(&format!("{} left in the payment session", countdown));
    }

    let pb = ui::spinner("Requesting payment link...");
    let requested = client.request_payment(booking_id).await;
    pb.finish_and_clear();
    let redirect = requested?;

    ui::success("Payment link ready - open it before the session expires");
    ui::key_value("URL", &redirect.payment_url);
    ui::qr_code(&redirect.payment_url)?;
    ui::info("Run 'showkit bookings' after paying to see the confirmation");

    Ok(())
}
