//! Ticket command - QR display, PDF download, email resend

use anyhow::{Context as _, Result};
use chrono::Utc;
use showkit_client::SavedTicket;
use showkit_lib::{classify, BookingAction, Clock, SystemClock};
use std::path::PathBuf;

use super::Context;
use crate::ui;

/// Render the entry QR, from the offline cache when possible.
pub async fn show(ctx: &Context, booking_id: &str) -> Result<()> {
    let storage = ctx.storage();

    if let Some(ticket) = storage.ticket(booking_id)? {
        if let Some(qr_data) = ticket.qr_data {
            ui::info("Showing saved ticket");
            ui::qr_code(&qr_data)?;
            return Ok(());
        }
    }

    let client = ctx.client()?;
    if !offers(&client, booking_id, BookingAction::ViewQr).await? {
        return Ok(());
    }

    let pb = ui::spinner("Fetching ticket QR...");
    let fetched = client.ticket_qr(booking_id).await;
    pb.finish_and_clear();
    let qr = fetched?;

    let existing_pdf = storage.ticket(booking_id)?.and_then(|t| t.pdf_path);
    storage.save_ticket(SavedTicket {
        booking_id: booking_id.to_string(),
        qr_data: Some(qr.data.clone()),
        pdf_path: existing_pdf,
        saved_at: Utc::now(),
    })?;

    ui::qr_code(&qr.data)?;
    ui::info("Saved for offline viewing");
    Ok(())
}

/// Download the ticket PDF next to the cache (or to `output`).
pub async fn download(ctx: &Context, booking_id: &str, output: Option<&str>) -> Result<()> {
    let client = ctx.client()?;
    if !offers(&client, booking_id, BookingAction::DownloadTicket).await? {
        return Ok(());
    }

    let pb = ui::spinner("Downloading ticket...");
    let fetched = client.ticket_pdf(booking_id).await;
    pb.finish_and_clear();
    let bytes = fetched?;

    let storage = ctx.storage();
    let path = match output {
        Some(p) => PathBuf::from(p),
        None => storage.tickets_dir().join(format!("{booking_id}.pdf")),
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create ticket directory")?;
    }
    std::fs::write(&path, &bytes).context("Failed to write ticket PDF")?;

    let existing_qr = storage.ticket(booking_id)?.and_then(|t| t.qr_data);
    storage.save_ticket(SavedTicket {
        booking_id: booking_id.to_string(),
        qr_data: existing_qr,
        pdf_path: Some(path.clone()),
        saved_at: Utc::now(),
    })?;

    ui::success(&format!("Ticket saved to {}", path.display()));
    Ok(())
}

/// Ask the backend to re-send the confirmation email.
pub async fn resend(ctx: &Context, booking_id: &str) -> Result<()> {
    let client = ctx.client()?;
    if !offers(&client, booking_id, BookingAction::ResendEmail).await? {
        return Ok(());
    }

    let pb = ui::spinner("Requesting email...");
    let requested = client.resend_confirmation(booking_id).await;
    pb.finish_and_clear();
    requested?;

    ui::success("Confirmation email on its way");
    Ok(())
}

/// Check the booking currently offers `action`; explains when it does not.
async fn offers(
    client: &showkit_client::ApiClient,
    booking_id: &str,
    action: BookingAction,
) -> Result<bool> {
    let clock = SystemClock;
    let booking = client.booking(booking_id).await?;
    let classification = classify(&booking, clock.now());

    if classification.actions.contains(&action) {
        return Ok(true);
    }

    ui::warning(&format!(
        "Tickets are only available for confirmed bookings (this one is {:?})",
        classification.state
    ));
    Ok(false)
}
