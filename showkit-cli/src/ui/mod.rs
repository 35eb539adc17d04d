//! Terminal UI utilities

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use showkit_lib::{BookingState, Money};
use std::time::Duration;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a section header
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print a key-value pair
pub fn key_value(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Colored badge for a booking's display state
pub fn state_badge(state: BookingState) -> ColoredString {
    match state {
        BookingState::Confirmed => "CONFIRMED".green().bold(),
        BookingState::Cancelled => "CANCELLED".red(),
        BookingState::Pending => "AWAITING PAYMENT".yellow().bold(),
        BookingState::PaymentFailedRetryable => "PAYMENT FAILED".red().bold(),
        BookingState::PendingExpired | BookingState::PaymentFailedExpired => "EXPIRED".dimmed(),
        BookingState::Unknown => "UNKNOWN".magenta(),
    }
}

/// Render a monetary amount in minor units as a major-unit figure
pub fn money(amount: &Money) -> String {
    let minor = amount.as_minor();
    format!("{}.{:02}", minor / 100, (minor % 100).abs())
}

/// Create a spinner progress indicator
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prompt for user confirmation
pub fn confirm(prompt: &str, default: bool) -> anyhow::Result<bool> {
    use dialoguer::Confirm;
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for text input
pub fn input(prompt: &str) -> anyhow::Result<String> {
    use dialoguer::Input;
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}

/// Display a QR code in the terminal
pub fn qr_code(data: &str) -> anyhow::Result<()> {
    use qrcode::QrCode;

    let code = QrCode::new(data)?;
    let string = code
        .render::<char>()
        .quiet_zone(false)
        .module_dimensions(2, 1)
        .build();

    println!("\n{}\n", string);
    Ok(())
}

/// Print a separator line
pub fn separator() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_renders_major_units() {
        assert_eq!(money(&Money::from_minor(33_750)), "337.50");
        assert_eq!(money(&Money::from_minor(5)), "0.05");
        assert_eq!(money(&Money::from_minor(0)), "0.00");
    }
}
