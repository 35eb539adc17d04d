//! Theatres command - directory listing with aggregated ratings

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::ui;

pub async fn run(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let pb = ui::spinner("Fetching theatres...");
    let fetched = client.theatres().await;
    pb.finish_and_clear();
    let theatres = fetched?;

    if theatres.is_empty() {
        ui::info("No theatres listed");
        return Ok(());
    }

    ui::header("Theatres");
    for theatre in &theatres {
        let rating = match &theatre.rating {
            Some(summary) => format!(
                "{} {} ({} reviews)",
                "★".yellow(),
                summary.average,
                summary.count
            ),
            None => "no reviews yet".dimmed().to_string(),
        };
        println!("  {}  {} — {}", theatre.id.dimmed(), theatre.name.bold(), rating);
        if let Some(address) = &theatre.address {
            println!("      {}, {}", address, theatre.city);
        } else {
            println!("      {}", theatre.city);
        }
    }

    Ok(())
}
