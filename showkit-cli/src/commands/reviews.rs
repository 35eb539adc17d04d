//! Reviews command - review CRUD and owner responses

use anyhow::Result;
use colored::Colorize;
use showkit_lib::{ReviewDraft, ReviewerBadge};

use super::Context;
use crate::ui;

pub async fn list(ctx: &Context, theatre_id: &str) -> Result<()> {
    let client = ctx.client()?;

    let pb = ui::spinner("Fetching reviews...");
    let fetched = client.reviews(theatre_id).await;
    pb.finish_and_clear();
    let reviews = fetched?;

    if reviews.is_empty() {
        ui::info("No reviews for this theatre yet");
        return Ok(());
    }

    ui::header(&format!("Reviews for {}", theatre_id));
    for review in &reviews {
        ui::separator();
        println!(
            "{} {} {}{}",
            review.rating.to_string().yellow(),
            review.author.bold(),
            badge_label(review.author_badge),
            review.id.dimmed()
        );
        println!("  {}", review.comment);
        if let Some(response) = &review.owner_response {
            println!(
                "  {} {}",
                "↳ owner:".cyan(),
                response.message
            );
        }
    }

    Ok(())
}

pub async fn add(
    ctx: &Context,
    theatre_id: &str,
    rating: u8,
    comment: Option<String>,
) -> Result<()> {
    let comment = match comment {
        Some(c) => c,
        None => ui::input("Review")?,
    };
    let draft = ReviewDraft::new(rating, comment);
    draft.validate()?;

    let client = ctx.client()?;
    let pb = ui::spinner("Submitting review...");
    let submitted = client.submit_review(theatre_id, &draft).await;
    pb.finish_and_clear();
    let review = submitted?;

    ui::success(&format!("Review {} published", review.id));
    Ok(())
}

pub async fn edit(
    ctx: &Context,
    review_id: &str,
    rating: u8,
    comment: Option<String>,
) -> Result<()> {
    let comment = match comment {
        Some(c) => c,
        None => ui::input("Review")?,
    };
    let draft = ReviewDraft::new(rating, comment);
    draft.validate()?;

    let client = ctx.client()?;
    let pb = ui::spinner("Updating review...");
    let updated = client.update_review(review_id, &draft).await;
    pb.finish_and_clear();
    updated?;

    ui::success("Review updated");
    Ok(())
}

pub async fn delete(ctx: &Context, review_id: &str, yes: bool) -> Result<()> {
    if !yes && !ui::confirm("Delete this review?", false)? {
        ui::info("Review kept");
        return Ok(());
    }

    let client = ctx.client()?;
    let pb = ui::spinner("Deleting review...");
    let deleted = client.delete_review(review_id).await;
    pb.finish_and_clear();
    deleted?;

    ui::success("Review deleted");
    Ok(())
}

pub async fn respond(ctx: &Context, review_id: &str, message: &str) -> Result<()> {
    let client = ctx.client()?;
    let pb = ui::spinner("Posting response...");
    let responded = client.respond_to_review(review_id, message).await;
    pb.finish_and_clear();
    responded?;

    ui::success("Response posted");
    Ok(())
}

fn badge_label(badge: Option<ReviewerBadge>) -> String {
    match badge {
        Some(ReviewerBadge::VerifiedVisitor) => format!("{} ", "[verified]".green()),
        Some(ReviewerBadge::TopReviewer) => format!("{} ", "[top reviewer]".yellow()),
        Some(ReviewerBadge::Unknown) | None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_labels() {
        assert!(badge_label(Some(ReviewerBadge::VerifiedVisitor)).contains("verified"));
        assert!(badge_label(Some(ReviewerBadge::TopReviewer)).contains("top reviewer"));
        assert!(badge_label(None).is_empty());
        assert!(badge_label(Some(ReviewerBadge::Unknown)).is_empty());
    }
}
