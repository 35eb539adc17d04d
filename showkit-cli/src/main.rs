//! Showkit CLI
//!
//! Terminal front-end for the Showkit booking platform: manage bookings,
//! complete payments inside their session windows, cancel with a refund
//! preview, pull tickets as QR/PDF, and browse theatre reviews.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "showkit")]
#[command(about = "Showkit - movie-ticket bookings and theatre reviews from the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Custom storage directory (can also be set via SHOWKIT_DIR env var)
    #[arg(long, global = true)]
    storage_dir: Option<String>,

    /// Backend API base URL (can also be set via SHOWKIT_API_URL env var)
    #[arg(long, global = true)]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a backend session token
    Login {
        /// Bearer token issued by the backend
        #[arg(short, long)]
        token: Option<String>,

        /// User id the token belongs to
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Forget the saved session
    Logout,

    /// Show the current session
    Whoami,

    /// Show your bookings
    Bookings {
        /// Refresh countdowns once per second until Ctrl-C
        #[arg(long)]
        watch: bool,

        /// Include expired and unknown records the list normally hides
        #[arg(long)]
        all: bool,
    },

    /// Complete or retry payment for a booking
    Pay {
        /// Booking id
        booking_id: String,
    },

    /// Cancel a booking (shows the refund quote first)
    Cancel {
        /// Booking id
        booking_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Ticket retrieval for confirmed bookings
    Ticket {
        #[command(subcommand)]
        action: TicketAction,
    },

    /// List theatres with their ratings
    Theatres,

    /// Theatre reviews
    Reviews {
        #[command(subcommand)]
        action: ReviewAction,
    },
}

#[derive(Subcommand)]
enum TicketAction {
    /// Render the entry QR code in the terminal
    Show {
        /// Booking id
        booking_id: String,
    },

    /// Download the ticket PDF
    Download {
        /// Booking id
        booking_id: String,

        /// Output file (defaults to the ticket directory)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Re-send the confirmation email
    Resend {
        /// Booking id
        booking_id: String,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// List reviews for a theatre
    List {
        /// Theatre id
        theatre_id: String,
    },

    /// Add a review
    Add {
        /// Theatre id
        theatre_id: String,

        /// Star rating, 1-5
        #[arg(short, long)]
        rating: u8,

        /// Review text (prompted for when omitted)
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Edit one of your reviews
    Edit {
        /// Review id
        review_id: String,

        /// Star rating, 1-5
        #[arg(short, long)]
        rating: u8,

        /// Review text (prompted for when omitted)
        #[arg(short, long)]
        comment: Option<String>,
    },

    /// Delete one of your reviews
    Delete {
        /// Review id
        review_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Post an owner response to a review
    Respond {
        /// Review id
        review_id: String,

        /// Response text
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "showkit=debug,showkit_client=debug,info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let ctx = commands::Context::from_flags(cli.storage_dir.as_deref(), cli.api_url.as_deref());

    match cli.command {
        Commands::Login { token, user } => commands::login::run(&ctx, token, user).await,
        Commands::Logout => commands::login::logout(&ctx),
        Commands::Whoami => commands::login::whoami(&ctx),
        Commands::Bookings { watch, all } => commands::bookings::run(&ctx, watch, all).await,
        Commands::Pay { booking_id } => commands::pay::run(&ctx, &booking_id).await,
        Commands::Cancel { booking_id, yes } => commands::cancel::run(&ctx, &booking_id, yes).await,
        Commands::Ticket { action } => match action {
            TicketAction::Show { booking_id } => commands::ticket::show(&ctx, &booking_id).await,
            TicketAction::Download { booking_id, output } => {
                commands::ticket::download(&ctx, &booking_id, output.as_deref()).await
            }
            TicketAction::Resend { booking_id } => {
                commands::ticket::resend(&ctx, &booking_id).await
            }
        },
        Commands::Theatres => commands::theatres::run(&ctx).await,
        Commands::Reviews { action } => match action {
            ReviewAction::List { theatre_id } => {
                commands::reviews::list(&ctx, &theatre_id).await
            }
            ReviewAction::Add {
                theatre_id,
                rating,
                comment,
            } => commands::reviews::add(&ctx, &theatre_id, rating, comment).await,
            ReviewAction::Edit {
                review_id,
                rating,
                comment,
            } => commands::reviews::edit(&ctx, &review_id, rating, comment).await,
            ReviewAction::Delete { review_id, yes } => {
                commands::reviews::delete(&ctx, &review_id, yes).await
            }
            ReviewAction::Respond { review_id, message } => {
                commands::reviews::respond(&ctx, &review_id, &message).await
            }
        },
    }
}
