//! # Showkit Client
//!
//! REST plumbing for the Showkit booking backend: an explicit session
//! credential, a typed API client, and a small JSON-file cache so tickets
//! stay viewable after download.
//!
//! Every call is an independent request/response pair. There is no retry
//! policy beyond what the user triggers; callers disable the triggering
//! control while a request is in flight and re-enable it on completion or
//! failure.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

pub use api::ApiClient;
pub use config::ApiConfig;
pub use error::{ClientError, Result};
pub use models::{PaymentRedirect, TicketQr};
pub use session::Session;
pub use storage::{ClientStorage, SavedTicket};
