//! File-based local cache (session, bookings, saved tickets).
//!
//! This is a convenience cache, not a source of truth: the booking list is
//! refreshed on every successful fetch, and a stale cache only affects
//! offline viewing of already-downloaded tickets.
//!
//! # Security Warning
//!
//! The cache is plain JSON on disk with no encryption and no concurrent
//! access protection. It stores a bearer token; keep the directory private
//! to the user account.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use showkit_lib::Booking;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::session::Session;

/// A ticket saved for offline viewing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTicket {
    pub booking_id: String,
    /// QR payload, if it was fetched.
    #[serde(default)]
    pub qr_data: Option<String>,
    /// Where the downloaded PDF was written, if it was.
    #[serde(default)]
    pub pdf_path: Option<PathBuf>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Default)]
struct CacheData {
    bookings: Vec<Booking>,
    fetched_at: Option<DateTime<Utc>>,
    tickets: HashMap<String, SavedTicket>,
}

/// Simple file-based cache for the client.
pub struct ClientStorage {
    storage_dir: PathBuf,
}

impl ClientStorage {
    /// Create a storage instance rooted at `storage_dir`.
    pub fn new(storage_dir: impl AsRef<Path>) -> Self {
        Self {
            storage_dir: storage_dir.as_ref().to_path_buf(),
        }
    }

    /// Initialize the storage directory.
    pub fn init(&self) -> Result<()> {
        std::fs::create_dir_all(&self.storage_dir)
            .context("Failed to create storage directory")?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Session
    // ------------------------------------------------------------------

    /// Persist the session after login.
    pub fn save_session(&self, session: &Session) -> Result<()> {
        let path = self.session_path();
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&path, json).context("Failed to write session file")?;
        Ok(())
    }

    /// Load the saved session, if any.
    pub fn load_session(&self) -> Result<Option<Session>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&path).context("Failed to read session file")?;
        let session = serde_json::from_str(&json).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    /// Remove the saved session (logout).
    pub fn clear_session(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove session file")?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bookings
    // ------------------------------------------------------------------

    /// Replace the cached booking list.
    pub fn cache_bookings(&self, bookings: &[Booking], fetched_at: DateTime<Utc>) -> Result<()> {
        let mut data = self.load_data()?;
        data.bookings = bookings.to_vec();
        data.fetched_at = Some(fetched_at);
        self.save_data(&data)
    }

    /// The cached booking list and when it was fetched.
    pub fn cached_bookings(&self) -> Result<Option<(Vec<Booking>, DateTime<Utc>)>> {
        let data = self.load_data()?;
        match data.fetched_at {
            Some(fetched_at) => Ok(Some((data.bookings, fetched_at))),
            None => Ok(None),
        }
    }

    // ------------------------------------------------------------------
    // Tickets
    // ------------------------------------------------------------------

    /// Save or update a ticket for offline viewing.
    pub fn save_ticket(&self, ticket: SavedTicket) -> Result<()> {
        let mut data = self.load_data()?;
        data.tickets.insert(ticket.booking_id.clone(), ticket);
        self.save_data(&data)
    }

    /// Look up a saved ticket by booking id.
    pub fn ticket(&self, booking_id: &str) -> Result<Option<SavedTicket>> {
        let data = self.load_data()?;
        Ok(data.tickets.get(booking_id).cloned())
    }

    /// Directory where downloaded PDFs are written.
    pub fn tickets_dir(&self) -> PathBuf {
        self.storage_dir.join("tickets")
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn session_path(&self) -> PathBuf {
        self.storage_dir.join("session.json")
    }

    fn data_path(&self) -> PathBuf {
        self.storage_dir.join("cache.json")
    }

    fn load_data(&self) -> Result<CacheData> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(CacheData::default());
        }
        let json = std::fs::read_to_string(&path).context("Failed to read cache file")?;
        let data = serde_json::from_str(&json).context("Failed to parse cache file")?;
        Ok(data)
    }

    fn save_data(&self, data: &CacheData) -> Result<()> {
        self.init()?;
        let json = serde_json::to_string_pretty(data)?;
        std::fs::write(self.data_path(), json).context("Failed to write cache file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showkit_lib::BookingStatus;
    use tempfile::tempdir;

    #[test]
    fn test_session_round_trip() {
        let dir = tempdir().unwrap();
        let storage = ClientStorage::new(dir.path());
        storage.init().unwrap();

        assert!(storage.load_session().unwrap().is_none());

        let session = Session::new("tok_x", "user_9");
        storage.save_session(&session).unwrap();
        assert_eq!(storage.load_session().unwrap(), Some(session));

        storage.clear_session().unwrap();
        assert!(storage.load_session().unwrap().is_none());
    }

    #[test]
    fn test_booking_cache_round_trip() {
        let dir = tempdir().unwrap();
        let storage = ClientStorage::new(dir.path());

        assert!(storage.cached_bookings().unwrap().is_none());

        let bookings = vec![
            Booking::new("bk_1").paid(),
            Booking::new("bk_2").with_status(BookingStatus::Pending),
        ];
        let fetched_at = Utc::now();
        storage.cache_bookings(&bookings, fetched_at).unwrap();

        let (cached, at) = storage.cached_bookings().unwrap().unwrap();
        assert_eq!(cached, bookings);
        assert_eq!(at, fetched_at);
    }

    #[test]
    fn test_ticket_save_and_lookup() {
        let dir = tempdir().unwrap();
        let storage = ClientStorage::new(dir.path());

        assert!(storage.ticket("bk_1").unwrap().is_none());

        let ticket = SavedTicket {
            booking_id: "bk_1".to_string(),
            qr_data: Some("SHOWKIT:bk_1:ab12".to_string()),
            pdf_path: None,
            saved_at: Utc::now(),
        };
        storage.save_ticket(ticket.clone()).unwrap();
        assert_eq!(storage.ticket("bk_1").unwrap(), Some(ticket));
    }

    #[test]
    fn test_caching_overwrites_previous_list() {
        let dir = tempdir().unwrap();
        let storage = ClientStorage::new(dir.path());

        storage
            .cache_bookings(&[Booking::new("old").paid()], Utc::now())
            .unwrap();
        storage
            .cache_bookings(&[Booking::new("new").paid()], Utc::now())
            .unwrap();

        let (cached, _) = storage.cached_bookings().unwrap().unwrap();
        assert_eq!(cached.len(), 1);
        assert_eq!(cached[0].id, "new");
    }
}
