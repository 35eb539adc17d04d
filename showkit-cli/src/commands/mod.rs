//! Command implementations and shared command context.

use anyhow::{anyhow, bail, Result};
use showkit_client::{ApiClient, ApiConfig, ClientStorage, Session};
use showkit_lib::{Clock, SystemClock};
use std::path::PathBuf;

pub mod bookings;
pub mod cancel;
pub mod login;
pub mod pay;
pub mod reviews;
pub mod theatres;
pub mod ticket;

/// Resolved global options shared by every command.
pub struct Context {
    storage_dir: PathBuf,
    api: ApiConfig,
}

impl Context {
    /// Resolve flags > environment > defaults.
    pub fn from_flags(storage_dir: Option<&str>, api_url: Option<&str>) -> Self {
        let storage_dir = storage_dir
            .map(PathBuf::from)
            .or_else(|| std::env::var("SHOWKIT_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(default_storage_dir);
        let api = api_url
            .map(ApiConfig::new)
            .or_else(|| std::env::var("SHOWKIT_API_URL").ok().map(ApiConfig::new))
            .unwrap_or_default();
        Self { storage_dir, api }
    }

    pub fn storage(&self) -> ClientStorage {
        ClientStorage::new(&self.storage_dir)
    }

    pub fn api_config(&self) -> &ApiConfig {
        &self.api
    }

    /// The saved session, or an error telling the user to log in.
    pub fn session(&self) -> Result<Session> {
        self.storage()
            .load_session()?
            .ok_or_else(|| anyhow!("no saved session - run 'showkit login' first"))
    }

    /// An API client authenticated with the saved session.
    pub fn client(&self) -> Result<ApiClient> {
        let session = self.session()?;
        if session.is_expired(SystemClock.now()) {
            bail!("saved session has expired - run 'showkit login' again");
        }
        Ok(ApiClient::new(self.api.clone(), session)?)
    }
}

fn default_storage_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showkit")
}
