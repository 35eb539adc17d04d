//! Theatre directory entries.

use crate::review::RatingSummary;
use serde::{Deserialize, Serialize};

/// A theatre as listed by the directory endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theatre {
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    /// Backend-aggregated rating; absent for unreviewed theatres.
    #[serde(default)]
    pub rating: Option<RatingSummary>,
}

impl Theatre {
    pub fn new(id: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            address: None,
            rating: None,
        }
    }
}
