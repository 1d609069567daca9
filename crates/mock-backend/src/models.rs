//! Data models for the mock backend

use chrono::{DateTime, Utc};
use rigforge_common::{Compatibility, SavedBuild};
use serde::{Deserialize, Serialize};

/// A build as kept in storage
///
/// Serializes flat: the saved build fields, the verdicts computed at save
/// time and the creation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredBuild {
    #[serde(flatten)]
    pub build: SavedBuild,

    /// Verdicts computed when the build was saved
    pub compatibility: Compatibility,

    /// When the build was saved
    pub created_at: DateTime<Utc>,
}

/// Response from the seed endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    /// Whether this request installed the demo catalog
    pub seeded: bool,

    /// Parts in the catalog afterwards
    pub total: usize,
}
