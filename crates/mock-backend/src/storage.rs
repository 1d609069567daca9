//! In-memory storage for the mock backend

use chrono::Utc;
use rigforge_common::{CreateBuildRequest, Part, SavedBuild};
use tracing::{debug, info};
use uuid::Uuid;

use crate::compatibility;
use crate::demo_catalog::demo_parts;
use crate::models::StoredBuild;

/// Storage backend for parts and saved builds
#[derive(Debug, Default)]
pub struct Storage {
    parts: Vec<Part>,
    /// Insertion order, oldest first
    builds: Vec<StoredBuild>,
    seed_requests: usize,
}

impl Storage {
    /// Create an empty storage instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage instance with a preset catalog
    pub fn with_parts(parts: Vec<Part>) -> Self {
        Self {
            parts,
            ..Self::default()
        }
    }

    /// All parts in catalog order
    pub fn list_parts(&self) -> &[Part] {
        &self.parts
    }

    /// Install the demo catalog if the catalog is empty
    /// Returns true if parts were installed
    pub fn seed(&mut self) -> bool {
        self.seed_requests += 1;

        if !self.parts.is_empty() {
            debug!("Catalog already holds {} parts, not seeding", self.parts.len());
            return false;
        }

        self.parts = demo_parts();
        info!("Seeded demo catalog with {} parts", self.parts.len());
        true
    }

    /// Number of seed requests received so far
    pub fn seed_requests(&self) -> usize {
        self.seed_requests
    }

    /// Save a build and compute its summary against the current catalog
    pub fn insert_build(&mut self, request: CreateBuildRequest) -> StoredBuild {
        let summary = compatibility::evaluate(&request.selection, &self.parts);

        let stored = StoredBuild {
            build: SavedBuild {
                id: Uuid::new_v4().to_string(),
                name: request.name,
                selection: request.selection,
                total_price: summary.total_price,
                total_power: summary.total_power,
            },
            compatibility: summary.compatibility,
            created_at: Utc::now(),
        };

        info!("Saved build {} ({})", stored.build.id, stored.build.name);
        self.builds.push(stored.clone());
        stored
    }

    /// Saved builds, most recent first
    pub fn list_builds(&self) -> Vec<StoredBuild> {
        self.builds.iter().rev().cloned().collect()
    }

    /// Number of saved builds
    pub fn count_builds(&self) -> usize {
        self.builds.len()
    }
}
