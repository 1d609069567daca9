//! Per-user session state
//!
//! Owns the catalog, the selection, the saved-builds cache and the last
//! server-confirmed summary. Each operation writes to exactly one of them.

use rigforge_common::{
    BuildSummary, CreateBuildRequest, Error, PartCategory, Result, SaveBuildResponse, SavedBuild,
    Selection,
};
use tracing::{debug, info};

use crate::backend_client::BackendClient;
use crate::catalog::CatalogStore;
use crate::config::Config;
use crate::saved_builds::SavedBuilds;
use crate::summary::{derive_summary, SummaryView};

/// Name offered for a new build
pub const DEFAULT_BUILD_NAME: &str = "My First PC";

pub struct Session {
    client: BackendClient,
    catalog: CatalogStore,
    selection: Selection,
    saved_builds: SavedBuilds,
    /// Totals and verdicts from the most recent successful save
    confirmed: Option<BuildSummary>,
}

impl Session {
    /// Create a session with empty state
    pub fn new(client: BackendClient) -> Self {
        Self {
            client,
            catalog: CatalogStore::new(),
            selection: Selection::new(),
            saved_builds: SavedBuilds::new(),
            confirmed: None,
        }
    }

    /// Create a session talking to the configured backend
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(BackendClient::from_config(config)?))
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn saved_builds(&self) -> &SavedBuilds {
        &self.saved_builds
    }

    /// Summary most recently returned by the backend, if any
    pub fn confirmed_summary(&self) -> Option<&BuildSummary> {
        self.confirmed.as_ref()
    }

    /// Seed an empty backend, then load the catalog and saved builds
    ///
    /// The two loads run concurrently. Only a catalog failure is returned; a
    /// saved-builds failure leaves that list empty and flagged stale.
    pub async fn start(&mut self) -> Result<()> {
        CatalogStore::ensure_seeded(&self.client).await;

        let (catalog, builds) = tokio::join!(
            self.catalog.refresh(&self.client),
            self.saved_builds.refresh(&self.client)
        );

        if let Err(e) = builds {
            debug!("Continuing without saved builds: {}", e);
        }

        catalog
    }

    /// Re-fetch the catalog
    pub async fn refresh_catalog(&mut self) -> Result<()> {
        self.catalog.refresh(&self.client).await
    }

    /// Re-fetch the saved builds
    pub async fn refresh_saved_builds(&mut self) -> Result<()> {
        self.saved_builds.refresh(&self.client).await
    }

    /// Set or clear one slot of the selection
    pub fn select(&mut self, category: PartCategory, id: Option<String>) {
        self.selection.set(category, id);
    }

    /// Whether the current selection may be saved
    pub fn can_save(&self) -> bool {
        self.selection.can_save()
    }

    /// Derive the summary for display
    pub fn summary(&self) -> SummaryView {
        derive_summary(&self.selection, &self.catalog, self.confirmed.as_ref())
    }

    /// Save the current selection under `name`
    ///
    /// On success the backend's totals and verdicts become the displayed
    /// summary and the saved-builds list is refreshed. On failure nothing
    /// changes.
    pub async fn save_build(&mut self, name: &str) -> Result<SaveBuildResponse> {
        if !self.selection.can_save() {
            return Err(Error::EmptySelection);
        }

        let request = CreateBuildRequest::new(name, self.selection.clone());
        let response = self
            .client
            .create_build(&request)
            .await
            .map_err(|e| Error::BuildSaveFailure(format!("{:#}", e)))?;

        info!(
            "Saved build '{}': ${:.2}, {}W",
            name, response.summary.total_price, response.summary.total_power
        );
        self.confirmed = Some(response.summary.clone());

        if let Err(e) = self.saved_builds.refresh(&self.client).await {
            debug!("Saved builds list not refreshed after save: {}", e);
        }

        Ok(response)
    }

    /// Replace the selection with a saved build's parts
    ///
    /// The displayed totals are left alone; the build's snapshot totals only
    /// become current after it is saved again.
    pub fn load_build(&mut self, build: &SavedBuild) {
        info!("Loading build '{}' ({})", build.name, build.id);
        self.selection.replace_all(build.selection.clone());
    }

    /// Load a build from the cached list by id
    pub fn load_saved_build(&mut self, id: &str) -> Result<()> {
        let build = self
            .saved_builds
            .find(id)
            .cloned()
            .ok_or_else(|| Error::BuildNotFound(id.to_string()))?;
        self.load_build(&build);
        Ok(())
    }
}
