//! Cached list of previously saved builds

use rigforge_common::{Error, Result, SavedBuild};
use tracing::{debug, info, warn};

use crate::backend_client::BackendClient;
use crate::sequence::{RequestSequence, RequestTicket};

/// Saved builds as last fetched from the backend
///
/// Kept in the order the backend returned them. A failed refresh leaves the
/// cached list alone.
#[derive(Debug, Default)]
pub struct SavedBuilds {
    builds: Vec<SavedBuild>,
    loaded: bool,
    stale: bool,
    requests: RequestSequence,
}

impl SavedBuilds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached builds in backend order
    pub fn builds(&self) -> &[SavedBuild] {
        &self.builds
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// Find a cached build by id
    pub fn find(&self, id: &str) -> Option<&SavedBuild> {
        self.builds.iter().find(|b| b.id == id)
    }

    /// True once any refresh has succeeded, so an empty list really is empty
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True when the most recent refresh failed
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Fetch the list and replace the cache
    pub async fn refresh(&mut self, client: &BackendClient) -> Result<()> {
        let ticket = self.begin_refresh();
        let result = client.list_builds().await;
        self.finish_refresh(ticket, result)
    }

    /// Mark a fetch as started
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.requests.issue()
    }

    /// Apply the outcome of a fetch started with `begin_refresh`
    pub fn finish_refresh(
        &mut self,
        ticket: RequestTicket,
        result: anyhow::Result<Vec<SavedBuild>>,
    ) -> Result<()> {
        match result {
            Ok(builds) => {
                if !self.requests.accept(ticket) {
                    debug!("Dropping stale saved builds response");
                    return Ok(());
                }

                info!("Loaded {} saved builds", builds.len());
                self.builds = builds;
                self.loaded = true;
                if self.requests.is_latest(ticket) {
                    self.stale = false;
                }
                Ok(())
            }
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("Saved builds refresh failed: {}", message);

                if self.requests.is_latest(ticket) {
                    self.stale = true;
                }
                Err(Error::BuildListUnavailable(message))
            }
        }
    }
}
