//! Parts catalog held for the session

use rigforge_common::{Error, Part, PartCategory, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::backend_client::BackendClient;
use crate::sequence::{RequestSequence, RequestTicket};

/// Load state of the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogStatus {
    /// A fetch is in flight, or none has completed yet
    Loading,
    /// The last fetch succeeded
    Ready,
    /// The last fetch failed; contents are from an earlier success, if any
    Error,
}

/// The list of available parts
///
/// Contents are only ever replaced wholesale by a successful refresh.
#[derive(Debug)]
pub struct CatalogStore {
    parts: Vec<Part>,
    status: CatalogStatus,
    last_error: Option<String>,
    requests: RequestSequence,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Create an empty store awaiting its first refresh
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            status: CatalogStatus::Loading,
            last_error: None,
            requests: RequestSequence::new(),
        }
    }

    /// Create a store that already holds a catalog
    pub fn from_parts(parts: Vec<Part>) -> Self {
        Self {
            parts,
            status: CatalogStatus::Ready,
            ..Self::new()
        }
    }

    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    /// Message of the most recent failed refresh, cleared on success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// All parts in catalog order
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Find a part by id
    pub fn find_by_id(&self, id: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    /// Parts of one category, in catalog order
    ///
    /// The iterator is lazy and can be cloned to walk it again.
    pub fn by_category(
        &self,
        category: PartCategory,
    ) -> impl Iterator<Item = &Part> + Clone + '_ {
        self.parts.iter().filter(move |p| p.category == category)
    }

    /// Fetch the catalog and replace the current contents
    pub async fn refresh(&mut self, client: &BackendClient) -> Result<()> {
        let ticket = self.begin_refresh();
        let result = client.fetch_components().await;
        self.finish_refresh(ticket, result)
    }

    /// Mark a fetch as started
    pub fn begin_refresh(&mut self) -> RequestTicket {
        self.status = CatalogStatus::Loading;
        self.requests.issue()
    }

    /// Apply the outcome of a fetch started with `begin_refresh`
    ///
    /// A success older than one already applied is dropped. A failure never
    /// touches the contents.
    pub fn finish_refresh(
        &mut self,
        ticket: RequestTicket,
        result: anyhow::Result<Vec<Part>>,
    ) -> Result<()> {
        match result {
            Ok(parts) => {
                if !self.requests.accept(ticket) {
                    debug!("Dropping stale catalog response");
                    return Ok(());
                }

                info!("Catalog refreshed with {} parts", parts.len());
                self.parts = parts;
                // A newer fetch still owns the status and its error message
                if self.requests.is_latest(ticket) {
                    self.status = CatalogStatus::Ready;
                    self.last_error = None;
                }
                Ok(())
            }
            Err(e) => {
                let message = format!("{:#}", e);
                warn!("Catalog refresh failed: {}", message);

                if self.requests.is_latest(ticket) {
                    self.status = CatalogStatus::Error;
                    self.last_error = Some(message.clone());
                }
                Err(Error::CatalogUnavailable(message))
            }
        }
    }

    /// Seed the backend catalog when it is empty
    ///
    /// Best effort: the outcome is logged and otherwise discarded. Sends no
    /// seed request when the backend already has parts.
    pub async fn ensure_seeded(client: &BackendClient) {
        match seed_if_empty(client).await {
            Ok(true) => info!("Catalog was empty, requested demo seed"),
            Ok(false) => debug!("Catalog already populated, not seeding"),
            Err(e) => warn!("{}", e),
        }
    }
}

async fn seed_if_empty(client: &BackendClient) -> Result<bool> {
    let parts = client
        .fetch_components()
        .await
        .map_err(|e| Error::SeedFailure(format!("{:#}", e)))?;

    if !parts.is_empty() {
        return Ok(false);
    }

    client
        .seed_components()
        .await
        .map_err(|e| Error::SeedFailure(format!("{:#}", e)))?;

    Ok(true)
}
