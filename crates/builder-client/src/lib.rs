//! Rigforge Client
//!
//! Client-side state for assembling a PC build against a remote parts
//! catalog and build store.
//!
//! ## Architecture
//!
//! - `catalog`: parts fetched from the backend, lookup by id and category
//! - `saved_builds`: cached list of previously saved builds
//! - `summary`: display summary derived from selection, catalog and the
//!   last server-confirmed totals
//! - `backend_client`: HTTP client for the backend REST API
//! - `session`: owns the per-user state and wires the pieces together
//! - `config`: configuration management
//!
//! The selection itself lives in `rigforge_common::Selection`.
//!
//! **Data Flow:**
//! 1. Startup seeds an empty catalog, then fetches parts and saved builds
//! 2. User edits go straight into the selection
//! 3. The summary is re-derived on demand; totals stay at zero until a save
//! 4. Saving replaces the totals and verdicts with the backend's answer
//! 5. Loading a saved build replaces the selection only

pub mod backend_client;
pub mod catalog;
pub mod config;
pub mod saved_builds;
pub mod sequence;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use backend_client::BackendClient;
pub use catalog::{CatalogStatus, CatalogStore};
pub use config::Config;
pub use saved_builds::SavedBuilds;
pub use session::Session;
pub use summary::{derive_summary, CompatibilityBadge, PartDetail, SlotView, SummaryView};
