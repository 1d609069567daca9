use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Seeding failed: {0}")]
    SeedFailure(String),

    #[error("Saved builds unavailable: {0}")]
    BuildListUnavailable(String),

    #[error("Failed to save build: {0}")]
    BuildSaveFailure(String),

    #[error("Nothing selected, pick at least one part before saving")]
    EmptySelection,

    #[error("Unknown part category: {0}")]
    UnknownCategory(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Saved build not found: {0}")]
    BuildNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
