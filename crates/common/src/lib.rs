pub mod build;
pub mod error;
pub mod part;
pub mod selection;

pub use build::{
    BuildSummary, Compatibility, CreateBuildRequest, SaveBuildResponse, SavedBuild, Verdict,
};
pub use error::{Error, Result};
pub use part::{Part, PartCategory};
pub use selection::Selection;
