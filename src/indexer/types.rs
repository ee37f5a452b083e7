//! Indexer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::MatcherError;

#[derive(Error, Debug)]
pub enum IndexerError {
    /// Workspace root missing or not a directory
    #[error("Workspace root is not a directory: {0:?}")]
    InvalidRoot(PathBuf),
    /// Configured patterns could not be compiled
    #[error(transparent)]
    Matcher(#[from] MatcherError),
}
