// src/error.rs
use std::path::PathBuf;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error: {status} {url}")]
    Status { status: reqwest::StatusCode, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: &'static str, reason: String },

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("existing file has a different header row: {}", path.display())]
    HeaderMismatch { path: PathBuf },
}

/// An entry block that does not have the listing-item shape.
/// Only the two always-present fields can raise this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    #[error("entry {index}: no title anchor in the header")]
    MissingTitle { index: usize },

    #[error("entry {index} ({title}): no description paragraph")]
    MissingDescription { index: usize, title: String },
}

impl EntryError {
    /// Zero-based position of the entry block on the page.
    pub fn index(&self) -> usize {
        match self {
            EntryError::MissingTitle { index } => *index,
            EntryError::MissingDescription { index, .. } => *index,
        }
    }
}
