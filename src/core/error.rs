//! Error kinds shared by the store and the resolver

use thiserror::Error;

/// Errors produced by bookmark operations
#[derive(Debug, Error)]
pub enum Error {
    /// The named bookmark does not exist in the store
    #[error("no bookmark found")]
    BookmarkNotFound,
    /// The bookmarks file could not be read or written
    #[error("can't access the bookmarks file: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
