//! Editor error kinds.
//!
//! Every failure is a value reported back to the host for modal display;
//! none is fatal and the session stays usable afterwards.

use std::path::PathBuf;
use thiserror::Error;

use jotpad_search::SearchError;

/// Errors surfaced by session operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// File could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Search or replace found no (further) occurrence.
    #[error("no more occurrences")]
    NotFound,

    /// Find Next/Previous was invoked before any search term was set.
    #[error("no active search")]
    NoActiveSearch,

    /// The host print facility reported a failure.
    #[error("print failed: {0}")]
    Print(String),
}

impl EditorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        EditorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<SearchError> for EditorError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::NoActiveSearch => EditorError::NoActiveSearch,
            SearchError::NotFound => EditorError::NotFound,
        }
    }
}
