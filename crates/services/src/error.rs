//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use study_core::model::{DeckError, FlashcardError};

/// Errors emitted while assembling the study library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LibraryError {
    #[error("failed to read deck file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse deck file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("card {index} in deck file is invalid")]
    Card {
        index: usize,
        #[source]
        source: FlashcardError,
    },
    #[error(transparent)]
    Deck(#[from] DeckError),
}
