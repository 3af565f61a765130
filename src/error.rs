use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the bundle browser.
///
/// `ArchiveOpen` is fatal before the terminal UI starts; bad arguments never
/// get this far because clap reports them itself.
/// `ExtractionIo` and `InvalidName` only abort a single extraction.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not initialize reader:\n{0}")]
    ArchiveOpen(String),

    #[error("{}: {source}", .path.display())]
    ExtractionIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("entry name {0:?} is not a valid file name")]
    InvalidName(String),

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

impl Error {
    /// Whether the session can keep running after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ExtractionIo { .. } | Error::InvalidName(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
