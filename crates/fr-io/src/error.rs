use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Recoverable failures at the codec boundary.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode raster: {0}")]
    Decode(#[source] BoxError),
    #[error("failed to encode raster: {0}")]
    Encode(#[source] BoxError),
    #[error("no supported raster format for {0:?}")]
    UnsupportedFormat(PathBuf),
    #[error(transparent)]
    Raster(#[from] fr_core::Error),
}
