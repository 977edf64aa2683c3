/// Errors from the manifest layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Filesystem failures while producing the descriptor files.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The output directory could not be created.
    #[error("failed to create output directory '{}': {source}", .path.display())]
    CreateDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },

    /// A descriptor file could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
}
