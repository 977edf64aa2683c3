/// Manifest domain layer: descriptor rendering and persistence.
pub mod destructive;
pub mod errors;
pub mod package;
pub mod xml;

use std::fs;
use std::path::Path;

pub use destructive::{destructive_changes_manifest, write_destructive_changes};
pub use errors::ManifestError;
pub use package::{package_manifest, write_package_manifest};

/// Metadata API version stamped into both descriptors.
pub const API_VERSION: &str = "51.0";

/// XML namespace of the metadata `Package` element.
pub const METADATA_NAMESPACE: &str = "http://soap.sforce.com/2006/04/metadata";

/// Package descriptor filename.
pub const PACKAGE_FILE: &str = "package.xml";

/// Destructive change descriptor filename.
pub const DESTRUCTIVE_CHANGES_FILE: &str = "destructiveChanges.xml";

/// Create the output directory (and any missing parents) if absent.
///
/// # Errors
///
/// `ManifestError::CreateDir` if creation fails.
pub fn ensure_output_dir(path: &Path) -> Result<(), ManifestError> {
    fs::create_dir_all(path).map_err(|source| ManifestError::CreateDir {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/flow-destructive-changes");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_existing_directory_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        ensure_output_dir(dir.path()).unwrap();
        ensure_output_dir(dir.path()).unwrap();
    }
}
