/// The package.xml descriptor.
use std::fs;
use std::path::Path;

use tracing::info;

use super::errors::ManifestError;
use super::xml::{Document, Element};
use super::{API_VERSION, METADATA_NAMESPACE, PACKAGE_FILE};

/// Render the fixed-shape package.xml document.
///
/// The deploy tool requires a package descriptor alongside
/// `destructiveChanges.xml`; its content never varies.
#[must_use]
pub fn package_manifest() -> String {
    let root = Element::new("Package")
        .attribute("xmlns", METADATA_NAMESPACE)
        .child(Element::text("version", API_VERSION));
    Document::new(root).render()
}

/// Write package.xml into `output_directory`, returning the serialized
/// document.
///
/// # Errors
///
/// `ManifestError::Write` if the file cannot be written.
pub fn write_package_manifest(output_directory: &Path) -> Result<String, ManifestError> {
    let document = package_manifest();
    let path = output_directory.join(PACKAGE_FILE);
    fs::write(&path, &document).map_err(|source| ManifestError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), "wrote package descriptor");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_shape() {
        assert_eq!(
            package_manifest(),
            "<?xml version=\"1.0\" ?>\n\
             <Package xmlns=\"http://soap.sforce.com/2006/04/metadata\">\n\
             \x20\x20\x20\x20<version>51.0</version>\n\
             </Package>\n"
        );
    }

    #[test]
    fn test_invariant_across_calls() {
        assert_eq!(package_manifest(), package_manifest());
    }

    #[test]
    fn test_write_returns_file_content() {
        let dir = tempfile::tempdir().unwrap();
        let document = write_package_manifest(dir.path()).unwrap();
        let on_disk = fs::read_to_string(dir.path().join(PACKAGE_FILE)).unwrap();
        assert_eq!(document, on_disk);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = write_package_manifest(&missing).unwrap_err();
        assert!(matches!(err, ManifestError::Write { .. }));
    }
}
