/// The `destructiveChanges.xml` descriptor.
use std::fs;
use std::path::Path;

use tracing::info;

use super::errors::ManifestError;
use super::xml::{Document, Element};
use super::{API_VERSION, DESTRUCTIVE_CHANGES_FILE, METADATA_NAMESPACE};
use crate::types::FlowVersion;

/// Render `destructiveChanges.xml` for `versions`.
///
/// One `<members>` entry per version, in input order; the builder never
/// re-sorts. An empty input yields a valid document with zero members and
/// the single `<name>Flow</name>` entry.
#[must_use]
pub fn destructive_changes_manifest(versions: &[FlowVersion]) -> String {
    let mut types = Element::new("types");
    for version in versions {
        types.push(Element::text("members", &version.member_name()));
    }
    types.push(Element::text("name", "Flow"));

    let root = Element::new("Package")
        .attribute("xmlns", METADATA_NAMESPACE)
        .child(types)
        .child(Element::text("version", API_VERSION));
    Document::new(root).render()
}

/// Write `destructiveChanges.xml` into `output_directory`, returning the
/// serialized document.
///
/// # Errors
///
/// `ManifestError::Write` if the file cannot be written.
pub fn write_destructive_changes(
    output_directory: &Path,
    versions: &[FlowVersion],
) -> Result<String, ManifestError> {
    let document = destructive_changes_manifest(versions);
    let path = output_directory.join(DESTRUCTIVE_CHANGES_FILE);
    fs::write(&path, &document).map_err(|source| ManifestError::Write {
        path: path.clone(),
        source,
    })?;
    info!(
        path = %path.display(),
        members = versions.len(),
        "wrote destructive change descriptor"
    );
    Ok(document)
}
