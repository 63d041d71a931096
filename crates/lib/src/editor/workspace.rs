//! Edits to the `workspace` section.

use tracing::debug;

use crate::{Result, constants::REGISTRY_PATH, doc::Document};

/// Pins the workspace package set to a registry version.
///
/// Sets `workspace.packageSet.registry`, creating missing sections along the
/// way and leaving sibling keys alone. An existing version is replaced in
/// place, keeping any comment after it.
pub fn set_package_set_version(doc: &mut Document, version: impl Into<String>) -> Result<()> {
    let version = version.into();
    let previous = doc.set_in(REGISTRY_PATH, version.as_str())?;
    debug!(
        version = %version,
        previous = ?previous.as_ref().and_then(|item| item.as_str()),
        "Set package set version"
    );
    Ok(())
}
