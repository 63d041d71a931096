//! Edits to the `package.publish` section.

use toml_edit::{Array, Item};
use tracing::debug;

use crate::{
    Result,
    constants::{LOCATION_PATH, OWNERS, OWNERS_PATH, PUBLISH_PATH},
    doc::{BlockEntry, BlockList, Document, get_or_insert_with, require_array_mut, require_table_mut},
};

/// Appends an owner to `package.publish.owners`.
///
/// The owners list is created when missing, but `package.publish` must
/// already exist. Owners are appended in call order and never deduplicated;
/// the list is not re-sorted, but is rewritten one owner per line.
pub fn add_owner(doc: &mut Document, owner: impl Into<String>) -> Result<()> {
    let owner = owner.into();
    let publish = require_table_mut(doc.get_in_mut(PUBLISH_PATH)?, PUBLISH_PATH)?;
    let owners = require_array_mut(
        get_or_insert_with(publish, OWNERS, OWNERS_PATH, || Item::from(Array::new()))?,
        OWNERS_PATH,
    )?;

    debug!(owner = %owner, existing = owners.len(), "Adding owner");
    let mut list = BlockList::take(owners);
    list.push(BlockEntry::new(owner));
    list.write(owners);
    Ok(())
}

/// Sets `package.publish.location`, creating missing sections along the way.
///
/// The location is usually an inline table such as
/// `{ githubOwner = "...", githubRepo = "..." }`; any item is accepted.
pub fn add_publish_location(doc: &mut Document, location: impl Into<Item>) -> Result<()> {
    let replaced = doc.set_in(LOCATION_PATH, location)?;
    debug!(replaced = replaced.is_some(), "Set publish location");
    Ok(())
}
