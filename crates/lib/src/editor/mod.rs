//! Structure-aware edits to a package manifest.
//!
//! Each operation takes a parsed [`Document`](crate::doc::Document), changes
//! only the items it is about, and leaves everything else (comments, key
//! order, quoting) as it was. Writing the document back out is up to the
//! caller.
//!
//! - **Dependencies**: [`add_packages`], [`remove_packages`], [`add_ranges`]
//! - **Publishing**: [`add_owner`], [`add_publish_location`]
//! - **Workspace**: [`set_package_set_version`]
//! - **Migration**: [`migrate_v1`]
//!
//! # Usage
//!
//! ```
//! use manifest_edit::{
//!     doc::Document,
//!     editor::{DependencyScope, add_packages},
//! };
//!
//! let mut doc: Document = r#"
//! [package]
//! name = "example"
//! dependencies = ["prelude"] # runtime only
//! "#
//! .parse()?;
//! add_packages(&mut doc, DependencyScope::Main, ["console", "prelude"])?;
//!
//! assert_eq!(
//!     doc.to_string(),
//!     r#"
//! [package]
//! name = "example"
//! dependencies = [
//!   "console",
//!   "prelude",
//! ] # runtime only
//! "#
//! );
//! # Ok::<(), manifest_edit::Error>(())
//! ```

mod dependencies;
pub mod errors;
mod migrate;
mod publish;
mod workspace;

pub use dependencies::{
    DependencyEntry, DependencyScope, add_packages, add_ranges, remove_packages,
};
pub use errors::EditError;
pub use migrate::{Migration, migrate_v1};
pub use publish::{add_owner, add_publish_location};
pub use workspace::set_package_set_version;
