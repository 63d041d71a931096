//! Constants used throughout the manifest editor.
//!
//! Section keys and key paths of the package manifest, plus the defaults
//! used when the editor has to create a section.

/// Top-level section describing the package itself.
pub const PACKAGE: &str = "package";

/// Key of a dependency list, under `package` or `package.test`.
pub const DEPENDENCIES: &str = "dependencies";

/// Key of the test section under `package`.
pub const TEST: &str = "test";

/// Key of the test entry module inside the test section.
pub const MAIN: &str = "main";

/// Key of the owners list under `package.publish`.
pub const OWNERS: &str = "owners";

/// Entry module written when the editor creates a test section.
pub const DEFAULT_TEST_MAIN: &str = "Test.Main";

/// Production dependency list.
pub const DEPENDENCIES_PATH: &str = "package.dependencies";

/// Test section.
pub const TEST_PATH: &str = "package.test";

/// Test dependency list.
pub const TEST_DEPENDENCIES_PATH: &str = "package.test.dependencies";

/// Publishing section.
pub const PUBLISH_PATH: &str = "package.publish";

/// Owners list inside the publishing section.
pub const OWNERS_PATH: &str = "package.publish.owners";

/// Source location inside the publishing section.
pub const LOCATION_PATH: &str = "package.publish.location";

/// Registry version the workspace package set is pinned to.
pub const REGISTRY_PATH: &str = "workspace.packageSet.registry";
