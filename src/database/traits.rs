//! Database backend trait definitions.

/// Migration and seeding interface implemented by every backend connector.
pub mod schema_store;
