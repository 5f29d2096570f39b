//! Database enumeration types.

/// Supported storage engines (sqlite3, mysql, pgsql).
pub mod backend_kind;

/// Migratable record types in their fixed migration order.
pub mod record_type;

/// Portable column types used by table definitions.
pub mod column_kind;

/// Column default values.
pub mod column_default;
