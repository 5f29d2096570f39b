//! Configuration enumeration types.

/// Whether this node owns the schema.
pub mod node_role;

/// Errors raised while loading or saving configuration.
pub mod configuration_error;
