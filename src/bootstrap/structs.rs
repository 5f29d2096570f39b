//! Bootstrap data structures.

/// Everything the startup sequence needs, resolved from configuration.
pub mod bootstrap_settings;

/// Runs the startup sequence once.
pub mod database_bootstrapper;
