//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database connection and pool settings.
pub mod database_config;

/// Node role settings.
pub mod node_config;
