//! Configuration management module.
//!
//! Settings come from `config.toml` and are then overridden by the process
//! environment the way the relay has always been deployed.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **database**: connection descriptor, SQLite file, pool limits, statement logging
//! - **node**: whether this node owns the schema (`master`) or not (`slave`)
//!
//! # Environment Overrides
//!
//! `SQL_DSN`, `SQLITE_PATH`, `SQLITE_BUSY_TIMEOUT`, `SQL_MAX_IDLE_CONNS`,
//! `SQL_MAX_OPEN_CONNS`, `SQL_MAX_LIFETIME`, `NODE_TYPE`, `DEBUG_SQL` and `LOG_LEVEL`.
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_bootstrap::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! let warnings = config.apply_env_overrides(|key| std::env::var(key).ok());
//! ```

/// Configuration enumerations (node role, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
