//! # relay-bootstrap
//!
//! Startup database bootstrap for a multi-tenant API relay service.
//!
//! ## Overview
//!
//! At process start the relay needs a pooled database connection and a schema
//! it can rely on. This crate picks the storage engine from the deployment
//! configuration (SQLite, MySQL or PostgreSQL), opens the pool, brings the
//! tables up to date on the schema-owning node and makes sure an administrator
//! account exists on first run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use relay_bootstrap::bootstrap::structs::database_bootstrapper::DatabaseBootstrapper;
//! use relay_bootstrap::config::structs::configuration::Configuration;
//!
//! let mut config = Configuration::load_from_file("config.toml", false)?;
//! config.apply_env_overrides(|key| std::env::var(key).ok());
//! let connector = DatabaseBootstrapper::from_configuration(&config).run().await?;
//! ```
//!
//! ## Modules
//!
//! - [`bootstrap`] - The ordered startup sequence (open, migrate, seed)
//! - [`common`] - Environment value parsing
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Backend selection, pooling and schema stores
//! - [`logging`] - Log dispatcher setup
//! - [`structs`] - CLI argument parsing

/// Startup sequence: open the pool, migrate and seed on the schema owner.
pub mod bootstrap;

/// Common utilities shared across modules.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml` and applies the deployment environment on top of it.
pub mod config;

/// Database backend module with multi-database support.
///
/// Selects SQLite, MySQL or PostgreSQL from the connection descriptor, owns
/// the pool and keeps the schema of the record types current.
pub mod database;

/// Colored, timestamped log output through `fern`.
pub mod logging;

/// CLI argument parsing.
pub mod structs;
