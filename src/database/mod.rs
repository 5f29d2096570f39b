//! Database backend module with multi-database support.
//!
//! Opens the pooled connection the rest of the service shares and keeps the
//! schema of the seven record types current.
//!
//! # Supported Backends
//!
//! - **SQLite**: used when no connection descriptor is configured
//! - **MySQL/MariaDB**: any other descriptor, URL or Go driver DSN form
//! - **PostgreSQL**: descriptors starting with `postgres://`
//!
//! # Architecture
//!
//! - `ConnectionDescriptor::select` picks the backend
//! - `DatabaseConnector` owns the pool of exactly one backend
//! - `SchemaStore` is the migration and seeding interface each backend implements
//!
//! # Example
//!
//! ```rust,ignore
//! use relay_bootstrap::database::structs::connection_descriptor::ConnectionDescriptor;
//! use relay_bootstrap::database::structs::database_connector::DatabaseConnector;
//! use relay_bootstrap::database::structs::pool_configuration::PoolConfiguration;
//!
//! let descriptor = ConnectionDescriptor::select(None, "one-api.db", 3000);
//! let connector = DatabaseConnector::open(&descriptor, &PoolConfiguration::default(), false).await?;
//! connector.close().await?;
//! ```

/// Backend, record type and column enumerations.
pub mod enums;

/// Error taxonomy of the startup path.
pub mod errors;

/// Dialect-aware SQL builders.
pub mod helpers;

/// Implementation blocks for database types.
pub mod impls;

/// Table definitions of the migratable record types.
pub mod schema;

/// Data structures for database connections.
pub mod structs;

/// Schema store trait definitions.
pub mod traits;
