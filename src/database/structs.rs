//! Database connector structures.

/// Main database connector providing unified interface.
pub mod database_connector;

/// SQLite-specific database connector implementation.
pub mod database_connector_sqlite;

/// MySQL/MariaDB-specific database connector implementation.
pub mod database_connector_mysql;

/// PostgreSQL-specific database connector implementation.
pub mod database_connector_pgsql;

/// Backend selection result (engine, DSN, protocol tuning).
pub mod connection_descriptor;

/// Pool limits (idle, open, lifetime).
pub mod pool_configuration;

/// Table, column and index definitions.
pub mod table_schema;

/// User row used for root account seeding.
pub mod new_user;
