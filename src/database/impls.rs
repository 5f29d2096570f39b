//! Implementation blocks for database types.

pub mod backend_kind;
pub mod connection_descriptor;
pub mod database_connector;
pub mod database_connector_mysql;
pub mod database_connector_pgsql;
pub mod database_connector_sqlite;
pub mod pool_configuration;
pub mod record_type;
