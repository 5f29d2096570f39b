use crate::config::structs::database_config::DatabaseConfig;
use crate::database::impls::connection_descriptor::{SQLITE_DEFAULT_BUSY_TIMEOUT, SQLITE_DEFAULT_PATH};
use crate::database::impls::pool_configuration::{DEFAULT_MAX_IDLE_CONNECTIONS, DEFAULT_MAX_LIFETIME, DEFAULT_MAX_OPEN_CONNECTIONS};
use crate::database::structs::connection_descriptor::ConnectionDescriptor;
use crate::database::structs::pool_configuration::PoolConfiguration;

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            sql_dsn: None,
            sqlite_path: String::from(SQLITE_DEFAULT_PATH),
            sqlite_busy_timeout: SQLITE_DEFAULT_BUSY_TIMEOUT,
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            max_open_connections: DEFAULT_MAX_OPEN_CONNECTIONS,
            max_lifetime: DEFAULT_MAX_LIFETIME,
            debug_sql: false,
        }
    }
}

impl DatabaseConfig {
    pub fn descriptor(&self) -> ConnectionDescriptor {
        ConnectionDescriptor::select(self.sql_dsn.as_deref(), &self.sqlite_path, self.sqlite_busy_timeout)
    }

    pub fn pool(&self) -> PoolConfiguration {
        PoolConfiguration::normalized(self.max_idle_connections, self.max_open_connections, self.max_lifetime)
    }
}
