use std::time::Duration;
use log::warn;
use sqlx::Database;
use sqlx::pool::PoolOptions;
use crate::database::errors::BootstrapError;
use crate::database::structs::pool_configuration::PoolConfiguration;

pub const DEFAULT_MAX_IDLE_CONNECTIONS: u32 = 100;
pub const DEFAULT_MAX_OPEN_CONNECTIONS: u32 = 1000;
pub const DEFAULT_MAX_LIFETIME: u64 = 60;

impl Default for PoolConfiguration {
    fn default() -> Self {
        PoolConfiguration {
            max_idle_connections: DEFAULT_MAX_IDLE_CONNECTIONS,
            max_open_connections: DEFAULT_MAX_OPEN_CONNECTIONS,
            max_lifetime: Duration::from_secs(DEFAULT_MAX_LIFETIME),
        }
    }
}

impl PoolConfiguration {
    pub fn new(max_idle_connections: u32, max_open_connections: u32, max_lifetime: Duration) -> PoolConfiguration {
        PoolConfiguration {
            max_idle_connections,
            max_open_connections,
            max_lifetime,
        }
    }

    /// Builds a configuration from raw settings. Zero values fall back to their
    /// defaults and an idle limit above the open limit is clamped down to it,
    /// so the result always passes [`PoolConfiguration::validate`].
    pub fn normalized(max_idle_connections: u32, max_open_connections: u32, max_lifetime_secs: u64) -> PoolConfiguration {
        let max_open_connections = if max_open_connections == 0 {
            warn!("[BOOT] Max open connections is 0, using default {}", DEFAULT_MAX_OPEN_CONNECTIONS);
            DEFAULT_MAX_OPEN_CONNECTIONS
        } else {
            max_open_connections
        };
        let max_idle_connections = if max_idle_connections == 0 {
            warn!("[BOOT] Max idle connections is 0, using default {}", DEFAULT_MAX_IDLE_CONNECTIONS);
            DEFAULT_MAX_IDLE_CONNECTIONS
        } else {
            max_idle_connections
        };
        let max_idle_connections = if max_idle_connections > max_open_connections {
            warn!(
                "[BOOT] Max idle connections {} exceeds max open connections {}, clamping",
                max_idle_connections, max_open_connections
            );
            max_open_connections
        } else {
            max_idle_connections
        };
        let max_lifetime_secs = if max_lifetime_secs == 0 {
            warn!("[BOOT] Max connection lifetime is 0, using default {}s", DEFAULT_MAX_LIFETIME);
            DEFAULT_MAX_LIFETIME
        } else {
            max_lifetime_secs
        };
        PoolConfiguration::new(max_idle_connections, max_open_connections, Duration::from_secs(max_lifetime_secs))
    }

    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.max_open_connections == 0 {
            return Err(BootstrapError::PoolConfigError("max open connections must be positive".to_string()));
        }
        if self.max_idle_connections == 0 {
            return Err(BootstrapError::PoolConfigError("max idle connections must be positive".to_string()));
        }
        if self.max_idle_connections > self.max_open_connections {
            return Err(BootstrapError::PoolConfigError(format!(
                "max idle connections {} exceeds max open connections {}",
                self.max_idle_connections, self.max_open_connections
            )));
        }
        if self.max_lifetime.is_zero() {
            return Err(BootstrapError::PoolConfigError("max connection lifetime must be positive".to_string()));
        }
        Ok(())
    }

    /// Maps the limits onto sqlx pool options. sqlx has no idle-count cap, so
    /// `max_idle_connections` is only validated and clamped; it does not reach
    /// the pool. Idle connections are retired by `max_lifetime` like any other.
    pub fn apply<DB: Database>(&self, options: PoolOptions<DB>) -> PoolOptions<DB> {
        options
            .max_connections(self.max_open_connections)
            .min_connections(0)
            .max_lifetime(self.max_lifetime)
    }
}
