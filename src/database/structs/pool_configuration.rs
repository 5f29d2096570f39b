use std::time::Duration;

/// Connection limits applied to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfiguration {
    pub max_idle_connections: u32,
    pub max_open_connections: u32,
    pub max_lifetime: Duration,
}
