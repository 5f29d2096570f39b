use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    /// Empty or absent selects SQLite.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_dsn: Option<String>,
    pub sqlite_path: String,
    /// Milliseconds.
    pub sqlite_busy_timeout: u64,
    pub max_idle_connections: u32,
    pub max_open_connections: u32,
    /// Seconds.
    pub max_lifetime: u64,
    #[serde(default)]
    pub debug_sql: bool,
}
