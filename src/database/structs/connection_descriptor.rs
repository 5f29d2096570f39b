use std::time::Duration;
use crate::database::enums::backend_kind::BackendKind;

/// Everything the connection opener needs to reach the selected backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    pub backend: BackendKind,
    /// Display form for SQLite; the connection is built from `sqlite_path`.
    pub dsn: String,
    /// SQLite only: the database file exactly as configured, never URL-decoded.
    pub sqlite_path: Option<String>,
    /// SQLite only: how long a connection waits on a locked database file.
    pub sqlite_busy_timeout: Option<Duration>,
    /// PostgreSQL only: never negotiate named server-side prepared statements.
    pub simple_protocol: bool,
    /// Client-side prepared statement cache size per connection.
    pub statement_cache_capacity: usize,
}
