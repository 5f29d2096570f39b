use std::fmt;
use crate::database::enums::backend_kind::BackendKind;

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::sqlite3 => write!(f, "sqlite3"),
            BackendKind::mysql => write!(f, "mysql"),
            BackendKind::pgsql => write!(f, "pgsql"),
        }
    }
}

impl BackendKind {
    pub fn is_sqlite(&self) -> bool {
        matches!(self, BackendKind::sqlite3)
    }

    pub fn is_postgresql(&self) -> bool {
        matches!(self, BackendKind::pgsql)
    }

    pub fn is_mysql(&self) -> bool {
        matches!(self, BackendKind::mysql)
    }

    pub fn log_prefix(&self) -> &'static str {
        match self {
            BackendKind::sqlite3 => "[SQLite]",
            BackendKind::mysql => "[MySQL]",
            BackendKind::pgsql => "[PgSQL]",
        }
    }
}
