use thiserror::Error;
use crate::database::enums::backend_kind::BackendKind;
use crate::database::enums::record_type::RecordType;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Connection error ({backend}): {source}")]
    ConnectionError {
        backend: BackendKind,
        #[source]
        source: sqlx::Error,
    },

    #[error("Pool configuration error: {0}")]
    PoolConfigError(String),

    #[error("Migration error on {record}: {source}")]
    MigrationError {
        record: RecordType,
        #[source]
        source: sqlx::Error,
    },

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Shutdown error: {0}")]
    ShutdownError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_display() {
        let error = BootstrapError::ConnectionError {
            backend: BackendKind::mysql,
            source: sqlx::Error::PoolTimedOut,
        };
        let message = format!("{}", error);
        assert!(message.starts_with("Connection error (mysql): "));
    }

    #[test]
    fn test_migration_error_names_record() {
        let error = BootstrapError::MigrationError {
            record: RecordType::redemption,
            source: sqlx::Error::RowNotFound,
        };
        let message = format!("{}", error);
        assert!(message.starts_with("Migration error on Redemption: "));
    }

    #[test]
    fn test_migration_error_keeps_source() {
        let error = BootstrapError::MigrationError {
            record: RecordType::log,
            source: sqlx::Error::RowNotFound,
        };
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_seed_error_display() {
        let error = BootstrapError::SeedError("insert failed".to_string());
        assert_eq!(format!("{}", error), "Seed error: insert failed");
    }

    #[test]
    fn test_shutdown_error_display() {
        let error = BootstrapError::ShutdownError("never opened".to_string());
        assert_eq!(format!("{}", error), "Shutdown error: never opened");
    }

    #[test]
    fn test_error_debug() {
        let error = BootstrapError::PoolConfigError("max open is zero".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("PoolConfigError"));
        assert!(debug_str.contains("max open is zero"));
    }
}
