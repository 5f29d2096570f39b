use async_trait::async_trait;
use log::info;
use sqlx::{Database, Error, Pool};
use crate::database::enums::backend_kind::BackendKind;
use crate::database::enums::record_type::RecordType;
use crate::database::errors::BootstrapError;
use crate::database::structs::connection_descriptor::ConnectionDescriptor;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::new_user::NewUser;
use crate::database::structs::pool_configuration::PoolConfiguration;
use crate::database::traits::schema_store::SchemaStore;

impl DatabaseConnector {
    /// Opens the pooled handle for the selected backend.
    pub async fn open(
        descriptor: &ConnectionDescriptor,
        pool: &PoolConfiguration,
        debug_sql: bool,
    ) -> Result<DatabaseConnector, BootstrapError>
    {
        pool.validate()?;
        info!(
            "[BOOT] Pool limits: {} idle, {} open, {}s lifetime",
            pool.max_idle_connections,
            pool.max_open_connections,
            pool.max_lifetime.as_secs()
        );
        match descriptor.backend {
            BackendKind::sqlite3 => DatabaseConnectorSQLite::database_connector(descriptor, pool, debug_sql).await,
            BackendKind::mysql => DatabaseConnectorMySQL::database_connector(descriptor, pool, debug_sql).await,
            BackendKind::pgsql => DatabaseConnectorPgSQL::database_connector(descriptor, pool, debug_sql).await,
        }
    }

    pub fn engine(&self) -> Option<BackendKind> {
        self.engine
    }

    pub fn backend(&self) -> Option<&dyn SchemaStore> {
        match self.engine.as_ref()? {
            BackendKind::sqlite3 => self.sqlite.as_ref().map(|s| s as &dyn SchemaStore),
            BackendKind::mysql => self.mysql.as_ref().map(|m| m as &dyn SchemaStore),
            BackendKind::pgsql => self.pgsql.as_ref().map(|p| p as &dyn SchemaStore),
        }
    }

    pub fn sqlite_pool(&self) -> Option<&Pool<sqlx::Sqlite>> {
        self.sqlite.as_ref().map(|s| &s.pool)
    }

    pub fn mysql_pool(&self) -> Option<&Pool<sqlx::MySql>> {
        self.mysql.as_ref().map(|m| &m.pool)
    }

    pub fn pgsql_pool(&self) -> Option<&Pool<sqlx::Postgres>> {
        self.pgsql.as_ref().map(|p| &p.pool)
    }

    pub fn is_closed(&self) -> bool {
        match self.engine {
            Some(BackendKind::sqlite3) => self.sqlite.as_ref().is_none_or(|s| s.pool.is_closed()),
            Some(BackendKind::mysql) => self.mysql.as_ref().is_none_or(|m| m.pool.is_closed()),
            Some(BackendKind::pgsql) => self.pgsql.as_ref().is_none_or(|p| p.pool.is_closed()),
            None => true,
        }
    }

    /// Closes every pooled connection. Fails on a handle that was never opened
    /// or is already closed; call it once, at teardown.
    pub async fn close(&self) -> Result<(), BootstrapError> {
        match self.engine {
            Some(BackendKind::sqlite3) => match &self.sqlite {
                Some(sqlite) => close_pool(&sqlite.pool, BackendKind::sqlite3).await,
                None => Err(BootstrapError::ShutdownError("SQLite pool missing".to_string())),
            },
            Some(BackendKind::mysql) => match &self.mysql {
                Some(mysql) => close_pool(&mysql.pool, BackendKind::mysql).await,
                None => Err(BootstrapError::ShutdownError("MySQL pool missing".to_string())),
            },
            Some(BackendKind::pgsql) => match &self.pgsql {
                Some(pgsql) => close_pool(&pgsql.pool, BackendKind::pgsql).await,
                None => Err(BootstrapError::ShutdownError("PgSQL pool missing".to_string())),
            },
            None => Err(BootstrapError::ShutdownError("database was never opened".to_string())),
        }
    }
}

async fn close_pool<DB: Database>(pool: &Pool<DB>, engine: BackendKind) -> Result<(), BootstrapError> {
    if pool.is_closed() {
        return Err(BootstrapError::ShutdownError(format!("{} pool is already closed", engine)));
    }
    pool.close().await;
    info!("{} Closed all pooled connections", engine.log_prefix());
    Ok(())
}

#[async_trait]
impl SchemaStore for DatabaseConnector {
    async fn migrate(&self, record: RecordType) -> Result<(), Error> {
        match self.backend() {
            Some(backend) => backend.migrate(record).await,
            None => Err(Error::PoolClosed),
        }
    }

    async fn any_user_exists(&self) -> Result<bool, Error> {
        match self.backend() {
            Some(backend) => backend.any_user_exists().await,
            None => Err(Error::PoolClosed),
        }
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), Error> {
        match self.backend() {
            Some(backend) => backend.insert_user(user).await,
            None => Err(Error::PoolClosed),
        }
    }
}
