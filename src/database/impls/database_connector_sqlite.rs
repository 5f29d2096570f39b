use async_trait::async_trait;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Error, Pool, Sqlite};
use crate::database::enums::backend_kind::BackendKind;
use crate::database::enums::record_type::RecordType;
use crate::database::errors::BootstrapError;
use crate::database::helpers::{
    build_add_column_query, build_create_index_query, build_create_table_query,
    build_insert_user_query, build_select_any_user_query, statement_logging,
};
use crate::database::schema::USERS;
use crate::database::structs::connection_descriptor::ConnectionDescriptor;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::new_user::NewUser;
use crate::database::structs::pool_configuration::PoolConfiguration;
use crate::database::traits::schema_store::SchemaStore;

const ENGINE: BackendKind = BackendKind::sqlite3;
const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn create(
        descriptor: &ConnectionDescriptor,
        pool: &PoolConfiguration,
        debug_sql: bool,
    ) -> Result<Pool<Sqlite>, Error> {
        let path = descriptor
            .sqlite_path
            .as_deref()
            .ok_or_else(|| Error::Configuration("SQLite descriptor without a database file".into()))?;
        let mut options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .statement_cache_capacity(descriptor.statement_cache_capacity);
        if let Some(busy_timeout) = descriptor.sqlite_busy_timeout {
            options = options.busy_timeout(busy_timeout);
        }
        let options = statement_logging(options, debug_sql);
        pool.apply(SqlitePoolOptions::new()).connect_with(options).await
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn database_connector(
        descriptor: &ConnectionDescriptor,
        pool: &PoolConfiguration,
        debug_sql: bool,
    ) -> Result<DatabaseConnector, BootstrapError> {
        let sqlite_pool = match DatabaseConnectorSQLite::create(descriptor, pool, debug_sql).await {
            Ok(sqlite_pool) => sqlite_pool,
            Err(error) => {
                error!("{} Unable to open the database {}", LOG_PREFIX, descriptor.dsn);
                error!("{} Message: {}", LOG_PREFIX, error);
                return Err(BootstrapError::ConnectionError { backend: ENGINE, source: error });
            }
        };
        info!("{} Opened database {}", LOG_PREFIX, descriptor.dsn);
        Ok(DatabaseConnector {
            sqlite: Some(DatabaseConnectorSQLite { pool: sqlite_pool }),
            engine: Some(ENGINE),
            ..Default::default()
        })
    }
}

#[async_trait]
impl SchemaStore for DatabaseConnectorSQLite {
    async fn migrate(&self, record: RecordType) -> Result<(), Error> {
        let schema = record.schema();
        let table_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(schema.table_name)
            .fetch_one(&self.pool)
            .await?;
        if table_exists == 0 {
            info!("{} Creating table {}", LOG_PREFIX, schema.table_name);
            sqlx::query(&build_create_table_query(ENGINE, schema)).execute(&self.pool).await?;
        } else {
            for column in schema.columns {
                let column_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pragma_table_info(?) WHERE name = ?")
                    .bind(schema.table_name)
                    .bind(column.name)
                    .fetch_one(&self.pool)
                    .await?;
                if column_exists == 0 {
                    info!("{} Adding column {}.{}", LOG_PREFIX, schema.table_name, column.name);
                    sqlx::query(&build_add_column_query(ENGINE, schema.table_name, column))
                        .execute(&self.pool)
                        .await?;
                }
            }
        }
        for index in schema.indexes {
            let index_exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = ?")
                .bind(index.name)
                .fetch_one(&self.pool)
                .await?;
            if index_exists == 0 {
                info!("{} Creating index {}", LOG_PREFIX, index.name);
                sqlx::query(&build_create_index_query(ENGINE, schema.table_name, index))
                    .execute(&self.pool)
                    .await?;
            }
        }
        Ok(())
    }

    async fn any_user_exists(&self) -> Result<bool, Error> {
        let row = sqlx::query(&build_select_any_user_query(ENGINE, USERS.table_name))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), Error> {
        sqlx::query(&build_insert_user_query(ENGINE, USERS.table_name))
            .bind(user.username.as_str())
            .bind(user.password.as_str())
            .bind(user.display_name.as_str())
            .bind(user.role)
            .bind(user.status)
            .bind(user.access_token.as_str())
            .bind(user.quota)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
