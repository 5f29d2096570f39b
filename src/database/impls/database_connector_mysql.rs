use std::str::FromStr;
use async_trait::async_trait;
use log::{error, info};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Error, MySql, Pool};
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
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::new_user::NewUser;
use crate::database::structs::pool_configuration::PoolConfiguration;
use crate::database::traits::schema_store::SchemaStore;

const ENGINE: BackendKind = BackendKind::mysql;
const LOG_PREFIX: &str = "[MySQL]";

impl DatabaseConnectorMySQL {
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn create(
        descriptor: &ConnectionDescriptor,
        pool: &PoolConfiguration,
        debug_sql: bool,
    ) -> Result<Pool<MySql>, Error>
    {
        let options = MySqlConnectOptions::from_str(&descriptor.dsn)?
            .statement_cache_capacity(descriptor.statement_cache_capacity);
        let options = statement_logging(options, debug_sql);
        pool.apply(MySqlPoolOptions::new()).connect_with(options).await
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn database_connector(
        descriptor: &ConnectionDescriptor,
        pool: &PoolConfiguration,
        debug_sql: bool,
    ) -> Result<DatabaseConnector, BootstrapError>
    {
        let mysql_pool = match DatabaseConnectorMySQL::create(descriptor, pool, debug_sql).await {
            Ok(mysql_pool) => mysql_pool,
            Err(error) => {
                error!("{} Unable to connect to MySQL on DSN {}", LOG_PREFIX, descriptor.redacted_dsn());
                error!("{} Message: {}", LOG_PREFIX, error);
                return Err(BootstrapError::ConnectionError { backend: ENGINE, source: error });
            }
        };
        info!("{} Connected to {}", LOG_PREFIX, descriptor.redacted_dsn());
        Ok(DatabaseConnector {
            mysql: Some(DatabaseConnectorMySQL { pool: mysql_pool }),
            engine: Some(ENGINE),
            ..Default::default()
        })
    }
}

#[async_trait]
impl SchemaStore for DatabaseConnectorMySQL {
    async fn migrate(&self, record: RecordType) -> Result<(), Error> {
        let schema = record.schema();
        let table_exists: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables WHERE table_schema = DATABASE() AND table_name = ?"
        )
            .bind(schema.table_name)
            .fetch_one(&self.pool)
            .await?;
        if table_exists == 0 {
            info!("{} Creating table {}", LOG_PREFIX, schema.table_name);
            sqlx::query(&build_create_table_query(ENGINE, schema)).execute(&self.pool).await?;
        } else {
            for column in schema.columns {
                let column_exists: i64 = sqlx::query_scalar(
                    "SELECT COUNT(*) FROM information_schema.columns WHERE table_schema = DATABASE() AND table_name = ? AND column_name = ?"
                )
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
            let index_exists: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM information_schema.statistics WHERE table_schema = DATABASE() AND table_name = ? AND index_name = ?"
            )
                .bind(schema.table_name)
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
