use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use log::{debug, error, info, warn};
use uuid::Uuid;
use crate::bootstrap::structs::bootstrap_settings::BootstrapSettings;
use crate::bootstrap::structs::database_bootstrapper::DatabaseBootstrapper;
use crate::config::enums::node_role::NodeRole;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::record_type::RecordType;
use crate::database::errors::BootstrapError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::new_user::NewUser;
use crate::database::traits::schema_store::SchemaStore;

pub const ROOT_USERNAME: &str = "root";
pub const ROOT_PASSWORD: &str = "123456";
pub const ROOT_DISPLAY_NAME: &str = "Root User";
pub const ROLE_ROOT_USER: i32 = 100;
pub const USER_STATUS_ENABLED: i32 = 1;
pub const ROOT_QUOTA: i64 = 100_000_000;

impl DatabaseBootstrapper {
    pub fn new(settings: BootstrapSettings) -> DatabaseBootstrapper {
        DatabaseBootstrapper { settings }
    }

    pub fn from_configuration(config: &Configuration) -> DatabaseBootstrapper {
        Self::new(BootstrapSettings::from_configuration(config))
    }

    /// Opens the pool and, on the schema owner, migrates and seeds. The pool is
    /// closed again when a later step fails.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn run(&self) -> Result<DatabaseConnector, BootstrapError> {
        info!(
            "[BOOT] Connecting to {} ({})",
            self.settings.descriptor.backend,
            self.settings.descriptor.redacted_dsn()
        );
        let connector = DatabaseConnector::open(
            &self.settings.descriptor,
            &self.settings.pool,
            self.settings.debug_sql,
        ).await?;

        if let Err(error) = Self::prepare_schema(&connector, self.settings.role).await {
            if let Err(close_error) = connector.close().await {
                warn!("[BOOT] Unable to close the pool after a failed start: {}", close_error);
            }
            return Err(error);
        }
        Ok(connector)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn prepare_schema(store: &dyn SchemaStore, role: NodeRole) -> Result<(), BootstrapError> {
        if !role.is_master() {
            info!("[BOOT] Node is not the schema owner, skipping migration");
            return Ok(());
        }
        Self::migrate_schema(store).await?;
        Self::seed_root_account(store).await?;
        Ok(())
    }

    /// Migrates every record type in [`RecordType::MIGRATION_ORDER`], stopping
    /// at the first failure. Already migrated types stay migrated.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn migrate_schema(store: &dyn SchemaStore) -> Result<(), BootstrapError> {
        info!("[BOOT] Database migration started");
        for record in RecordType::MIGRATION_ORDER {
            debug!("[BOOT] Migrating {}", record);
            store.migrate(record).await.map_err(|source| {
                error!("[BOOT] Migration of {} failed: {}", record, source);
                BootstrapError::MigrationError { record, source }
            })?;
        }
        info!("[BOOT] Database migrated");
        Ok(())
    }

    /// Creates the root account when the users table is empty. Returns whether
    /// a user was created.
    #[tracing::instrument(level = "debug", skip_all)]
    pub async fn seed_root_account(store: &dyn SchemaStore) -> Result<bool, BootstrapError> {
        let exists = store.any_user_exists().await.map_err(|error| {
            error!("[BOOT] Unable to look up existing users: {}", error);
            BootstrapError::SeedError(format!("unable to look up existing users: {}", error))
        })?;
        if exists {
            debug!("[BOOT] Users present, root account not needed");
            return Ok(false);
        }

        info!("[BOOT] No user exists, creating a root user");
        let user = Self::root_user()?;
        store.insert_user(&user).await.map_err(|error| {
            error!("[BOOT] Unable to create the root user: {}", error);
            BootstrapError::SeedError(format!("unable to create the root user: {}", error))
        })?;
        info!(
            "[BOOT] Root user created with username \"{}\" and password \"{}\", change the password after the first login",
            ROOT_USERNAME, ROOT_PASSWORD
        );
        Ok(true)
    }

    pub fn root_user() -> Result<NewUser, BootstrapError> {
        let salt = SaltString::generate(&mut OsRng);
        let password = Argon2::default()
            .hash_password(ROOT_PASSWORD.as_bytes(), &salt)
            .map_err(|error| BootstrapError::SeedError(format!("unable to hash the root password: {}", error)))?
            .to_string();
        Ok(NewUser {
            username: ROOT_USERNAME.to_string(),
            password,
            display_name: ROOT_DISPLAY_NAME.to_string(),
            role: ROLE_ROOT_USER,
            status: USER_STATUS_ENABLED,
            access_token: Uuid::new_v4().simple().to_string(),
            quota: ROOT_QUOTA,
        })
    }
}
