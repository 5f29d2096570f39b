#![allow(dead_code)]
use std::sync::Mutex;
use async_trait::async_trait;
use tempfile::TempDir;
use relay_bootstrap::bootstrap::structs::bootstrap_settings::BootstrapSettings;
use relay_bootstrap::config::enums::node_role::NodeRole;
use relay_bootstrap::config::structs::configuration::Configuration;
use relay_bootstrap::database::enums::record_type::RecordType;
use relay_bootstrap::database::structs::new_user::NewUser;
use relay_bootstrap::database::traits::schema_store::SchemaStore;

pub struct TestDatabase {
    pub dir: TempDir,
    pub path: String,
}

pub fn create_test_database() -> TestDatabase {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("relay.db").to_string_lossy().to_string();
    TestDatabase { dir, path }
}

pub fn create_test_config(database: &TestDatabase, role: NodeRole) -> Configuration {
    let mut config = Configuration::init();
    config.database.sqlite_path = database.path.clone();
    config.database.max_idle_connections = 2;
    config.database.max_open_connections = 4;
    config.node.role = role;
    config
}

pub fn create_test_settings(database: &TestDatabase, role: NodeRole) -> BootstrapSettings {
    BootstrapSettings::from_configuration(&create_test_config(database, role))
}

/// Records every call and answers from canned state.
#[derive(Default)]
pub struct RecordingStore {
    pub calls: Mutex<Vec<String>>,
    pub users_present: bool,
    pub fail_on: Option<RecordType>,
}

impl RecordingStore {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl SchemaStore for RecordingStore {
    async fn migrate(&self, record: RecordType) -> Result<(), sqlx::Error> {
        self.record(format!("migrate {}", record));
        if self.fail_on == Some(record) {
            return Err(sqlx::Error::Protocol(format!("{} failed", record)));
        }
        Ok(())
    }

    async fn any_user_exists(&self) -> Result<bool, sqlx::Error> {
        self.record("any_user_exists".to_string());
        Ok(self.users_present)
    }

    async fn insert_user(&self, user: &NewUser) -> Result<(), sqlx::Error> {
        self.record(format!("insert_user {}", user.username));
        Ok(())
    }
}
