#[cfg(test)]
mod bootstrap_tests {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};
    use argon2::Argon2;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use crate::bootstrap::impls::database_bootstrapper::{ROLE_ROOT_USER, ROOT_PASSWORD, ROOT_QUOTA};
    use crate::bootstrap::structs::bootstrap_settings::BootstrapSettings;
    use crate::bootstrap::structs::database_bootstrapper::DatabaseBootstrapper;
    use crate::config::enums::node_role::NodeRole;
    use crate::config::structs::configuration::Configuration;
    use crate::database::enums::backend_kind::BackendKind;
    use crate::database::enums::record_type::RecordType;
    use crate::database::errors::BootstrapError;
    use crate::database::structs::new_user::NewUser;
    use crate::database::traits::schema_store::MockSchemaStore;

    fn ordered_migrations(store: &mut MockSchemaStore, seq: &mut Sequence) {
        for record in RecordType::MIGRATION_ORDER {
            store.expect_migrate()
                .with(eq(record))
                .times(1)
                .in_sequence(seq)
                .returning(|_| Ok(()));
        }
    }

    #[tokio::test]
    async fn test_migrates_in_declared_order() {
        let mut store = MockSchemaStore::new();
        let mut seq = Sequence::new();
        ordered_migrations(&mut store, &mut seq);
        assert!(DatabaseBootstrapper::migrate_schema(&store).await.is_ok());
    }

    #[tokio::test]
    async fn test_migration_stops_at_first_failure() {
        let mut store = MockSchemaStore::new();
        store.expect_migrate()
            .times(2)
            .returning(|record| if record == RecordType::token { Err(sqlx::Error::PoolTimedOut) } else { Ok(()) });
        store.expect_any_user_exists().times(0);
        store.expect_insert_user().times(0);

        let result = DatabaseBootstrapper::prepare_schema(&store, NodeRole::master).await;
        match result {
            Err(BootstrapError::MigrationError { record, .. }) => assert_eq!(record, RecordType::token),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_master_migrates_then_seeds_empty_store() {
        let mut store = MockSchemaStore::new();
        let mut seq = Sequence::new();
        ordered_migrations(&mut store, &mut seq);
        store.expect_any_user_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(false));
        store.expect_insert_user()
            .withf(|user: &NewUser| user.username == "root" && user.role == ROLE_ROOT_USER)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        assert!(DatabaseBootstrapper::prepare_schema(&store, NodeRole::master).await.is_ok());
    }

    #[tokio::test]
    async fn test_slave_touches_nothing() {
        let mut store = MockSchemaStore::new();
        store.expect_migrate().times(0);
        store.expect_any_user_exists().times(0);
        store.expect_insert_user().times(0);
        assert!(DatabaseBootstrapper::prepare_schema(&store, NodeRole::slave).await.is_ok());
    }

    #[tokio::test]
    async fn test_existing_users_skip_seeding() {
        let mut store = MockSchemaStore::new();
        store.expect_any_user_exists().times(1).returning(|| Ok(true));
        store.expect_insert_user().times(0);
        assert!(!DatabaseBootstrapper::seed_root_account(&store).await.unwrap());
    }

    #[tokio::test]
    async fn test_user_lookup_failure_is_seed_error() {
        let mut store = MockSchemaStore::new();
        store.expect_any_user_exists().times(1).returning(|| Err(sqlx::Error::PoolClosed));
        store.expect_insert_user().times(0);
        let result = DatabaseBootstrapper::seed_root_account(&store).await;
        assert!(matches!(result, Err(BootstrapError::SeedError(_))));
    }

    #[tokio::test]
    async fn test_insert_failure_is_seed_error() {
        let mut store = MockSchemaStore::new();
        store.expect_any_user_exists().times(1).returning(|| Ok(false));
        store.expect_insert_user().times(1).returning(|_| Err(sqlx::Error::RowNotFound));
        let result = DatabaseBootstrapper::seed_root_account(&store).await;
        assert!(matches!(result, Err(BootstrapError::SeedError(_))));
    }

    #[test]
    fn test_root_user() {
        let user = DatabaseBootstrapper::root_user().unwrap();
        assert_eq!(user.username, "root");
        assert_eq!(user.display_name, "Root User");
        assert_eq!(user.role, 100);
        assert_eq!(user.status, 1);
        assert_eq!(user.quota, ROOT_QUOTA);
        assert_eq!(user.access_token.len(), 32);
        assert!(user.access_token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(user.password, ROOT_PASSWORD);

        let hash = PasswordHash::new(&user.password).unwrap();
        assert!(Argon2::default().verify_password(ROOT_PASSWORD.as_bytes(), &hash).is_ok());
    }

    #[test]
    fn test_root_user_tokens_differ() {
        let first = DatabaseBootstrapper::root_user().unwrap();
        let second = DatabaseBootstrapper::root_user().unwrap();
        assert_ne!(first.access_token, second.access_token);
        assert_ne!(first.password, second.password);
    }

    #[test]
    fn test_settings_from_configuration() {
        let mut config = Configuration::init();
        config.database.sql_dsn = Some(String::from("postgresql://relay:pw@db/oneapi"));
        config.database.max_idle_connections = 5000;
        config.database.debug_sql = true;
        config.node.role = NodeRole::slave;

        let settings = BootstrapSettings::from_configuration(&config);
        assert_eq!(settings.descriptor.backend, BackendKind::pgsql);
        assert!(settings.descriptor.simple_protocol);
        assert_eq!(settings.pool.max_idle_connections, settings.pool.max_open_connections);
        assert_eq!(settings.role, NodeRole::slave);
        assert!(settings.debug_sql);
    }
}
