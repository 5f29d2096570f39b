#[cfg(test)]
mod config_tests {
    mod node_role_tests {
        use crate::config::enums::node_role::NodeRole;

        #[test]
        fn test_node_role_default() {
            assert_eq!(NodeRole::default(), NodeRole::master);
            assert!(NodeRole::default().is_master());
        }

        #[test]
        fn test_node_role_serialization() {
            assert_eq!(serde_json::to_string(&NodeRole::master).unwrap(), "\"master\"");
            assert_eq!(serde_json::to_string(&NodeRole::slave).unwrap(), "\"slave\"");
            let role: NodeRole = serde_json::from_str("\"slave\"").unwrap();
            assert!(role.is_slave());
        }

        #[test]
        fn test_node_type_only_slave_demotes() {
            assert_eq!(NodeRole::from_node_type("slave"), NodeRole::slave);
            assert_eq!(NodeRole::from_node_type("master"), NodeRole::master);
            assert_eq!(NodeRole::from_node_type(""), NodeRole::master);
            assert_eq!(NodeRole::from_node_type("SLAVE"), NodeRole::master);
        }
    }

    mod configuration_tests {
        use std::collections::HashMap;
        use crate::config::enums::configuration_error::ConfigurationError;
        use crate::config::enums::node_role::NodeRole;
        use crate::config::structs::configuration::Configuration;
        use crate::database::enums::backend_kind::BackendKind;

        fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
            let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
            move |key| map.get(key).cloned()
        }

        #[test]
        fn test_init_defaults() {
            let config = Configuration::init();
            assert_eq!(config.log_level, "info");
            assert_eq!(config.database.sql_dsn, None);
            assert_eq!(config.database.sqlite_path, "one-api.db");
            assert_eq!(config.database.sqlite_busy_timeout, 3000);
            assert_eq!(config.database.max_idle_connections, 100);
            assert_eq!(config.database.max_open_connections, 1000);
            assert_eq!(config.database.max_lifetime, 60);
            assert!(!config.database.debug_sql);
            assert_eq!(config.node.role, NodeRole::master);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_toml_round_trip() {
            let mut config = Configuration::init();
            config.database.sql_dsn = Some(String::from("postgres://u:p@db/oneapi"));
            config.node.role = NodeRole::slave;
            let serialized = toml::to_string(&config).unwrap();
            let loaded = Configuration::load(serialized.as_bytes()).unwrap();
            assert_eq!(loaded, config);
        }

        #[test]
        fn test_load_minimal_toml() {
            let data = br#"
                log_level = "debug"

                [database]
                sqlite_path = "/data/relay.db"
                sqlite_busy_timeout = 5000
                max_idle_connections = 10
                max_open_connections = 20
                max_lifetime = 120

                [node]
            "#;
            let config = Configuration::load(data).unwrap();
            assert_eq!(config.log_level, "debug");
            assert_eq!(config.database.sql_dsn, None);
            assert!(!config.database.debug_sql);
            assert_eq!(config.node.role, NodeRole::master);
            assert_eq!(config.database.descriptor().backend, BackendKind::sqlite3);
            assert_eq!(config.database.descriptor().dsn, "sqlite:///data/relay.db");
        }

        #[test]
        fn test_env_overrides() {
            let mut config = Configuration::init();
            let warnings = config.apply_env_overrides(lookup(&[
                ("SQL_DSN", "root:pw@tcp(db:3306)/oneapi"),
                ("SQL_MAX_IDLE_CONNS", "5"),
                ("SQL_MAX_OPEN_CONNS", "50"),
                ("SQL_MAX_LIFETIME", "30"),
                ("NODE_TYPE", "slave"),
                ("DEBUG_SQL", "true"),
                ("LOG_LEVEL", "DEBUG"),
            ]));
            assert!(warnings.is_empty());
            assert_eq!(config.database.descriptor().backend, BackendKind::mysql);
            assert_eq!(config.database.max_idle_connections, 5);
            assert_eq!(config.database.max_open_connections, 50);
            assert_eq!(config.database.max_lifetime, 30);
            assert_eq!(config.node.role, NodeRole::slave);
            assert!(config.database.debug_sql);
            assert_eq!(config.log_level, "debug");

            let pool = config.database.pool();
            assert_eq!(pool.max_open_connections, 50);
            assert_eq!(pool.max_lifetime.as_secs(), 30);
        }

        #[test]
        fn test_invalid_env_values_keep_existing() {
            let mut config = Configuration::init();
            let warnings = config.apply_env_overrides(lookup(&[
                ("SQL_MAX_IDLE_CONNS", "-1"),
                ("SQL_MAX_OPEN_CONNS", "0"),
                ("SQL_MAX_LIFETIME", "soon"),
                ("SQLITE_BUSY_TIMEOUT", "0"),
            ]));
            assert_eq!(warnings.len(), 4);
            assert_eq!(config, Configuration::init());
        }

        #[test]
        fn test_empty_dsn_keeps_sqlite() {
            let mut config = Configuration::init();
            config.apply_env_overrides(lookup(&[("SQL_DSN", "")]));
            assert_eq!(config.database.sql_dsn, None);
            assert_eq!(config.database.descriptor().backend, BackendKind::sqlite3);
        }

        #[test]
        fn test_validate_rejects_unknown_log_level() {
            let mut config = Configuration::init();
            config.log_level = String::from("verbose");
            assert!(matches!(config.validate(), Err(ConfigurationError::InvalidValue { .. })));
        }

        #[test]
        fn test_load_from_missing_file_uses_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let config = Configuration::load_from_file(path.to_str().unwrap(), false).unwrap();
            assert_eq!(config, Configuration::init());
            assert!(!path.exists());
        }

        #[test]
        fn test_load_from_file_creates_default() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            let path = path.to_str().unwrap();
            let result = Configuration::load_from_file(path, true);
            assert!(matches!(result, Err(ConfigurationError::CreatedFile(_))));
            let created = Configuration::load_file(path).unwrap();
            assert_eq!(created, Configuration::init());
            assert_eq!(Configuration::load_from_file(path, false).unwrap(), created);
        }

        #[test]
        fn test_load_from_corrupt_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("config.toml");
            std::fs::write(&path, "log_level = [").unwrap();
            let result = Configuration::load_from_file(path.to_str().unwrap(), false);
            assert!(matches!(result, Err(ConfigurationError::MissingFile(_))));
        }
    }
}
