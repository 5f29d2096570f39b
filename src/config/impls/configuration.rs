use std::fs::File;
use std::io::{ErrorKind, Write};
use std::str::FromStr;
use regex::Regex;
use crate::common::common::{parse_flag, parse_positive};
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::enums::node_role::NodeRole;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::node_config::NodeConfig;

pub const LOG_LEVEL_PATTERN: &str = r"^(off|trace|debug|info|warn|error)$";
pub const SQLITE_PATH_PATTERN: &str = r"^\S.*$";

impl Default for Configuration {
    fn default() -> Self {
        Configuration::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: DatabaseConfig::default(),
            node: NodeConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    /// Loads and validates `path`. A missing file yields the defaults so that
    /// environment-only deployments keep working, unless `create` is set, in
    /// which case a default file is written and the caller is expected to stop.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(error)) if error.kind() == ErrorKind::NotFound && !create => {
                eprintln!("No {} found, using defaults and environment.", path);
                Configuration::init()
            }
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either fix {}, or start this app using '--create-config' as parameter.", path);
                    return Err(ConfigurationError::MissingFile(path.to_string()));
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())?;
                if let Err(error) = Configuration::save_file(path, config_toml) {
                    eprintln!("{} could not be created, check permissions...", path);
                    return Err(error);
                }
                eprintln!("Please edit {} and start again, exiting now...", path);
                return Err(ConfigurationError::CreatedFile(path.to_string()));
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Applies the deployment environment on top of the loaded values. Returns
    /// the warnings for values that were ignored, to be logged once logging is up.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Vec<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut warnings = Vec::new();

        if let Some(dsn) = lookup("SQL_DSN").filter(|value| !value.is_empty()) {
            self.database.sql_dsn = Some(dsn);
        }
        if let Some(path) = lookup("SQLITE_PATH").filter(|value| !value.is_empty()) {
            self.database.sqlite_path = path;
        }
        override_positive(&lookup, "SQLITE_BUSY_TIMEOUT", &mut self.database.sqlite_busy_timeout, &mut warnings);
        override_positive(&lookup, "SQL_MAX_IDLE_CONNS", &mut self.database.max_idle_connections, &mut warnings);
        override_positive(&lookup, "SQL_MAX_OPEN_CONNS", &mut self.database.max_open_connections, &mut warnings);
        override_positive(&lookup, "SQL_MAX_LIFETIME", &mut self.database.max_lifetime, &mut warnings);
        if let Some(node_type) = lookup("NODE_TYPE") {
            self.node.role = NodeRole::from_node_type(&node_type);
        }
        if let Some(debug_sql) = lookup("DEBUG_SQL") {
            self.database.debug_sql = parse_flag(&debug_sql);
        }
        if let Some(level) = lookup("LOG_LEVEL").filter(|value| !value.is_empty()) {
            self.log_level = level.to_lowercase();
        }

        warnings
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = [
            ("log_level", self.log_level.as_str(), LOG_LEVEL_PATTERN),
            ("database.sqlite_path", self.database.sqlite_path.as_str(), SQLITE_PATH_PATTERN),
        ];

        for (name, value, pattern) in check_map {
            Self::validate_value(name, value, pattern)?;
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, pattern: &str) -> Result<(), ConfigurationError> {
        let invalid = || ConfigurationError::InvalidValue { name: name.to_string(), value: value.to_string() };
        let regex_check = Regex::new(pattern).map_err(|_| invalid())?;
        if !regex_check.is_match(value) {
            return Err(invalid());
        }
        Ok(())
    }
}

fn override_positive<T, F>(lookup: &F, key: &str, target: &mut T, warnings: &mut Vec<String>)
where
    T: FromStr + PartialOrd + Default,
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(key) {
        match parse_positive(key, &value) {
            Ok(parsed) => *target = parsed,
            Err(warning) => warnings.push(warning),
        }
    }
}
