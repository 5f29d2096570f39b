use crate::bootstrap::structs::bootstrap_settings::BootstrapSettings;
use crate::config::structs::configuration::Configuration;

impl BootstrapSettings {
    pub fn from_configuration(config: &Configuration) -> BootstrapSettings {
        BootstrapSettings {
            descriptor: config.database.descriptor(),
            pool: config.database.pool(),
            role: config.node.role,
            debug_sql: config.database.debug_sql,
        }
    }
}
