use crate::config::enums::node_role::NodeRole;
use crate::database::structs::connection_descriptor::ConnectionDescriptor;
use crate::database::structs::pool_configuration::PoolConfiguration;

#[derive(Debug, Clone)]
pub struct BootstrapSettings {
    pub descriptor: ConnectionDescriptor,
    pub pool: PoolConfiguration,
    pub role: NodeRole,
    pub debug_sql: bool,
}
