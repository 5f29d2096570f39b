use serde::{Deserialize, Serialize};
use crate::config::enums::node_role::NodeRole;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NodeConfig {
    #[serde(default)]
    pub role: NodeRole,
}
