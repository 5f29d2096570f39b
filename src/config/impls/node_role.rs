use crate::config::enums::node_role::NodeRole;

impl NodeRole {
    pub fn is_master(&self) -> bool {
        matches!(self, NodeRole::master)
    }

    pub fn is_slave(&self) -> bool {
        matches!(self, NodeRole::slave)
    }

    /// `NODE_TYPE` semantics: only the literal `slave` demotes a node.
    pub fn from_node_type(value: &str) -> NodeRole {
        if value == "slave" { NodeRole::slave } else { NodeRole::master }
    }
}
