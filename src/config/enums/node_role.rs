use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Only the `master` node creates and alters tables; `slave` nodes trust the
/// schema to be current.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Default)]
pub enum NodeRole {
    #[default]
    master,
    slave,
}
