use clap::ValueEnum;
use serde::{
    Deserialize,
    Serialize
};

/// Storage engine chosen for this process.
///
/// Selected once at startup from the connection descriptor and never changed
/// afterwards. Downstream SQL generation branches on this value instead of
/// consulting process-wide dialect flags.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum)]
pub enum BackendKind {
    sqlite3,
    mysql,
    pgsql,
}
