use serde::{
    Deserialize,
    Serialize
};

/// Domain entities whose tables are brought up to date at startup.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordType {
    channel,
    token,
    user,
    option,
    redemption,
    ability,
    log,
}
