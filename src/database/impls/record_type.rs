use std::fmt;
use crate::database::enums::record_type::RecordType;
use crate::database::schema::{ABILITIES, CHANNELS, LOGS, OPTIONS, REDEMPTIONS, TOKENS, USERS};
use crate::database::structs::table_schema::TableSchema;

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordType::channel => write!(f, "Channel"),
            RecordType::token => write!(f, "Token"),
            RecordType::user => write!(f, "User"),
            RecordType::option => write!(f, "Option"),
            RecordType::redemption => write!(f, "Redemption"),
            RecordType::ability => write!(f, "Ability"),
            RecordType::log => write!(f, "Log"),
        }
    }
}

impl RecordType {
    /// Order in which the schema-owning node migrates the tables.
    pub const MIGRATION_ORDER: [RecordType; 7] = [
        RecordType::channel,
        RecordType::token,
        RecordType::user,
        RecordType::option,
        RecordType::redemption,
        RecordType::ability,
        RecordType::log,
    ];

    pub fn schema(&self) -> &'static TableSchema {
        match self {
            RecordType::channel => &CHANNELS,
            RecordType::token => &TOKENS,
            RecordType::user => &USERS,
            RecordType::option => &OPTIONS,
            RecordType::redemption => &REDEMPTIONS,
            RecordType::ability => &ABILITIES,
            RecordType::log => &LOGS,
        }
    }

    pub fn table_name(&self) -> &'static str {
        self.schema().table_name
    }
}
