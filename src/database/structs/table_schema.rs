use crate::database::enums::column_default::ColumnDefault;
use crate::database::enums::column_kind::ColumnKind;

/// Current definition of one table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSchema {
    pub table_name: &'static str,
    pub columns: &'static [ColumnDefinition],
    pub primary_key: &'static [&'static str],
    pub indexes: &'static [IndexDefinition],
}

/// A column is `NOT NULL` when it has a default or belongs to the primary key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDefinition {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub default: Option<ColumnDefault>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexDefinition {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub unique: bool,
}
