use std::time::Duration;
use sqlx::ConnectOptions;
use crate::database::enums::backend_kind::BackendKind;
use crate::database::enums::column_default::ColumnDefault;
use crate::database::enums::column_kind::ColumnKind;
use crate::database::structs::table_schema::{ColumnDefinition, IndexDefinition, TableSchema};

pub const USER_COLUMNS: [&str; 7] = [
    "username",
    "password",
    "display_name",
    "role",
    "status",
    "access_token",
    "quota",
];

pub fn quote_identifier(engine: BackendKind, identifier: &str) -> String {
    match engine {
        BackendKind::sqlite3 | BackendKind::mysql => format!("`{}`", identifier),
        BackendKind::pgsql => format!("\"{}\"", identifier),
    }
}

pub fn placeholder(engine: BackendKind, position: usize) -> String {
    match engine {
        BackendKind::sqlite3 | BackendKind::mysql => "?".to_string(),
        BackendKind::pgsql => format!("${}", position),
    }
}

pub fn column_type(engine: BackendKind, kind: ColumnKind) -> String {
    match engine {
        BackendKind::sqlite3 => match kind {
            ColumnKind::Serial | ColumnKind::Integer | ColumnKind::BigInt => "INTEGER".to_string(),
            ColumnKind::Boolean => "NUMERIC".to_string(),
            ColumnKind::Double => "REAL".to_string(),
            ColumnKind::Varchar(_) | ColumnKind::Char(_) | ColumnKind::Text => "TEXT".to_string(),
        },
        BackendKind::mysql => match kind {
            ColumnKind::Serial | ColumnKind::BigInt => "BIGINT".to_string(),
            ColumnKind::Integer => "INT".to_string(),
            ColumnKind::Boolean => "BOOLEAN".to_string(),
            ColumnKind::Double => "DOUBLE".to_string(),
            ColumnKind::Varchar(size) => format!("VARCHAR({})", size),
            ColumnKind::Char(size) => format!("CHAR({})", size),
            ColumnKind::Text => "LONGTEXT".to_string(),
        },
        BackendKind::pgsql => match kind {
            ColumnKind::Serial => "BIGSERIAL".to_string(),
            ColumnKind::Integer => "INTEGER".to_string(),
            ColumnKind::BigInt => "BIGINT".to_string(),
            ColumnKind::Boolean => "BOOLEAN".to_string(),
            ColumnKind::Double => "DOUBLE PRECISION".to_string(),
            ColumnKind::Varchar(size) => format!("VARCHAR({})", size),
            ColumnKind::Char(size) => format!("CHAR({})", size),
            ColumnKind::Text => "TEXT".to_string(),
        },
    }
}

pub fn default_literal(engine: BackendKind, default: ColumnDefault) -> String {
    match default {
        ColumnDefault::Int(value) => value.to_string(),
        ColumnDefault::Bool(value) => match engine {
            BackendKind::sqlite3 | BackendKind::mysql => (if value { "1" } else { "0" }).to_string(),
            BackendKind::pgsql => (if value { "TRUE" } else { "FALSE" }).to_string(),
        },
        ColumnDefault::Str(value) => format!("'{}'", value.replace('\'', "''")),
    }
}

/// Renders one column. `creating` distinguishes `CREATE TABLE` from `ALTER TABLE ... ADD COLUMN`,
/// which can neither declare a primary key nor add a `NOT NULL` column without a default.
pub fn column_definition(engine: BackendKind, column: &ColumnDefinition, in_primary_key: bool, creating: bool) -> String {
    let quoted = quote_identifier(engine, column.name);
    if column.kind == ColumnKind::Serial && creating {
        return match engine {
            BackendKind::sqlite3 => format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", quoted),
            BackendKind::mysql => format!("{} BIGINT NOT NULL AUTO_INCREMENT", quoted),
            BackendKind::pgsql => format!("{} BIGSERIAL", quoted),
        };
    }
    let mut definition = format!("{} {}", quoted, column_type(engine, column.kind));
    if (in_primary_key && creating) || column.default.is_some() {
        definition.push_str(" NOT NULL");
    }
    if let Some(default) = column.default {
        definition.push_str(" DEFAULT ");
        definition.push_str(&default_literal(engine, default));
    }
    definition
}

pub fn build_create_table_query(engine: BackendKind, schema: &TableSchema) -> String {
    let mut parts: Vec<String> = schema
        .columns
        .iter()
        .map(|column| column_definition(engine, column, schema.primary_key.contains(&column.name), true))
        .collect();
    let inline_key = engine == BackendKind::sqlite3
        && schema.columns.iter().any(|column| column.kind == ColumnKind::Serial);
    if !inline_key && !schema.primary_key.is_empty() {
        let keys: Vec<String> = schema
            .primary_key
            .iter()
            .map(|key| quote_identifier(engine, key))
            .collect();
        parts.push(format!("PRIMARY KEY ({})", keys.join(", ")));
    }
    let suffix = match engine {
        BackendKind::mysql => " DEFAULT CHARSET=utf8mb4",
        BackendKind::sqlite3 | BackendKind::pgsql => "",
    };
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({}){}",
        quote_identifier(engine, schema.table_name),
        parts.join(", "),
        suffix
    )
}

pub fn build_add_column_query(engine: BackendKind, table_name: &str, column: &ColumnDefinition) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN {}",
        quote_identifier(engine, table_name),
        column_definition(engine, column, false, false)
    )
}

pub fn build_create_index_query(engine: BackendKind, table_name: &str, index: &IndexDefinition) -> String {
    let columns: Vec<String> = index
        .columns
        .iter()
        .map(|column| quote_identifier(engine, column))
        .collect();
    format!(
        "CREATE {}INDEX {} ON {} ({})",
        if index.unique { "UNIQUE " } else { "" },
        quote_identifier(engine, index.name),
        quote_identifier(engine, table_name),
        columns.join(", ")
    )
}

pub fn build_select_any_user_query(engine: BackendKind, table_name: &str) -> String {
    format!(
        "SELECT {} FROM {} LIMIT 1",
        quote_identifier(engine, "id"),
        quote_identifier(engine, table_name)
    )
}

pub fn build_insert_user_query(engine: BackendKind, table_name: &str) -> String {
    let columns: Vec<String> = USER_COLUMNS
        .iter()
        .map(|column| quote_identifier(engine, column))
        .collect();
    let values: Vec<String> = (1..=USER_COLUMNS.len())
        .map(|position| placeholder(engine, position))
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quote_identifier(engine, table_name),
        columns.join(", "),
        values.join(", ")
    )
}

/// Every statement is logged verbatim at `info` when SQL debugging is on.
/// Slow statements are reported either way.
pub fn statement_logging<O: ConnectOptions>(options: O, debug_sql: bool) -> O {
    let options = if debug_sql {
        options.log_statements(log::LevelFilter::Info)
    } else {
        options.disable_statement_logging()
    };
    options.log_slow_statements(log::LevelFilter::Warn, Duration::from_secs(1))
}
