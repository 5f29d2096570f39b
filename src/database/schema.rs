//! Current table definitions of the seven migratable record types.

use crate::database::enums::column_default::ColumnDefault;
use crate::database::enums::column_default::ColumnDefault::{Bool, Int, Str};
use crate::database::enums::column_kind::ColumnKind;
use crate::database::enums::column_kind::ColumnKind::{BigInt, Boolean, Char, Double, Integer, Serial, Text, Varchar};
use crate::database::structs::table_schema::{ColumnDefinition, IndexDefinition, TableSchema};

const fn column(name: &'static str, kind: ColumnKind) -> ColumnDefinition {
    ColumnDefinition { name, kind, default: None }
}

const fn column_default(name: &'static str, kind: ColumnKind, default: ColumnDefault) -> ColumnDefinition {
    ColumnDefinition { name, kind, default: Some(default) }
}

const fn index(name: &'static str, columns: &'static [&'static str]) -> IndexDefinition {
    IndexDefinition { name, columns, unique: false }
}

const fn unique_index(name: &'static str, columns: &'static [&'static str]) -> IndexDefinition {
    IndexDefinition { name, columns, unique: true }
}

pub static CHANNELS: TableSchema = TableSchema {
    table_name: "channels",
    columns: &[
        column("id", Serial),
        column_default("type", Integer, Int(0)),
        column("key", Text),
        column_default("status", Integer, Int(1)),
        column_default("name", Varchar(191), Str("")),
        column_default("weight", Integer, Int(0)),
        column_default("created_time", BigInt, Int(0)),
        column_default("test_time", BigInt, Int(0)),
        column_default("response_time", Integer, Int(0)),
        column_default("base_url", Varchar(191), Str("")),
        column("other", Text),
        column("balance", Double),
        column_default("balance_updated_time", BigInt, Int(0)),
        column("models", Text),
        column_default("group", Varchar(32), Str("default")),
        column_default("used_quota", BigInt, Int(0)),
        column_default("model_mapping", Varchar(1024), Str("")),
        column_default("priority", BigInt, Int(0)),
        column("config", Text),
        column("system_prompt", Text),
    ],
    primary_key: &["id"],
    indexes: &[
        index("idx_channels_name", &["name"]),
    ],
};

pub static TOKENS: TableSchema = TableSchema {
    table_name: "tokens",
    columns: &[
        column("id", Serial),
        column_default("user_id", Integer, Int(0)),
        column_default("key", Char(48), Str("")),
        column_default("status", Integer, Int(1)),
        column_default("name", Varchar(191), Str("")),
        column_default("created_time", BigInt, Int(0)),
        column_default("accessed_time", BigInt, Int(0)),
        column_default("expired_time", BigInt, Int(-1)),
        column_default("remain_quota", BigInt, Int(0)),
        column_default("unlimited_quota", Boolean, Bool(false)),
        column_default("used_quota", BigInt, Int(0)),
        column("models", Text),
        column_default("subnet", Varchar(191), Str("")),
    ],
    primary_key: &["id"],
    indexes: &[
        index("idx_tokens_user_id", &["user_id"]),
        unique_index("uidx_tokens_key", &["key"]),
        index("idx_tokens_name", &["name"]),
    ],
};

pub static USERS: TableSchema = TableSchema {
    table_name: "users",
    columns: &[
        column("id", Serial),
        column_default("username", Varchar(191), Str("")),
        column_default("password", Varchar(191), Str("")),
        column_default("display_name", Varchar(191), Str("")),
        column_default("role", Integer, Int(1)),
        column_default("status", Integer, Int(1)),
        column("email", Varchar(191)),
        column("github_id", Varchar(191)),
        column("wechat_id", Varchar(191)),
        column("lark_id", Varchar(191)),
        column("oidc_id", Varchar(191)),
        column("access_token", Char(32)),
        column_default("quota", BigInt, Int(0)),
        column_default("used_quota", BigInt, Int(0)),
        column_default("request_count", Integer, Int(0)),
        column_default("group", Varchar(32), Str("default")),
        column("aff_code", Varchar(32)),
        column_default("inviter_id", Integer, Int(0)),
    ],
    primary_key: &["id"],
    indexes: &[
        unique_index("uidx_users_username", &["username"]),
        index("idx_users_display_name", &["display_name"]),
        index("idx_users_email", &["email"]),
        index("idx_users_github_id", &["github_id"]),
        index("idx_users_wechat_id", &["wechat_id"]),
        index("idx_users_lark_id", &["lark_id"]),
        index("idx_users_oidc_id", &["oidc_id"]),
        unique_index("uidx_users_access_token", &["access_token"]),
        unique_index("uidx_users_aff_code", &["aff_code"]),
        index("idx_users_inviter_id", &["inviter_id"]),
    ],
};

pub static OPTIONS: TableSchema = TableSchema {
    table_name: "options",
    columns: &[
        column("key", Varchar(191)),
        column("value", Text),
    ],
    primary_key: &["key"],
    indexes: &[],
};

pub static REDEMPTIONS: TableSchema = TableSchema {
    table_name: "redemptions",
    columns: &[
        column("id", Serial),
        column_default("user_id", Integer, Int(0)),
        column_default("key", Char(32), Str("")),
        column_default("status", Integer, Int(1)),
        column_default("name", Varchar(191), Str("")),
        column_default("quota", BigInt, Int(100)),
        column_default("created_time", BigInt, Int(0)),
        column_default("redeemed_time", BigInt, Int(0)),
    ],
    primary_key: &["id"],
    indexes: &[
        unique_index("uidx_redemptions_key", &["key"]),
        index("idx_redemptions_name", &["name"]),
    ],
};

pub static ABILITIES: TableSchema = TableSchema {
    table_name: "abilities",
    columns: &[
        column("group", Varchar(32)),
        column("model", Varchar(191)),
        column("channel_id", Integer),
        column_default("enabled", Boolean, Bool(true)),
        column_default("priority", BigInt, Int(0)),
    ],
    primary_key: &["group", "model", "channel_id"],
    indexes: &[
        index("idx_abilities_channel_id", &["channel_id"]),
        index("idx_abilities_priority", &["priority"]),
    ],
};

pub static LOGS: TableSchema = TableSchema {
    table_name: "logs",
    columns: &[
        column("id", Serial),
        column_default("user_id", Integer, Int(0)),
        column_default("created_time", BigInt, Int(0)),
        column_default("type", Integer, Int(0)),
        column("content", Text),
        column_default("username", Varchar(191), Str("")),
        column_default("token_name", Varchar(191), Str("")),
        column_default("model_name", Varchar(191), Str("")),
        column_default("quota", Integer, Int(0)),
        column_default("prompt_tokens", Integer, Int(0)),
        column_default("completion_tokens", Integer, Int(0)),
        column_default("channel_id", Integer, Int(0)),
        column_default("request_id", Varchar(191), Str("")),
        column_default("elapsed_time", BigInt, Int(0)),
        column_default("is_stream", Boolean, Bool(false)),
        column_default("system_prompt_reset", Boolean, Bool(false)),
    ],
    primary_key: &["id"],
    indexes: &[
        index("idx_logs_user_id", &["user_id"]),
        index("idx_logs_created_time", &["created_time"]),
        index("idx_logs_type", &["type"]),
        index("idx_logs_username", &["username"]),
        index("idx_logs_token_name", &["token_name"]),
        index("idx_logs_model_name", &["model_name"]),
        index("idx_logs_channel_id", &["channel_id"]),
    ],
};
