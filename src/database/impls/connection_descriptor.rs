use std::time::Duration;
use log::{info, warn};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use crate::database::enums::backend_kind::BackendKind;
use crate::database::structs::connection_descriptor::ConnectionDescriptor;

pub const SQLITE_DEFAULT_PATH: &str = "one-api.db";
pub const SQLITE_DEFAULT_BUSY_TIMEOUT: u64 = 3000;
pub const STATEMENT_CACHE_CAPACITY: usize = 100;
pub const POSTGRES_SCHEMES: [&str; 2] = ["postgres://", "postgresql://"];

/// MySQL driver parameters that carry over into the URL form.
const MYSQL_KEPT_PARAMS: [&str; 2] = ["charset", "collation"];

impl ConnectionDescriptor {
    /// Picks the backend from the connection descriptor. Never fails: anything
    /// that is neither empty nor a PostgreSQL URL is treated as MySQL.
    pub fn select(sql_dsn: Option<&str>, sqlite_path: &str, sqlite_busy_timeout_ms: u64) -> ConnectionDescriptor {
        match sql_dsn.filter(|dsn| !dsn.is_empty()) {
            None => {
                info!("[BOOT] SQL_DSN not set, using SQLite as database");
                ConnectionDescriptor {
                    backend: BackendKind::sqlite3,
                    dsn: format!("sqlite://{}", sqlite_path),
                    sqlite_path: Some(sqlite_path.to_string()),
                    sqlite_busy_timeout: Some(Duration::from_millis(sqlite_busy_timeout_ms)),
                    simple_protocol: false,
                    statement_cache_capacity: STATEMENT_CACHE_CAPACITY,
                }
            }
            Some(dsn) if POSTGRES_SCHEMES.iter().any(|scheme| dsn.starts_with(scheme)) => {
                info!("[BOOT] Using PostgreSQL as database");
                ConnectionDescriptor {
                    backend: BackendKind::pgsql,
                    dsn: dsn.to_string(),
                    sqlite_path: None,
                    sqlite_busy_timeout: None,
                    simple_protocol: true,
                    statement_cache_capacity: STATEMENT_CACHE_CAPACITY,
                }
            }
            Some(dsn) => {
                info!("[BOOT] Using MySQL as database");
                ConnectionDescriptor {
                    backend: BackendKind::mysql,
                    dsn: normalize_mysql_dsn(dsn),
                    sqlite_path: None,
                    sqlite_busy_timeout: None,
                    simple_protocol: false,
                    statement_cache_capacity: STATEMENT_CACHE_CAPACITY,
                }
            }
        }
    }

    /// DSN with the password masked, for log lines. Covers both the
    /// `user:pass@` form and a `password=` query parameter.
    pub fn redacted_dsn(&self) -> String {
        let (base, query) = match self.dsn.split_once('?') {
            Some((base, query)) => (base, Some(query)),
            None => (self.dsn.as_str(), None),
        };
        let base = mask_credentials(base);
        match query {
            Some(query) => format!("{}?{}", base, mask_password_params(query)),
            None => base,
        }
    }
}

fn mask_credentials(base: &str) -> String {
    let Some((scheme, rest)) = base.split_once("://") else {
        return base.to_string();
    };
    match rest.rsplit_once('@') {
        Some((credentials, host)) => match credentials.split_once(':') {
            Some((user, _)) => format!("{}://{}:****@{}", scheme, user, host),
            None => base.to_string(),
        },
        None => base.to_string(),
    }
}

fn mask_password_params(query: &str) -> String {
    query
        .split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key.eq_ignore_ascii_case("password") => format!("{}=****", key),
            _ => pair.to_string(),
        })
        .collect::<Vec<String>>()
        .join("&")
}

/// Maps the Go driver `tls` parameter onto the sqlx `ssl-mode` parameter.
/// Named custom TLS configurations have no URL equivalent.
fn mysql_ssl_mode(tls: &str) -> Option<&'static str> {
    match tls.to_ascii_lowercase().as_str() {
        "true" => Some("VERIFY_IDENTITY"),
        "skip-verify" => Some("REQUIRED"),
        "preferred" => Some("PREFERRED"),
        "false" => Some("DISABLED"),
        _ => None,
    }
}

/// Converts a Go driver style DSN (`user:pass@tcp(host:port)/db?charset=utf8mb4`)
/// into the `mysql://` URL form. URLs are returned unchanged.
pub fn normalize_mysql_dsn(dsn: &str) -> String {
    if dsn.contains("://") {
        return dsn.to_string();
    }
    let (credentials, rest) = match dsn.rsplit_once('@') {
        Some((credentials, rest)) => (credentials, rest),
        None => ("", dsn),
    };
    let (address, socket, tail) = if let Some(inner) = rest.strip_prefix("tcp(") {
        match inner.split_once(')') {
            Some((address, tail)) => (address, None, tail),
            None => return dsn.to_string(),
        }
    } else if let Some(inner) = rest.strip_prefix("unix(") {
        match inner.split_once(')') {
            Some((socket, tail)) => ("localhost", Some(socket), tail),
            None => return dsn.to_string(),
        }
    } else {
        match rest.find('/') {
            Some(position) => (&rest[..position], None, &rest[position..]),
            None => (rest, None, ""),
        }
    };
    let address = if address.is_empty() { "127.0.0.1:3306" } else { address };
    let tail = tail.trim_start_matches('/');
    let (database, query) = tail.split_once('?').unwrap_or((tail, ""));

    let mut params: Vec<String> = Vec::new();
    let mut dropped: Vec<&str> = Vec::new();
    for (key, value) in query.split('&').filter_map(|pair| pair.split_once('=')) {
        if MYSQL_KEPT_PARAMS.contains(&key) {
            params.push(format!("{}={}", key, value.split(',').next().unwrap_or(value)));
        } else if key == "tls" {
            match mysql_ssl_mode(value) {
                Some(mode) => params.push(format!("ssl-mode={}", mode)),
                None => dropped.push(key),
            }
        } else {
            dropped.push(key);
        }
    }
    if !dropped.is_empty() {
        warn!("[BOOT] Ignoring MySQL DSN parameters without a driver equivalent: {}", dropped.join(", "));
    }
    if let Some(socket) = socket {
        params.push(format!("socket={}", socket));
    }

    let credentials = match credentials.split_once(':') {
        Some((user, password)) => format!(
            "{}:{}@",
            utf8_percent_encode(user, NON_ALPHANUMERIC),
            utf8_percent_encode(password, NON_ALPHANUMERIC)
        ),
        None if !credentials.is_empty() => format!("{}@", utf8_percent_encode(credentials, NON_ALPHANUMERIC)),
        None => String::new(),
    };
    let query = if params.is_empty() { String::new() } else { format!("?{}", params.join("&")) };
    format!("mysql://{}{}/{}{}", credentials, address, database, query)
}
