use std::str::FromStr;

/// Parses a strictly positive number. The error is the warning to report
/// when the value is ignored.
pub fn parse_positive<T>(key: &str, value: &str) -> Result<T, String>
where
    T: FromStr + PartialOrd + Default,
{
    match value.trim().parse::<T>() {
        Ok(parsed) if parsed > T::default() => Ok(parsed),
        _ => Err(format!("Ignoring {}=\"{}\", expected a positive number", key, value)),
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}
