use std::str::FromStr;

/// Read an environment variable, treating empty values as unset.
pub(super) fn env_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read and parse an environment variable.
pub(super) fn env_parse<T>(name: &str) -> Result<Option<T>, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env_string(name) {
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| format!("Invalid value for {name}: '{value}' ({e})")),
        None => Ok(None),
    }
}

/// Parse a boolean flag, accepting the usual spellings.
pub(super) fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean environment variable.
pub(super) fn env_bool(name: &str) -> Result<Option<bool>, String> {
    match env_string(name) {
        Some(value) => parse_bool(&value)
            .map(Some)
            .ok_or_else(|| format!("Invalid boolean for {name}: '{value}'")),
        None => Ok(None),
    }
}
