//! Typed accessors over a parsed YAML tree.
//!
//! Every accessor distinguishes "absent" (`Ok(None)`, including an explicit
//! `~`) from "present with an unusable type" (`Err(InvalidField)`), so that
//! callers decide explicitly between a default and a fatal error.

use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;

/// Borrow `value` as a mapping or report `path` as the wrong type
pub(crate) fn mapping<'a>(value: &'a Value, path: &str) -> Result<&'a Mapping, ConfigError> {
    value.as_mapping().ok_or_else(|| ConfigError::InvalidField {
        path: path.to_string(),
        expected: "a mapping",
    })
}

/// Look up `key`, treating a null value as absent
pub(crate) fn get<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// Look up a group or item key as the caller spells it
///
/// Unquoted YAML keys such as `2024:` or `true:` are not strings; they match
/// when their rendered form equals `key`.
pub(crate) fn find<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).or_else(|| {
        map.iter()
            .find(|(k, _)| !k.is_string() && key_name(k) == key)
            .map(|(_, v)| v)
    })
}

/// Optional nested mapping
pub(crate) fn optional_mapping<'a>(
    map: &'a Mapping,
    key: &str,
    path: &str,
) -> Result<Option<&'a Mapping>, ConfigError> {
    get(map, key)
        .map(|v| mapping(v, &join(path, key)))
        .transpose()
}

/// Optional string; numbers and booleans are accepted in their YAML form
pub(crate) fn optional_str(
    map: &Mapping,
    key: &str,
    path: &str,
) -> Result<Option<String>, ConfigError> {
    match get(map, key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(_) => Err(ConfigError::InvalidField {
            path: join(path, key),
            expected: "a string",
        }),
    }
}

/// Optional integer; numeric strings such as `"2"` are accepted
pub(crate) fn optional_int(
    map: &Mapping,
    key: &str,
    path: &str,
) -> Result<Option<i64>, ConfigError> {
    let invalid = || ConfigError::InvalidField {
        path: join(path, key),
        expected: "an integer",
    };
    match get(map, key) {
        None => Ok(None),
        Some(Value::Number(n)) => n.as_i64().map(Some).ok_or_else(invalid),
        Some(Value::String(s)) => s.trim().parse::<i64>().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}

/// Keys of a mapping in document order, for diagnostics
pub(crate) fn keys(map: &Mapping) -> Vec<String> {
    map.keys().map(key_name).collect()
}

pub(crate) fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => format!("{other:?}"),
    }
}

pub(crate) fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
