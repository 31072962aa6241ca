//! Detect and fill configuration keys that an older config file lacks.
//!
//! Loading already tolerates missing keys through serde defaults; this module
//! makes them visible (`config --check`) and writes them back (`config --migrate`)
//! without touching the values the user already set.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn default_mapping() -> AppResult<Mapping> {
    let value =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(&content)
        .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
    {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

/// Walk `defaults` and copy every key absent from `target`.
/// Returns the dotted names of the keys that were added.
fn fill_missing(target: &mut Mapping, defaults: &Mapping, prefix: &str) -> Vec<String> {
    let mut added = Vec::new();

    for (key, default) in defaults {
        let name = match key.as_str() {
            Some(k) if prefix.is_empty() => k.to_string(),
            Some(k) => format!("{prefix}.{k}"),
            None => continue,
        };

        match target.get_mut(key) {
            None => {
                target.insert(key.clone(), default.clone());
                added.push(name);
            }
            Some(Value::Mapping(inner)) => {
                if let Value::Mapping(inner_default) = default {
                    added.extend(fill_missing(inner, inner_default, &name));
                }
            }
            Some(_) => {}
        }
    }

    added
}

/// Keys present in a default configuration but missing from the file.
pub fn missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    Ok(fill_missing(&mut current, &default_mapping()?, ""))
}

/// Add missing keys with their default values and rewrite the file.
/// Returns the keys that were added (empty → file untouched).
pub fn migrate_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let added = fill_missing(&mut current, &default_mapping()?, "");

    if !added.is_empty() {
        let yaml = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
