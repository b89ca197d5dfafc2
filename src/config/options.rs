use crate::domain::model::{ModelInput, ServiceOptions};
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::json_type_name;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

impl ServiceOptions {
    /// 從鬆散型別的 JSON 物件建立選項
    ///
    /// Keys may be camelCase (`gemDependencies`) or snake_case
    /// (`gem_dependencies`). Sub-model values follow [`ModelInput`]'s
    /// conversion: `null` is absent, a string is a path, an object is inline.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => return Err(ModelError::invalid("Hash", json_type_name(&other))),
        };

        let options = ServiceOptions {
            version: string_field("version", take(&mut map, &["version"]))?,
            name: string_field("name", take(&mut map, &["name"]))?,
            api: ModelInput::from(take(&mut map, &["api"])),
            docs: ModelInput::from(take(&mut map, &["docs"])),
            paginators: ModelInput::from(take(&mut map, &["paginators"])),
            waiters: ModelInput::from(take(&mut map, &["waiters"])),
            resources: ModelInput::from(take(&mut map, &["resources"])),
            examples: ModelInput::from(take(&mut map, &["examples"])),
            gem_dependencies: string_map(
                "gemDependencies",
                take(&mut map, &["gemDependencies", "gem_dependencies"]),
            )?,
            add_plugins: string_map("addPlugins", take(&mut map, &["addPlugins", "add_plugins"]))?,
            remove_plugins: string_list(
                "removePlugins",
                take(&mut map, &["removePlugins", "remove_plugins"]),
            )?,
        };

        for key in map.keys() {
            tracing::warn!("Ignoring unrecognized service option `{}`", key);
        }

        Ok(options)
    }
}

fn take(map: &mut Map<String, Value>, keys: &[&str]) -> Value {
    keys.iter()
        .find_map(|key| map.remove(*key))
        .unwrap_or(Value::Null)
}

fn string_field(field: &str, value: Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Err(ModelError::invalid(
            format!("String for `{}`", field),
            json_type_name(&other),
        )),
    }
}

fn string_map(field: &str, value: Value) -> Result<Option<BTreeMap<String, String>>> {
    match value {
        Value::Null => Ok(None),
        Value::Object(entries) => entries_to_strings(field, entries).map(Some),
        other => Err(ModelError::invalid(
            format!("Hash for `{}`", field),
            json_type_name(&other),
        )),
    }
}

fn entries_to_strings(field: &str, entries: Map<String, Value>) -> Result<BTreeMap<String, String>> {
    entries
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(s) => Ok((key, s)),
            other => Err(ModelError::invalid(
                format!("String for `{}.{}`", field, key),
                json_type_name(&other),
            )),
        })
        .collect()
}

fn string_list(field: &str, value: Value) -> Result<Option<Vec<String>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                other => Err(ModelError::invalid(
                    format!("String in `{}`", field),
                    json_type_name(&other),
                )),
            })
            .collect::<Result<Vec<_>>>()
            .map(Some),
        other => Err(ModelError::invalid(
            format!("Array for `{}`", field),
            json_type_name(&other),
        )),
    }
}
