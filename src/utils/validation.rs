use crate::utils::error::{ModelError, Result};
use serde_json::{Map, Value};

/// JSON type name used in `InvalidArgument` messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn validate_required_field<T>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| ModelError::missing(field_name))
}

/// 取出必填的字串欄位
pub fn fetch_str(map: &Map<String, Value>, key: &str) -> Result<String> {
    fetch_optional_str(map, key)?.ok_or_else(|| ModelError::missing(key))
}

/// Only an absent key counts as missing. An explicit `null` is a non-string
/// value, and an empty string is returned as-is.
pub fn fetch_optional_str(map: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match map.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(ModelError::invalid(
            format!("String for `{}`", key),
            json_type_name(other),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn metadata() -> Map<String, Value> {
        match json!({
            "protocol": "rest-xml",
            "serviceAbbreviation": "",
            "apiVersion": 20060301,
            "signatureVersion": null
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_fetch_str() {
        let map = metadata();
        assert_eq!(fetch_str(&map, "protocol").unwrap(), "rest-xml");

        match fetch_str(&map, "serviceFullName") {
            Err(ModelError::MissingField { field }) => assert_eq!(field, "serviceFullName"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_fetch_str_rejects_non_string() {
        match fetch_str(&metadata(), "apiVersion") {
            Err(ModelError::InvalidArgument { actual, .. }) => assert_eq!(actual, "number"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_null_is_not_absence() {
        let map = metadata();
        match fetch_str(&map, "signatureVersion") {
            Err(ModelError::InvalidArgument { actual, .. }) => assert_eq!(actual, "null"),
            other => panic!("expected InvalidArgument, got {:?}", other),
        }
        assert!(fetch_optional_str(&map, "signatureVersion").is_err());
    }

    #[test]
    fn test_fetch_optional_str_keeps_empty_string() {
        let map = metadata();
        assert_eq!(
            fetch_optional_str(&map, "serviceAbbreviation").unwrap(),
            Some(String::new())
        );
        assert_eq!(fetch_optional_str(&map, "serviceId").unwrap(), None);
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("name", Some("S3")).unwrap(), "S3");
        assert!(validate_required_field::<String>("version", None).is_err());
    }
}
