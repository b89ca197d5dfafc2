use crate::domain::model::ModelInput;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::json_type_name;
use serde_json::Value;
use std::path::Path;

/// Resolves [`ModelInput`]s into JSON values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelLoader;

impl ModelLoader {
    /// Absent → `None`, an in-memory object → itself, a path → the decoded
    /// file. Anything else is an `InvalidArgument` naming the value's type.
    pub fn resolve(input: ModelInput) -> Result<Option<Value>> {
        match input {
            ModelInput::Absent | ModelInput::Inline(Value::Null) => Ok(None),
            ModelInput::Inline(value @ Value::Object(_)) => Ok(Some(value)),
            ModelInput::Inline(Value::String(path)) => Self::load_file(Path::new(&path)).map(Some),
            ModelInput::Inline(other) => Err(ModelError::invalid(
                "String, Hash, or nil",
                json_type_name(&other),
            )),
            ModelInput::Path(path) => Self::load_file(&path).map(Some),
        }
    }

    /// 以二進位方式讀取整個檔案並解析為 JSON
    pub fn load_file(path: &Path) -> Result<Value> {
        tracing::debug!("Loading JSON model from {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| ModelError::Format {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_absent_resolves_to_none() {
        assert!(ModelLoader::resolve(ModelInput::Absent).unwrap().is_none());
        assert!(ModelLoader::resolve(ModelInput::Inline(Value::Null))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_inline_object_returned_unchanged() {
        let value = json!({"pagination": {"ListBuckets": {"result_key": "Buckets"}}});
        let resolved = ModelLoader::resolve(ModelInput::Inline(value.clone())).unwrap();
        assert_eq!(resolved, Some(value));
    }

    #[test]
    fn test_path_is_read_and_decoded() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(br#"{"version": 2, "waiters": {"BucketExists": {"delay": 5}}}"#)
            .unwrap();

        let resolved = ModelLoader::resolve(ModelInput::Path(temp_file.path().to_path_buf()))
            .unwrap()
            .unwrap();
        assert_eq!(resolved["waiters"]["BucketExists"]["delay"], 5);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");

        match ModelLoader::resolve(ModelInput::Path(path.clone())) {
            Err(ModelError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_is_format_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"{\"metadata\": ").unwrap();

        let err = ModelLoader::resolve(ModelInput::Path(temp_file.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(err, ModelError::Format { .. }));
        assert!(err.location().is_some());
    }

    #[test]
    fn test_unsupported_inline_value_names_type() {
        for (value, type_name) in [
            (json!(42), "number"),
            (json!(true), "boolean"),
            (json!(["a", "b"]), "array"),
        ] {
            match ModelLoader::resolve(ModelInput::Inline(value)) {
                Err(ModelError::InvalidArgument { actual, .. }) => assert_eq!(actual, type_name),
                other => panic!("expected InvalidArgument, got {:?}", other),
            }
        }
    }
}
