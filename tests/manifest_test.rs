use anyhow::Result;
use sdk_service_model::{ModelError, ServiceConfig, ServiceModel, ServiceOptions};
use serde_json::json;
use tempfile::TempDir;

/// 以 TOML manifest 指向相對路徑的模型檔案
#[test]
fn test_model_from_manifest_with_relative_paths() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let model_dir = temp_dir.path().join("s3/2006-03-01");
    std::fs::create_dir_all(&model_dir)?;

    std::fs::write(
        model_dir.join("api-2.json"),
        serde_json::to_vec(&json!({
            "metadata": {
                "apiVersion": "2006-03-01",
                "protocol": "rest-xml",
                "serviceFullName": "Amazon Simple Storage Service",
                "serviceAbbreviation": "Amazon S3",
                "signatureVersion": "s3"
            },
            "operations": {"ListBuckets": {"name": "ListBuckets"}}
        }))?,
    )?;
    std::fs::write(
        model_dir.join("docs-2.json"),
        r#"{"operations": {"ListBuckets": "<p>Returns a list of all buckets.</p>"}}"#,
    )?;
    std::fs::write(
        model_dir.join("paginators-1.json"),
        r#"{"pagination": {"ListObjects": {"result_key": "Contents"}}}"#,
    )?;

    let manifest_path = temp_dir.path().join("s3.toml");
    std::fs::write(
        &manifest_path,
        r#"
name = "S3"
version = "1.88.0"
api = "s3/2006-03-01/api-2.json"
docs = "s3/2006-03-01/docs-2.json"
paginators = "s3/2006-03-01/paginators-1.json"
remove_plugins = ["Aws::Plugins::RegionalEndpoint"]

[gem_dependencies]
aws-sigv4 = "~> 1.1"
"#,
    )?;

    let options = ServiceConfig::from_file(&manifest_path)?.into_options()?;
    let model = ServiceModel::new(options)?;

    assert_eq!(model.package_name(), "aws-sdk-s3");
    assert_eq!(model.version(), "1.88.0");
    assert_eq!(model.short_name(), "Amazon S3");
    assert_eq!(
        model.api()["operations"]["ListBuckets"]["documentation"],
        "<p>Returns a list of all buckets.</p>"
    );
    assert_eq!(
        model.paginators().unwrap()["pagination"]["ListObjects"]["result_key"],
        "Contents"
    );
    assert_eq!(model.gem_dependencies().len(), 2);
    assert_eq!(model.remove_plugins().len(), 1);

    let summary = serde_json::to_value(model.summary())?;
    assert_eq!(summary["moduleName"], "Aws::S3");
    assert_eq!(summary["gemDependencies"]["aws-sdk-core"], "~> 3.0");
    assert_eq!(summary["models"], json!(["paginators"]));

    Ok(())
}

#[test]
fn test_loose_options_with_unsupported_api_shape() -> Result<()> {
    let options = ServiceOptions::from_value(json!({
        "name": "S3",
        "version": "1.0.0",
        "api": 12
    }))?;

    match ServiceModel::new(options) {
        Err(ModelError::InvalidArgument { actual, .. }) => assert_eq!(actual, "number"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_manifest_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = ServiceConfig::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
}
