use crate::core::docs::ApplyDocs;
use crate::core::loader::ModelLoader;
use crate::domain::model::{ServiceModel, ServiceOptions};
use crate::domain::ports::DocsMerger;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{fetch_optional_str, fetch_str, validate_required_field};
use serde_json::Value;

/// Runtime gem every generated service depends on.
pub const CORE_RUNTIME_GEM: &str = "aws-sdk-core";
/// Constraint used when the caller does not pin [`CORE_RUNTIME_GEM`].
pub const CORE_RUNTIME_CONSTRAINT: &str = "~> 3.0";

const MODULE_NAMESPACE: &str = "Aws";
const PACKAGE_PREFIX: &str = "aws-sdk";

/// e.g. "S3" → "s3"
pub fn identifier_for(name: &str) -> String {
    name.to_lowercase()
}

/// e.g. "S3" → "Aws::S3"
pub fn module_name_for(name: &str) -> String {
    format!("{}::{}", MODULE_NAMESPACE, name)
}

/// e.g. "S3" → "aws-sdk-s3"
pub fn package_name_for(name: &str) -> String {
    format!("{}-{}", PACKAGE_PREFIX, identifier_for(name))
}

impl ServiceModel {
    /// 建立服務模型，使用預設的 [`ApplyDocs`] 合併文件
    pub fn new(options: ServiceOptions) -> Result<Self> {
        Self::with_docs_merger(options, &ApplyDocs)
    }

    /// Builds the model, merging documentation with `merger`.
    ///
    /// Either every field is populated or an error is returned; the api
    /// model is moved into the result and docs are merged into it in place.
    pub fn with_docs_merger(options: ServiceOptions, merger: &dyn DocsMerger) -> Result<Self> {
        let ServiceOptions {
            version,
            name,
            api,
            docs,
            paginators,
            waiters,
            resources,
            examples,
            gem_dependencies,
            add_plugins,
            remove_plugins,
        } = options;

        let version = validate_required_field("version", version)?;
        let name = validate_required_field("name", name)?;

        let mut api = validate_required_field("api", ModelLoader::resolve(api)?)?;
        let docs = ModelLoader::resolve(docs)?;
        merger.apply(&mut api, docs.as_ref())?;

        let paginators = ModelLoader::resolve(paginators)?;
        let waiters = ModelLoader::resolve(waiters)?;
        let resources = ModelLoader::resolve(resources)?;
        let examples = ModelLoader::resolve(examples)?;

        let mut gem_dependencies = gem_dependencies.unwrap_or_default();
        gem_dependencies
            .entry(CORE_RUNTIME_GEM.to_string())
            .or_insert_with(|| {
                tracing::debug!(
                    "Defaulting {} dependency to '{}'",
                    CORE_RUNTIME_GEM,
                    CORE_RUNTIME_CONSTRAINT
                );
                CORE_RUNTIME_CONSTRAINT.to_string()
            });
        let add_plugins = add_plugins.unwrap_or_default();
        let remove_plugins = remove_plugins.unwrap_or_default();

        let identifier = identifier_for(&name);
        let module_name = module_name_for(&name);
        let package_name = package_name_for(&name);

        let metadata = api
            .get("metadata")
            .and_then(Value::as_object)
            .ok_or_else(|| ModelError::missing("metadata"))?;
        let protocol = fetch_str(metadata, "protocol")?;
        let api_version = fetch_str(metadata, "apiVersion")?;
        let signature_version = fetch_str(metadata, "signatureVersion")?;
        let full_name = fetch_str(metadata, "serviceFullName")?;
        let short_name =
            fetch_optional_str(metadata, "serviceAbbreviation")?.unwrap_or_else(|| full_name.clone());

        tracing::info!(
            "Service model ready: {} ({}, protocol {}, api {})",
            name,
            package_name,
            protocol,
            api_version
        );

        Ok(ServiceModel {
            version,
            name,
            api,
            paginators,
            waiters,
            resources,
            examples,
            gem_dependencies,
            add_plugins,
            remove_plugins,
            identifier,
            module_name,
            package_name,
            protocol,
            api_version,
            signature_version,
            full_name,
            short_name,
        })
    }
}
