use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// A sub-model input: nothing, a value already in memory, or a path to a
/// JSON file.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModelInput {
    #[default]
    Absent,
    Inline(Value),
    Path(PathBuf),
}

impl ModelInput {
    pub fn is_absent(&self) -> bool {
        matches!(self, ModelInput::Absent)
    }
}

/// `null` is absent and a string is a path. Any other value is kept inline
/// and checked when it is resolved.
impl From<Value> for ModelInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ModelInput::Absent,
            Value::String(path) => ModelInput::Path(PathBuf::from(path)),
            other => ModelInput::Inline(other),
        }
    }
}

impl From<Map<String, Value>> for ModelInput {
    fn from(map: Map<String, Value>) -> Self {
        ModelInput::Inline(Value::Object(map))
    }
}

impl From<PathBuf> for ModelInput {
    fn from(path: PathBuf) -> Self {
        ModelInput::Path(path)
    }
}

impl From<&std::path::Path> for ModelInput {
    fn from(path: &std::path::Path) -> Self {
        ModelInput::Path(path.to_path_buf())
    }
}

impl From<&str> for ModelInput {
    fn from(path: &str) -> Self {
        ModelInput::Path(PathBuf::from(path))
    }
}

impl<T: Into<ModelInput>> From<Option<T>> for ModelInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Caller-supplied options for building a [`ServiceModel`].
///
/// Every field is optional here so that a missing `version`, `name` or `api`
/// is reported by construction instead of by the type system.
#[derive(Debug, Clone, Default)]
pub struct ServiceOptions {
    pub version: Option<String>,
    pub name: Option<String>,
    pub api: ModelInput,
    pub docs: ModelInput,
    pub paginators: ModelInput,
    pub waiters: ModelInput,
    pub resources: ModelInput,
    pub examples: ModelInput,
    pub gem_dependencies: Option<BTreeMap<String, String>>,
    pub add_plugins: Option<BTreeMap<String, String>>,
    pub remove_plugins: Option<Vec<String>>,
}

impl ServiceOptions {
    pub fn new(
        version: impl Into<String>,
        name: impl Into<String>,
        api: impl Into<ModelInput>,
    ) -> Self {
        Self {
            version: Some(version.into()),
            name: Some(name.into()),
            api: api.into(),
            ..Self::default()
        }
    }

    pub fn docs(mut self, docs: impl Into<ModelInput>) -> Self {
        self.docs = docs.into();
        self
    }

    pub fn paginators(mut self, paginators: impl Into<ModelInput>) -> Self {
        self.paginators = paginators.into();
        self
    }

    pub fn waiters(mut self, waiters: impl Into<ModelInput>) -> Self {
        self.waiters = waiters.into();
        self
    }

    pub fn resources(mut self, resources: impl Into<ModelInput>) -> Self {
        self.resources = resources.into();
        self
    }

    pub fn examples(mut self, examples: impl Into<ModelInput>) -> Self {
        self.examples = examples.into();
        self
    }

    pub fn gem_dependency(mut self, gem: impl Into<String>, version: impl Into<String>) -> Self {
        self.gem_dependencies
            .get_or_insert_with(BTreeMap::new)
            .insert(gem.into(), version.into());
        self
    }

    pub fn add_plugin(mut self, plugin: impl Into<String>, path: impl Into<String>) -> Self {
        self.add_plugins
            .get_or_insert_with(BTreeMap::new)
            .insert(plugin.into(), path.into());
        self
    }

    pub fn remove_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.remove_plugins
            .get_or_insert_with(Vec::new)
            .push(plugin.into());
        self
    }

    /// The six sub-model inputs, for rewriting paths in place.
    pub fn model_inputs_mut(&mut self) -> [&mut ModelInput; 6] {
        [
            &mut self.api,
            &mut self.docs,
            &mut self.paginators,
            &mut self.waiters,
            &mut self.resources,
            &mut self.examples,
        ]
    }
}

/// The normalized, read-only description of one service.
///
/// Built by [`ServiceModel::new`]; there are no setters.
pub struct ServiceModel {
    pub(crate) version: String,
    pub(crate) name: String,
    pub(crate) api: Value,
    pub(crate) paginators: Option<Value>,
    pub(crate) waiters: Option<Value>,
    pub(crate) resources: Option<Value>,
    pub(crate) examples: Option<Value>,
    pub(crate) gem_dependencies: BTreeMap<String, String>,
    pub(crate) add_plugins: BTreeMap<String, String>,
    pub(crate) remove_plugins: Vec<String>,
    pub(crate) identifier: String,
    pub(crate) module_name: String,
    pub(crate) package_name: String,
    pub(crate) protocol: String,
    pub(crate) api_version: String,
    pub(crate) signature_version: String,
    pub(crate) full_name: String,
    pub(crate) short_name: String,
}

impl ServiceModel {
    /// Gem version, e.g. "1.0.0".
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The service name, e.g. "S3".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The service API model, with documentation merged in.
    pub fn api(&self) -> &Value {
        &self.api
    }

    pub fn paginators(&self) -> Option<&Value> {
        self.paginators.as_ref()
    }

    pub fn waiters(&self) -> Option<&Value> {
        self.waiters.as_ref()
    }

    pub fn resources(&self) -> Option<&Value> {
        self.resources.as_ref()
    }

    /// Shared examples model.
    pub fn examples(&self) -> Option<&Value> {
        self.examples.as_ref()
    }

    /// Gem name to version constraint. Always includes the core runtime gem.
    pub fn gem_dependencies(&self) -> &BTreeMap<String, String> {
        &self.gem_dependencies
    }

    pub fn add_plugins(&self) -> &BTreeMap<String, String> {
        &self.add_plugins
    }

    /// Default plugins to remove.
    pub fn remove_plugins(&self) -> &[String] {
        &self.remove_plugins
    }

    /// The service identifier, e.g. "s3".
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The service module, e.g. "Aws::S3".
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The gem name, e.g. "aws-sdk-s3".
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// e.g. "json", "query", "rest-xml"
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// e.g. "2006-03-01"
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// e.g. "v4"
    pub fn signature_version(&self) -> &str {
        &self.signature_version
    }

    /// e.g. "Amazon Simple Storage Service"
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// e.g. "Amazon S3". Falls back to [`full_name`](Self::full_name).
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    pub fn into_api(self) -> Value {
        self.api
    }

    pub fn summary(&self) -> ServiceSummary {
        let models = [
            ("paginators", self.paginators.is_some()),
            ("waiters", self.waiters.is_some()),
            ("resources", self.resources.is_some()),
            ("examples", self.examples.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, present)| present.then_some(name))
        .collect();

        ServiceSummary {
            name: self.name.clone(),
            version: self.version.clone(),
            identifier: self.identifier.clone(),
            module_name: self.module_name.clone(),
            package_name: self.package_name.clone(),
            protocol: self.protocol.clone(),
            api_version: self.api_version.clone(),
            signature_version: self.signature_version.clone(),
            full_name: self.full_name.clone(),
            short_name: self.short_name.clone(),
            gem_dependencies: self.gem_dependencies.clone(),
            add_plugins: self.add_plugins.clone(),
            remove_plugins: self.remove_plugins.clone(),
            models,
        }
    }
}

// API models run to megabytes; keep them out of logs.
impl fmt::Debug for ServiceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceModel")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("package_name", &self.package_name)
            .finish_non_exhaustive()
    }
}

/// Derived identifiers and packaging metadata, without the models.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub name: String,
    pub version: String,
    pub identifier: String,
    pub module_name: String,
    pub package_name: String,
    pub protocol: String,
    pub api_version: String,
    pub signature_version: String,
    pub full_name: String,
    pub short_name: String,
    pub gem_dependencies: BTreeMap<String, String>,
    pub add_plugins: BTreeMap<String, String>,
    pub remove_plugins: Vec<String>,
    pub models: Vec<&'static str>,
}
