use crate::domain::model::{ModelInput, ServiceOptions};
use crate::utils::error::{ModelError, Result};
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A service manifest: the service options written as TOML.
///
/// ```toml
/// name = "S3"
/// version = "1.0.0"
/// api = "apis/s3/2006-03-01/api-2.json"
/// docs = "apis/s3/2006-03-01/docs-2.json"
///
/// [gemDependencies]
/// aws-sigv4 = "~> 1.1"
/// ```
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    raw: Value,
    base_dir: Option<PathBuf>,
}

impl ServiceConfig {
    /// 從 TOML 檔案載入，相對路徑以檔案所在目錄為基準
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading service manifest from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// 從 TOML 字串解析，路徑保持原樣
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        let raw = toml::from_str(&processed_content).map_err(|e| ModelError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;

        Ok(Self {
            raw,
            base_dir: None,
        })
    }

    /// 替換環境變數 (例如 ${SDK_VERSION})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ModelError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn into_options(self) -> Result<ServiceOptions> {
        let mut options = ServiceOptions::from_value(self.raw)?;

        if let Some(base_dir) = &self.base_dir {
            for input in options.model_inputs_mut() {
                if let ModelInput::Path(path) = input {
                    if path.is_relative() {
                        *path = base_dir.join(&*path);
                    }
                }
            }
        }

        Ok(options)
    }
}
