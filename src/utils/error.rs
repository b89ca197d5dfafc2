use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("missing required field: {field}")]
    MissingField { field: String },

    #[error("expected {expected}, got `{actual}'")]
    InvalidArgument { expected: String, actual: String },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Io,
    Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ModelError {
    pub fn missing(field: impl Into<String>) -> Self {
        ModelError::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ModelError::InvalidArgument {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ModelError::MissingField { .. }
            | ModelError::InvalidArgument { .. }
            | ModelError::Config { .. } => ErrorCategory::Input,
            ModelError::Io { .. } => ErrorCategory::Io,
            ModelError::Format { .. } => ErrorCategory::Format,
        }
    }

    /// 所有錯誤都會中止建構，差別只在於是否為環境問題
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Format => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Line and column of a JSON parse failure, when known.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            ModelError::Format { source, .. } if source.line() > 0 => {
                Some((source.line(), source.column()))
            }
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ModelError::MissingField { field } => {
                format!("Add `{}` to the service options or API metadata", field)
            }
            ModelError::InvalidArgument { .. } => {
                "Pass sub-models as a JSON object, a path to a JSON file, or leave them unset"
                    .to_string()
            }
            ModelError::Io { path, .. } => {
                format!("Check that {} exists and is readable", path.display())
            }
            ModelError::Format { .. } => "Fix the JSON syntax at the reported location".to_string(),
            ModelError::Config { .. } => "Check the manifest is valid TOML".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.location() {
            Some((line, column)) => format!("{} (line {}, column {})", self, line, column),
            None => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
