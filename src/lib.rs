pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ServiceConfig;

pub use crate::core::{
    docs::{ApplyDocs, NoDocs},
    loader::ModelLoader,
    service::{CORE_RUNTIME_CONSTRAINT, CORE_RUNTIME_GEM},
};
pub use domain::model::{ModelInput, ServiceModel, ServiceOptions, ServiceSummary};
pub use domain::ports::DocsMerger;
pub use utils::error::{ModelError, Result};
