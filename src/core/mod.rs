pub mod docs;
pub mod loader;
pub mod service;

pub use crate::domain::model::{ModelInput, ServiceModel, ServiceOptions, ServiceSummary};
pub use crate::domain::ports::DocsMerger;
pub use crate::utils::error::Result;
