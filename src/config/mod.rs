#[cfg(feature = "cli")]
pub mod cli;
pub mod manifest;
pub mod options;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use manifest::ServiceConfig;
