use crate::config::manifest::ServiceConfig;
use crate::domain::model::{ModelInput, ServiceOptions};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sdk-service-model")]
#[command(about = "Build and inspect a normalized service model")]
pub struct CliConfig {
    /// TOML manifest with the service options
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Service name, e.g. "S3"
    #[arg(long)]
    pub name: Option<String>,

    /// Gem version, e.g. "1.0.0"
    #[arg(long = "gem-version")]
    pub version: Option<String>,

    #[arg(long)]
    pub api: Option<PathBuf>,

    #[arg(long)]
    pub docs: Option<PathBuf>,

    #[arg(long)]
    pub paginators: Option<PathBuf>,

    #[arg(long)]
    pub waiters: Option<PathBuf>,

    #[arg(long)]
    pub resources: Option<PathBuf>,

    #[arg(long)]
    pub examples: Option<PathBuf>,

    /// GEM=CONSTRAINT, repeatable
    #[arg(long = "gem-dependency", value_parser = parse_key_value)]
    pub gem_dependencies: Vec<(String, String)>,

    /// PLUGIN=PATH, repeatable
    #[arg(long = "add-plugin", value_parser = parse_key_value)]
    pub add_plugins: Vec<(String, String)>,

    #[arg(long = "remove-plugin")]
    pub remove_plugins: Vec<String>,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Manifest values first, then command-line flags on top.
    pub fn to_options(&self) -> Result<ServiceOptions> {
        let mut options = match &self.manifest {
            Some(path) => ServiceConfig::from_file(path)?.into_options()?,
            None => ServiceOptions::default(),
        };

        if let Some(name) = &self.name {
            options.name = Some(name.clone());
        }
        if let Some(version) = &self.version {
            options.version = Some(version.clone());
        }

        let overrides = [
            (&mut options.api, &self.api),
            (&mut options.docs, &self.docs),
            (&mut options.paginators, &self.paginators),
            (&mut options.waiters, &self.waiters),
            (&mut options.resources, &self.resources),
            (&mut options.examples, &self.examples),
        ];
        for (input, path) in overrides {
            if let Some(path) = path {
                *input = ModelInput::Path(path.clone());
            }
        }

        for (gem, constraint) in &self.gem_dependencies {
            options = options.gem_dependency(gem, constraint);
        }
        for (plugin, path) in &self.add_plugins {
            options = options.add_plugin(plugin, path);
        }
        for plugin in &self.remove_plugins {
            options = options.remove_plugin(plugin);
        }

        Ok(options)
    }
}

fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got `{}`", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_to_options() {
        let config = CliConfig::parse_from([
            "sdk-service-model",
            "--name",
            "S3",
            "--gem-version",
            "1.0.0",
            "--api",
            "api-2.json",
            "--gem-dependency",
            "aws-sdk-core=~> 3.100",
            "--remove-plugin",
            "Aws::Plugins::RegionalEndpoint",
        ]);

        let options = config.to_options().unwrap();
        assert_eq!(options.name.as_deref(), Some("S3"));
        assert_eq!(options.version.as_deref(), Some("1.0.0"));
        assert_eq!(options.api, ModelInput::from("api-2.json"));
        assert!(options.docs.is_absent());
        assert_eq!(options.gem_dependencies.unwrap()["aws-sdk-core"], "~> 3.100");
        assert_eq!(options.remove_plugins.unwrap().len(), 1);
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("aws-sigv4=~> 1.1").unwrap(),
            ("aws-sigv4".to_string(), "~> 1.1".to_string())
        );
        assert!(parse_key_value("aws-sigv4").is_err());
        assert!(parse_key_value("=1.0").is_err());
    }
}
