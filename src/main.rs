use anyhow::Context;
use clap::Parser;
use sdk_service_model::utils::error::ErrorSeverity;
use sdk_service_model::utils::logger;
use sdk_service_model::{CliConfig, ServiceModel, ServiceSummary};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting sdk-service-model CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let model = match config.to_options().and_then(ServiceModel::new) {
        Ok(model) => model,
        Err(e) => {
            tracing::error!(
                "❌ Service model failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    };

    let summary = model.summary();
    if config.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to serialize summary")?;
        println!("{}", json);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &ServiceSummary) {
    println!("✅ {} ({})", summary.full_name, summary.short_name);
    println!("   module:     {}", summary.module_name);
    println!("   package:    {} {}", summary.package_name, summary.version);
    println!("   protocol:   {}", summary.protocol);
    println!("   apiVersion: {}", summary.api_version);
    println!("   signature:  {}", summary.signature_version);
    if !summary.models.is_empty() {
        println!("   models:     {}", summary.models.join(", "));
    }
    for (gem, constraint) in &summary.gem_dependencies {
        println!("   depends on: {} '{}'", gem, constraint);
    }
    for (plugin, path) in &summary.add_plugins {
        println!("   plugin +:   {} ({})", plugin, path);
    }
    for plugin in &summary.remove_plugins {
        println!("   plugin -:   {}", plugin);
    }
}
