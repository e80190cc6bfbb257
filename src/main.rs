use clap::Parser;
use small_expo::utils::{logger, validation::Validate};
use small_expo::{CliConfig, ExponentationSuite, FixtureEngine, Result, SuiteReport, TomlConfig};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-expo fixture runner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(report) => {
            tracing::info!(
                "Fixture suite '{}' completed successfully",
                report.suite
            );
        }
        Err(e) => {
            tracing::error!(
                "Fixture run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            eprintln!("Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                small_expo::utils::error::ErrorSeverity::Low => 0,
                small_expo::utils::error::ErrorSeverity::Medium => 2,
                small_expo::utils::error::ErrorSeverity::High => 1,
                small_expo::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn run(config: &CliConfig) -> Result<SuiteReport> {
    match &config.config {
        Some(path) => {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            tracing::info!("Loaded suite '{}' from {}", file_config.suite.name, path);

            let emit = config.emit_report || file_config.emit_report();
            let engine = FixtureEngine::new(ExponentationSuite::new(file_config));
            let report = engine.run()?;
            if emit {
                emit_report(&report)?;
            }
            Ok(report)
        }
        None => {
            let engine = FixtureEngine::new(ExponentationSuite::new(config.clone()));
            let report = engine.run()?;
            if config.emit_report {
                emit_report(&report)?;
            }
            Ok(report)
        }
    }
}

fn emit_report(report: &SuiteReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
