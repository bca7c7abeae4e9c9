use clap::Parser;
use std::time::Duration;
use upkeep::domain::ports::ConfigProvider;
use upkeep::utils::error::{ErrorSeverity, UpkeepError};
use upkeep::utils::{logger, validation::Validate};
use upkeep::{
    CheckStatus, CliConfig, Engine, EnglishPhrases, HttpItemSource, HttpReleaseSource,
    LocalStorage, LogNotifier, ReminderPipeline, TomlConfig, UpdatePipeline,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_service_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting upkeep");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // A TOML file, when given, replaces the endpoint flags entirely.
    let config: Box<dyn ConfigProvider> = match cli.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(file_config) => {
                if let Err(e) = file_config.validate() {
                    exit_for_config_error(e);
                }
                Box::new(file_config)
            }
            Err(e) => exit_for_config_error(e),
        },
        None => {
            if let Err(e) = cli.validate() {
                exit_for_config_error(e);
            }
            Box::new(cli.clone())
        }
    };

    let monitor_enabled = cli.monitor || config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let engine = build_engine(config.as_ref(), monitor_enabled);
    let outcomes = engine.run().await;

    println!("✅ upkeep run completed");
    let mut failed = false;
    for outcome in &outcomes {
        println!("   {}: {}", outcome.check, outcome.status);
        if matches!(outcome.status, CheckStatus::Failed(_)) {
            failed = true;
        }
    }

    if failed {
        // Some check could not complete; let cron/supervisors see it.
        std::process::exit(2);
    }

    Ok(())
}

fn build_engine(config: &dyn ConfigProvider, monitor_enabled: bool) -> Engine {
    let timeout = Duration::from_secs(config.timeout_seconds());

    let reminder = ReminderPipeline::new(
        HttpItemSource::new(config.items_endpoint(), timeout),
        LogNotifier,
        EnglishPhrases,
    );
    let update = UpdatePipeline::new(
        HttpReleaseSource::new(config.release_endpoint(), timeout),
        LocalStorage::new(config.download_dir()),
        LogNotifier,
        config.current_version_code(),
    );

    Engine::new_with_monitoring(vec![Box::new(reminder), Box::new(update)], monitor_enabled)
}

fn exit_for_config_error(e: UpkeepError) -> ! {
    tracing::error!(
        "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
        ErrorSeverity::Low | ErrorSeverity::High => 1,
    };
    std::process::exit(exit_code);
}
