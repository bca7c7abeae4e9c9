pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{
    validate_path, validate_positive_number, validate_url, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "upkeep")]
#[command(about = "Checks maintenance items and published updates, raising reminders")]
pub struct CliConfig {
    /// Load settings from a TOML file instead of the flags below
    #[arg(long)]
    pub config: Option<std::path::PathBuf>,

    /// Endpoint returning the user's maintenance items as JSON
    #[arg(long, default_value = "")]
    pub items_endpoint: String,

    /// Base URL publishing release metadata and artifacts
    #[arg(long, default_value = "")]
    pub release_endpoint: String,

    /// Directory downloaded release artifacts are written to
    #[arg(long, default_value = "./downloads")]
    pub download_dir: String,

    /// Version code of the running build
    #[arg(long, default_value = "0")]
    pub current_version_code: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-check resource usage")]
    pub monitor: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn items_endpoint(&self) -> &str {
        &self.items_endpoint
    }

    fn release_endpoint(&self) -> &str {
        &self.release_endpoint
    }

    fn download_dir(&self) -> &str {
        &self.download_dir
    }

    fn current_version_code(&self) -> u64 {
        self.current_version_code
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("items-endpoint", &self.items_endpoint)?;
        validate_url("release-endpoint", &self.release_endpoint)?;
        validate_path("download-dir", &self.download_dir)?;
        validate_positive_number("timeout-seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    fn valid_cli() -> CliConfig {
        CliConfig {
            config: None,
            items_endpoint: "https://store.example.com/items/u1.json".to_string(),
            release_endpoint: "https://releases.example.com".to_string(),
            download_dir: "./downloads".to_string(),
            current_version_code: 12,
            timeout_seconds: 30,
            verbose: false,
            monitor: false,
            log_json: false,
        }
    }

    #[test]
    fn test_valid_cli_config_passes() {
        assert!(valid_cli().validate().is_ok());
    }

    #[test]
    fn test_missing_endpoint_fails_validation() {
        let mut cli = valid_cli();
        cli.items_endpoint.clear();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_fails_validation() {
        let mut cli = valid_cli();
        cli.timeout_seconds = 0;
        assert!(cli.validate().is_err());
    }
}
