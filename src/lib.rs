pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use adapters::http::{HttpItemSource, HttpReleaseSource};
pub use adapters::notify::LogNotifier;
pub use adapters::phrases::EnglishPhrases;
pub use adapters::storage::LocalStorage;
pub use crate::core::{engine::Engine, reminder::ReminderPipeline, update::UpdatePipeline};
pub use domain::model::{CheckOutcome, CheckStatus, MaintenanceItem, ReleaseMetadata};
pub use domain::timespan::{format_duration, format_periodicity, Periodicity};
pub use utils::error::{Result, UpkeepError};
