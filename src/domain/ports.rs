use crate::domain::model::{CheckOutcome, MaintenanceItem, ReleaseMetadata};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote store holding the maintenance items recorded for a user.
#[async_trait]
pub trait ItemSource: Send + Sync {
    async fn fetch_items(&self) -> Result<Vec<MaintenanceItem>>;
}

/// Remote storage publishing release metadata and build artifacts.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn fetch_metadata(&self) -> Result<ReleaseMetadata>;
    async fn fetch_artifact(&self, name: &str) -> Result<Vec<u8>>;
}

/// Delivery channel for user-facing notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, title: &str, body: &str) -> Result<()>;
}

/// File storage rooted at a directory.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Settings the check pipelines are assembled from.
pub trait ConfigProvider: Send + Sync {
    fn items_endpoint(&self) -> &str;
    fn release_endpoint(&self) -> &str;
    fn download_dir(&self) -> &str;
    fn current_version_code(&self) -> u64;
    fn timeout_seconds(&self) -> u64;
    fn monitoring_enabled(&self) -> bool;
}

/// Template selector for phrases carrying one quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseKey {
    /// "every N months" interval phrase, including the N == 0 case.
    IntervalMonths,
    /// "every N years" interval phrase.
    IntervalYears,
    /// Elapsed years segment.
    Years,
    /// Elapsed months segment.
    Months,
    /// Elapsed days segment.
    Days,
}

/// Template selector for phrases carrying two quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompoundPhraseKey {
    /// "every N years and M months" interval phrase.
    IntervalYearsAndMonths,
}

/// Locale-correct phrase text for integer quantities. Implementations own
/// all pluralisation and language concerns; callers pass exact quantities.
pub trait PhraseProvider: Send + Sync {
    /// Phrase for a single quantity, with singular/plural selection.
    fn quantity(&self, key: PhraseKey, n: u64) -> String;
    /// Compound phrase embedding two quantities.
    fn compound(&self, key: CompoundPhraseKey, first: u64, second: u64) -> String;
}

/// One maintenance check the engine can run.
#[async_trait]
pub trait Check: Send + Sync {
    fn name(&self) -> &'static str;
    async fn run(&self) -> Result<CheckOutcome>;
}
