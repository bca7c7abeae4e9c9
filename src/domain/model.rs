use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One item under periodic maintenance, as stored in the remote item store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceItem {
    /// Store-assigned key; absent for items that were never synced.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    /// Maintenance interval in months. Stored values may be fractional.
    pub periodicity: f32,
    /// Date the next maintenance is due.
    pub date: NaiveDate,
}

/// Release descriptor published next to the build artifacts
/// (the `output-metadata.json` document).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMetadata {
    pub elements: Vec<ReleaseElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseElement {
    pub version_code: u64,
    pub version_name: String,
    #[serde(default)]
    pub output_file: Option<String>,
}

/// Result of one check run by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub check: String,
    pub status: CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// The check fired: a notification was raised or an artifact fetched.
    Triggered(String),
    /// Nothing to do.
    Clear,
    /// The check could not complete; the run carries on without it.
    Failed(String),
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckStatus::Triggered(detail) => write!(f, "triggered ({})", detail),
            CheckStatus::Clear => write!(f, "clear"),
            CheckStatus::Failed(reason) => write!(f, "failed ({})", reason),
        }
    }
}
