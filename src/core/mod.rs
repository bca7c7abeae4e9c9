pub mod engine;
pub mod reminder;
pub mod update;

pub use crate::domain::model::{CheckOutcome, CheckStatus, MaintenanceItem, ReleaseMetadata};
pub use crate::domain::ports::{
    Check, ConfigProvider, ItemSource, NotificationSink, PhraseProvider, ReleaseSource, Storage,
};
pub use crate::utils::error::Result;
