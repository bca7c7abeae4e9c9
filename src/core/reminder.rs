use crate::domain::model::{CheckOutcome, CheckStatus, MaintenanceItem};
use crate::domain::ports::{Check, ItemSource, NotificationSink, PhraseProvider};
use crate::domain::timespan::{format_duration, format_periodicity, Periodicity};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub const REMINDER_CHECK: &str = "reminder";

const NOTIFICATION_TITLE: &str = "Items need maintenance";

/// Fetches the user's maintenance items and raises one notification when
/// any of them is past its due date.
pub struct ReminderPipeline<S: ItemSource, N: NotificationSink, P: PhraseProvider> {
    items: S,
    notifier: N,
    phrases: P,
}

impl<S: ItemSource, N: NotificationSink, P: PhraseProvider> ReminderPipeline<S, N, P> {
    pub fn new(items: S, notifier: N, phrases: P) -> Self {
        Self {
            items,
            notifier,
            phrases,
        }
    }

    /// Items strictly past their due date. An item due today is not overdue.
    pub fn find_overdue(
        &self,
        items: Vec<MaintenanceItem>,
        today: NaiveDate,
    ) -> Vec<MaintenanceItem> {
        items.into_iter().filter(|item| item.date < today).collect()
    }

    /// One line per overdue item, phrased for the notification body.
    pub fn compose_summary(&self, overdue: &[MaintenanceItem], today: NaiveDate) -> String {
        overdue
            .iter()
            .map(|item| {
                let overdue_days = (today - item.date).num_days().max(0) as u64;
                format!(
                    "{} ({}) is overdue by {}",
                    item.name,
                    format_periodicity(Periodicity::from_months(item.periodicity), &self.phrases),
                    format_duration(overdue_days, &self.phrases),
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Runs the full check against an explicit date.
    pub async fn run_for_date(&self, today: NaiveDate) -> Result<CheckOutcome> {
        let items = self.items.fetch_items().await?;
        tracing::debug!("Fetched {} maintenance items", items.len());

        let overdue = self.find_overdue(items, today);
        if overdue.is_empty() {
            return Ok(CheckOutcome {
                check: REMINDER_CHECK.to_string(),
                status: CheckStatus::Clear,
            });
        }

        let body = self.compose_summary(&overdue, today);
        self.notifier.notify(NOTIFICATION_TITLE, &body).await?;

        let detail = format!(
            "{} item{} overdue",
            overdue.len(),
            if overdue.len() == 1 { "" } else { "s" }
        );
        Ok(CheckOutcome {
            check: REMINDER_CHECK.to_string(),
            status: CheckStatus::Triggered(detail),
        })
    }
}

#[async_trait]
impl<S: ItemSource, N: NotificationSink, P: PhraseProvider> Check for ReminderPipeline<S, N, P> {
    fn name(&self) -> &'static str {
        REMINDER_CHECK
    }

    async fn run(&self) -> Result<CheckOutcome> {
        self.run_for_date(chrono::Local::now().date_naive()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::phrases::EnglishPhrases;
    use crate::utils::error::UpkeepError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockItemSource {
        items: Vec<MaintenanceItem>,
    }

    #[async_trait]
    impl ItemSource for MockItemSource {
        async fn fetch_items(&self) -> Result<Vec<MaintenanceItem>> {
            Ok(self.items.clone())
        }
    }

    struct FailingItemSource;

    #[async_trait]
    impl ItemSource for FailingItemSource {
        async fn fetch_items(&self) -> Result<Vec<MaintenanceItem>> {
            Err(UpkeepError::ProcessingError {
                message: "store unavailable".to_string(),
            })
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        notifications: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn notify(&self, title: &str, body: &str) -> Result<()> {
            self.notifications
                .lock()
                .await
                .push((title.to_string(), body.to_string()));
            Ok(())
        }
    }

    fn item(name: &str, periodicity: f32, date: &str) -> MaintenanceItem {
        MaintenanceItem {
            id: None,
            name: name.to_string(),
            periodicity,
            date: date.parse().unwrap(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_find_overdue_is_strictly_before_today() {
        let pipeline = ReminderPipeline::new(
            MockItemSource { items: vec![] },
            RecordingSink::default(),
            EnglishPhrases,
        );

        let items = vec![
            item("past", 6.0, "2024-02-29"),
            item("due today", 6.0, "2024-03-01"),
            item("future", 6.0, "2024-03-02"),
        ];

        let overdue = pipeline.find_overdue(items, today());
        assert_eq!(overdue.len(), 1);
        assert_eq!(overdue[0].name, "past");
    }

    #[test]
    fn test_summary_phrases_interval_and_elapsed_span() {
        let pipeline = ReminderPipeline::new(
            MockItemSource { items: vec![] },
            RecordingSink::default(),
            EnglishPhrases,
        );

        // 2024-03-01 minus 2023-11-27 = 95 days = 3 months 5 days.
        let overdue = vec![item("Boiler service", 12.0, "2023-11-27")];
        let summary = pipeline.compose_summary(&overdue, today());

        assert_eq!(
            summary,
            "Boiler service (every year) is overdue by 3 months 5 days"
        );
    }

    #[tokio::test]
    async fn test_one_notification_covers_all_overdue_items() {
        let sink = RecordingSink::default();
        let pipeline = ReminderPipeline::new(
            MockItemSource {
                items: vec![
                    item("Boiler service", 12.0, "2023-11-27"),
                    item("Gutter cleaning", 6.0, "2024-02-20"),
                    item("Roof inspection", 24.0, "2026-01-01"),
                ],
            },
            sink.clone(),
            EnglishPhrases,
        );

        let outcome = pipeline.run_for_date(today()).await.unwrap();

        assert_eq!(
            outcome.status,
            CheckStatus::Triggered("2 items overdue".to_string())
        );
        let notifications = sink.notifications.lock().await;
        assert_eq!(notifications.len(), 1);
        let (title, body) = &notifications[0];
        assert_eq!(title, "Items need maintenance");
        assert!(body.contains("Boiler service"));
        assert!(body.contains("Gutter cleaning"));
        assert!(!body.contains("Roof inspection"));
    }

    #[tokio::test]
    async fn test_no_notification_when_nothing_overdue() {
        let sink = RecordingSink::default();
        let pipeline = ReminderPipeline::new(
            MockItemSource {
                items: vec![item("Roof inspection", 24.0, "2026-01-01")],
            },
            sink.clone(),
            EnglishPhrases,
        );

        let outcome = pipeline.run_for_date(today()).await.unwrap();

        assert_eq!(outcome.status, CheckStatus::Clear);
        assert!(sink.notifications.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let pipeline =
            ReminderPipeline::new(FailingItemSource, RecordingSink::default(), EnglishPhrases);

        let err = pipeline.run_for_date(today()).await.unwrap_err();
        assert!(matches!(err, UpkeepError::ProcessingError { .. }));
    }
}
