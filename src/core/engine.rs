use crate::domain::model::{CheckOutcome, CheckStatus};
use crate::domain::ports::Check;
use crate::utils::monitor::SystemMonitor;

/// Runs the configured maintenance checks in order.
pub struct Engine {
    checks: Vec<Box<dyn Check>>,
    monitor: SystemMonitor,
}

impl Engine {
    pub fn new(checks: Vec<Box<dyn Check>>) -> Self {
        Self::new_with_monitoring(checks, false)
    }

    pub fn new_with_monitoring(checks: Vec<Box<dyn Check>>, monitor_enabled: bool) -> Self {
        Self {
            checks,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs every check. A failing check is recorded as a `Failed` outcome
    /// and the run carries on with the remaining checks.
    pub async fn run(&self) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            tracing::info!("Running {} check...", check.name());

            let outcome = match check.run().await {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::warn!("{} check failed: {}", check.name(), e);
                    CheckOutcome {
                        check: check.name().to_string(),
                        status: CheckStatus::Failed(e.to_string()),
                    }
                }
            };

            match &outcome.status {
                CheckStatus::Triggered(detail) => {
                    tracing::info!("{} check: {}", check.name(), detail)
                }
                CheckStatus::Clear => tracing::info!("{} check: nothing to do", check.name()),
                CheckStatus::Failed(_) => {}
            }

            self.monitor.log_stats(check.name());
            outcomes.push(outcome);
        }

        self.monitor.log_final_stats();
        outcomes
    }
}
