use crate::core::error::BotError;
use crate::core::notifications::Messenger;
use crate::core::store::PollState;
use crate::providers::ReviewSource;
use crate::review::{check_response, parse_status, raw_status};
use std::sync::Arc;
use std::time::Duration;

pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// What a single cycle ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    Notified { message: String },
    EmptyList,
    NoNewStatus,
    Failed { message: String, reported: bool },
}

pub struct PollingLoop {
    source: Arc<dyn ReviewSource>,
    messenger: Arc<dyn Messenger>,
    chat_id: String,
    interval: Duration,
}

impl PollingLoop {
    pub fn new(
        source: Arc<dyn ReviewSource>,
        messenger: Arc<dyn Messenger>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            messenger,
            chat_id: chat_id.into(),
            interval: POLL_INTERVAL,
        }
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Runs until the process is killed. Sleeps after every cycle.
    pub async fn run(&self, state: &mut PollState) {
        tracing::info!(
            source = self.source.name(),
            interval = ?self.interval,
            cursor = state.cursor(),
            "Polling loop started"
        );

        loop {
            self.tick(state).await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One full cycle, with failures reported instead of returned.
    pub async fn tick(&self, state: &mut PollState) -> CycleOutcome {
        match self.run_cycle(state).await {
            Ok(outcome) => {
                match &outcome {
                    CycleOutcome::EmptyList => tracing::debug!("Homework list is empty"),
                    CycleOutcome::NoNewStatus => tracing::debug!("No new statuses in response"),
                    CycleOutcome::Notified { .. } => tracing::info!("Status message sent to Telegram"),
                    CycleOutcome::Failed { .. } => {}
                }
                outcome
            }
            Err(error) => self.report_failure(state, error).await,
        }
    }

    async fn run_cycle(&self, state: &mut PollState) -> Result<CycleOutcome, BotError> {
        let response = self.source.fetch_statuses(state.cursor()).await?;
        let validated = check_response(&response)?;

        let Some(latest) = validated.latest() else {
            return Ok(CycleOutcome::EmptyList);
        };

        if let Some(status) = raw_status(latest) {
            if !state.is_new_status(status) {
                return Ok(CycleOutcome::NoNewStatus);
            }
        }

        let record = parse_status(latest)?;
        let message = record.message();

        self.messenger.send_message(&self.chat_id, &message).await?;

        tracing::debug!(
            homework = %record.homework_name,
            previous = ?state.last_status(),
            status = record.status.code(),
            "Recording new homework status"
        );
        state.record_status(record.status.code());
        state.advance_cursor(validated.current_date);

        Ok(CycleOutcome::Notified { message })
    }

    async fn report_failure(&self, state: &mut PollState, error: BotError) -> CycleOutcome {
        let message = format!("{FAILURE_PREFIX}: {error}");
        tracing::error!(kind = error.kind(), "{message}");

        if !state.should_report_error(&message) {
            tracing::debug!(previous = ?state.last_error(), "Same failure already reported, not resending");
            return CycleOutcome::Failed {
                message,
                reported: false,
            };
        }

        let reported = match self.messenger.send_message(&self.chat_id, &message).await {
            Ok(()) => {
                state.record_error(message.clone());
                true
            }
            Err(e) => {
                tracing::error!(kind = e.kind(), error = %e, "Failed to report failure to Telegram");
                false
            }
        };

        CycleOutcome::Failed { message, reported }
    }
}
