mod polling;

use crate::core::error::BotError;
use crate::core::notifications::TelegramMessenger;
use crate::core::settings::{Credentials, Settings};
use crate::core::store::PollState;
use crate::providers::PracticumProvider;
use anyhow::Result;
use std::sync::Arc;

pub use polling::PollingLoop;

pub async fn run(settings: &Settings) -> Result<()> {
    run_with_lookup(settings, |name| std::env::var(name).ok()).await
}

async fn run_with_lookup(
    settings: &Settings,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    tracing::info!("Starting homework-bot");

    let credentials = startup_credentials(lookup)?;

    let client = reqwest::Client::new();
    let source = Arc::new(PracticumProvider::new(
        client.clone(),
        settings.practicum.endpoint.clone(),
        credentials.practicum_token,
    ));
    let messenger = Arc::new(TelegramMessenger::new(
        client,
        &settings.telegram.api_base,
        credentials.telegram_token,
    ));

    let mut state = PollState::new(chrono::Utc::now().timestamp());

    PollingLoop::new(source, messenger, credentials.chat_id)
        .with_interval(settings.polling.interval())
        .run(&mut state)
        .await;

    Ok(())
}

/// Checked once, before the first cycle.
fn startup_credentials(lookup: impl Fn(&str) -> Option<String>) -> Result<Credentials, BotError> {
    Credentials::from_lookup(lookup).inspect_err(|e| {
        tracing::error!(critical = true, error = %e, "Required configuration is missing");
    })
}
