use crate::core::models::HomeworkStatus;
use crate::core::settings::{Credentials, Settings};
use crate::providers::{PracticumProvider, ReviewSource};
use crate::review::{check_response, parse_status};
use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Asks for the whole history so the latest homework always shows up.
const FULL_HISTORY_CURSOR: i64 = 0;

#[derive(Serialize)]
struct StatusOutput {
    source: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    homework: Option<HomeworkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, PartialEq, Serialize)]
struct HomeworkView {
    name: String,
    status: HomeworkStatus,
    verdict: &'static str,
}

pub async fn run(settings: &Settings, json: bool) -> Result<()> {
    let token = Credentials::practicum_token_from_env()?;
    let provider = PracticumProvider::new(
        reqwest::Client::new(),
        settings.practicum.endpoint.clone(),
        token,
    );

    let output = fetch_status(&provider).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text_output(&output);
    }

    Ok(())
}

async fn fetch_status(source: &dyn ReviewSource) -> StatusOutput {
    let (homework, error) = match source.fetch_statuses(FULL_HISTORY_CURSOR).await {
        Ok(response) => match latest_homework(&response) {
            Ok(homework) => (homework, None),
            Err(e) => (None, Some(e)),
        },
        Err(e) => (None, Some(e.to_string())),
    };

    StatusOutput {
        source: source.name(),
        homework,
        error,
        fetched_at: Utc::now(),
    }
}

fn latest_homework(response: &Value) -> Result<Option<HomeworkView>, String> {
    let validated = check_response(response).map_err(|e| e.to_string())?;

    let Some(latest) = validated.latest() else {
        return Ok(None);
    };

    let record = parse_status(latest).map_err(|e| e.to_string())?;
    Ok(Some(HomeworkView {
        name: record.homework_name,
        status: record.status,
        verdict: record.status.verdict(),
    }))
}

fn print_text_output(output: &StatusOutput) {
    println!("{}", output.source);

    if let Some(error) = &output.error {
        println!("  Error: {}", error);
        return;
    }

    match &output.homework {
        Some(homework) => {
            println!("  {:<8} {}", "Work:", homework.name);
            println!("  {:<8} {}", "Status:", homework.status.code());
            println!("  {:<8} {}", "Verdict:", homework.verdict);
        }
        None => println!("  No homework submissions found"),
    }
}
