use crate::core::error::BotError;
use crate::core::models::{HomeworkRecord, HomeworkStatus};
use serde_json::Value;

/// The `status` field as sent, before it is checked against known codes.
pub fn raw_status(homework: &Value) -> Option<&str> {
    homework.get("status").and_then(Value::as_str)
}

/// Turns one homework entry into a record with a known status.
pub fn parse_status(homework: &Value) -> Result<HomeworkRecord, BotError> {
    let Some(object) = homework.as_object() else {
        return Err(BotError::UnexpectedType { what: "homework" });
    };

    let homework_name = match object.get("homework_name") {
        None | Some(Value::Null) => return Err(BotError::MissingKey { key: "homework_name" }),
        Some(Value::String(name)) => name.clone(),
        Some(_) => return Err(BotError::UnexpectedType { what: "homework_name" }),
    };

    let status = match object.get("status") {
        None | Some(Value::Null) => return Err(BotError::MissingKey { key: "status" }),
        Some(Value::String(status)) => HomeworkStatus::from_code(status)?,
        Some(other) => {
            return Err(BotError::UndocumentedStatus {
                status: other.to_string(),
            })
        }
    };

    Ok(HomeworkRecord {
        homework_name,
        status,
    })
}
