use crate::core::error::BotError;
use crate::core::models::ValidatedResponse;
use serde_json::Value;

const HOMEWORKS_KEY: &str = "homeworks";
const CURRENT_DATE_KEY: &str = "current_date";

/// Checks the outer shape of a homework API payload.
pub fn check_response(response: &Value) -> Result<ValidatedResponse, BotError> {
    let Some(object) = response.as_object() else {
        return Err(BotError::UnexpectedType { what: "response" });
    };

    let Some(homeworks) = object.get(HOMEWORKS_KEY) else {
        return Err(BotError::MissingKey { key: HOMEWORKS_KEY });
    };

    let Some(homeworks) = homeworks.as_array() else {
        return Err(BotError::UnexpectedType { what: HOMEWORKS_KEY });
    };

    let current_date = match object.get(CURRENT_DATE_KEY) {
        None | Some(Value::Null) => None,
        Some(value) => {
            let parsed = value.as_i64();
            if parsed.is_none() {
                tracing::warn!(%value, "Ignoring non-integer current_date");
            }
            parsed
        }
    };

    Ok(ValidatedResponse {
        homeworks: homeworks.clone(),
        current_date,
    })
}
