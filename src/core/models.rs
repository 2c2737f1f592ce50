use crate::core::error::BotError;
use serde::Serialize;
use serde_json::Value;

/// Review status codes the homework API is documented to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub const ALL: [HomeworkStatus; 3] = [
        HomeworkStatus::Approved,
        HomeworkStatus::Reviewing,
        HomeworkStatus::Rejected,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, BotError> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or_else(|| BotError::UndocumentedStatus {
                status: code.to_string(),
            })
    }
}

/// A homework entry after its required fields were checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: HomeworkStatus,
}

impl HomeworkRecord {
    pub fn message(&self) -> String {
        format!(
            "Изменился статус проверки работы \"{}\". {}",
            self.homework_name,
            self.status.verdict()
        )
    }
}

/// API payload whose outer shape has been checked.
///
/// Entries stay raw: only the latest one is ever parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    pub homeworks: Vec<Value>,
    pub current_date: Option<i64>,
}

impl ValidatedResponse {
    pub fn latest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}
