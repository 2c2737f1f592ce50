use thiserror::Error;

/// Everything that can go wrong inside a poll cycle or at startup.
///
/// The `Display` text doubles as the diagnostic relayed to the chat, so it
/// stays in the same language as the verdicts.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("Отсутствуют обязательные переменные окружения: {}", .missing.join(", "))]
    MissingConfiguration { missing: Vec<&'static str> },

    #[error("Произошла ошибка при запросе к API: {0}")]
    ApiRequest(#[source] reqwest::Error),

    #[error("Статус ответа сервера не 200: Статус ответа {status}")]
    UnsuccessfulStatus { status: u16 },

    #[error("API вернул неверный тип данных: {what}")]
    UnexpectedType { what: &'static str },

    #[error("Отсутствует ожидаемый ключ `{key}` в ответе API")]
    MissingKey { key: &'static str },

    #[error("Обнаружен недокументированный статус домашней работы: {status}")]
    UndocumentedStatus { status: String },

    #[error("Сбой при отправке сообщения в Telegram: {0}")]
    Delivery(String),

    #[error("{0}")]
    Unexpected(String),
}

impl BotError {
    /// Short machine-friendly label for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::MissingConfiguration { .. } => "missing_configuration",
            BotError::ApiRequest(_) => "api_request_failed",
            BotError::UnsuccessfulStatus { .. } => "unsuccessful_status_code",
            BotError::UnexpectedType { .. } | BotError::MissingKey { .. } => "malformed_response",
            BotError::UndocumentedStatus { .. } => "undocumented_status",
            BotError::Delivery(_) => "messaging_delivery_failed",
            BotError::Unexpected(_) => "unexpected",
        }
    }
}
