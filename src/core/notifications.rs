use crate::core::error::BotError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Delivers text to a chat.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError>;
}

pub struct TelegramMessenger {
    client: reqwest::Client,
    api_base: String,
    token: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TelegramResponse {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramMessenger {
    pub fn new(client: reqwest::Client, api_base: &str, token: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.api_base, self.token, method)
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        tracing::debug!(chat_id, "Sending Telegram message");

        // reqwest errors can embed the request URL, which carries the token.
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&SendMessageRequest { chat_id, text })
            .send()
            .await
            .map_err(|e| BotError::Delivery(e.without_url().to_string()))?;

        let status = response.status();
        let body: Option<TelegramResponse> = response.json().await.ok();

        match body {
            Some(TelegramResponse { ok: true, .. }) if status.is_success() => Ok(()),
            Some(TelegramResponse {
                description: Some(description),
                ..
            }) => Err(BotError::Delivery(description)),
            _ => Err(BotError::Delivery(format!("HTTP {status}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::serve_once;

    #[test]
    fn test_method_url_trims_trailing_slash() {
        let messenger =
            TelegramMessenger::new(reqwest::Client::new(), "https://api.telegram.org/", "123:abc");
        assert_eq!(
            messenger.method_url("sendMessage"),
            "https://api.telegram.org/bot123:abc/sendMessage"
        );
    }

    #[test]
    fn test_error_response_parses() {
        let body: TelegramResponse =
            serde_json::from_str(r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#)
                .unwrap();
        assert!(!body.ok);
        assert_eq!(body.description.as_deref(), Some("Bad Request: chat not found"));
    }

    #[test]
    fn test_request_shape() {
        let json = serde_json::to_value(SendMessageRequest {
            chat_id: "42",
            text: "hi",
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"chat_id": "42", "text": "hi"}));
    }

    #[tokio::test]
    async fn test_send_ok() {
        let base = serve_once("200 OK", r#"{"ok":true,"result":{"message_id":1}}"#).await;
        let messenger = TelegramMessenger::new(reqwest::Client::new(), &base, "123:abc");

        messenger.send_message("42", "hello").await.unwrap();
    }

    #[tokio::test]
    async fn test_send_bad_request_carries_description() {
        let base = serve_once(
            "400 Bad Request",
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#,
        )
        .await;
        let messenger = TelegramMessenger::new(reqwest::Client::new(), &base, "123:abc");

        let err = messenger.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, BotError::Delivery(ref d) if d == "Bad Request: chat not found"));
        assert_eq!(
            err.to_string(),
            "Сбой при отправке сообщения в Telegram: Bad Request: chat not found"
        );
    }

    #[tokio::test]
    async fn test_send_ok_false_with_200() {
        let base = serve_once(
            "200 OK",
            r#"{"ok":false,"description":"Forbidden: bot was blocked by the user"}"#,
        )
        .await;
        let messenger = TelegramMessenger::new(reqwest::Client::new(), &base, "123:abc");

        let err = messenger.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, BotError::Delivery(ref d) if d == "Forbidden: bot was blocked by the user"));
    }

    #[tokio::test]
    async fn test_send_non_json_error() {
        let base = serve_once("500 Internal Server Error", "oops").await;
        let messenger = TelegramMessenger::new(reqwest::Client::new(), &base, "123:abc");

        let err = messenger.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, BotError::Delivery(ref d) if d.starts_with("HTTP 500")));
    }

    #[tokio::test]
    async fn test_send_transport_error_hides_token() {
        let messenger = TelegramMessenger::new(reqwest::Client::new(), "http://127.0.0.1:1", "123:secret");

        let err = messenger.send_message("42", "hello").await.unwrap_err();
        assert!(matches!(err, BotError::Delivery(_)));
        assert!(!err.to_string().contains("secret"));
    }
}
