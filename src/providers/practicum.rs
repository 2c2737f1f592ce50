use crate::core::error::BotError;
use crate::providers::ReviewSource;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

pub struct PracticumProvider {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumProvider {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }

    fn request(&self, from_date: i64) -> reqwest::RequestBuilder {
        self.client
            .get(&self.endpoint)
            .header("Authorization", self.authorization())
            .query(&[("from_date", from_date)])
    }
}

#[async_trait]
impl ReviewSource for PracticumProvider {
    fn name(&self) -> &'static str {
        "Practicum"
    }

    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, BotError> {
        tracing::debug!(from_date, endpoint = %self.endpoint, "Requesting homework statuses");

        let response = self
            .request(from_date)
            .send()
            .await
            .map_err(BotError::ApiRequest)?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Homework API returned non-200");
            return Err(BotError::UnsuccessfulStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BotError::Unexpected(format!("Не удалось разобрать ответ API: {e}")))
    }
}
