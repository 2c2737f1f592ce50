mod practicum;

use crate::core::error::BotError;
use async_trait::async_trait;
use serde_json::Value;

pub use practicum::PracticumProvider;

/// Source of homework review statuses.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    fn name(&self) -> &'static str;

    /// Raw JSON body for all status changes since `from_date` (epoch seconds).
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, BotError>;
}
