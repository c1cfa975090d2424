//! Raw SMS message record, as produced by the ingestion layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An immutable received message. The extractor only ever reads
/// `content` and `sender`; `received_at` is carried for display and as a
/// fallback transaction date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmsMessage {
    pub id: String,
    pub content: String,
    pub sender: String,
    pub received_at: DateTime<Utc>,
}

impl SmsMessage {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        sender: impl Into<String>,
        received_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            sender: sender.into(),
            received_at,
        }
    }
}
