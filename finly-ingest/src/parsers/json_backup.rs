//! JSON backup parser.
//!
//! Accepts either a bare array of message objects or `{"messages": [...]}`.
//! Field names follow common export tools: content/body, sender/address,
//! timestamp/date (RFC3339 string or epoch milliseconds).

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use finly_core::SmsMessage;

use super::parse_timestamp;

#[derive(Debug, Deserialize)]
struct RawRecord {
    id: Option<String>,
    #[serde(alias = "body")]
    content: Option<String>,
    #[serde(alias = "address")]
    sender: Option<String>,
    #[serde(alias = "date")]
    timestamp: Option<Value>,
}

fn timestamp_of(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => DateTime::<Utc>::from_timestamp_millis(n.as_i64()?),
        Value::String(s) => parse_timestamp(s),
        _ => None,
    }
}

pub fn parse_json_backup(text: &str, fallback: DateTime<Utc>) -> Result<Vec<SmsMessage>> {
    let value: Value = serde_json::from_str(text)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("messages") {
            Some(Value::Array(items)) => items,
            _ => bail!("expected a JSON array or an object with a \"messages\" array"),
        },
        _ => bail!("expected a JSON array or an object with a \"messages\" array"),
    };

    let mut out = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        // Skip records that don't deserialize or carry no text at all
        let Ok(record) = serde_json::from_value::<RawRecord>(item) else {
            continue;
        };
        let Some(content) = record.content.filter(|c| !c.trim().is_empty()) else {
            continue;
        };

        let received_at = record
            .timestamp
            .as_ref()
            .and_then(timestamp_of)
            .unwrap_or(fallback);

        out.push(SmsMessage::new(
            record.id.unwrap_or_else(|| format!("json-{i:04}")),
            content,
            record.sender.unwrap_or_else(|| "Unknown".to_string()),
            received_at,
        ));
    }

    Ok(out)
}
