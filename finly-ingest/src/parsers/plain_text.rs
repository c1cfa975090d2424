//! Plain-text backup: one message per line.
//!
//! There is no sender or timestamp to recover, so the sender is a fixed
//! placeholder and every message is stamped with the import time.

use chrono::{DateTime, Utc};

use finly_core::SmsMessage;

pub const PLACEHOLDER_SENDER: &str = "Imported";

pub fn parse_plain_text(text: &str, received_at: DateTime<Utc>) -> Vec<SmsMessage> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(i, line)| SmsMessage::new(format!("text-{i:04}"), line, PLACEHOLDER_SENDER, received_at))
        .collect()
}
