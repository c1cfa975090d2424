//! finly-ingest: SMS backup-file ingestion (JSON / XML / CSV / plain text).
//!
//! Every parser normalizes to [`SmsMessage`] records; the extractor never
//! sees container formats. Malformed individual records are skipped, an
//! unreadable or structurally-broken file is an error.

pub mod parsers;
pub mod types;

pub use types::BackupFormat;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use finly_core::SmsMessage;

/// Load a message backup, dispatching on the file extension.
///
/// `received_fallback` stamps messages whose container carries no usable
/// timestamp (plain-text lines, rows with missing/broken date fields).
pub fn load_backup(path: &Path, received_fallback: DateTime<Utc>) -> Result<Vec<SmsMessage>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let format = BackupFormat::from_path(path);
    parse_backup(&text, format, received_fallback)
        .with_context(|| format!("parsing {} as {format:?} (check file format)", path.display()))
}

/// Parse backup text in an explicit format.
pub fn parse_backup(
    text: &str,
    format: BackupFormat,
    received_fallback: DateTime<Utc>,
) -> Result<Vec<SmsMessage>> {
    match format {
        BackupFormat::Json => parsers::json_backup::parse_json_backup(text, received_fallback),
        BackupFormat::Xml => parsers::xml_backup::parse_xml_backup(text, received_fallback),
        BackupFormat::Csv => parsers::csv_backup::parse_csv_backup(text, received_fallback),
        BackupFormat::PlainText => Ok(parsers::plain_text::parse_plain_text(text, received_fallback)),
    }
}
