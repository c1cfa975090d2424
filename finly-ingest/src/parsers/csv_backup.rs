//! CSV backup parser with header-addressed columns.
//!
//! Export tools disagree on header names, so columns are located by a small
//! alias set: body/content/message/text, address/sender/from, date/timestamp.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};

use finly_core::SmsMessage;

use super::parse_timestamp;

fn find_column(headers: &csv::StringRecord, aliases: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| aliases.contains(&h.trim().to_ascii_lowercase().as_str()))
}

pub fn parse_csv_backup(text: &str, fallback: DateTime<Utc>) -> Result<Vec<SmsMessage>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    let Some(content_col) = find_column(&headers, &["body", "content", "message", "text"]) else {
        bail!("no body/content column in CSV header: {headers:?}");
    };
    let sender_col = find_column(&headers, &["address", "sender", "from"]);
    let date_col = find_column(&headers, &["date", "timestamp"]);

    let mut out = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // Skip rows that fail to parse rather than aborting the import
        let Ok(record) = result else { continue };

        let content = record.get(content_col).unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let sender = sender_col
            .and_then(|c| record.get(c))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown");

        let received_at = date_col
            .and_then(|c| record.get(c))
            .and_then(parse_timestamp)
            .unwrap_or(fallback);

        out.push(SmsMessage::new(format!("csv-{i:04}"), content, sender, received_at));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fallback() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_with_common_headers() {
        let text = "date,address,body\n1737000000000,HDFC-BANK,debited Rs.500 at STORE\n,ICICI,Rs.900 credited\n";
        let msgs = parse_csv_backup(text, fallback()).unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].sender, "HDFC-BANK");
        assert_eq!(msgs[0].received_at.timestamp_millis(), 1_737_000_000_000);
        assert_eq!(msgs[1].received_at, fallback());
    }

    #[test]
    fn test_alias_headers_and_blank_rows() {
        let text = "Timestamp,From,Message\n2026-01-15T10:30:00Z,SBI,debited Rs.100\n,,\n";
        let msgs = parse_csv_backup(text, fallback()).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].sender, "SBI");
        assert_eq!(msgs[0].content, "debited Rs.100");
    }

    #[test]
    fn test_missing_body_column_is_an_error() {
        let text = "when,who\n1,2\n";
        assert!(parse_csv_backup(text, fallback()).is_err());
    }
}
