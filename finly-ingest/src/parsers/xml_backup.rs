//! XML backup parser for the minimal SMS-backup schema:
//!
//! ```xml
//! <smses count="2">
//!   <sms address="HDFC-BANK" date="1737000000000" body="debited Rs.500" />
//! </smses>
//! ```
//!
//! Only `<sms>` elements and their body/address/date attributes matter; the
//! scan is a regex pass over the element tags rather than a full XML parse.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use finly_core::SmsMessage;

use super::parse_timestamp;

static SMS_ELEMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<sms\b[^>]*>").expect("fixed sms element pattern"));

static BODY_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)\bbody\s*=\s*"([^"]*)""#).expect("fixed body pattern"));
static ADDRESS_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)\baddress\s*=\s*"([^"]*)""#).expect("fixed address pattern"));
static DATE_ATTR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)\bdate\s*=\s*"([^"]*)""#).expect("fixed date pattern"));

fn attr(tag: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(tag)
        .map(|caps| unescape_xml(caps.get(1).map_or("", |m| m.as_str())))
}

/// Decode the five named XML entities plus decimal character references.
fn unescape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find(';') else {
            out.push_str(tail);
            return out;
        };
        let entity = &tail[1..end];
        match entity {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            _ => {
                let decoded = entity
                    .strip_prefix('#')
                    .and_then(|d| d.parse::<u32>().ok())
                    .and_then(char::from_u32);
                match decoded {
                    Some(c) => out.push(c),
                    // Unknown entity: keep it verbatim
                    None => out.push_str(&tail[..=end]),
                }
            }
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

pub fn parse_xml_backup(text: &str, fallback: DateTime<Utc>) -> Result<Vec<SmsMessage>> {
    if !text.contains('<') {
        bail!("no XML elements found");
    }

    let mut out = Vec::new();
    for (i, element) in SMS_ELEMENT.find_iter(text).enumerate() {
        let tag = element.as_str();

        // Body is the only required attribute
        let Some(body) = attr(tag, &BODY_ATTR).filter(|b| !b.trim().is_empty()) else {
            continue;
        };
        let sender = attr(tag, &ADDRESS_ATTR).unwrap_or_else(|| "Unknown".to_string());
        let received_at = attr(tag, &DATE_ATTR)
            .and_then(|d| parse_timestamp(&d))
            .unwrap_or(fallback);

        out.push(SmsMessage::new(format!("xml-{i:04}"), body, sender, received_at));
    }

    Ok(out)
}
