use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};

use crate::{error::ParseError, models::LogRecord};

// Timestamp format for log entries: [22/May/2018:15:52:57 -0600]
const TS_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";
const DATE_FORMAT: &str = "%d/%b/%Y";

/// Address, date, offset, method, path, protocol, status and size.
pub const FIELD_COUNT: usize = 8;
/// Identity and authuser, conventionally written as `- -`.
const PLACEHOLDER_FIELDS: usize = 2;

/// Parses a common (or combined) log format line:
///
/// ```text
/// 66.1.2.3 - - [22/May/2018:15:52:57 -0600] "GET /book HTTP/1.1" 403 38
/// ```
///
/// Anything after the size field, such as the combined format's referer and
/// user agent, is ignored.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let fields = split_fields(line);
    let [host, date, offset, method, path, protocol, status, bytes, ..] = fields.as_slice() else {
        return Err(ParseError::NotEnoughFields {
            expected: FIELD_COUNT,
            found: fields.len(),
        });
    };
    let timestamp = parse_timestamp(date, offset)?;
    let method = method.strip_prefix('"').unwrap_or(*method);
    let protocol = protocol.strip_suffix('"').unwrap_or(*protocol);
    let status = status.parse().map_err(ParseError::Status)?;
    let bytes = bytes.parse().map_err(ParseError::Size)?;
    Ok(LogRecord {
        host: (*host).into(),
        timestamp,
        method: method.to_string(),
        path: (*path).into(),
        protocol: protocol.to_string(),
        status,
        bytes,
    })
}

/// Splits on whitespace and drops the placeholder tokens between the address
/// and the opening bracket of the timestamp.
fn split_fields(line: &str) -> Vec<&str> {
    let mut tokens = line.split_whitespace().peekable();
    let mut fields = Vec::with_capacity(FIELD_COUNT + 2);
    fields.extend(tokens.next());
    for _ in 0..PLACEHOLDER_FIELDS {
        if tokens.next_if(|t| !t.starts_with('[')).is_none() {
            break;
        }
    }
    fields.extend(tokens);
    fields
}

fn parse_timestamp(date: &str, offset: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let raw = format!("{date} {offset}");
    let full = raw
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .map(|s| DateTime::parse_from_str(s, TS_FORMAT));
    if let Some(Ok(timestamp)) = full {
        return Ok(timestamp);
    }

    // Date only, at midnight UTC.
    let day = date.trim_start_matches('[');
    let day = day.split_once(':').map_or(day, |(day, _)| day);
    let day = day.trim_end_matches(']');
    match NaiveDate::parse_from_str(day, DATE_FORMAT) {
        Ok(day) => {
            tracing::debug!(raw = %raw, "timestamp reduced to its date");
            Ok(day.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        }
        Err(source) => Err(ParseError::Timestamp { raw, source }),
    }
}
