//! Display helpers for loaded integration items.
//!
//! Formatting is done here rather than in the UI so that the rendered text
//! can be checked without a browser. Timestamps are shown in the en-US locale
//! style used by the browser's `toLocaleString`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

use crate::models::IntegrationItem;

/// Shown for a timestamp the backend did not provide.
pub const MISSING_DATE: &str = "N/A";

/// Shown for a timestamp that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const LOCALE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Format a backend timestamp in the local time zone.
pub fn format_date(value: Option<&str>) -> String {
    format_date_in(value, &Local)
}

/// Format a backend timestamp in the given time zone.
pub fn format_date_in<Tz>(value: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let value = match value {
        None | Some("") => return MISSING_DATE.to_string(),
        Some(value) => value,
    };

    match parse_timestamp(value, tz) {
        Some(datetime) => datetime.format(LOCALE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_timestamp<Tz: TimeZone>(value: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.with_timezone(tz));
    }

    // Date-times without an offset are read as wall-clock time in `tz`.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }

    // Bare dates are read as UTC midnight.
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(tz))
}

/// One list entry, with every field ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEntry {
    pub name: String,
    pub created: String,
    pub last_modified: String,
    pub url: Option<String>,
}

impl ItemEntry {
    pub fn from_item(item: &IntegrationItem) -> Self {
        Self::from_item_in(item, &Local)
    }

    pub fn from_item_in<Tz>(item: &IntegrationItem, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        ItemEntry {
            name: item.name.clone().unwrap_or_default(),
            created: format_date_in(item.creation_time.as_deref(), tz),
            last_modified: format_date_in(item.last_modified_time.as_deref(), tz),
            url: item.url.clone().filter(|url| !url.is_empty()),
        }
    }
}

/// Entries for a result set, in response order.
pub fn entries(items: &[IntegrationItem]) -> Vec<ItemEntry> {
    items.iter().map(ItemEntry::from_item).collect()
}
