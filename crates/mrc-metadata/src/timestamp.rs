//! Session and acquisition timestamps from header date/time fields.

use chrono::{NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{MetadataError, Result};
use crate::header::{Header, field_str};

const DATE_TIME_FORMAT: &str = "%Y%m%d%H%M%S";

/// Resolves an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| MetadataError::UnknownTimezone(name.to_string()))
}

/// Combines a `YYYYMMDD` date and an `HHMMSS[.ffffff]` time.
///
/// Fractional seconds are ignored.
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = date.trim();
    let time: String = time.trim().chars().take(6).collect();
    if date.is_empty() || time.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{date}{time}"), DATE_TIME_FORMAT).ok()
}

/// RFC 3339 rendering in `timezone`, or UTC when none is configured.
///
/// Local times that do not exist in the zone (spring-forward gaps) yield
/// `None`; ambiguous ones resolve to the earlier instant.
pub fn localize(naive: NaiveDateTime, timezone: Option<Tz>) -> Option<String> {
    match timezone {
        Some(tz) => tz
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.to_rfc3339()),
        None => Some(Utc.from_utc_datetime(&naive).to_rfc3339()),
    }
}

fn header_timestamp(
    header: &Header,
    date_key: &str,
    time_key: &str,
    datetime_key: &str,
    timezone: Option<Tz>,
) -> Option<String> {
    let naive = match (field_str(header, date_key), field_str(header, time_key)) {
        (Some(date), Some(time)) => parse_date_time(&date, &time),
        _ => {
            let combined = field_str(header, datetime_key)?;
            let (date, time) = combined.split_at_checked(8)?;
            parse_date_time(date, time)
        }
    }?;
    localize(naive, timezone)
}

/// From `StudyDate` + `StudyTime`, falling back to `StudyDateTime`.
pub fn session_timestamp(header: &Header, timezone: Option<Tz>) -> Option<String> {
    header_timestamp(header, "StudyDate", "StudyTime", "StudyDateTime", timezone)
}

/// From `AcquisitionDate` + `AcquisitionTime`, falling back to
/// `AcquisitionDateTime`.
pub fn acquisition_timestamp(header: &Header, timezone: Option<Tz>) -> Option<String> {
    header_timestamp(
        header,
        "AcquisitionDate",
        "AcquisitionTime",
        "AcquisitionDateTime",
        timezone,
    )
}
