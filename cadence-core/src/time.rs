//! Time utilities: the user's local calendar day, timezone-aware.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::error::{PeriodError, PeriodResult};

/// Parse an IANA tz name like "Asia/Seoul".
pub fn parse_tz(tz: &str) -> Result<Tz> {
    tz.parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))
}

/// The local calendar day at `now` in the IANA tz `tz`.
///
/// This is the `targetDate` every due/progress check runs against.
pub fn local_date(now: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz = parse_tz(tz)?;
    Ok(now.with_timezone(&tz).date_naive())
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> PeriodResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| PeriodError::InvalidDate(format!("'{s}': {e}")))
}
