//! Period boundary calculator.
//!
//! Given a reference date and a cycle, returns the inclusive start/end of the
//! period covering that date plus a display label. Weekly periods always run
//! Monday..Sunday (business week), independent of the Sunday-first weekday
//! index used by [`crate::action::WeekdaySet`].

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PeriodError, PeriodResult};
use crate::locale::Locale;

/// Cycle a period is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodCycle {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "quarterly")]
    Quarterly,
    #[serde(rename = "yearly")]
    Yearly,
}

impl PeriodCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodCycle::Daily => "daily",
            PeriodCycle::Weekly => "weekly",
            PeriodCycle::Monthly => "monthly",
            PeriodCycle::Quarterly => "quarterly",
            PeriodCycle::Yearly => "yearly",
        }
    }
}

impl fmt::Display for PeriodCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodCycle {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "day" => Ok(PeriodCycle::Daily),
            "weekly" | "week" => Ok(PeriodCycle::Weekly),
            "monthly" | "month" => Ok(PeriodCycle::Monthly),
            "quarterly" | "quarter" => Ok(PeriodCycle::Quarterly),
            "yearly" | "year" | "annual" => Ok(PeriodCycle::Yearly),
            _ => Err(PeriodError::UnsupportedCycle(s.to_string())),
        }
    }
}

/// Inclusive calendar-date range of one period. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
}

impl PeriodBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days in the period.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Bounds of the `cycle` period containing `date`, labelled in Korean.
pub fn bounds(date: NaiveDate, cycle: PeriodCycle) -> PeriodResult<PeriodBounds> {
    bounds_in(date, cycle, Locale::Ko)
}

/// Bounds of the `cycle` period containing `date`, labelled for `locale`.
pub fn bounds_in(date: NaiveDate, cycle: PeriodCycle, locale: Locale) -> PeriodResult<PeriodBounds> {
    let (start, end) = match cycle {
        PeriodCycle::Daily => (date, date),
        PeriodCycle::Weekly => {
            let back = date.weekday().num_days_from_monday() as u64;
            let start = date
                .checked_sub_days(Days::new(back))
                .ok_or_else(|| out_of_range(date))?;
            let end = start
                .checked_add_days(Days::new(6))
                .ok_or_else(|| out_of_range(date))?;
            (start, end)
        }
        PeriodCycle::Monthly => month_span(date.year(), date.month(), 1, date)?,
        PeriodCycle::Quarterly => {
            let first_month = (date.month0() / 3) * 3 + 1;
            month_span(date.year(), first_month, 3, date)?
        }
        PeriodCycle::Yearly => month_span(date.year(), 1, 12, date)?,
    };

    Ok(PeriodBounds {
        start,
        end,
        label: label(start, end, cycle, locale),
    })
}

/// String-level entry point: parse `YYYY-MM-DD` and a cycle name.
pub fn bounds_from_str(date: &str, cycle: &str, locale: Locale) -> PeriodResult<PeriodBounds> {
    let date = crate::time::parse_date(date)?;
    let cycle: PeriodCycle = cycle.parse()?;
    bounds_in(date, cycle, locale)
}

/// First day of `first_month` through the last day of the `months`-th month.
fn month_span(
    year: i32,
    first_month: u32,
    months: u32,
    reference: NaiveDate,
) -> PeriodResult<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(year, first_month, 1).ok_or_else(|| out_of_range(reference))?;
    let after_last = first_month + months;
    let next_start = if after_last > 12 {
        NaiveDate::from_ymd_opt(year + 1, after_last - 12, 1)
    } else {
        NaiveDate::from_ymd_opt(year, after_last, 1)
    };
    let end = next_start
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| out_of_range(reference))?;
    Ok((start, end))
}

fn out_of_range(date: NaiveDate) -> PeriodError {
    PeriodError::InvalidDate(format!("{date} has no representable period boundary"))
}

fn label(start: NaiveDate, end: NaiveDate, cycle: PeriodCycle, locale: Locale) -> String {
    let quarter = start.month0() / 3 + 1;
    match (locale, cycle) {
        (Locale::Ko, PeriodCycle::Daily) => format!("{}월 {}일", start.month(), start.day()),
        (Locale::Ko, PeriodCycle::Weekly) => format!(
            "{}/{} ~ {}/{}",
            start.month(),
            start.day(),
            end.month(),
            end.day()
        ),
        (Locale::Ko, PeriodCycle::Monthly) => format!("{}년 {}월", start.year(), start.month()),
        (Locale::Ko, PeriodCycle::Quarterly) => format!("{}년 {}분기", start.year(), quarter),
        (Locale::Ko, PeriodCycle::Yearly) => format!("{}년", start.year()),
        (Locale::En, PeriodCycle::Daily) => start.format("%b %-d").to_string(),
        (Locale::En, PeriodCycle::Weekly) => {
            format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
        }
        (Locale::En, PeriodCycle::Monthly) => start.format("%B %Y").to_string(),
        (Locale::En, PeriodCycle::Quarterly) => format!("Q{} {}", quarter, start.year()),
        (Locale::En, PeriodCycle::Yearly) => start.year().to_string(),
    }
}
