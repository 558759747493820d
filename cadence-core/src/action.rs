//! Action model: classification output, extracted settings, and the persisted
//! action record the evaluator consumes.
//!
//! Storage owns `Action`; we keep it small + serializable.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::period::PeriodCycle;

/// Behavioral category of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    #[serde(rename = "routine")]
    Routine,
    #[serde(rename = "mission")]
    Mission,
    #[serde(rename = "reference")]
    Reference,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Routine => "routine",
            ActionKind::Mission => "mission",
            ActionKind::Reference => "reference",
        }
    }
}

/// How specific the matched rule was. Not a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

/// Stable localization-table key explaining which kind of rule matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReasonCode {
    #[serde(rename = "reason.reference")]
    Reference,
    #[serde(rename = "reason.mission")]
    Mission,
    #[serde(rename = "reason.routine")]
    Routine,
    #[serde(rename = "reason.routine_low")]
    RoutineLow,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Reference => "reason.reference",
            ReasonCode::Mission => "reason.mission",
            ReasonCode::Routine => "reason.routine",
            ReasonCode::RoutineLow => "reason.routine_low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutineFrequency {
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionType {
    #[serde(rename = "once")]
    Once,
    #[serde(rename = "periodic")]
    Periodic,
}

/// A set of weekdays indexed `0..=6`.
///
/// Index 0 is **Sunday**: the first day of the week as the calendar layer
/// numbers it (`chrono::Weekday::num_days_from_sunday`). This is not the
/// business-week convention used by weekly period bounds, which start on
/// Monday. Keep the two apart when parsing weekday letters.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "Vec<u8>", try_from = "Vec<u8>")]
pub struct WeekdaySet(u8);

// Day indices, not the raw mask.
impl fmt::Debug for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeekdaySet").field(&self.days()).finish()
    }
}

impl WeekdaySet {
    pub const SUNDAY: u8 = 0;
    pub const SATURDAY: u8 = 6;

    /// Monday..Friday.
    pub const WEEKDAYS: WeekdaySet = WeekdaySet(0b0011_1110);
    /// Saturday + Sunday.
    pub const WEEKEND: WeekdaySet = WeekdaySet(0b0100_0001);

    pub fn new() -> Self {
        Self(0)
    }

    /// Build from day indices; indices above 6 are ignored.
    pub fn from_days(days: impl IntoIterator<Item = u8>) -> Self {
        let mut set = Self::new();
        for d in days {
            set.insert(d);
        }
        set
    }

    pub fn insert(&mut self, day: u8) {
        if day <= Self::SATURDAY {
            self.0 |= 1 << day;
        }
    }

    pub fn contains(&self, day: u8) -> bool {
        day <= Self::SATURDAY && self.0 & (1 << day) != 0
    }

    pub fn contains_weekday(&self, weekday: Weekday) -> bool {
        self.contains(weekday.num_days_from_sunday() as u8)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.contains_weekday(date.weekday())
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Day indices in ascending (Sunday-first) order.
    pub fn days(&self) -> Vec<u8> {
        (0..=Self::SATURDAY).filter(|d| self.contains(*d)).collect()
    }

    /// Day indices ordered Monday first, Sunday last (display order).
    pub fn days_monday_first(&self) -> Vec<u8> {
        (1..=Self::SATURDAY)
            .chain(std::iter::once(Self::SUNDAY))
            .filter(|d| self.contains(*d))
            .collect()
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.days()
    }
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = String;

    fn try_from(days: Vec<u8>) -> Result<Self, Self::Error> {
        if let Some(bad) = days.iter().find(|d| **d > Self::SATURDAY) {
            return Err(format!("weekday index out of range 0..=6: {bad}"));
        }
        Ok(Self::from_days(days))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoutineSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<RoutineFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<WeekdaySet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_per_period: Option<u32>,
}

impl RoutineSettings {
    pub fn daily() -> Self {
        Self {
            frequency: Some(RoutineFrequency::Daily),
            ..Self::default()
        }
    }

    pub fn weekly() -> Self {
        Self {
            frequency: Some(RoutineFrequency::Weekly),
            ..Self::default()
        }
    }

    pub fn monthly() -> Self {
        Self {
            frequency: Some(RoutineFrequency::Monthly),
            ..Self::default()
        }
    }

    pub fn with_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.weekdays = Some(weekdays);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count_per_period = Some(count);
        self
    }

    /// Weekdays, treating an empty set as absent.
    pub fn active_weekdays(&self) -> Option<WeekdaySet> {
        self.weekdays.filter(|w| !w.is_empty())
    }

    /// Count per period, treating zero as absent.
    pub fn active_count(&self) -> Option<u32> {
        self.count_per_period.filter(|c| *c >= 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissionSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_type: Option<CompletionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period_cycle: Option<PeriodCycle>,
}

impl MissionSettings {
    pub fn once() -> Self {
        Self {
            completion_type: Some(CompletionType::Once),
            period_cycle: None,
        }
    }

    pub fn periodic(cycle: PeriodCycle) -> Self {
        Self {
            completion_type: Some(CompletionType::Periodic),
            period_cycle: Some(cycle),
        }
    }
}

/// Settings, by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionSettings {
    Routine(RoutineSettings),
    Mission(MissionSettings),
    Reference,
}

impl ActionSettings {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionSettings::Routine(_) => ActionKind::Routine,
            ActionSettings::Mission(_) => ActionKind::Mission,
            ActionSettings::Reference => ActionKind::Reference,
        }
    }
}

/// Result of running the rule cascade over a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub kind: ActionKind,
    pub confidence: Confidence,
    pub reason_code: ReasonCode,
    pub settings: ActionSettings,
}

impl ClassificationResult {
    pub fn reference(confidence: Confidence) -> Self {
        Self {
            kind: ActionKind::Reference,
            confidence,
            reason_code: ReasonCode::Reference,
            settings: ActionSettings::Reference,
        }
    }

    pub fn mission(settings: MissionSettings, confidence: Confidence) -> Self {
        Self {
            kind: ActionKind::Mission,
            confidence,
            reason_code: ReasonCode::Mission,
            settings: ActionSettings::Mission(settings),
        }
    }

    pub fn routine(settings: RoutineSettings, confidence: Confidence) -> Self {
        let reason_code = match confidence {
            Confidence::Low => ReasonCode::RoutineLow,
            Confidence::Medium | Confidence::High => ReasonCode::Routine,
        };
        Self {
            kind: ActionKind::Routine,
            confidence,
            reason_code,
            settings: ActionSettings::Routine(settings),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "completed")]
    Completed,
    #[serde(rename = "failed")]
    Failed,
}

/// A trackable action as stored by the persistence layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub title: String,

    pub settings: ActionSettings,
    pub status: ActionStatus,

    /// Current mission period (periodic missions only).
    #[serde(default)]
    pub current_period_start: Option<NaiveDate>,
    #[serde(default)]
    pub current_period_end: Option<NaiveDate>,

    /// Local calendar day of the most recent check.
    #[serde(default)]
    pub last_checked_on: Option<NaiveDate>,

    /// Audit copy of the classification that seeded or last re-seeded this action.
    #[serde(default)]
    pub ai_suggestion: Option<ClassificationResult>,
}

impl Action {
    pub fn new(id: impl Into<String>, title: impl Into<String>, settings: ActionSettings) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            settings,
            status: ActionStatus::Active,
            current_period_start: None,
            current_period_end: None,
            last_checked_on: None,
            ai_suggestion: None,
        }
    }

    /// Seed a new action from a classification, keeping the result as its audit copy.
    pub fn from_classification(
        id: impl Into<String>,
        title: impl Into<String>,
        result: ClassificationResult,
    ) -> Self {
        let mut action = Self::new(id, title, result.settings);
        action.ai_suggestion = Some(result);
        action
    }

    pub fn kind(&self) -> ActionKind {
        self.settings.kind()
    }

    pub fn with_status(mut self, status: ActionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_period(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.current_period_start = Some(start);
        self.current_period_end = Some(end);
        self
    }

    pub fn checked_on(mut self, date: NaiveDate) -> Self {
        self.last_checked_on = Some(date);
        self
    }

    pub fn was_checked_on(&self, date: NaiveDate) -> bool {
        self.last_checked_on == Some(date)
    }
}
