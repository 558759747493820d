//! Visibility & progress evaluator.
//!
//! Answers, for an action and the user's local calendar day: should it be on
//! today's list, what is its per-period target, and how far along is it.
//! All functions are pure; the check count is supplied by storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::action::{
    Action, ActionSettings, ActionStatus, CompletionType, MissionSettings, RoutineFrequency,
    RoutineSettings,
};
use crate::error::PeriodResult;
use crate::period::{bounds, PeriodBounds, PeriodCycle};

/// Progress toward the current period target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressView {
    pub check_count: u32,
    /// `None` when the action has no discrete target for the period.
    pub target: Option<u32>,
    pub is_completed: bool,
}

/// Should `action` appear on the list for `date`?
pub fn is_due_today(action: &Action, date: NaiveDate) -> bool {
    let due = match &action.settings {
        ActionSettings::Reference => true,
        ActionSettings::Routine(r) => routine_due(r, date),
        ActionSettings::Mission(m) => mission_due(action, m, date),
    };
    tracing::debug!(id = %action.id, %date, due, "evaluated visibility");
    due
}

fn routine_due(r: &RoutineSettings, date: NaiveDate) -> bool {
    match r.frequency {
        Some(RoutineFrequency::Weekly) => r
            .active_weekdays()
            .is_none_or(|days| days.contains_date(date)),
        Some(RoutineFrequency::Daily) | Some(RoutineFrequency::Monthly) | None => true,
    }
}

fn mission_due(action: &Action, m: &MissionSettings, date: NaiveDate) -> bool {
    match m.completion_type {
        // A completed one-time mission stays visible on the day it was checked.
        Some(CompletionType::Once) => {
            action.status != ActionStatus::Completed || action.was_checked_on(date)
        }
        Some(CompletionType::Periodic) => action.current_period_end.is_none_or(|end| date <= end),
        None => true,
    }
}

/// Completions required within one period, or `None` without a discrete target.
pub fn period_target(settings: &ActionSettings) -> Option<u32> {
    match settings {
        ActionSettings::Reference => None,
        ActionSettings::Mission(_) => Some(1),
        ActionSettings::Routine(r) => match r.frequency {
            Some(RoutineFrequency::Weekly) => r
                .active_weekdays()
                .map(|days| days.len() as u32)
                .or_else(|| r.active_count()),
            Some(RoutineFrequency::Monthly) => r.active_count(),
            Some(RoutineFrequency::Daily) | None => None,
        },
    }
}

/// Progress for the current period. References have none.
///
/// With a target, the period is complete once the count reaches it. Without
/// one, it is complete when checked at least once on a target day.
pub fn progress(
    action: &Action,
    check_count_in_period: u32,
    is_target_today: bool,
) -> Option<ProgressView> {
    if matches!(action.settings, ActionSettings::Reference) {
        return None;
    }

    let target = period_target(&action.settings);
    let is_completed = match target {
        Some(target) => check_count_in_period >= target,
        None => is_target_today && check_count_in_period >= 1,
    };

    Some(ProgressView {
        check_count: check_count_in_period,
        target,
        is_completed,
    })
}

/// Whether the action carries the settings it needs. Never blocks visibility.
pub fn is_action_configured(action: &Action) -> bool {
    match &action.settings {
        ActionSettings::Reference => true,
        ActionSettings::Routine(r) => match r.frequency {
            Some(RoutineFrequency::Weekly) => {
                r.active_weekdays().is_some() || r.active_count().is_some()
            }
            Some(RoutineFrequency::Monthly) => r.active_count().is_some(),
            Some(RoutineFrequency::Daily) => true,
            None => false,
        },
        ActionSettings::Mission(m) => m.completion_type.is_some(),
    }
}

/// The cycle a check count accumulates over.
///
/// One-time missions and unset settings have none.
pub fn tracking_cycle(settings: &ActionSettings) -> Option<PeriodCycle> {
    match settings {
        ActionSettings::Reference => None,
        ActionSettings::Routine(r) => r.frequency.map(|f| match f {
            RoutineFrequency::Daily => PeriodCycle::Daily,
            RoutineFrequency::Weekly => PeriodCycle::Weekly,
            RoutineFrequency::Monthly => PeriodCycle::Monthly,
        }),
        ActionSettings::Mission(m) => match m.completion_type {
            Some(CompletionType::Periodic) => m.period_cycle,
            Some(CompletionType::Once) | None => None,
        },
    }
}

/// The period a periodic mission should move to on `date`.
///
/// Returns `None` when nothing changes: the action is not a periodic mission
/// with a cycle, or its current period still covers `date`.
pub fn next_mission_period(action: &Action, date: NaiveDate) -> PeriodResult<Option<PeriodBounds>> {
    let ActionSettings::Mission(MissionSettings {
        completion_type: Some(CompletionType::Periodic),
        period_cycle: Some(cycle),
    }) = action.settings
    else {
        return Ok(None);
    };

    let still_current = match (action.current_period_start, action.current_period_end) {
        (Some(start), Some(end)) => start <= date && date <= end,
        _ => false,
    };
    if still_current {
        return Ok(None);
    }

    let next = bounds(date, cycle)?;
    tracing::debug!(
        id = %action.id,
        cycle = %cycle,
        start = %next.start,
        end = %next.end,
        "rolled mission period"
    );
    Ok(Some(next))
}
