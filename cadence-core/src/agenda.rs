//! Bulk agenda: evaluate a day's whole action list.
//!
//! Each action is independent, so the list is mapped in parallel with rayon.
//! Aggregates skip references and non-due actions.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::action::{Action, ActionKind};
use crate::format::format_detail_in;
use crate::locale::Locale;
use crate::period::bounds_in;
use crate::visibility::{
    is_action_configured, is_due_today, progress, tracking_cycle, ProgressView,
};

/// An action plus the number of checks storage counted in its current period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSnapshot {
    pub action: Action,
    #[serde(default)]
    pub check_count_in_period: u32,
}

impl ActionSnapshot {
    pub fn new(action: Action, check_count_in_period: u32) -> Self {
        Self {
            action,
            check_count_in_period,
        }
    }
}

/// Progress plus the label of the period it is measured over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodProgress {
    #[serde(flatten)]
    pub view: ProgressView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaEntry {
    pub id: String,
    pub title: String,
    pub kind: ActionKind,
    pub detail: String,
    pub due: bool,
    pub configured: bool,
    pub progress: Option<PeriodProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agenda {
    pub date: NaiveDate,
    pub entries: Vec<AgendaEntry>,
}

/// Completion totals over due, trackable entries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgendaSummary {
    pub total: usize,
    pub completed: usize,
    /// `completed / total`, or 0.0 for an empty agenda.
    pub rate: f64,
}

impl Agenda {
    /// Entries to show for the day, in input order.
    pub fn due(&self) -> impl Iterator<Item = &AgendaEntry> {
        self.entries.iter().filter(|e| e.due)
    }

    pub fn summary(&self) -> AgendaSummary {
        let tracked: Vec<&AgendaEntry> = self
            .due()
            .filter(|e| e.kind != ActionKind::Reference)
            .collect();
        let completed = tracked
            .iter()
            .filter(|e| e.progress.as_ref().is_some_and(|p| p.view.is_completed))
            .count();
        let total = tracked.len();
        let rate = if total == 0 {
            0.0
        } else {
            completed as f64 / total as f64
        };
        AgendaSummary {
            total,
            completed,
            rate,
        }
    }
}

pub fn build_agenda(snapshots: &[ActionSnapshot], date: NaiveDate, locale: Locale) -> Agenda {
    let entries = snapshots
        .par_iter()
        .map(|snap| evaluate(snap, date, locale))
        .collect();
    Agenda { date, entries }
}

fn evaluate(snap: &ActionSnapshot, date: NaiveDate, locale: Locale) -> AgendaEntry {
    let action = &snap.action;
    let due = is_due_today(action, date);
    let configured = is_action_configured(action);
    if !configured {
        tracing::warn!(id = %action.id, title = %action.title, "action needs settings");
    }

    // Label the period the check count was taken from, even if it is stale.
    let anchor = action.current_period_start.unwrap_or(date);
    let period_label = tracking_cycle(&action.settings).and_then(|cycle| {
        bounds_in(anchor, cycle, locale)
            .map(|b| b.label)
            .inspect_err(|e| tracing::warn!(id = %action.id, error = %e, "no period bounds"))
            .ok()
    });

    AgendaEntry {
        id: action.id.clone(),
        title: action.title.clone(),
        kind: action.kind(),
        detail: format_detail_in(&action.settings, locale),
        due,
        configured,
        progress: progress(action, snap.check_count_in_period, due).map(|view| PeriodProgress {
            view,
            period_label,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{
        ActionSettings, ActionStatus, MissionSettings, RoutineSettings, WeekdaySet,
    };
    use crate::period::PeriodCycle;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn snapshots() -> Vec<ActionSnapshot> {
        vec![
            ActionSnapshot::new(
                Action::new("1", "매일 30분 운동", ActionSettings::Routine(RoutineSettings::daily())),
                1,
            ),
            ActionSnapshot::new(
                Action::new(
                    "2",
                    "월수금 헬스",
                    ActionSettings::Routine(
                        RoutineSettings::weekly().with_weekdays(WeekdaySet::from_days([1, 3, 5])),
                    ),
                ),
                1,
            ),
            ActionSnapshot::new(Action::new("3", "긍정적 사고방식", ActionSettings::Reference), 0),
            ActionSnapshot::new(
                Action::new("4", "문법책 완독", ActionSettings::Mission(MissionSettings::once()))
                    .with_status(ActionStatus::Completed)
                    .checked_on(d(2026, 10, 1)),
                1,
            ),
            ActionSnapshot::new(
                Action::new("5", "매주 장보기", ActionSettings::Routine(RoutineSettings::weekly())),
                0,
            ),
        ]
    }

    #[test]
    fn test_build_agenda_keeps_order() {
        let agenda = build_agenda(&snapshots(), d(2026, 10, 18), Locale::Ko);
        let ids: Vec<_> = agenda.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_sunday_agenda() {
        // 2026-10-18 is a Sunday: the MWF routine and the finished mission drop out.
        let agenda = build_agenda(&snapshots(), d(2026, 10, 18), Locale::Ko);
        let due: Vec<_> = agenda.due().map(|e| e.id.as_str()).collect();
        assert_eq!(due, vec!["1", "3", "5"]);

        let weekly = &agenda.entries[1];
        assert_eq!(weekly.detail, "월수금");
        let p = weekly.progress.as_ref().unwrap();
        assert_eq!(p.view.target, Some(3));
        assert_eq!(p.period_label.as_deref(), Some("10/12 ~ 10/18"));

        let reference = &agenda.entries[2];
        assert!(reference.progress.is_none());
        assert_eq!(reference.detail, "");

        assert!(!agenda.entries[4].configured);
    }

    #[test]
    fn test_summary_excludes_references() {
        let agenda = build_agenda(&snapshots(), d(2026, 10, 18), Locale::Ko);
        let summary = agenda.summary();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.completed, 1);
        assert!((summary.rate - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_summary_of_references_only_is_zero() {
        let only_refs = vec![ActionSnapshot::new(
            Action::new("r", "초심 잃지 않기", ActionSettings::Reference),
            0,
        )];
        let summary = build_agenda(&only_refs, d(2026, 10, 18), Locale::En).summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.rate, 0.0);
    }

    #[test]
    fn test_english_detail_and_labels() {
        let agenda = build_agenda(&snapshots(), d(2026, 10, 14), Locale::En);
        assert_eq!(agenda.entries[0].detail, "Every day");
        let p = agenda.entries[0].progress.as_ref().unwrap();
        assert_eq!(p.period_label.as_deref(), Some("Oct 14"));
        assert!(p.view.is_completed);
    }

    #[test]
    fn test_stale_mission_period_keeps_its_own_label() {
        let monthly = Action::new(
            "m",
            "매월 저축 목표 달성",
            ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Monthly)),
        )
        .with_period(d(2026, 9, 1), d(2026, 9, 30));
        let agenda = build_agenda(&[ActionSnapshot::new(monthly.clone(), 1)], d(2026, 10, 2), Locale::Ko);
        let p = agenda.entries[0].progress.as_ref().unwrap();
        assert_eq!(p.view.check_count, 1);
        assert_eq!(p.period_label.as_deref(), Some("2026년 9월"));

        let unset = Action::new("n", monthly.title.clone(), monthly.settings);
        let agenda = build_agenda(&[ActionSnapshot::new(unset, 0)], d(2026, 10, 2), Locale::Ko);
        let p = agenda.entries[0].progress.as_ref().unwrap();
        assert_eq!(p.period_label.as_deref(), Some("2026년 10월"));
    }

    #[test]
    fn test_entry_json_flattens_progress() {
        let agenda = build_agenda(&snapshots(), d(2026, 10, 14), Locale::Ko);
        let json = serde_json::to_value(&agenda.entries[1]).unwrap();
        assert_eq!(json["kind"], "routine");
        assert_eq!(json["progress"]["checkCount"], 1);
        assert_eq!(json["progress"]["target"], 3);
        assert_eq!(json["progress"]["periodLabel"], "10/12 ~ 10/18");
    }
}
