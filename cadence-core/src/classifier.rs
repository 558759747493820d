//! Rule cascade: deterministic classification of action titles.
//!
//! No model, no I/O. Cue predicates are computed once, then [`RULES`] is
//! scanned top to bottom and the first rule whose guard holds builds the
//! result. The order of [`RULES`] is a contract: moving a rule changes what
//! users see. The last rule always matches, so classification is total.

use serde::{Deserialize, Serialize};

use crate::action::{
    ActionKind, ActionSettings, ClassificationResult, CompletionType, Confidence,
    MissionSettings, ReasonCode, RoutineFrequency, RoutineSettings, WeekdaySet,
};
use crate::cues::Cues;
use crate::normalize::{normalize, Normalized};
use crate::period::PeriodCycle;

/// One tier of the cascade.
pub struct Rule {
    /// Stable identifier, used in debug output and logs.
    pub id: &'static str,
    pub guard: fn(&Cues) -> bool,
    pub build: fn(&Cues) -> ClassificationResult,
}

pub const FALLBACK_RULE_ID: &str = "fallback_daily";

/// The cascade, highest priority first.
pub static RULES: [Rule; 24] = [
    Rule {
        id: "reference_mindset",
        guard: |c| c.has_reference_cue || c.has_negative_phrase,
        build: |_| ClassificationResult::reference(Confidence::High),
    },
    Rule {
        id: "reference_reduction",
        guard: |c| c.has_reduce_phrase,
        build: |_| ClassificationResult::reference(Confidence::High),
    },
    Rule {
        id: "reference_abstract_lifestyle",
        guard: |c| c.has_abstract_lifestyle_goal,
        build: |_| ClassificationResult::reference(Confidence::High),
    },
    Rule {
        id: "reference_manner_adverb",
        guard: |c| c.has_abstract_manner_adverb && !c.has_routine_verb,
        build: |_| ClassificationResult::reference(Confidence::Medium),
    },
    Rule {
        id: "mission_once_only",
        guard: |c| c.has_once_only_cue && !c.has_periodic_cue(),
        build: |_| ClassificationResult::mission(MissionSettings::once(), Confidence::High),
    },
    Rule {
        id: "reference_time_management",
        guard: |c| c.has_abstract_time_management_goal && !c.has_routine_verb,
        build: |_| ClassificationResult::reference(Confidence::Medium),
    },
    Rule {
        id: "mission_quarterly",
        guard: |c| c.has_quarterly_cue,
        build: |_| {
            ClassificationResult::mission(
                MissionSettings::periodic(PeriodCycle::Quarterly),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "mission_yearly",
        guard: |c| c.has_yearly_cue,
        build: |_| {
            ClassificationResult::mission(
                MissionSettings::periodic(PeriodCycle::Yearly),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "routine_weekday_combination",
        guard: |c| c.has_weekday_combination,
        build: |c| {
            ClassificationResult::routine(
                RoutineSettings::weekly().with_weekdays(c.weekdays),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "routine_single_weekday",
        guard: |c| c.has_single_weekday_token,
        build: |c| {
            ClassificationResult::routine(
                RoutineSettings::weekly().with_weekdays(c.weekdays),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "mission_monthly",
        guard: |c| {
            c.has_monthly_cue
                && (c.has_completion_cue || c.has_goal_cue || c.has_numeric_goal_shape)
                && !c.has_routine_verb
        },
        build: |_| {
            ClassificationResult::mission(
                MissionSettings::periodic(PeriodCycle::Monthly),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "mission_weekly",
        guard: |c| c.has_weekly_cue && (c.has_completion_cue || c.has_goal_cue),
        build: |_| {
            ClassificationResult::mission(
                MissionSettings::periodic(PeriodCycle::Weekly),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "routine_weekly_count",
        guard: |c| c.has_weekly_cue && c.has_numeric_goal_shape,
        build: |c| {
            ClassificationResult::routine(
                RoutineSettings::weekly().with_count(c.count.unwrap_or(1)),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "mission_once_measurable",
        guard: |c| c.has_completion_cue && c.has_numeric_goal_shape,
        build: |_| ClassificationResult::mission(MissionSettings::once(), Confidence::High),
    },
    Rule {
        id: "mission_once_goal",
        guard: |c| c.has_completion_cue || c.has_goal_cue,
        build: |_| ClassificationResult::mission(MissionSettings::once(), Confidence::Medium),
    },
    Rule {
        id: "numeric_goal_alone",
        guard: |c| {
            c.has_numeric_goal_shape
                && !c.has_daily_cue
                && !c.has_weekly_cue
                && !c.has_monthly_cue
                && !c.has_routine_verb
        },
        build: |c| {
            if c.has_one_per_day_shape {
                ClassificationResult::routine(RoutineSettings::daily(), Confidence::High)
            } else if c.has_duration_verb_shape {
                ClassificationResult::routine(RoutineSettings::daily(), Confidence::Medium)
            } else {
                ClassificationResult::mission(MissionSettings::once(), Confidence::Medium)
            }
        },
    },
    Rule {
        id: "routine_adverb_verb",
        guard: |c| c.has_routine_adverb && c.has_routine_verb,
        build: |_| ClassificationResult::routine(RoutineSettings::daily(), Confidence::High),
    },
    Rule {
        id: "routine_weekend",
        guard: |c| c.has_weekend_phrase,
        build: |_| {
            ClassificationResult::routine(
                RoutineSettings::weekly().with_weekdays(WeekdaySet::WEEKEND),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "routine_weekdays",
        guard: |c| c.has_weekday_phrase,
        build: |_| {
            ClassificationResult::routine(
                RoutineSettings::weekly().with_weekdays(WeekdaySet::WEEKDAYS),
                Confidence::High,
            )
        },
    },
    Rule {
        id: "routine_daily",
        guard: |c| c.has_daily_cue || c.has_one_per_day_shape,
        build: |_| ClassificationResult::routine(RoutineSettings::daily(), Confidence::High),
    },
    Rule {
        id: "routine_weekly",
        guard: |c| c.has_weekly_cue,
        build: |_| ClassificationResult::routine(RoutineSettings::weekly(), Confidence::High),
    },
    Rule {
        id: "routine_monthly",
        guard: |c| c.has_monthly_cue,
        build: |_| {
            ClassificationResult::routine(RoutineSettings::monthly().with_count(1), Confidence::High)
        },
    },
    Rule {
        id: "routine_verb_inferred",
        guard: |c| c.has_routine_verb,
        build: |c| {
            if c.has_book_completion_shape {
                ClassificationResult::mission(MissionSettings::once(), Confidence::High)
            } else if c.has_weekly_context_verb {
                ClassificationResult::routine(RoutineSettings::weekly(), Confidence::Medium)
            } else if c.has_monthly_context_verb {
                ClassificationResult::routine(
                    RoutineSettings::monthly().with_count(1),
                    Confidence::Medium,
                )
            } else {
                ClassificationResult::routine(RoutineSettings::daily(), Confidence::Medium)
            }
        },
    },
    Rule {
        id: FALLBACK_RULE_ID,
        guard: |_| true,
        build: |_| fallback(),
    },
];

fn fallback() -> ClassificationResult {
    ClassificationResult::routine(RoutineSettings::daily(), Confidence::Low)
}

/// Classify a normalized title.
pub fn classify(n: &Normalized) -> ClassificationResult {
    classify_traced(n).0
}

/// Classify a normalized title, also returning the id of the rule that fired.
pub fn classify_traced(n: &Normalized) -> (ClassificationResult, &'static str) {
    let cues = Cues::detect(n);
    let fired = RULES
        .iter()
        .find(|rule| (rule.guard)(&cues))
        .map(|rule| ((rule.build)(&cues), rule.id))
        .unwrap_or_else(|| (fallback(), FALLBACK_RULE_ID));

    tracing::debug!(
        title = %n.text,
        rule = fired.1,
        kind = fired.0.kind.as_str(),
        "classified action title"
    );
    fired
}

/// Flat, optional-field view of extracted settings (external JSON shape).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_frequency: Option<RoutineFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_weekdays: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_count_per_period: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_completion_type: Option<CompletionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mission_period_cycle: Option<PeriodCycle>,
}

impl From<&ActionSettings> for ExtractedSettings {
    fn from(settings: &ActionSettings) -> Self {
        match settings {
            ActionSettings::Routine(r) => Self {
                routine_frequency: r.frequency,
                routine_weekdays: r.weekdays.map(Vec::from),
                routine_count_per_period: r.count_per_period,
                ..Self::default()
            },
            ActionSettings::Mission(m) => Self {
                mission_completion_type: m.completion_type,
                mission_period_cycle: m.period_cycle,
                ..Self::default()
            },
            ActionSettings::Reference => Self::default(),
        }
    }
}

impl ExtractedSettings {
    /// Rebuild typed settings for `kind`, dropping fields of other kinds.
    pub fn to_settings(&self, kind: ActionKind) -> ActionSettings {
        match kind {
            ActionKind::Routine => ActionSettings::Routine(RoutineSettings {
                frequency: self.routine_frequency,
                weekdays: self
                    .routine_weekdays
                    .as_ref()
                    .map(|days| WeekdaySet::from_days(days.iter().copied())),
                count_per_period: self.routine_count_per_period,
            }),
            ActionKind::Mission => ActionSettings::Mission(MissionSettings {
                completion_type: self.mission_completion_type,
                period_cycle: self.mission_period_cycle,
            }),
            ActionKind::Reference => ActionSettings::Reference,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierDebug {
    pub input_language: String,
    pub normalized_title: String,
    pub matched_rule: String,
}

/// Classifier output in its external shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifierOutput {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub confidence: Confidence,
    pub reason_code: ReasonCode,
    pub extracted_settings: ExtractedSettings,
    pub debug: ClassifierDebug,
}

impl ClassifierOutput {
    pub fn result(&self) -> ClassificationResult {
        ClassificationResult {
            kind: self.kind,
            confidence: self.confidence,
            reason_code: self.reason_code,
            settings: self.extracted_settings.to_settings(self.kind),
        }
    }
}

/// Normalize and classify a raw title.
pub fn classify_title(title: &str) -> ClassifierOutput {
    let n = normalize(title);
    let (result, rule) = classify_traced(&n);
    ClassifierOutput {
        kind: result.kind,
        confidence: result.confidence,
        reason_code: result.reason_code,
        extracted_settings: ExtractedSettings::from(&result.settings),
        debug: ClassifierDebug {
            input_language: n.language().to_string(),
            normalized_title: n.text,
            matched_rule: rule.to_string(),
        },
    }
}
