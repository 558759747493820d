//! cadence-core: Action classification and period tracking for Cadence

pub mod action;
pub mod agenda;
pub mod classifier;
pub mod cues;
pub mod error;
pub mod extract;
pub mod format;
pub mod keywords;
pub mod locale;
pub mod normalize;
pub mod period;
pub mod time;
pub mod titles;
pub mod visibility;

pub use action::{
    Action, ActionKind, ActionSettings, ActionStatus, ClassificationResult, CompletionType,
    Confidence, MissionSettings, ReasonCode, RoutineFrequency, RoutineSettings, WeekdaySet,
};
pub use agenda::{build_agenda, ActionSnapshot, Agenda, AgendaEntry, AgendaSummary, PeriodProgress};
pub use classifier::{
    classify, classify_title, classify_traced, ClassifierDebug, ClassifierOutput,
    ExtractedSettings, Rule, RULES,
};
pub use error::{PeriodError, PeriodResult};
pub use format::{format_detail, format_detail_in};
pub use locale::Locale;
pub use normalize::{normalize, Normalized};
pub use period::{bounds, bounds_from_str, bounds_in, PeriodBounds, PeriodCycle};
pub use time::{local_date, parse_date};
pub use titles::parse_titles_md;
pub use visibility::{
    is_action_configured, is_due_today, next_mission_period, period_target, progress,
    tracking_cycle, ProgressView,
};
