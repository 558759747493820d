//! Named cue predicates, computed once per title and shared by every rule.

use crate::action::WeekdaySet;
use crate::extract::{extract_count, extract_weekdays};
use crate::keywords::*;
use crate::normalize::Normalized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cues {
    pub has_reference_cue: bool,
    pub has_negative_phrase: bool,
    pub has_reduce_phrase: bool,
    pub has_abstract_lifestyle_goal: bool,
    pub has_abstract_manner_adverb: bool,
    pub has_once_only_cue: bool,
    pub has_abstract_time_management_goal: bool,

    pub has_quarterly_cue: bool,
    pub has_yearly_cue: bool,
    pub has_monthly_cue: bool,
    pub has_weekly_cue: bool,
    pub has_daily_cue: bool,

    pub has_completion_cue: bool,
    pub has_goal_cue: bool,
    pub has_numeric_goal_shape: bool,
    pub has_one_per_day_shape: bool,
    pub has_duration_verb_shape: bool,

    pub has_routine_verb: bool,
    pub has_routine_adverb: bool,
    pub has_book_completion_shape: bool,
    pub has_weekly_context_verb: bool,
    pub has_monthly_context_verb: bool,

    pub has_weekend_phrase: bool,
    pub has_weekday_phrase: bool,
    pub has_weekday_combination: bool,
    pub has_single_weekday_token: bool,

    /// Days named by the title (meaningful with the two weekday flags above).
    pub weekdays: WeekdaySet,
    /// Per-period count parsed from the title, if any number is present.
    pub count: Option<u32>,
}

impl Cues {
    pub fn detect(n: &Normalized) -> Self {
        let text = n.text.as_str();
        let latin = n.is_latin_script;
        let weekdays = extract_weekdays(n);
        let has_routine_verb = ROUTINE_VERB.matches(text, latin);

        Self {
            has_reference_cue: MINDSET.matches(text, latin),
            has_negative_phrase: NEGATIVE_PHRASE.matches(text, latin),
            has_reduce_phrase: REDUCE_VERB.matches(text, latin) && REDUCE_OBJECT.matches(text, latin),
            has_abstract_lifestyle_goal: has_disjoint_pair(
                &ABSTRACT_GOAL.spans(text, latin),
                &LIFESTYLE_CONTEXT.spans(text, latin),
            ),
            has_abstract_manner_adverb: MANNER_ADVERB.matches(text, latin),
            has_once_only_cue: ONCE_ONLY.matches(text, latin),
            has_abstract_time_management_goal: TIME_MANAGEMENT.matches(text, latin),

            has_quarterly_cue: QUARTERLY.matches(text, latin),
            has_yearly_cue: YEARLY.matches(text, latin),
            has_monthly_cue: MONTHLY.matches(text, latin) || MONTHLY_COUNT.matches(text, latin),
            has_weekly_cue: WEEKLY.matches(text, latin) || WEEKLY_COUNT.matches(text, latin),
            has_daily_cue: DAILY.matches(text, latin),

            has_completion_cue: COMPLETION.matches(text, latin),
            has_goal_cue: GOAL.matches(text, latin),
            has_numeric_goal_shape: NUMERIC_GOAL.matches(text, latin),
            has_one_per_day_shape: ONE_PER_DAY.matches(text, latin),
            has_duration_verb_shape: DURATION_VERB.matches(text, latin),

            has_routine_verb,
            has_routine_adverb: ROUTINE_ADVERB.matches(text, latin),
            has_book_completion_shape: READING_VERB.matches(text, latin)
                && BOOK_COUNT.matches(text, latin),
            has_weekly_context_verb: WEEKLY_CONTEXT_VERB.matches(text, latin),
            has_monthly_context_verb: MONTHLY_CONTEXT_VERB.matches(text, latin),

            has_weekend_phrase: WEEKEND_PHRASE.matches(text, latin),
            has_weekday_phrase: WEEKDAY_PHRASE.matches(text, latin),
            has_weekday_combination: weekdays.combination,
            has_single_weekday_token: weekdays.single,

            weekdays: weekdays.days,
            count: extract_count(n),
        }
    }

    /// Any recurrence cue; blocks the one-time-only rule.
    pub fn has_periodic_cue(&self) -> bool {
        self.has_daily_cue
            || self.has_weekly_cue
            || self.has_monthly_cue
            || self.has_quarterly_cue
            || self.has_yearly_cue
    }
}
