//! Detail formatter: short display label for an action's settings.
//!
//! Korean labels are the inverse of the classifier: feeding a label back
//! through [`crate::classifier::classify`] yields the settings it came from,
//! for every settings value the cascade can produce.

use crate::action::{
    ActionSettings, CompletionType, MissionSettings, RoutineFrequency, RoutineSettings, WeekdaySet,
};
use crate::extract::KO_WEEKDAY_FALSE_RUNS;
use crate::locale::Locale;
use crate::period::PeriodCycle;

const KO_DAY_INITIALS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];
const EN_DAY_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Label in Korean.
pub fn format_detail(settings: &ActionSettings) -> String {
    format_detail_in(settings, Locale::Ko)
}

pub fn format_detail_in(settings: &ActionSettings, locale: Locale) -> String {
    match settings {
        ActionSettings::Reference => String::new(),
        ActionSettings::Routine(r) => routine_label(r, locale),
        ActionSettings::Mission(m) => mission_label(m, locale),
    }
}

fn unset(locale: Locale) -> String {
    match locale {
        Locale::Ko => "미설정".to_string(),
        Locale::En => "Not set".to_string(),
    }
}

fn routine_label(r: &RoutineSettings, locale: Locale) -> String {
    let Some(frequency) = r.frequency else {
        return unset(locale);
    };

    match (frequency, locale) {
        (RoutineFrequency::Daily, Locale::Ko) => "매일".to_string(),
        (RoutineFrequency::Daily, Locale::En) => "Every day".to_string(),

        (RoutineFrequency::Weekly, _) => {
            if let Some(days) = r.active_weekdays() {
                weekday_label(days, locale)
            } else if let Some(count) = r.active_count() {
                match locale {
                    Locale::Ko => format!("주{count}회"),
                    Locale::En => format!("{count}x a week"),
                }
            } else {
                match locale {
                    Locale::Ko => "매주".to_string(),
                    Locale::En => "Every week".to_string(),
                }
            }
        }

        (RoutineFrequency::Monthly, _) => match (r.active_count(), locale) {
            (None | Some(1), Locale::Ko) => "매월".to_string(),
            (None | Some(1), Locale::En) => "Every month".to_string(),
            (Some(n), Locale::Ko) => format!("월{n}회"),
            (Some(n), Locale::En) => format!("{n}x a month"),
        },
    }
}

fn weekday_label(days: WeekdaySet, locale: Locale) -> String {
    if days == WeekdaySet::WEEKDAYS {
        return match locale {
            Locale::Ko => "평일".to_string(),
            Locale::En => "Weekdays".to_string(),
        };
    }
    if days == WeekdaySet::WEEKEND {
        return match locale {
            Locale::Ko => "주말".to_string(),
            Locale::En => "Weekends".to_string(),
        };
    }

    let ordered = days.days_monday_first();
    match locale {
        Locale::Ko => {
            if let [only] = ordered.as_slice() {
                return format!("{}요일", KO_DAY_INITIALS[*only as usize]);
            }
            let initials: Vec<&str> = ordered.iter().map(|d| KO_DAY_INITIALS[*d as usize]).collect();
            let joined = initials.concat();
            // 금일, 수금 read as words; separate them so they parse back as days.
            if KO_WEEKDAY_FALSE_RUNS.contains(&joined.as_str()) {
                initials.join("·")
            } else {
                joined
            }
        }
        Locale::En => ordered
            .iter()
            .map(|d| EN_DAY_SHORT[*d as usize])
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn mission_label(m: &MissionSettings, locale: Locale) -> String {
    match m.completion_type {
        None => unset(locale),
        Some(CompletionType::Once) => match locale {
            Locale::Ko => "1회성".to_string(),
            Locale::En => "One-time".to_string(),
        },
        Some(CompletionType::Periodic) => match m.period_cycle {
            None => unset(locale),
            Some(cycle) => cycle_goal_label(cycle, locale).to_string(),
        },
    }
}

fn cycle_goal_label(cycle: PeriodCycle, locale: Locale) -> &'static str {
    match (cycle, locale) {
        (PeriodCycle::Daily, Locale::Ko) => "일일 목표",
        (PeriodCycle::Weekly, Locale::Ko) => "주간 목표",
        (PeriodCycle::Monthly, Locale::Ko) => "월간 목표",
        (PeriodCycle::Quarterly, Locale::Ko) => "분기 목표",
        (PeriodCycle::Yearly, Locale::Ko) => "연간 목표",
        (PeriodCycle::Daily, Locale::En) => "Daily goal",
        (PeriodCycle::Weekly, Locale::En) => "Weekly goal",
        (PeriodCycle::Monthly, Locale::En) => "Monthly goal",
        (PeriodCycle::Quarterly, Locale::En) => "Quarterly goal",
        (PeriodCycle::Yearly, Locale::En) => "Yearly goal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;
    use crate::normalize::normalize;

    fn routine(r: RoutineSettings) -> ActionSettings {
        ActionSettings::Routine(r)
    }

    fn weekly_days(days: &[u8]) -> ActionSettings {
        routine(RoutineSettings::weekly().with_weekdays(WeekdaySet::from_days(days.iter().copied())))
    }

    #[test]
    fn test_weekday_and_weekend_labels() {
        assert_eq!(format_detail(&weekly_days(&[1, 2, 3, 4, 5])), "평일");
        assert_eq!(format_detail(&weekly_days(&[6, 0])), "주말");
        assert_eq!(format_detail_in(&weekly_days(&[0, 6]), Locale::En), "Weekends");
    }

    #[test]
    fn test_day_initials_monday_first() {
        assert_eq!(format_detail(&weekly_days(&[5, 1, 3])), "월수금");
        assert_eq!(format_detail(&weekly_days(&[0, 1])), "월일");
        assert_eq!(format_detail(&weekly_days(&[2])), "화요일");
        assert_eq!(format_detail(&weekly_days(&[0, 5])), "금·일");
        assert_eq!(format_detail(&weekly_days(&[3, 5])), "수·금");
        assert_eq!(format_detail(&weekly_days(&[2, 3])), "화수");
        assert_eq!(format_detail_in(&weekly_days(&[0, 2, 4]), Locale::En), "Tue, Thu, Sun");
    }

    #[test]
    fn test_routine_labels() {
        assert_eq!(format_detail(&routine(RoutineSettings::daily())), "매일");
        assert_eq!(format_detail(&routine(RoutineSettings::weekly().with_count(3))), "주3회");
        assert_eq!(format_detail(&routine(RoutineSettings::weekly())), "매주");
        assert_eq!(format_detail(&routine(RoutineSettings::monthly())), "매월");
        assert_eq!(format_detail(&routine(RoutineSettings::monthly().with_count(1))), "매월");
        assert_eq!(format_detail(&routine(RoutineSettings::monthly().with_count(2))), "월2회");
        assert_eq!(
            format_detail_in(&routine(RoutineSettings::weekly().with_count(2)), Locale::En),
            "2x a week"
        );
    }

    #[test]
    fn test_mission_labels() {
        assert_eq!(format_detail(&ActionSettings::Mission(MissionSettings::once())), "1회성");
        assert_eq!(
            format_detail(&ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Quarterly))),
            "분기 목표"
        );
        assert_eq!(
            format_detail_in(
                &ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Weekly)),
                Locale::En
            ),
            "Weekly goal"
        );
    }

    #[test]
    fn test_unset_and_reference() {
        assert_eq!(format_detail(&ActionSettings::Reference), "");
        assert_eq!(format_detail(&routine(RoutineSettings::default())), "미설정");
        assert_eq!(format_detail(&ActionSettings::Mission(MissionSettings::default())), "미설정");
        let no_cycle = MissionSettings {
            completion_type: Some(CompletionType::Periodic),
            period_cycle: None,
        };
        assert_eq!(format_detail_in(&ActionSettings::Mission(no_cycle), Locale::En), "Not set");
    }

    #[test]
    fn test_labels_classify_back() {
        let cases = [
            routine(RoutineSettings::daily()),
            routine(RoutineSettings::weekly()),
            routine(RoutineSettings::weekly().with_count(3)),
            routine(RoutineSettings::monthly().with_count(1)),
            weekly_days(&[1, 2, 3, 4, 5]),
            weekly_days(&[0, 6]),
            weekly_days(&[1, 3, 5]),
            weekly_days(&[0, 5]),
            weekly_days(&[0, 3]),
            weekly_days(&[3, 5]),
            weekly_days(&[2, 3]),
            weekly_days(&[3, 4]),
            weekly_days(&[4, 6]),
            weekly_days(&[4]),
            weekly_days(&[0]),
            ActionSettings::Mission(MissionSettings::once()),
            ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Weekly)),
            ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Monthly)),
            ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Quarterly)),
            ActionSettings::Mission(MissionSettings::periodic(PeriodCycle::Yearly)),
        ];
        for settings in cases {
            let label = format_detail(&settings);
            let back = classify(&normalize(&label)).settings;
            assert_eq!(back, settings, "label {label:?}");
        }
    }
}
