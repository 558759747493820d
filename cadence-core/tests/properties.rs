//! Property tests for the classifier, evaluator and formatter.

use chrono::Datelike;
use proptest::prelude::*;

use cadence_core::*;

/// Fragments that exercise many cues at once when concatenated.
const FRAGMENTS: &[&str] = &[
    "매일", "매주", "매월", "분기별", "매년", "주말", "평일", "월수금", "화목", "토요일", "주3회",
    "30분", "10권", "운동", "독서", "읽기", "완독", "목표", "달성", "줄이기", "커피", "마인드",
    "자격증", "꾸준히", "회고", "결산", "daily", "weekly", "every month", "mon", "wed", "fri",
    "3 times a week", "read", "12 books", "finish", "goal", "stay positive", "exam", "run",
    "efficiently", "time management", "1일 1커밋", "once a day", " ", "", "!",
];

fn fragment_title() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..6).prop_map(|parts| parts.join(" "))
}

fn any_title() -> impl Strategy<Value = String> {
    prop_oneof![fragment_title(), any::<String>(), "[가-힣a-zA-Z0-9 /·,.]{0,24}"]
}

fn producible_settings() -> impl Strategy<Value = ActionSettings> {
    prop_oneof![
        Just(ActionSettings::Routine(RoutineSettings::daily())),
        Just(ActionSettings::Routine(RoutineSettings::weekly())),
        (1u32..=30).prop_map(|n| ActionSettings::Routine(RoutineSettings::weekly().with_count(n))),
        Just(ActionSettings::Routine(RoutineSettings::monthly().with_count(1))),
        (1u8..=127).prop_map(|bits| {
            let days = (0u8..=6).filter(|d| bits & (1u8 << *d) != 0);
            ActionSettings::Routine(RoutineSettings::weekly().with_weekdays(WeekdaySet::from_days(days)))
        }),
        Just(ActionSettings::Mission(MissionSettings::once())),
        prop::sample::select(vec![
            PeriodCycle::Weekly,
            PeriodCycle::Monthly,
            PeriodCycle::Quarterly,
            PeriodCycle::Yearly,
        ])
        .prop_map(|c| ActionSettings::Mission(MissionSettings::periodic(c))),
    ]
}

proptest! {
    #[test]
    fn prop_classify_is_idempotent_and_total(title in any_title()) {
        let n = normalize(&title);
        let first = classify(&n);
        let second = classify(&n);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.kind, first.settings.kind());
        prop_assert!(matches!(
            first.kind,
            ActionKind::Routine | ActionKind::Mission | ActionKind::Reference
        ));
    }

    #[test]
    fn prop_rule_id_is_known(title in any_title()) {
        let (_, rule) = classify_traced(&normalize(&title));
        prop_assert!(RULES.iter().any(|r| r.id == rule));
    }

    #[test]
    fn prop_weekday_target_matches_day_count(title in any_title()) {
        let r = classify(&normalize(&title));
        if let ActionSettings::Routine(s) = r.settings {
            if let (Some(RoutineFrequency::Weekly), Some(days)) = (s.frequency, s.active_weekdays()) {
                prop_assert_eq!(period_target(&r.settings), Some(days.len() as u32));
            }
        }
    }

    #[test]
    fn prop_mission_target_is_one(title in any_title()) {
        let r = classify(&normalize(&title));
        if r.kind == ActionKind::Mission {
            prop_assert_eq!(period_target(&r.settings), Some(1));
        }
    }

    #[test]
    fn prop_classified_settings_are_configured(title in any_title()) {
        let r = classify(&normalize(&title));
        let action = Action::from_classification("p", title.clone(), r);
        // A bare weekly routine ("매주 장보기") is the only unconfigured output.
        let bare_weekly = r.settings == ActionSettings::Routine(RoutineSettings::weekly());
        prop_assert_eq!(is_action_configured(&action), !bare_weekly);
    }

    #[test]
    fn prop_format_round_trips(settings in producible_settings()) {
        let label = format_detail(&settings);
        let back = classify(&normalize(&label)).settings;
        prop_assert_eq!(back, settings, "label {:?}", label);
    }

    #[test]
    fn prop_bounds_contain_date(
        days in 0i64..(365 * 200),
        cycle in prop::sample::select(vec![
            PeriodCycle::Daily,
            PeriodCycle::Weekly,
            PeriodCycle::Monthly,
            PeriodCycle::Quarterly,
            PeriodCycle::Yearly,
        ]),
    ) {
        let base = chrono::NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
        let date = base + chrono::Duration::days(days);
        let b = bounds(date, cycle).unwrap();
        prop_assert!(b.contains(date));
        prop_assert!(b.start <= b.end);
        if cycle == PeriodCycle::Weekly {
            prop_assert_eq!(b.start.weekday(), chrono::Weekday::Mon);
            prop_assert_eq!(b.len_days(), 7);
        }
    }
}
