//! Parameter extractor: weekday sets and per-period counts from matched cues.
//!
//! Weekday indices follow [`WeekdaySet`]: 0 = Sunday .. 6 = Saturday. Korean
//! letters map 일=0 월=1 화=2 수=3 목=4 금=5 토=6, so `월수금` is {1, 3, 5},
//! not {0, 2, 4}.

use crate::action::WeekdaySet;
use crate::keywords::{
    native_numeral, COUNT_EN, COUNT_KO, EN_WEEKDAY_ABBREVIATIONS, EN_WEEKDAY_ANCHORS,
    EN_WEEKDAY_CONNECTORS, EN_WEEKDAY_NAMES, EN_WEEKDAY_SHORTHANDS, FIRST_INTEGER,
    KO_WEEKDAY_LETTERS, KO_WEEKDAY_SEPARATORS, KO_WEEKDAY_SUFFIXES,
};
use crate::normalize::Normalized;

/// Letter runs that read as ordinary words rather than day lists: 금일
/// "today", 수일 "several days", 수금 "collection", 금월 "this month",
/// 수화 "sign language", 토목 "civil works", 목수 "carpenter", 일화
/// "anecdote", 일월 "sun and moon", 금수 "beasts".
pub const KO_WEEKDAY_FALSE_RUNS: [&str; 10] =
    ["금일", "수일", "수금", "금월", "수화", "토목", "목수", "일화", "일월", "금수"];

/// Weekdays found in a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WeekdayCues {
    pub days: WeekdaySet,
    /// Two or more distinct days (`월수금`, `mon/wed`, `화요일 목요일`).
    pub combination: bool,
    /// Exactly one day named as a full token (`토요일`, `saturdays`).
    pub single: bool,
}

pub fn ko_weekday_index(c: char) -> Option<u8> {
    KO_WEEKDAY_LETTERS
        .iter()
        .find(|(letter, _)| *letter == c)
        .map(|(_, idx)| *idx)
}

pub fn extract_weekdays(n: &Normalized) -> WeekdayCues {
    let mut runs = WeekdaySet::new();
    let mut named = WeekdaySet::new();

    for token in n.text.split_whitespace() {
        if let Some(days) = ko_letter_run(token) {
            for d in days.days() {
                runs.insert(d);
            }
        }
    }

    // 월요일, 토요일마다: a letter immediately followed by 요일
    for (idx, c) in n.text.char_indices() {
        if let Some(day) = ko_weekday_index(c) {
            if n.text[idx + c.len_utf8()..].starts_with("요일") {
                named.insert(day);
            }
        }
    }

    if n.is_latin_script {
        let words: Vec<&str> = n
            .text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        for (i, word) in words.iter().enumerate() {
            if let Some(day) = en_day_name(word) {
                named.insert(day);
            } else if let Some(day) = en_day_abbreviation(word) {
                let anchored = i > 0 && EN_WEEKDAY_ANCHORS.iter().any(|a| *a == words[i - 1]);
                if anchored {
                    named.insert(day);
                } else if listed_next_to_day(&words, i) {
                    runs.insert(day);
                }
            } else if let Some((_, days)) = EN_WEEKDAY_SHORTHANDS.iter().find(|(t, _)| t == word)
            {
                for d in days.iter() {
                    runs.insert(*d);
                }
            }
        }
    }

    let days = WeekdaySet::from_days(runs.days().into_iter().chain(named.days()));
    let combination = days.len() >= 2;
    WeekdayCues {
        days,
        combination,
        single: !combination && named.len() == 1,
    }
}

fn en_day_name(word: &str) -> Option<u8> {
    EN_WEEKDAY_NAMES
        .iter()
        .find(|(t, _)| *t == word)
        .map(|(_, day)| *day)
}

fn en_day_abbreviation(word: &str) -> Option<u8> {
    EN_WEEKDAY_ABBREVIATIONS
        .iter()
        .find(|(t, _)| *t == word)
        .map(|(_, day)| *day)
}

/// The word at `i` sits in a list of days (`mon/wed/fri`, `tue or thu`).
fn listed_next_to_day(words: &[&str], i: usize) -> bool {
    next_is_day(words[..i].iter().rev().copied()) || next_is_day(words[i + 1..].iter().copied())
}

/// The first word of `side`, past at most one connector, is a day.
fn next_is_day<'a>(mut side: impl Iterator<Item = &'a str>) -> bool {
    let is_day = |w: &str| en_day_name(w).or_else(|| en_day_abbreviation(w)).is_some();
    match side.next() {
        Some(w) if EN_WEEKDAY_CONNECTORS.iter().any(|c| *c == w) => side.next().is_some_and(is_day),
        Some(w) => is_day(w),
        None => false,
    }
}

/// A whitespace token made only of weekday letters (and separators), naming
/// at least two distinct days. `월수금마다` -> {1, 3, 5}.
fn ko_letter_run(token: &str) -> Option<WeekdaySet> {
    let mut stem = token;
    while let Some(shorter) = KO_WEEKDAY_SUFFIXES
        .iter()
        .find_map(|suffix| stem.strip_suffix(suffix))
    {
        stem = shorter;
    }

    let letters: String = stem
        .chars()
        .filter(|c| !KO_WEEKDAY_SEPARATORS.contains(c))
        .collect();
    if letters.chars().count() < 2 || KO_WEEKDAY_FALSE_RUNS.contains(&stem) {
        return None;
    }

    let mut set = WeekdaySet::new();
    for c in letters.chars() {
        set.insert(ko_weekday_index(c)?);
    }
    (set.len() >= 2).then_some(set)
}

/// Per-period count from the first frequency-count token (`3회`, `세 번`,
/// `3 times`, `twice`), else the first integer. Zero becomes 1.
pub fn extract_count(n: &Normalized) -> Option<u32> {
    let from_ko = COUNT_KO
        .captures(&n.text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_count(m.as_str()));

    let from_en = || {
        if !n.is_latin_script {
            return None;
        }
        COUNT_EN
            .captures(&n.text)
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
            .and_then(|m| parse_count(m.as_str()))
    };

    let from_any_integer = || {
        FIRST_INTEGER
            .find(&n.text)
            .and_then(|m| m.as_str().parse::<u32>().ok())
    };

    from_ko
        .or_else(from_en)
        .or_else(from_any_integer)
        .map(|count| count.max(1))
}

fn parse_count(word: &str) -> Option<u32> {
    word.parse::<u32>().ok().or_else(|| native_numeral(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn weekdays(s: &str) -> WeekdayCues {
        extract_weekdays(&normalize(s))
    }

    #[test]
    fn test_korean_letter_run() {
        let w = weekdays("월수금 헬스");
        assert!(w.combination);
        assert_eq!(w.days.days(), vec![1, 3, 5]);

        let w = weekdays("화/목마다 수영");
        assert_eq!(w.days.days(), vec![2, 4]);

        let w = weekdays("월수금요일에 러닝");
        assert!(w.combination);
        assert_eq!(w.days.days(), vec![1, 3, 5]);
    }

    #[test]
    fn test_daily_words_are_not_weekdays() {
        for title in [
            "매일 30분 운동",
            "일일 회고",
            "금일 마감",
            "일주일에 3번",
            "금월 매출 목표 달성",
            "수화 배우기",
            "수금 정리",
            "토목 기사 공부",
            "목수 일 배우기",
            "일화 기록",
        ] {
            let w = weekdays(title);
            assert!(!w.combination && !w.single, "{title}: {w:?}");
        }
    }

    #[test]
    fn test_named_days() {
        let w = weekdays("토요일마다 청소");
        assert!(w.single);
        assert_eq!(w.days.days(), vec![6]);

        let w = weekdays("화요일 목요일 영어회화");
        assert!(w.combination);
        assert_eq!(w.days.days(), vec![2, 4]);

        let w = weekdays("일요일 교회");
        assert_eq!(w.days.days(), vec![0]);
    }

    #[test]
    fn test_latin_days() {
        let w = weekdays("Yoga on Tuesdays and Thursdays");
        assert!(w.combination);
        assert_eq!(w.days.days(), vec![2, 4]);

        let w = weekdays("MWF gym");
        assert_eq!(w.days.days(), vec![1, 3, 5]);

        let w = weekdays("wear sunscreen");
        assert!(!w.single && !w.combination);

        let w = weekdays("long run on sunday");
        assert!(w.single);
        assert_eq!(w.days.days(), vec![0]);
    }

    #[test]
    fn test_abbreviations_need_an_anchor_or_a_list() {
        for title in ["Get morning sun every day", "sat in the sun", "wed in june", "sun salutation"] {
            let w = weekdays(title);
            assert!(w.days.is_empty(), "{title}: {w:?}");
        }

        let w = weekdays("mon/wed/fri lifting");
        assert!(w.combination);
        assert_eq!(w.days.days(), vec![1, 3, 5]);

        let w = weekdays("tue or thu piano");
        assert_eq!(w.days.days(), vec![2, 4]);

        let w = weekdays("long run every sat");
        assert!(w.single);
        assert_eq!(w.days.days(), vec![6]);

        let w = weekdays("groceries on sun and wed");
        assert!(w.combination);
        assert_eq!(w.days.days(), vec![0, 3]);
    }

    #[test]
    fn test_extract_count() {
        assert_eq!(extract_count(&normalize("주 3회 운동")), Some(3));
        assert_eq!(extract_count(&normalize("주3회 30분 러닝")), Some(3));
        assert_eq!(extract_count(&normalize("주 세 번 수영")), Some(3));
        assert_eq!(extract_count(&normalize("gym 4 times a week")), Some(4));
        assert_eq!(extract_count(&normalize("swim twice a week")), Some(2));
        assert_eq!(extract_count(&normalize("weekly 5km")), Some(5));
        assert_eq!(extract_count(&normalize("주 0회")), Some(1));
        assert_eq!(extract_count(&normalize("매주 운동")), None);
    }
}
