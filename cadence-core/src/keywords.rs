//! Keyword/pattern bank: bilingual lexical cues grouped by semantic role.
//!
//! Pure static data. Korean cues match as substrings (particles attach to
//! words); Latin cues must match a whole word, allowing a regular inflection
//! (`run` matches `running` but not `brunch`, `less` not `lessons`).

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// A cue group with a Korean half and a Latin-script half.
#[derive(Debug, Clone, Copy)]
pub struct CueSet {
    pub ko: &'static [&'static str],
    pub en: &'static [&'static str],
}

impl CueSet {
    /// True if any cue of the consulted halves occurs in `text`.
    ///
    /// The Korean half is always consulted; the Latin half only when the
    /// text carries Latin letters.
    pub fn matches(&self, text: &str, is_latin_script: bool) -> bool {
        self.ko.iter().any(|cue| text.contains(cue))
            || (is_latin_script && self.en.iter().any(|cue| contains_word(text, cue)))
    }

    /// Byte ranges of every match, for cues that must not share a span.
    pub fn spans(&self, text: &str, is_latin_script: bool) -> Vec<Range<usize>> {
        let mut out: Vec<Range<usize>> = self
            .ko
            .iter()
            .flat_map(|cue| text.match_indices(cue).map(|(idx, m)| idx..idx + m.len()))
            .collect();
        if is_latin_script {
            out.extend(self.en.iter().flat_map(|cue| word_matches(text, cue)));
        }
        out
    }
}

/// Some span of `a` and some span of `b` are disjoint.
pub fn has_disjoint_pair(a: &[Range<usize>], b: &[Range<usize>]) -> bool {
    a.iter()
        .any(|x| b.iter().any(|y| x.end <= y.start || y.end <= x.start))
}

/// A regex shape with a Korean half and a Latin-script half.
pub struct PatternSet {
    pub ko: &'static Lazy<Regex>,
    pub en: &'static Lazy<Regex>,
}

impl PatternSet {
    pub fn matches(&self, text: &str, is_latin_script: bool) -> bool {
        self.ko.is_match(text) || (is_latin_script && self.en.is_match(text))
    }
}

/// `cue` occurs in `text` as a whole word, possibly inflected.
pub fn contains_word(text: &str, cue: &str) -> bool {
    word_matches(text, cue).next().is_some()
}

/// Spans of `cue` in `text` that start at a word boundary and end at one
/// after at most a regular inflection (`-s`, `-es`, `-ed`, `-ing`, a doubled
/// final consonant, or a dropped final `e`).
///
/// Cues starting with punctuation (`/week`) skip the start check. Hangul
/// counts as a boundary, so `yoga하기` still matches `yoga`.
fn word_matches<'a>(text: &'a str, cue: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
    let plain = text
        .match_indices(cue)
        .filter_map(move |(idx, _)| word_span(text, cue, idx, cue.len(), false));

    // graduate -> graduating
    let stem = cue
        .strip_suffix('e')
        .filter(|stem| stem.len() >= 3 && stem.chars().all(|c| c.is_ascii_alphabetic()));
    let e_dropped = stem.into_iter().flat_map(move |stem| {
        text.match_indices(stem)
            .filter_map(move |(idx, _)| word_span(text, cue, idx, stem.len(), true))
    });

    plain.chain(e_dropped)
}

fn word_span(text: &str, cue: &str, idx: usize, len: usize, e_dropped: bool) -> Option<Range<usize>> {
    let starts_alnum = cue.chars().next().is_some_and(|c| c.is_alphanumeric());
    let boundary_before = text[..idx]
        .chars()
        .next_back()
        .is_none_or(|prev| !prev.is_ascii_alphanumeric());
    if starts_alnum && !boundary_before {
        return None;
    }

    let after = &text[idx + len..];
    let tail_len: usize = after
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    let tail = &after[..tail_len];

    let ok = if e_dropped {
        tail == "ing"
    } else {
        let ends_alnum = cue.chars().next_back().is_some_and(|c| c.is_alphanumeric());
        !ends_alnum || is_inflection(cue, tail)
    };
    ok.then(|| idx..idx + len + tail_len)
}

fn is_inflection(cue: &str, tail: &str) -> bool {
    if matches!(tail, "" | "s" | "es" | "d" | "ed" | "ing") {
        return true;
    }
    // run -> running, stop -> stopped
    cue.chars().next_back().is_some_and(|last| {
        tail.strip_prefix(last)
            .is_some_and(|rest| matches!(rest, "ing" | "ed"))
    })
}

pub const MINDSET: CueSet = CueSet {
    ko: &[
        "마인드", "사고방식", "마음가짐", "태도", "긍정", "명심", "원칙", "철학", "가치관",
        "자존감", "초심", "좌우명", "신념", "잊지 말", "감사한 마음", "겸손",
    ],
    en: &[
        "mindset", "attitude", "principle", "philosophy", "remember that", "keep in mind",
        "stay positive", "positive thinking", "be grateful", "be humble", "be kind",
        "be patient", "motto", "mantra", "core value", "self-esteem", "believe in",
    ],
};

pub const NEGATIVE_PHRASE: CueSet = CueSet {
    ko: &["않기", "않는다", "안 하기", "안하기", "하지 말기", "하지 말자", "금지", "멀리하기"],
    en: &["don't", "dont", "do not", "never", "no more", "stop", "avoid", "quit", "refrain"],
};

pub const REDUCE_VERB: CueSet = CueSet {
    ko: &["줄이", "덜 먹", "덜 마시", "절제", "끊기", "끊자", "자제"],
    en: &["cut down", "cut back", "cut out", "reduce", "less", "limit", "fewer"],
};

pub const REDUCE_OBJECT: CueSet = CueSet {
    ko: &[
        "술", "음주", "담배", "흡연", "커피", "카페인", "야식", "간식", "설탕", "스마트폰",
        "핸드폰", "폰", "게임", "유튜브", "sns", "배달", "군것질", "과소비", "충동구매",
        "밀가루", "라면",
    ],
    en: &[
        "alcohol", "drinking", "smoking", "cigarette", "sugar", "caffeine", "coffee", "snack",
        "junk food", "fast food", "screen time", "phone", "social media", "youtube", "gaming",
        "netflix", "soda", "takeout", "spending",
    ],
};

pub const ABSTRACT_GOAL: CueSet = CueSet {
    ko: &[
        "건강한", "행복한", "균형 잡힌", "균형잡힌", "더 나은", "좋은", "바른", "풍요로운",
        "여유로운", "즐거운", "의미 있는",
    ],
    en: &[
        "healthy", "healthier", "happy", "happier", "balanced", "better", "good", "mindful",
        "meaningful", "fulfilling",
    ],
};

pub const LIFESTYLE_CONTEXT: CueSet = CueSet {
    ko: &["삶", "생활", "라이프", "습관", "관계", "마음", "인생", "일상"],
    en: &["life", "lifestyle", "living", "relationship", "habit", "mind"],
};

pub const MANNER_ADVERB: CueSet = CueSet {
    ko: &[
        "효율적으로", "전략적으로", "체계적으로", "현명하게", "적극적으로", "주도적으로",
        "생산적으로", "꼼꼼하게", "계획적으로",
    ],
    en: &[
        "efficiently", "strategically", "systematically", "wisely", "proactively",
        "productively", "effectively", "intentionally",
    ],
};

pub const TIME_MANAGEMENT: CueSet = CueSet {
    ko: &[
        "시간 관리", "시간관리", "일정 관리", "일정관리", "우선순위", "생산성", "집중력",
        "시간 활용",
    ],
    en: &[
        "time management", "manage my time", "manage time", "prioritize", "productivity",
        "procrastinate", "procrastination", "focus better",
    ],
};

pub const ONCE_ONLY: CueSet = CueSet {
    ko: &[
        "자격증", "시험", "합격", "취득", "면허", "수료", "졸업", "여행 가기", "여행가기",
        "승인", "신청", "등록", "이사", "출간", "입사", "이직", "개업", "계약",
    ],
    en: &[
        "certification", "certificate", "certified", "exam", "pass the", "license", "licence",
        "trip to", "travel to", "approval", "approved", "apply for", "graduate",
        "register for", "move to", "publish", "launch",
    ],
};

pub const QUARTERLY: CueSet = CueSet {
    ko: &["분기", "3개월마다", "석 달마다", "석달마다", "세 달마다"],
    en: &[
        "quarterly", "every quarter", "each quarter", "per quarter", "every 3 months",
        "every three months",
    ],
};

pub const YEARLY: CueSet = CueSet {
    ko: &["매년", "연간", "해마다", "1년마다", "일년마다", "연 1회", "연1회"],
    en: &["yearly", "annually", "annual", "every year", "each year", "per year", "a year"],
};

pub const MONTHLY: CueSet = CueSet {
    ko: &[
        "매월", "매달", "월간", "달마다", "한 달에", "한달에", "월마다", "매 달", "금월", "이번 달",
        "이번달",
    ],
    en: &["monthly", "every month", "each month", "per month", "a month", "/month"],
};

pub const WEEKLY: CueSet = CueSet {
    ko: &["매주", "주간", "주마다", "일주일", "한 주", "주 단위"],
    en: &["weekly", "every week", "each week", "per week", "a week", "/week", "/wk"],
};

pub const DAILY: CueSet = CueSet {
    ko: &[
        "매일", "날마다", "하루", "일일", "데일리", "아침마다", "저녁마다", "밤마다", "자기 전",
        "기상 후", "출근 전", "퇴근 후",
    ],
    en: &[
        "daily", "every day", "everyday", "each day", "per day", "a day", "every morning",
        "every night", "every evening", "each morning", "before bed", "after waking",
    ],
};

pub const COMPLETION: CueSet = CueSet {
    ko: &[
        "완료", "완독", "완주", "완성", "달성", "마치기", "끝내기", "마무리", "끝까지", "제출",
        "완강", "클리어", "정복", "마스터",
    ],
    en: &[
        "finish", "complete", "accomplish", "achieve", "submit", "wrap up", "master", "get done",
    ],
};

pub const GOAL: CueSet = CueSet {
    ko: &["목표", "도전", "이루기", "성취", "챌린지"],
    en: &["goal", "target", "challenge", "aim to", "reach"],
};

pub const ROUTINE_VERB: CueSet = CueSet {
    ko: &[
        "운동", "러닝", "달리기", "조깅", "걷기", "산책", "명상", "독서", "읽기", "공부", "일기",
        "스트레칭", "요가", "필라테스", "헬스", "수영", "청소", "설거지", "빨래", "복습", "예습",
        "암기", "연습", "기도", "물 마시기", "물마시기", "영어", "외우기", "회고", "회의", "보고",
        "리뷰", "정리", "점검", "가계부", "결산", "정산", "예산", "기록", "필사", "쓰기",
        "스쿼트", "푸시업", "플랭크", "영양제", "약 먹기", "일찍 자기", "일찍 일어나기", "기상",
    ],
    en: &[
        "exercise", "workout", "work out", "run", "jog", "walk", "meditate", "meditation",
        "read", "study", "journal", "stretch", "yoga", "pilates", "gym", "swim", "clean",
        "review", "practice", "practise", "pray", "drink water", "write", "meeting", "report",
        "budget", "audit", "reconcile", "floss", "vitamin", "squat", "push-up", "pushup",
        "plank", "wake up", "sleep", "cook", "learn", "retrospective", "1:1",
    ],
};

pub const ROUTINE_ADVERB: CueSet = CueSet {
    ko: &[
        "꾸준히", "규칙적으로", "습관적으로", "항상", "매번", "틈틈이", "아침에", "저녁에",
        "자기 전에", "일찍",
    ],
    en: &[
        "regularly", "consistently", "always", "habitually", "routinely", "in the morning",
        "at night", "every time",
    ],
};

pub const READING_VERB: CueSet = CueSet {
    ko: &["읽기", "독서", "읽"],
    en: &["read"],
};

/// Review/meeting/report-like verbs: a bare verb implies a weekly routine.
pub const WEEKLY_CONTEXT_VERB: CueSet = CueSet {
    ko: &["회고", "회의", "보고", "리뷰", "주간 점검", "미팅"],
    en: &["review", "meeting", "report", "retrospective", "retro", "1:1", "sync"],
};

/// Budgeting/audit-like verbs: a bare verb implies a monthly routine.
pub const MONTHLY_CONTEXT_VERB: CueSet = CueSet {
    ko: &["결산", "정산", "예산", "가계부 정리", "재무 점검", "월말"],
    en: &["budget", "audit", "reconcile", "bills", "finances", "invoice"],
};

pub const WEEKEND_PHRASE: CueSet = CueSet {
    ko: &["주말"],
    en: &["weekend"],
};

pub const WEEKDAY_PHRASE: CueSet = CueSet {
    ko: &["평일", "주중"],
    en: &["weekday"],
};

/// Korean weekday letters, indexed Sunday = 0.
pub const KO_WEEKDAY_LETTERS: [(char, u8); 7] = [
    ('일', 0),
    ('월', 1),
    ('화', 2),
    ('수', 3),
    ('목', 4),
    ('금', 5),
    ('토', 6),
];

/// Separators allowed inside a Korean weekday-letter run (`월/수/금`).
pub const KO_WEEKDAY_SEPARATORS: [char; 5] = [',', '/', '·', '.', '-'];

/// Suffixes that may trail a Korean weekday-letter run (`월수금마다`).
pub const KO_WEEKDAY_SUFFIXES: [&str; 6] = ["요일마다", "요일", "마다", "에는", "에", "엔"];

/// Latin day names and plurals; each names a day on its own.
pub const EN_WEEKDAY_NAMES: [(&str, u8); 14] = [
    ("sunday", 0),
    ("sundays", 0),
    ("monday", 1),
    ("mondays", 1),
    ("tuesday", 2),
    ("tuesdays", 2),
    ("wednesday", 3),
    ("wednesdays", 3),
    ("thursday", 4),
    ("thursdays", 4),
    ("friday", 5),
    ("fridays", 5),
    ("saturday", 6),
    ("saturdays", 6),
];

/// Latin day abbreviations. `sun`, `sat` and `wed` are also ordinary words,
/// so these count only after an anchor word or next to another day.
pub const EN_WEEKDAY_ABBREVIATIONS: [(&str, u8); 11] = [
    ("sun", 0),
    ("mon", 1),
    ("tue", 2),
    ("tues", 2),
    ("wed", 3),
    ("weds", 3),
    ("thu", 4),
    ("thur", 4),
    ("thurs", 4),
    ("fri", 5),
    ("sat", 6),
];

/// Words after which an abbreviation names a day (`every sat`, `on fri`).
pub const EN_WEEKDAY_ANCHORS: [&str; 6] = ["on", "every", "each", "until", "by", "next"];

/// Words that may sit between two listed days (`mon and wed`).
pub const EN_WEEKDAY_CONNECTORS: [&str; 2] = ["and", "or"];

/// Latin letter shorthands for weekday combinations.
pub const EN_WEEKDAY_SHORTHANDS: [(&str, &[u8]); 3] = [
    ("mwf", &[1, 3, 5]),
    ("tth", &[2, 4]),
    ("mtwtf", &[1, 2, 3, 4, 5]),
];

static NUMERIC_GOAL_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\d+\s*(?:회|번|개|권|편|쪽|페이지|장|km|킬로|키로|kg|분|시간|잔|곡|문제|단어|만원|원|점|명|일|강|챕터)|(?:한|두|세|네|다섯|여섯|일곱|여덟|아홉|열)\s*(?:번|회|권|개|잔|편|곡)",
    )
    .expect("valid regex")
});

static NUMERIC_GOAL_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b\d+\s*(?:x|times?|pages?|books?|km|k|miles?|mi|kg|lbs?|pounds?|minutes?|mins?|hours?|hrs?|h|problems?|words?|steps|cups?|glasses|reps|sets|points?|days?|chapters?|push-?ups|laps)\b|\b(?:once|twice|thrice)\b",
    )
    .expect("valid regex")
});

static ONE_PER_DAY_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"하루\s*(?:한|1)\s*(?:번|개|잔|회|권|편)|1\s*일\s*1").expect("valid regex")
});

static ONE_PER_DAY_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:once|one|1)\s*(?:time\s*)?(?:a|per)\s*day\b|\b1\s*/\s*day\b")
        .expect("valid regex")
});

static DURATION_VERB_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\s*(?:분|시간)(?:간|씩|동안)?\s*[가-힣]*기(?:\s|$)").expect("valid regex")
});

static DURATION_VERB_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d+\s*(?:minutes?|mins?|hours?|hrs?)\s+(?:of\s+)?[a-z]+ing\b")
        .expect("valid regex")
});

static WEEKLY_COUNT_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"주\s*(?:\d+|한|두|세|네|다섯|여섯)\s*(?:회|번|일)").expect("valid regex")
});

static WEEKLY_COUNT_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d+|once|twice|thrice)\s*(?:x|times?)?\s*(?:a|per|/)\s*(?:week|wk)\b")
        .expect("valid regex")
});

static MONTHLY_COUNT_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"월\s*(?:\d+|한|두|세|네)\s*(?:회|번)").expect("valid regex")
});

static MONTHLY_COUNT_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d+|once|twice)\s*(?:x|times?)?\s*(?:a|per|/)\s*month\b").expect("valid regex")
});

static BOOK_COUNT_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\d+|한|두|세|네|다섯|열)\s*권|완독").expect("valid regex")
});

static BOOK_COUNT_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d+|a|one|two|three|four|five|ten|the)\s+books?\b").expect("valid regex")
});

/// Frequency-count token: capture 1 is a digit run or a native numeral.
pub static COUNT_KO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+|한|두|세|네|다섯|여섯|일곱)\s*(?:회|번|일)").expect("valid regex")
});

/// Frequency-count token: capture 1 is a digit run or once/twice/thrice.
pub static COUNT_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d+)\s*(?:x|times?|days?)\b|\b(once|twice|thrice)\b").expect("valid regex")
});

pub static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Number + unit shape of a measurable goal (`10권`, `5km`, `3 times`).
pub static NUMERIC_GOAL: PatternSet = PatternSet {
    ko: &NUMERIC_GOAL_KO,
    en: &NUMERIC_GOAL_EN,
};

/// "One per day" shape (`하루 한 잔`, `1일 1커밋`, `once a day`).
pub static ONE_PER_DAY: PatternSet = PatternSet {
    ko: &ONE_PER_DAY_KO,
    en: &ONE_PER_DAY_EN,
};

/// Duration followed by a verb (`30분 걷기`, `20 minutes of stretching`).
pub static DURATION_VERB: PatternSet = PatternSet {
    ko: &DURATION_VERB_KO,
    en: &DURATION_VERB_EN,
};

/// Weekly count shapes that also act as weekly cues (`주3회`, `3 times a week`).
pub static WEEKLY_COUNT: PatternSet = PatternSet {
    ko: &WEEKLY_COUNT_KO,
    en: &WEEKLY_COUNT_EN,
};

/// Monthly count shapes that also act as monthly cues (`월 2회`).
pub static MONTHLY_COUNT: PatternSet = PatternSet {
    ko: &MONTHLY_COUNT_KO,
    en: &MONTHLY_COUNT_EN,
};

/// Book-count shape that turns a reading verb into a completion mission.
pub static BOOK_COUNT: PatternSet = PatternSet {
    ko: &BOOK_COUNT_KO,
    en: &BOOK_COUNT_EN,
};

/// Value of a Korean native numeral used before a counter.
pub fn native_numeral(word: &str) -> Option<u32> {
    match word {
        "한" => Some(1),
        "두" => Some(2),
        "세" => Some(3),
        "네" => Some(4),
        "다섯" => Some(5),
        "여섯" => Some(6),
        "일곱" => Some(7),
        "once" => Some(1),
        "twice" => Some(2),
        "thrice" => Some(3),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_matching() {
        assert!(contains_word("go running", "run"));
        assert!(!contains_word("sunday brunch", "run"));
        assert!(contains_word("2x/week", "/week"));
        assert!(!contains_word("", "run"));
    }

    #[test]
    fn test_cue_must_end_at_word_boundary() {
        assert!(!contains_word("spanish lessons", "less"));
        assert!(!contains_word("meditate quite regularly", "quit"));
        assert!(!contains_word("mindful walk", "mind"));
        assert!(!contains_word("for example", "exam"));
        assert!(!contains_word("bake a cookie", "cook"));
        assert!(!contains_word("ready to go", "read"));
        assert!(contains_word("use less sugar", "less"));
        assert!(contains_word("quit smoking", "quit"));
        assert!(contains_word("keep it in mind", "mind"));
    }

    #[test]
    fn test_regular_inflections_match() {
        assert!(contains_word("swimming laps", "swim"));
        assert!(contains_word("stopped snacking", "stop"));
        assert!(contains_word("reads", "read"));
        assert!(contains_word("two exams", "exam"));
        assert!(contains_word("stop procrastinating", "procrastinate"));
        assert!(contains_word("writing practice", "write"));
        assert!(!contains_word("writer", "write"));
        assert!(contains_word("매일 yoga하기", "yoga"));
    }

    #[test]
    fn test_spans_cover_the_inflected_word() {
        assert_eq!(LIFESTYLE_CONTEXT.spans("happier habits", true), vec![8..14]);
        assert_eq!(LIFESTYLE_CONTEXT.spans("좋은 습관", false), vec![7..13]);
        assert!(LIFESTYLE_CONTEXT.spans("mindful", true).is_empty());
        assert!(has_disjoint_pair(&[0..7], &[8..14]));
        assert!(!has_disjoint_pair(&[0..7], &[0..4]));
        assert!(!has_disjoint_pair(&[], &[0..4]));
    }

    #[test]
    fn test_latin_half_requires_latin_script() {
        assert!(DAILY.matches("run daily", true));
        assert!(!DAILY.matches("run daily", false));
        assert!(DAILY.matches("매일 run", false));
    }

    #[test]
    fn test_numeric_goal_shapes() {
        assert!(NUMERIC_GOAL.matches("책 10권 읽기", false));
        assert!(NUMERIC_GOAL.matches("물 세 잔", false));
        assert!(NUMERIC_GOAL.matches("run 5 km", true));
        assert!(!NUMERIC_GOAL.matches("매일 운동", false));
        assert!(!NUMERIC_GOAL.matches("분기별 목표", false));
    }

    #[test]
    fn test_one_per_day_and_duration_shapes() {
        assert!(ONE_PER_DAY.matches("1일 1커밋", false));
        assert!(ONE_PER_DAY.matches("하루 한 잔 물", false));
        assert!(!ONE_PER_DAY.matches("one apple a day", true));
        assert!(ONE_PER_DAY.matches("once a day", true));
        assert!(DURATION_VERB.matches("30분 걷기", false));
        assert!(DURATION_VERB.matches("20 minutes of stretching", true));
        assert!(!DURATION_VERB.matches("30분 운동", false));
    }

    #[test]
    fn test_count_shapes_are_cues() {
        assert!(WEEKLY_COUNT.matches("주3회 헬스", false));
        assert!(WEEKLY_COUNT.matches("gym 3 times a week", true));
        assert!(MONTHLY_COUNT.matches("월 2회 봉사", false));
    }

    #[test]
    fn test_native_numerals() {
        assert_eq!(native_numeral("세"), Some(3));
        assert_eq!(native_numeral("twice"), Some(2));
        assert_eq!(native_numeral("열"), None);
    }
}
