//! Markdown title import.
//!
//! Action lists are kept as plain markdown (`~/.cadence/actions.md` or any
//! file passed to `cadence classify --file`): every bullet is one title.

/// Collect bullet items (`- ` or `* `) as titles.
///
/// Headings and prose are skipped. Task-list markers (`[ ]`, `[x]`) are
/// stripped so checklists import cleanly.
pub fn parse_titles_md(md: &str) -> Vec<String> {
    let mut out = Vec::new();

    for line in md.lines() {
        let l = line.trim();
        let Some(rest) = l.strip_prefix("- ").or_else(|| l.strip_prefix("* ")) else {
            continue;
        };

        let rest = rest.trim_start();
        let text = ["[ ]", "[x]", "[X]"]
            .iter()
            .find_map(|marker| rest.strip_prefix(marker))
            .unwrap_or(rest)
            .trim();

        if !text.is_empty() {
            out.push(text.to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_titles_md() {
        let md = r#"
# 이번 분기 액션

## 건강
- 매일 30분 운동
- 주말마다 가족 나들이

Some prose that is not a title.

## Work
* Weekly team review
- [ ] 분기별 매출 목표 달성
- [x] 문법책 완독
-
"#;
        let titles = parse_titles_md(md);
        assert_eq!(
            titles,
            vec![
                "매일 30분 운동",
                "주말마다 가족 나들이",
                "Weekly team review",
                "분기별 매출 목표 달성",
                "문법책 완독",
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_titles_md("").is_empty());
        assert!(parse_titles_md("## heading only\n").is_empty());
    }
}
