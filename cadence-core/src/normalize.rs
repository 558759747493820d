//! Title normalizer: trim, lowercase, detect Latin script.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Normalized {
    pub text: String,
    /// Any ASCII letter present. Selects whether the Latin half of each cue
    /// set is consulted; never rejects input. Mixed script is legal.
    pub is_latin_script: bool,
}

impl Normalized {
    /// Debug label of the input language: "ko" when Hangul is present or no
    /// Latin letter is, otherwise "en".
    pub fn language(&self) -> &'static str {
        if !self.is_latin_script || self.text.chars().any(is_hangul) {
            "ko"
        } else {
            "en"
        }
    }
}

pub fn normalize(raw: &str) -> Normalized {
    let text = raw.trim().to_lowercase();
    let is_latin_script = text.chars().any(|c| c.is_ascii_alphabetic());
    Normalized {
        text,
        is_latin_script,
    }
}

fn is_hangul(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let n = normalize("  Run 5KM Daily \n");
        assert_eq!(n.text, "run 5km daily");
        assert!(n.is_latin_script);
        assert_eq!(n.language(), "en");
    }

    #[test]
    fn test_korean_and_mixed_script() {
        let ko = normalize("매일 30분 운동");
        assert!(!ko.is_latin_script);
        assert_eq!(ko.language(), "ko");

        let mixed = normalize("매일 5km 러닝");
        assert!(mixed.is_latin_script);
        assert_eq!(mixed.language(), "ko");
    }

    #[test]
    fn test_empty_input() {
        let n = normalize("   ");
        assert_eq!(n.text, "");
        assert!(!n.is_latin_script);
    }
}
