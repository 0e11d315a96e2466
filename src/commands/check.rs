//! Word check command
//!
//! Runs words through the same validity check the board uses.

use crate::dictionary::{Lookup, MIN_WORD_LEN, WordChecker};

/// Verdict for one word
pub struct CheckResult {
    pub word: String,
    pub valid: bool,
    /// Points the word would earn if formed on the board
    pub points: u32,
}

/// Check words against the dictionary
///
/// Results keep the input order. Words too short to ever score are reported
/// invalid without a lookup.
pub fn check_words<L: Lookup>(words: &[String], checker: &WordChecker<L>) -> Vec<CheckResult> {
    let verdicts = checker.validate_all(words);

    words
        .iter()
        .zip(verdicts)
        .map(|(word, valid)| CheckResult {
            word: word.to_uppercase(),
            valid,
            points: if valid { word.chars().count() as u32 } else { 0 },
        })
        .collect()
}

/// Reason shown next to an invalid word
#[must_use]
pub fn rejection_reason(word: &str) -> &'static str {
    if word.chars().count() < MIN_WORD_LEN {
        "too short"
    } else {
        "not in dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordList;

    #[test]
    fn check_reports_each_word() {
        let checker = WordChecker::new(WordList::from_slice(&["cat", "garden"]));
        let words = vec!["cat".to_string(), "xq".to_string(), "Garden".to_string(), "zzz".to_string()];

        let results = check_words(&words, &checker);

        let summary: Vec<(&str, bool, u32)> = results
            .iter()
            .map(|r| (r.word.as_str(), r.valid, r.points))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("CAT", true, 3),
                ("XQ", false, 0),
                ("GARDEN", true, 6),
                ("ZZZ", false, 0)
            ]
        );
    }

    #[test]
    fn rejection_reasons() {
        assert_eq!(rejection_reason("AT"), "too short");
        assert_eq!(rejection_reason("ZZZ"), "not in dictionary");
    }
}
