//! Score Extractor: scrapes a numeric score out of the model's free text.
//!
//! The pattern accepts an optional qualifier (ATS / overall / compatibility),
//! an optional label (score / rating), a colon, one to three digits and an
//! optional "out of 100" or "/100" suffix. The first match anywhere in the
//! text wins. Values are NOT range-checked: "rating: 101/100" yields 101.

use once_cell::sync::Lazy;
use regex::Regex;

static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:ATS|overall|compatibility)?(?:score|rating)?\s*:\s*([0-9]{1,3})\s*(?:out of 100|/100)?",
    )
    .expect("score pattern is a valid regex")
});

/// Returns the first score-like number in `response_text`, or `None` when the
/// text carries no score. Absence is not an error.
pub fn extract_score(response_text: &str) -> Option<u32> {
    SCORE_PATTERN
        .captures(response_text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::mode::AnalysisMode;

    #[test]
    fn test_ats_score_line() {
        assert_eq!(extract_score("ATS Score: 87/100"), Some(87));
    }

    #[test]
    fn test_compatibility_score_without_suffix() {
        assert_eq!(extract_score("Compatibility score: 42"), Some(42));
    }

    #[test]
    fn test_no_score() {
        assert_eq!(extract_score("This resume is solid."), None);
        assert_eq!(extract_score(""), None);
    }

    #[test]
    fn test_out_of_range_value_is_returned_as_is() {
        assert_eq!(extract_score("rating: 101/100"), Some(101));
        assert_eq!(extract_score("Overall rating: 999 out of 100"), Some(999));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_score("ats score : 55 OUT OF 100"), Some(55));
    }

    #[test]
    fn test_score_on_first_line_of_longer_response() {
        let response = "ATS Score: 75/100\n\n**Most suitable profession:** Backend Engineer\n";
        assert_eq!(extract_score(response), Some(75));
    }

    #[test]
    fn test_every_mode_score_line_is_recognised() {
        for (mode, value) in AnalysisMode::ALL.into_iter().zip([12u32, 58, 93]) {
            let line = format!("**{}: {value}/100**\nDetails follow.", mode.score_label());
            assert_eq!(extract_score(&line), Some(value), "{mode}");
        }
    }

    #[test]
    fn test_first_colon_number_wins() {
        // Any "label: NN" earlier in the text is taken before the score line.
        let response = "Years of experience: 7\nATS Score: 80/100";
        assert_eq!(extract_score(response), Some(7));
    }

    #[test]
    fn test_at_most_three_digits_are_read() {
        assert_eq!(extract_score("Score: 1234"), Some(123));
    }
}
