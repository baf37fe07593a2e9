//! Character class sections - count digits and special characters.

use super::SectionResult;
use crate::error::ViolationKind;
use crate::rules::RuleSet;

/// Tokens counted by the numeric rule.
pub const NUMERIC_CHARACTERS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "0"];

/// Tokens counted by the special character rule (OWASP password special characters).
pub const SPECIAL_CHARACTERS: [&str; 32] = [
    " ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+", ",", ".", "/", ":", ";", "<", "=",
    ">", "?", "@", "[", "]", "\\", "^", "_", "`", "{", "|", "}", "~",
];

/// Sums the non-overlapping occurrences of every needle in `haystack`.
pub fn count_occurrences(needles: &[&str], haystack: &str) -> usize {
    needles
        .iter()
        .filter(|needle| !needle.is_empty())
        .map(|needle| haystack.matches(*needle).count())
        .sum()
}

/// Checks the numeric character minimum.
///
/// # Returns
/// - `Err(ViolationKind::Numeric)` if too few digits
/// - `Ok(())` otherwise, or when the rule is inactive
pub fn numeric_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    if rules.min_numeric == 0 {
        return Ok(());
    }
    if count_occurrences(&NUMERIC_CHARACTERS, candidate) >= rules.min_numeric {
        Ok(())
    } else {
        Err(ViolationKind::Numeric)
    }
}

/// Checks the special character minimum.
///
/// # Returns
/// - `Err(ViolationKind::Special)` if too few special characters
/// - `Ok(())` otherwise, or when the rule is inactive
pub fn special_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    if rules.min_special == 0 {
        return Ok(());
    }
    if count_occurrences(&SPECIAL_CHARACTERS, candidate) >= rules.min_special {
        Ok(())
    } else {
        Err(ViolationKind::Special)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(n: usize) -> RuleSet {
        RuleSet {
            min_numeric: n,
            ..RuleSet::default()
        }
    }

    fn special(n: usize) -> RuleSet {
        RuleSet {
            min_special: n,
            ..RuleSet::default()
        }
    }

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences(&NUMERIC_CHARACTERS, "An3%a*pl3"), 2);
        assert_eq!(count_occurrences(&SPECIAL_CHARACTERS, "An3%a*pl3"), 2);
        assert_eq!(count_occurrences(&SPECIAL_CHARACTERS, "a b"), 1);
        assert_eq!(count_occurrences(&["ab"], "ababab"), 3);
        assert_eq!(count_occurrences(&["aa"], "aaa"), 1);
        assert_eq!(count_occurrences(&[""], "abc"), 0);
    }

    #[test]
    fn test_special_set_membership() {
        assert!(SPECIAL_CHARACTERS.contains(&"\\"));
        assert!(SPECIAL_CHARACTERS.contains(&" "));
        assert!(!SPECIAL_CHARACTERS.contains(&"-"));
        assert_eq!(count_occurrences(&SPECIAL_CHARACTERS, "£-"), 0);
    }

    #[test]
    fn test_numeric_present() {
        assert_eq!(numeric_section(&numeric(1), "A#4%%^"), Ok(()));
    }

    #[test]
    fn test_numeric_missing() {
        assert_eq!(numeric_section(&numeric(1), "AnExample"), Err(ViolationKind::Numeric));
    }

    #[test]
    fn test_numeric_amount() {
        assert_eq!(numeric_section(&numeric(5), "/n3%33m2l£7?"), Ok(()));
        assert_eq!(numeric_section(&numeric(5), "An3%a*pl3"), Err(ViolationKind::Numeric));
    }

    #[test]
    fn test_numeric_threshold_boundary() {
        let candidate = "x1y2z3";
        assert_eq!(numeric_section(&numeric(3), candidate), Ok(()));
        assert_eq!(numeric_section(&numeric(4), candidate), Err(ViolationKind::Numeric));
    }

    #[test]
    fn test_special_present() {
        assert_eq!(special_section(&special(1), "A#4%%^"), Ok(()));
    }

    #[test]
    fn test_special_missing() {
        assert_eq!(special_section(&special(1), "An3xampl3"), Err(ViolationKind::Special));
    }

    #[test]
    fn test_special_amount() {
        assert_eq!(special_section(&special(5), "/n3%am^l£?:"), Ok(()));
        assert_eq!(special_section(&special(5), "An3%a*pl3"), Err(ViolationKind::Special));
    }

    #[test]
    fn test_special_threshold_boundary() {
        // 4 specials: space, '!', '@', '\\'
        let candidate = "a b!c@d\\";
        assert_eq!(special_section(&special(4), candidate), Ok(()));
        assert_eq!(special_section(&special(5), candidate), Err(ViolationKind::Special));
    }

    #[test]
    fn test_non_ascii_digits_are_not_numeric() {
        assert_eq!(numeric_section(&numeric(1), "٣四"), Err(ViolationKind::Numeric));
    }
}
