//! Case sections - count upper and lower case letters.
//!
//! Letters are classified by Unicode general category (`Lu` and `Ll`).

use std::sync::LazyLock;

use regex::Regex;

use super::SectionResult;
use crate::error::ViolationKind;
use crate::rules::RuleSet;

static UPPER_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Lu}").expect("upper case pattern is valid"));
static LOWER_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Ll}").expect("lower case pattern is valid"));

/// Checks the lower case minimum.
///
/// # Returns
/// - `Err(ViolationKind::LowerCase)` if too few lower case letters
/// - `Ok(())` otherwise, or when the rule is inactive
pub fn lower_case_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    if rules.min_lower_case == 0 {
        return Ok(());
    }
    let count = LOWER_CASE_REGEX.find_iter(candidate).count();
    if count >= rules.min_lower_case {
        Ok(())
    } else {
        Err(ViolationKind::LowerCase)
    }
}

/// Checks the upper case minimum.
///
/// # Returns
/// - `Err(ViolationKind::UpperCase)` if too few upper case letters
/// - `Ok(())` otherwise, or when the rule is inactive
pub fn upper_case_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    if rules.min_upper_case == 0 {
        return Ok(());
    }
    let count = UPPER_CASE_REGEX.find_iter(candidate).count();
    if count >= rules.min_upper_case {
        Ok(())
    } else {
        Err(ViolationKind::UpperCase)
    }
}
