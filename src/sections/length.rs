//! Length sections - check minimum and maximum length.
//!
//! Length is the number of Unicode scalar values, not bytes.

use super::SectionResult;
use crate::error::ViolationKind;
use crate::rules::RuleSet;

/// Checks the minimum length requirement.
///
/// # Returns
/// - `Err(ViolationKind::MinLength)` if the candidate is too short
/// - `Ok(())` if long enough or no minimum is configured
pub fn min_length_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    if rules.min_length == 0 {
        return Ok(());
    }
    if candidate.chars().count() >= rules.min_length {
        Ok(())
    } else {
        Err(ViolationKind::MinLength)
    }
}

/// Checks the maximum length requirement.
///
/// # Returns
/// - `Err(ViolationKind::MaxLength)` if the candidate is too long
/// - `Ok(())` if short enough or no maximum is configured
pub fn max_length_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    if rules.max_length == 0 {
        return Ok(());
    }
    if candidate.chars().count() <= rules.max_length {
        Ok(())
    } else {
        Err(ViolationKind::MaxLength)
    }
}
