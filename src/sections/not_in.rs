//! Not-in section - checks the candidate against disallowed values.

use super::SectionResult;
use crate::error::ViolationKind;
use crate::rules::RuleSet;

/// Checks that the candidate is not a disallowed value.
///
/// # Returns
/// - `Err(ViolationKind::NotIn)` if the configured source rejects the candidate
/// - `Ok(())` if it does not, or when no source is configured
pub fn not_in_section(rules: &RuleSet, candidate: &str) -> SectionResult {
    match &rules.disallowed {
        Some(source) if source.contains(candidate) => Err(ViolationKind::NotIn),
        _ => Ok(()),
    }
}
