//! Rule evaluator - main evaluation logic.

use crate::error::ViolationKind;
use crate::rules::RuleSet;
use crate::sections::{
    SectionResult, lower_case_section, max_length_section, min_length_section, not_in_section,
    numeric_section, special_section, upper_case_section,
};

type Section = fn(&RuleSet, &str) -> SectionResult;

// Order matters: when several rules fail, the first one listed is reported.
const SECTIONS: [(&str, Section); 7] = [
    ("min_length", min_length_section),
    ("max_length", max_length_section),
    ("lower_case", lower_case_section),
    ("upper_case", upper_case_section),
    ("numeric", numeric_section),
    ("special", special_section),
    ("not_in", not_in_section),
];

/// Evaluates `candidate` against `rules`.
///
/// Checks run in a fixed order and stop at the first failure.
///
/// # Returns
/// `Ok(())` if every active rule passes, otherwise the first violated rule.
pub fn evaluate(rules: &RuleSet, candidate: &str) -> Result<(), ViolationKind> {
    for (section_name, section_fn) in SECTIONS {
        #[cfg(feature = "tracing")]
        tracing::trace!("running rule section: {}", section_name);
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;

        let outcome = section_fn(rules, candidate);

        #[cfg(feature = "tracing")]
        if let Err(kind) = &outcome {
            tracing::debug!("rule section {} failed: {:?}", section_name, kind);
        }

        outcome?;
    }
    Ok(())
}
