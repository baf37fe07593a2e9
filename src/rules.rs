//! The configured rule set.

use crate::history::DisallowedSource;

/// What a candidate string must satisfy.
///
/// A threshold or bound of `0` means the corresponding check is skipped,
/// not that zero occurrences are required.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    pub(crate) min_upper_case: usize,
    pub(crate) min_lower_case: usize,
    pub(crate) min_special: usize,
    pub(crate) min_numeric: usize,
    pub(crate) min_length: usize,
    pub(crate) max_length: usize,
    pub(crate) disallowed: Option<DisallowedSource>,
}

impl RuleSet {
    /// An empty rule set: every check inactive.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_upper_case(&self) -> usize {
        self.min_upper_case
    }

    pub fn min_lower_case(&self) -> usize {
        self.min_lower_case
    }

    pub fn min_special(&self) -> usize {
        self.min_special
    }

    pub fn min_numeric(&self) -> usize {
        self.min_numeric
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn disallowed(&self) -> Option<&DisallowedSource> {
        self.disallowed.as_ref()
    }

    /// Returns `true` when no rule is active.
    pub fn is_empty(&self) -> bool {
        self.min_upper_case == 0
            && self.min_lower_case == 0
            && self.min_special == 0
            && self.min_numeric == 0
            && self.min_length == 0
            && self.max_length == 0
            && self.disallowed.is_none()
    }
}
