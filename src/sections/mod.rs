//! Rule check sections
//!
//! Each section checks one rule of a [`RuleSet`](crate::RuleSet) and is
//! skipped when that rule is inactive.

mod case;
mod characters;
mod length;
mod not_in;

pub use case::{lower_case_section, upper_case_section};
pub use characters::{
    NUMERIC_CHARACTERS, SPECIAL_CHARACTERS, count_occurrences, numeric_section, special_section,
};
pub use length::{max_length_section, min_length_section};
pub use not_in::not_in_section;

/// Result type for section check functions.
/// - `Ok(())` - Section passed or was skipped
/// - `Err(kind)` - Section failed
pub type SectionResult = Result<(), crate::ViolationKind>;
