//! Password complexity rules
//!
//! Register rules (character class minimums, length bounds, disallowed
//! values) on a [`Plexity`] validator, then check a candidate string. The
//! first violated rule is reported, in a fixed order:
//! minimum length, maximum length, lower case, upper case, numeric,
//! special characters, disallowed values.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PLEXITY_DISALLOWED_PATH`: Path used by [`DisallowedList::from_env`]
//!   (default: `./assets/disallowed.txt`)
//!
//! # Example
//!
//! ```rust
//! use plexity::{Plexity, ViolationKind};
//!
//! let mut plexity = Plexity::new();
//! plexity
//!     .require_upper_case()
//!     .require_lower_case()
//!     .require_numeric_characters_at_least(3)
//!     .require_special_characters()
//!     .not_in(vec!["Example2", "Ex4mp!e123"]);
//!
//! assert_eq!(plexity.check("mypasSwordh88e8*&|re"), Ok(true));
//!
//! let err = plexity.check("Ex4mp!e123").unwrap_err();
//! assert_eq!(err.kind(), ViolationKind::NotIn);
//! println!("{err}");
//! ```

// Internal modules
mod error;
mod evaluator;
mod history;
mod locale;
mod rules;
mod sections;
mod validator;

// Public API
pub use error::{ConfigError, DisallowedListError, LengthBound, ValidationError, ViolationKind};
pub use evaluator::evaluate;
pub use history::{
    DISALLOWED_PATH_ENV, DisallowedList, DisallowedSource, HistoryStore, disallowed_list_path,
};
pub use locale::Locale;
pub use rules::RuleSet;
pub use sections::{NUMERIC_CHARACTERS, SPECIAL_CHARACTERS, count_occurrences};
pub use validator::{DEFAULT_AMOUNT, Plexity};
