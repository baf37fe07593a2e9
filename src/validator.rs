//! The validator object: a fluent builder over a [`RuleSet`] plus the check entry points.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ConfigError, LengthBound, ValidationError};
use crate::evaluator::evaluate;
use crate::history::DisallowedSource;
use crate::locale::Locale;
use crate::rules::RuleSet;

/// Amount used by the `require_*` setters that take no explicit count.
pub const DEFAULT_AMOUNT: usize = 1;

/// Password (or any string) complexity validator.
///
/// Rules are registered through chained setters. Each setter overwrites the
/// previous value of its rule.
///
/// ```rust
/// use plexity::{Plexity, ViolationKind};
///
/// let mut plexity = Plexity::new();
/// plexity
///     .require_upper_case()
///     .require_numeric_characters_at_least(2)
///     .length_between(8, 64)?;
///
/// assert!(plexity.check("Corr3ct-H0rse")?);
///
/// let err = plexity.check("short").unwrap_err();
/// assert_eq!(err.kind(), ViolationKind::MinLength);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Plexity {
    rules: RuleSet,
    locale: Locale,
}

impl Plexity {
    /// Creates a validator with every rule inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the validator using `locale` for violation messages.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn set_locale(&mut self, locale: Locale) -> &mut Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Returns the configured rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Requires at least one upper case letter.
    pub fn require_upper_case(&mut self) -> &mut Self {
        self.require_upper_case_at_least(DEFAULT_AMOUNT)
    }

    /// Requires at least `amount` upper case letters. `0` disables the rule.
    pub fn require_upper_case_at_least(&mut self, amount: usize) -> &mut Self {
        self.rules.min_upper_case = amount;
        self
    }

    /// Requires at least one lower case letter.
    pub fn require_lower_case(&mut self) -> &mut Self {
        self.require_lower_case_at_least(DEFAULT_AMOUNT)
    }

    /// Requires at least `amount` lower case letters. `0` disables the rule.
    pub fn require_lower_case_at_least(&mut self, amount: usize) -> &mut Self {
        self.rules.min_lower_case = amount;
        self
    }

    /// Requires at least one special character.
    pub fn require_special_characters(&mut self) -> &mut Self {
        self.require_special_characters_at_least(DEFAULT_AMOUNT)
    }

    /// Requires at least `amount` special characters. `0` disables the rule.
    pub fn require_special_characters_at_least(&mut self, amount: usize) -> &mut Self {
        self.rules.min_special = amount;
        self
    }

    /// Requires at least one ASCII digit.
    pub fn require_numeric_characters(&mut self) -> &mut Self {
        self.require_numeric_characters_at_least(DEFAULT_AMOUNT)
    }

    /// Requires at least `amount` ASCII digits. `0` disables the rule.
    pub fn require_numeric_characters_at_least(&mut self, amount: usize) -> &mut Self {
        self.rules.min_numeric = amount;
        self
    }

    /// Requires the string to be at least `length` characters long.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] if `length` is not a valid
    /// length (for example a negative number). The rule set is left unchanged.
    pub fn minimum_length<N>(&mut self, length: N) -> Result<&mut Self, ConfigError>
    where
        N: TryInto<usize> + Copy + fmt::Debug,
    {
        self.rules.min_length = length_value(LengthBound::Minimum, length)?;
        Ok(self)
    }

    /// Requires the string to be at most `length` characters long.
    ///
    /// # Errors
    ///
    /// Same as [`Plexity::minimum_length`].
    pub fn maximum_length<N>(&mut self, length: N) -> Result<&mut Self, ConfigError>
    where
        N: TryInto<usize> + Copy + fmt::Debug,
    {
        self.rules.max_length = length_value(LengthBound::Maximum, length)?;
        Ok(self)
    }

    /// Sets both length bounds.
    ///
    /// Both values are validated before either is stored, so on error the
    /// rule set is left unchanged.
    pub fn length_between<N, M>(&mut self, minimum: N, maximum: M) -> Result<&mut Self, ConfigError>
    where
        N: TryInto<usize> + Copy + fmt::Debug,
        M: TryInto<usize> + Copy + fmt::Debug,
    {
        let min = length_value(LengthBound::Minimum, minimum)?;
        let max = length_value(LengthBound::Maximum, maximum)?;
        self.rules.min_length = min;
        self.rules.max_length = max;
        Ok(self)
    }

    /// Rejects strings found in `source`: either a list of exact values or a
    /// [`HistoryStore`](crate::HistoryStore) wrapped with [`DisallowedSource::store`].
    pub fn not_in(&mut self, source: impl Into<DisallowedSource>) -> &mut Self {
        self.rules.disallowed = Some(source.into());
        self
    }

    /// Checks `candidate` against the configured rules.
    ///
    /// # Returns
    /// `Ok(true)` when every active rule passes.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, with its message in the configured locale.
    pub fn check(&self, candidate: &str) -> Result<bool, ValidationError> {
        self.validate(candidate)?;
        Ok(true)
    }

    /// [`Plexity::check`] for a secret candidate.
    pub fn check_secret(&self, candidate: &SecretString) -> Result<bool, ValidationError> {
        self.check(candidate.expose_secret())
    }

    pub(crate) fn validate(&self, candidate: &str) -> Result<(), ValidationError> {
        evaluate(&self.rules, candidate)
            .map_err(|kind| ValidationError::new(kind, self.locale.message(kind)))
    }
}

fn length_value<N>(bound: LengthBound, length: N) -> Result<usize, ConfigError>
where
    N: TryInto<usize> + Copy + fmt::Debug,
{
    length.try_into().map_err(|_| ConfigError::InvalidArgument {
        bound,
        value: format!("{length:?}"),
    })
}
