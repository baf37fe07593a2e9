//! Error types: rule violations raised by evaluation and configuration errors
//! raised by the builder.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The rule a candidate string failed.
///
/// Variants are declared in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    MinLength,
    MaxLength,
    LowerCase,
    UpperCase,
    Numeric,
    Special,
    NotIn,
}

impl ViolationKind {
    /// Every kind, in the order the evaluator checks them.
    pub const ALL: [ViolationKind; 7] = [
        ViolationKind::MinLength,
        ViolationKind::MaxLength,
        ViolationKind::LowerCase,
        ViolationKind::UpperCase,
        ViolationKind::Numeric,
        ViolationKind::Special,
        ViolationKind::NotIn,
    ];

    /// Stable identifier, usable as a key into external message tables.
    pub fn key(self) -> &'static str {
        match self {
            ViolationKind::MinLength => "min_length",
            ViolationKind::MaxLength => "max_length",
            ViolationKind::LowerCase => "lower_case",
            ViolationKind::UpperCase => "upper_case",
            ViolationKind::Numeric => "numeric",
            ViolationKind::Special => "special",
            ViolationKind::NotIn => "not_in",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A candidate string failed one of the configured rules.
///
/// Only the first failing rule is ever reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    kind: ViolationKind,
    message: &'static str,
}

impl ValidationError {
    pub(crate) fn new(kind: ViolationKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    pub fn kind(&self) -> ViolationKind {
        self.kind
    }

    /// Localized, human-readable reason.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Which length bound a configuration error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthBound {
    Minimum,
    Maximum,
}

impl fmt::Display for LengthBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthBound::Minimum => f.write_str("minimum"),
            LengthBound::Maximum => f.write_str("maximum"),
        }
    }
}

/// Programmer misuse of the builder. Never produced by evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("The {bound} length value must be of type integer.")]
    InvalidArgument { bound: LengthBound, value: String },
}

#[derive(Error, Debug)]
pub enum DisallowedListError {
    #[error("Disallowed list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read disallowed list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Disallowed list file is empty")]
    EmptyFile,
}
