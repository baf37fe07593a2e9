//! Locale message tables, keyed by [`ViolationKind`].

use crate::error::ViolationKind;

/// A language whose message table ships with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    /// Parses a language code such as `"en"` or `"TR"`.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "tr" => Some(Locale::Tr),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Returns the message this locale uses for `kind`.
    pub fn message(self, kind: ViolationKind) -> &'static str {
        match self {
            Locale::En => en(kind),
            Locale::Tr => tr(kind),
        }
    }
}

fn en(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::MinLength => "The length does not meet the minimum length requirements.",
        ViolationKind::MaxLength => "The length exceeds the maximum length requirements.",
        ViolationKind::LowerCase => "The string failed to meet the lower case requirements.",
        ViolationKind::UpperCase => "The string failed to meet the upper case requirements.",
        ViolationKind::Numeric => "The string failed to meet the numeric character requirements.",
        ViolationKind::Special => "The string failed to meet the special character requirements.",
        ViolationKind::NotIn => "The string exists in the list of disallowed values requirements.",
    }
}

fn tr(kind: ViolationKind) -> &'static str {
    match kind {
        ViolationKind::MinLength => "Uzunluk, minimum uzunluk gereksinimlerini karşılamıyor.",
        ViolationKind::MaxLength => "Uzunluk, maksimum uzunluk gereksinimlerini aşıyor.",
        ViolationKind::LowerCase => "Dize, küçük harf gereksinimlerini karşılayamadı.",
        ViolationKind::UpperCase => "Dize, büyük harf gereksinimlerini karşılayamadı.",
        ViolationKind::Numeric => "Dize sayısal karakter gereksinimlerini karşılayamadı.",
        ViolationKind::Special => "Dize, özel karakter gereksinimlerini karşılayamadı.",
        ViolationKind::NotIn => "Dize, izin verilmeyen değerler gereksinimleri listesinde var.",
    }
}
