//! Currency record type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Formatting and classification metadata for one currency.
///
/// `PartialEq` is structural and compares every field. Code identity, which is
/// what callers usually want when asking "is this the same currency", is
/// [`Currency::equals`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 alphabetic code, always uppercase (e.g. "EUR").
    pub code: String,
    /// ISO 4217 numeric code (e.g. "978"). Empty when unknown.
    pub numeric_code: String,
    /// Display symbol (e.g. "€").
    pub grapheme: String,
    /// Print pattern where `$` is the grapheme and `1` the amount.
    pub template: String,
    /// Decimal separator.
    pub decimal: String,
    /// Thousands separator.
    pub thousand: String,
    /// Number of minor-unit digits.
    pub fraction: u32,
}

impl Currency {
    /// Creates a currency record. The code is stored uppercase.
    #[must_use]
    pub fn new(
        code: &str,
        numeric_code: impl Into<String>,
        grapheme: impl Into<String>,
        template: impl Into<String>,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
        fraction: u32,
    ) -> Self {
        Self {
            code: normalize_code(code),
            numeric_code: numeric_code.into(),
            grapheme: grapheme.into(),
            template: template.into(),
            decimal: decimal.into(),
            thousand: thousand.into(),
            fraction,
        }
    }

    /// Synthesizes a record for a code the registry does not know.
    ///
    /// The grapheme keeps the caller's spelling so freeform labels still
    /// render the way they were typed. Every other field is empty.
    #[must_use]
    pub fn unknown(code: &str) -> Self {
        Self {
            code: normalize_code(code),
            grapheme: code.to_string(),
            ..Self::default()
        }
    }

    /// Code identity: true iff both codes match ignoring case.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        normalize_code(&self.code) == normalize_code(&other.code)
    }

    /// Returns true if this record carries an ISO numeric code.
    #[must_use]
    pub fn has_numeric_code(&self) -> bool {
        !self.numeric_code.is_empty()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

/// Canonical form of a currency code used as the registry key.
#[must_use]
pub fn normalize_code(code: &str) -> String {
    code.to_uppercase()
}
