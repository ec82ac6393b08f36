//! Argument lookup: alphabetic code, then numeric code, then fallback.

use mintmark_core::{Currency, CurrencyRegistry};
use serde::Serialize;

/// How a query was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedBy {
    /// Registered alphabetic code.
    Code,
    /// Registered numeric code.
    NumericCode,
    /// Not registered; synthesized record.
    Fallback,
}

/// One answered query.
#[derive(Debug, Clone, Serialize)]
pub struct Lookup {
    /// The argument as given.
    pub query: String,
    /// Which lookup answered it.
    pub matched_by: MatchedBy,
    /// Resolved record.
    pub currency: Currency,
}

/// Answers a CLI argument. Never fails; unknown input falls back to
/// [`CurrencyRegistry::resolve`].
pub fn lookup(registry: &CurrencyRegistry, query: &str) -> Lookup {
    let (matched_by, currency) = if let Some(c) = registry.get_currency(query) {
        (MatchedBy::Code, c)
    } else if let Some(c) = registry.currency_by_numeric_code(query) {
        (MatchedBy::NumericCode, c)
    } else {
        (MatchedBy::Fallback, registry.resolve(query))
    };

    Lookup {
        query: query.to_string(),
        matched_by,
        currency,
    }
}
