//! Currency registry with case-insensitive and numeric-code lookups.
//!
//! The registry is an ordinary value: build one at the composition root, wrap
//! it in an `Arc` and hand clones of the `Arc` to whoever needs lookups. All
//! methods take `&self`; a single reader/writer lock guards both the code
//! table and the numeric-code index so they never disagree.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, trace, warn};

use super::iso_table::{ISO_CURRENCIES, SeedCurrency};
use super::record::{Currency, normalize_code};

/// Outcome of [`CurrencyRegistry::upsert_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The code was not registered before.
    Added,
    /// An existing record was replaced.
    Replaced,
    /// The built record matched the stored one; nothing was written.
    Unchanged,
    /// Empty code, nothing was written.
    Ignored,
}

/// Process-lifetime table of currency metadata.
///
/// Lookups return owned copies. Changing a returned record has no effect on
/// the registry; go through [`CurrencyRegistry::register`] or
/// [`CurrencyRegistry::add_currency`] instead.
#[derive(Debug)]
pub struct CurrencyRegistry {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    /// Uppercase alphabetic code -> record.
    by_code: HashMap<String, Currency>,
    /// Numeric code -> uppercase alphabetic code.
    by_numeric: HashMap<String, String>,
}

impl Tables {
    fn insert(&mut self, currency: Currency) -> Option<Currency> {
        let code = currency.code.clone();
        let numeric = currency.numeric_code.clone();

        let previous = self.by_code.insert(code.clone(), currency);

        if let Some(prev) = &previous
            && prev.has_numeric_code()
            && prev.numeric_code != numeric
        {
            self.unindex(&prev.numeric_code, &code);
        }
        if !numeric.is_empty() {
            self.by_numeric.insert(numeric, code);
        }

        previous
    }

    /// Drops `numeric -> code` from the index. If another record still carries
    /// the same numeric code, the index is pointed at it instead.
    fn unindex(&mut self, numeric: &str, code: &str) {
        if self.by_numeric.get(numeric).is_none_or(|indexed| indexed != code) {
            return;
        }
        self.by_numeric.remove(numeric);

        let survivor = self
            .by_code
            .values()
            .filter(|c| c.numeric_code == numeric)
            .map(|c| c.code.clone())
            .min();
        if let Some(survivor) = survivor {
            self.by_numeric.insert(numeric.to_string(), survivor);
        }
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencyRegistry {
    /// Creates a registry seeded with the full built-in ISO 4217 table.
    ///
    /// Seeding happens before the value is returned, so no caller can
    /// observe a partially filled registry.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(ISO_CURRENCIES)
    }

    /// Creates a registry with no currencies at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Creates a registry seeded from the given rows.
    #[must_use]
    pub fn with_seed(seed: &[SeedCurrency]) -> Self {
        let mut tables = Tables::default();
        for row in seed {
            tables.insert(row.to_currency());
        }
        debug!(currencies = tables.by_code.len(), "Currency registry seeded");

        Self {
            tables: RwLock::new(tables),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Inserts or fully replaces the entry for `uppercase(code)`.
    ///
    /// The stored record has an empty numeric code. Use
    /// [`CurrencyRegistry::register`] to set one.
    pub fn add_currency(
        &self,
        code: &str,
        grapheme: &str,
        template: &str,
        decimal: &str,
        thousand: &str,
        fraction: u32,
    ) {
        self.register(Currency::new(
            code,
            String::new(),
            grapheme,
            template,
            decimal,
            thousand,
            fraction,
        ));
    }

    /// Inserts or fully replaces a record, numeric code included.
    ///
    /// Returns the record that was replaced, if any. Records with an empty
    /// code are ignored since no lookup could ever reach them.
    pub fn register(&self, mut currency: Currency) -> Option<Currency> {
        currency.code = normalize_code(&currency.code);
        if currency.code.is_empty() {
            warn!("Ignoring currency registration with empty code");
            return None;
        }

        let code = currency.code.clone();
        let previous = self.write().insert(currency);

        match &previous {
            Some(_) => debug!(code = %code, "Currency replaced"),
            None => trace!(code = %code, "Currency added"),
        }
        previous
    }

    /// Registers the record `build` derives from the current entry for
    /// `uppercase(code)`.
    ///
    /// The read and the write happen under one write guard, so a concurrent
    /// registration cannot land in between and be overwritten with stale
    /// data. The built record is stored under the normalized code.
    pub fn upsert_with<F>(&self, code: &str, build: F) -> Registration
    where
        F: FnOnce(Option<&Currency>) -> Currency,
    {
        let key = normalize_code(code);
        if key.is_empty() {
            warn!("Ignoring currency registration with empty code");
            return Registration::Ignored;
        }

        let mut tables = self.write();
        let (currency, existed) = {
            let existing = tables.by_code.get(&key);
            let mut currency = build(existing);
            currency.code.clone_from(&key);
            if existing == Some(&currency) {
                return Registration::Unchanged;
            }
            (currency, existing.is_some())
        };
        tables.insert(currency);

        if existed {
            debug!(code = %key, "Currency replaced");
            Registration::Replaced
        } else {
            trace!(code = %key, "Currency added");
            Registration::Added
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Strict lookup by alphabetic code, case-insensitive.
    ///
    /// Returns `None` for empty input or an unknown code.
    pub fn get_currency(&self, code: &str) -> Option<Currency> {
        if code.is_empty() {
            return None;
        }
        self.read().by_code.get(&normalize_code(code)).cloned()
    }

    /// Lookup that never fails.
    ///
    /// Unknown codes produce [`Currency::unknown`], which is not stored.
    pub fn resolve(&self, code: &str) -> Currency {
        self.get_currency(code).unwrap_or_else(|| Currency::unknown(code))
    }

    /// Lookup by exact numeric code (e.g. "986").
    ///
    /// Returns `None` for empty input or when no record carries the code.
    pub fn currency_by_numeric_code(&self, numeric_code: &str) -> Option<Currency> {
        if numeric_code.is_empty() {
            return None;
        }
        let tables = self.read();
        tables
            .by_numeric
            .get(numeric_code)
            .and_then(|code| tables.by_code.get(code))
            .cloned()
    }

    /// Returns true if a record exists for the code.
    pub fn contains(&self, code: &str) -> bool {
        !code.is_empty() && self.read().by_code.contains_key(&normalize_code(code))
    }

    /// Number of registered currencies.
    pub fn len(&self) -> usize {
        self.read().by_code.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.read().by_code.is_empty()
    }

    /// All registered codes, sorted.
    pub fn codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.read().by_code.keys().cloned().collect();
        codes.sort_unstable();
        codes
    }

    /// Copies of all registered records, sorted by code.
    pub fn snapshot(&self) -> Vec<Currency> {
        let mut all: Vec<Currency> = self.read().by_code.values().cloned().collect();
        all.sort_unstable_by(|a, b| a.code.cmp(&b.code));
        all
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
