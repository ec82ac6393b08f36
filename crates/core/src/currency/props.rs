//! Property-based tests for the currency registry.
//!
//! - Lookup case-insensitivity for every seeded code
//! - Unknown-code fallback shape
//! - Registration idempotence
//! - Numeric index consistency under arbitrary re-registration

use std::collections::HashSet;

use proptest::prelude::*;

use super::iso_table::ISO_CURRENCIES;
use super::record::Currency;
use super::registry::CurrencyRegistry;

/// Strategy picking one seeded currency code.
fn seeded_code() -> impl Strategy<Value = &'static str> {
    (0..ISO_CURRENCIES.len()).prop_map(|i| ISO_CURRENCIES[i].code)
}

/// Strategy to re-case a code with an arbitrary upper/lower mask.
fn recased(code: &'static str) -> impl Strategy<Value = String> {
    prop::collection::vec(any::<bool>(), code.len()).prop_map(move |mask| {
        code.chars()
            .zip(mask)
            .map(|(ch, upper)| {
                if upper {
                    ch.to_ascii_uppercase()
                } else {
                    ch.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

/// Codes that can never collide with the three-letter ISO table.
fn unknown_code() -> impl Strategy<Value = String> {
    "[A-Za-z*#]{4,16}"
}

/// Small pools so registrations collide often.
fn registration() -> impl Strategy<Value = (String, String)> {
    (
        prop::sample::select(vec!["AAA", "BBB", "CCC", "DDD"]),
        prop::sample::select(vec!["", "001", "002", "003"]),
    )
        .prop_map(|(code, numeric)| (code.to_string(), numeric.to_string()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// get_currency ignores case for every seeded code.
    #[test]
    fn prop_get_currency_case_insensitive(
        code in seeded_code().prop_flat_map(recased),
    ) {
        let registry = CurrencyRegistry::new();
        let found = registry.get_currency(&code);
        prop_assert!(found.is_some());
        prop_assert_eq!(found, registry.get_currency(&code.to_uppercase()));
        prop_assert_eq!(
            registry.get_currency(&code.to_lowercase()),
            registry.get_currency(&code.to_uppercase())
        );
    }

    /// Unknown codes are absent for strict lookup and synthesized by resolve.
    #[test]
    fn prop_unknown_code_fallback(code in unknown_code()) {
        let registry = CurrencyRegistry::new();
        prop_assert_eq!(registry.get_currency(&code), None);

        let resolved = registry.resolve(&code);
        prop_assert_eq!(&resolved.code, &code.to_uppercase());
        prop_assert_eq!(&resolved.grapheme, &code);
        prop_assert_eq!(resolved.fraction, 0);
        prop_assert!(resolved.numeric_code.is_empty());
    }

    /// resolve always yields the uppercased code.
    #[test]
    fn prop_resolve_code_is_uppercase(code in "\\PC{0,12}") {
        let registry = CurrencyRegistry::new();
        prop_assert_eq!(registry.resolve(&code).code, code.to_uppercase());
    }

    /// equals is code identity regardless of case.
    #[test]
    fn prop_equals_ignores_case(
        code in seeded_code(),
        other in seeded_code(),
    ) {
        let registry = CurrencyRegistry::new();
        let a = registry.resolve(code);
        let b = registry.resolve(&other.to_lowercase());
        prop_assert_eq!(a.equals(&b), code == other);
    }

    /// Registering the same arguments twice leaves the same stored record.
    #[test]
    fn prop_add_currency_idempotent(
        code in "[A-Z]{3,8}",
        grapheme in "\\PC{0,3}",
        template in prop::sample::select(vec!["$1", "1 $", "1$", "$ 1"]),
        decimal in prop::sample::select(vec![".", ","]),
        thousand in prop::sample::select(vec![",", ".", " "]),
        fraction in 0u32..=4,
    ) {
        let registry = CurrencyRegistry::new();
        registry.add_currency(&code, &grapheme, template, decimal, thousand, fraction);
        let first = registry.get_currency(&code);
        let len = registry.len();

        registry.add_currency(&code, &grapheme, template, decimal, thousand, fraction);
        prop_assert_eq!(registry.get_currency(&code), first);
        prop_assert_eq!(registry.len(), len);
    }

    /// The numeric index always agrees with the stored records.
    #[test]
    fn prop_numeric_index_consistent(
        steps in prop::collection::vec(registration(), 1..40),
    ) {
        let registry = CurrencyRegistry::empty();
        for (code, numeric) in &steps {
            registry.register(Currency::new(code, numeric.clone(), "$", "$1", ".", ",", 2));
        }

        let stored: HashSet<String> = registry
            .snapshot()
            .into_iter()
            .map(|c| c.numeric_code)
            .filter(|n| !n.is_empty())
            .collect();

        for numeric in ["001", "002", "003"] {
            let found = registry.currency_by_numeric_code(numeric);
            if stored.contains(numeric) {
                let found = found.expect("indexed numeric code must resolve");
                prop_assert_eq!(&found.numeric_code, numeric);
                prop_assert_eq!(registry.get_currency(&found.code), Some(found.clone()));
            } else {
                prop_assert_eq!(found, None);
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Specific example: every seeded numeric code resolves back to its row.
    #[test]
    fn test_every_seeded_numeric_code_round_trips() {
        let registry = CurrencyRegistry::new();
        for seed in ISO_CURRENCIES {
            let found = registry.currency_by_numeric_code(seed.numeric_code).unwrap();
            assert_eq!(found.code, seed.code);
            assert_eq!(found.numeric_code, seed.numeric_code);
        }
    }
}
