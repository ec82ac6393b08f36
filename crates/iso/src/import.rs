//! Registering ISO 4217 list entries in a currency registry.

use chrono::NaiveDate;
use mintmark_core::{Currency, CurrencyRegistry, Registration};
use mintmark_shared::AppResult;
use tracing::info;

use crate::parse::{IsoCurrency, IsoList, parse_iso_list};
use crate::source::{IsoSource, ListOrigin};

/// Template for currencies that only the ISO list knows about.
const DEFAULT_TEMPLATE: &str = "1 $";
const DEFAULT_DECIMAL: &str = ".";
const DEFAULT_THOUSAND: &str = ",";

/// Counts from one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Codes that were not registered before.
    pub added: usize,
    /// Existing codes whose numeric code or fraction changed.
    pub updated: usize,
    /// Existing codes that already matched the list.
    pub unchanged: usize,
    /// Rows without a currency ("No universal currency").
    pub skipped: usize,
}

impl ImportSummary {
    /// Currencies present in the list.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.added + self.updated + self.unchanged
    }
}

/// Outcome of [`refresh`].
#[derive(Debug, Clone)]
pub struct RefreshReport {
    /// Where the list was read from.
    pub origin: ListOrigin,
    /// Publication date of the list, if readable.
    pub published: Option<NaiveDate>,
    /// Import counts.
    pub summary: ImportSummary,
}

/// Registers every currency of `list` in `registry`.
///
/// Known codes keep their symbol, template and separators and take the
/// numeric code and minor units from the list. Codes the registry has never
/// seen get the code itself as symbol and plain `1 $` formatting. A minor
/// unit of "N.A." keeps whatever fraction was already registered (0 for new
/// codes), and a row without a numeric code keeps the registered one.
///
/// Each currency is merged under the registry's write guard, so
/// registrations made while an import runs are never overwritten with
/// stale values.
pub fn import_into(registry: &CurrencyRegistry, list: &IsoList) -> ImportSummary {
    let mut summary = ImportSummary {
        skipped: list.entries().iter().filter(|e| e.is_placeholder()).count(),
        ..ImportSummary::default()
    };

    for iso in list.currencies() {
        let outcome = registry.upsert_with(&iso.code, |existing| match existing {
            Some(existing) => merge(existing, &iso),
            None => Currency::new(
                &iso.code,
                iso.numeric_code.clone(),
                iso.code.clone(),
                DEFAULT_TEMPLATE,
                DEFAULT_DECIMAL,
                DEFAULT_THOUSAND,
                iso.fraction.unwrap_or(0),
            ),
        });

        match outcome {
            Registration::Added => summary.added += 1,
            Registration::Replaced => summary.updated += 1,
            Registration::Unchanged => summary.unchanged += 1,
            Registration::Ignored => summary.skipped += 1,
        }
    }

    summary
}

fn merge(existing: &Currency, iso: &IsoCurrency) -> Currency {
    let numeric_code = if iso.numeric_code.is_empty() {
        existing.numeric_code.clone()
    } else {
        iso.numeric_code.clone()
    };

    Currency {
        numeric_code,
        fraction: iso.fraction.unwrap_or(existing.fraction),
        ..existing.clone()
    }
}

/// Fetches, parses and imports the ISO 4217 list.
///
/// # Errors
///
/// Propagates fetch and parse errors. The registry is untouched when an
/// error is returned.
pub async fn refresh(registry: &CurrencyRegistry, source: &IsoSource) -> AppResult<RefreshReport> {
    let fetched = source.fetch().await?;
    let list = parse_iso_list(&fetched.body)?;
    let summary = import_into(registry, &list);

    info!(
        origin = fetched.origin.as_str(),
        published = %list.published,
        added = summary.added,
        updated = summary.updated,
        unchanged = summary.unchanged,
        skipped = summary.skipped,
        "ISO 4217 list imported"
    );

    Ok(RefreshReport {
        origin: fetched.origin,
        published: list.published_on(),
        summary,
    })
}
