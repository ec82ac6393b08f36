//! ISO 4217 list import for Mintmark.
//!
//! Feeds the official ISO 4217 "list one" into a [`CurrencyRegistry`]:
//!
//! - `source` - download the list, falling back to a local copy
//! - `parse` - deserialize the XML publication
//! - `import` - register every listed currency
//!
//! [`CurrencyRegistry`]: mintmark_core::CurrencyRegistry

pub mod import;
pub mod parse;
pub mod source;

pub use import::{ImportSummary, RefreshReport, import_into, refresh};
pub use parse::{CurrencyName, IsoCurrency, IsoEntry, IsoList, parse_iso_list};
pub use source::{FetchedList, IsoSource, ListOrigin};
