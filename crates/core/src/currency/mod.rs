//! Currency metadata records and the registry that resolves them.

pub mod iso_table;
pub mod record;
pub mod registry;

#[cfg(test)]
mod props;

pub use iso_table::{ISO_CURRENCIES, SeedCurrency};
pub use record::Currency;
pub use registry::{CurrencyRegistry, Registration};
