//! Core currency logic for Mintmark.
//!
//! This crate contains the in-memory currency registry with ZERO network or
//! filesystem dependencies. Anything that reads the ISO 4217 list feeds it
//! through the registration API.
//!
//! # Modules
//!
//! - `currency` - Currency records, the registry and the built-in ISO 4217 table

pub mod currency;

pub use currency::{Currency, CurrencyRegistry, Registration};
