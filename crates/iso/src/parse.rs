//! ISO 4217 list one XML model.
//!
//! Mirrors the SIX Group publication:
//!
//! ```xml
//! <ISO_4217 Pblshd="2024-06-25">
//!   <CcyTbl>
//!     <CcyNtry>
//!       <CtryNm>BRAZIL</CtryNm>
//!       <CcyNm>Brazilian Real</CcyNm>
//!       <Ccy>BRL</Ccy>
//!       <CcyNbr>986</CcyNbr>
//!       <CcyMnrUnts>2</CcyMnrUnts>
//!     </CcyNtry>
//!   </CcyTbl>
//! </ISO_4217>
//! ```
//!
//! One row per country, so a currency shared by many countries appears many
//! times. Rows like ANTARCTICA carry no currency at all.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use mintmark_shared::{AppError, AppResult};
use serde::Deserialize;

/// Minor-unit marker for codes without a fraction (metals, testing codes).
const NOT_APPLICABLE: &str = "N.A.";

/// Root `ISO_4217` element.
#[derive(Debug, Clone, Deserialize)]
pub struct IsoList {
    /// Publication date as written in the document.
    #[serde(rename = "@Pblshd", default)]
    pub published: String,
    /// Currency table.
    #[serde(rename = "CcyTbl", default)]
    pub table: CurrencyTable,
}

/// `CcyTbl` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyTable {
    /// Country/currency rows.
    #[serde(rename = "CcyNtry", default)]
    pub entries: Vec<IsoEntry>,
}

/// `CcyNtry` element: one country and the currency it uses.
#[derive(Debug, Clone, Deserialize)]
pub struct IsoEntry {
    /// Country name.
    #[serde(rename = "CtryNm", default)]
    pub country: String,
    /// Currency name.
    #[serde(rename = "CcyNm", default)]
    pub currency_name: CurrencyName,
    /// Alphabetic code; absent on placeholder rows.
    #[serde(rename = "Ccy")]
    code: Option<String>,
    /// Three-digit numeric code.
    #[serde(rename = "CcyNbr")]
    numeric_code: Option<String>,
    /// Minor-unit digits or "N.A.".
    #[serde(rename = "CcyMnrUnts")]
    minor_units: Option<String>,
}

/// `CcyNm` element, optionally flagged as a fund.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrencyName {
    /// `IsFund="true"` marks fund codes such as BOV or CLF.
    #[serde(rename = "@IsFund", default)]
    pub is_fund: bool,
    /// Name text.
    #[serde(rename = "$text", default)]
    pub name: String,
}

/// One distinct currency from the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsoCurrency {
    /// Alphabetic code.
    pub code: String,
    /// Numeric code.
    pub numeric_code: String,
    /// Minor units; `None` where the list says "N.A.".
    pub fraction: Option<u32>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl IsoEntry {
    /// Alphabetic code, if the row has one.
    pub fn code(&self) -> Option<&str> {
        non_empty(self.code.as_deref())
    }

    /// Numeric code, if the row has one.
    pub fn numeric_code(&self) -> Option<&str> {
        non_empty(self.numeric_code.as_deref())
    }

    /// Minor-unit digits. `None` for "N.A." or a missing value.
    pub fn minor_units(&self) -> Option<u32> {
        non_empty(self.minor_units.as_deref())
            .filter(|units| *units != NOT_APPLICABLE)
            .and_then(|units| units.parse().ok())
    }

    /// Rows such as "No universal currency" that name no currency.
    pub fn is_placeholder(&self) -> bool {
        self.code().is_none()
    }
}

impl IsoList {
    /// All rows, placeholders included.
    pub fn entries(&self) -> &[IsoEntry] {
        &self.table.entries
    }

    /// Publication date, when it parses as `YYYY-MM-DD`.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.published.trim(), "%Y-%m-%d").ok()
    }

    /// Distinct currencies sorted by code. The first row wins for a code
    /// listed more than once.
    pub fn currencies(&self) -> Vec<IsoCurrency> {
        let mut by_code: BTreeMap<&str, IsoCurrency> = BTreeMap::new();
        for entry in &self.table.entries {
            let Some(code) = entry.code() else {
                continue;
            };
            by_code.entry(code).or_insert_with(|| IsoCurrency {
                code: code.to_string(),
                numeric_code: entry.numeric_code().unwrap_or_default().to_string(),
                fraction: entry.minor_units(),
            });
        }
        by_code.into_values().collect()
    }
}

/// Parses the ISO 4217 list one XML document.
///
/// # Errors
///
/// `AppError::Parse` for malformed XML, `AppError::Validation` when the
/// document holds no currency rows.
pub fn parse_iso_list(xml: &str) -> AppResult<IsoList> {
    let xml = xml.trim_start_matches('\u{feff}');
    let list: IsoList = quick_xml::de::from_str(xml)
        .map_err(|e| AppError::Parse(format!("ISO 4217 list: {e}")))?;

    if list.table.entries.is_empty() {
        return Err(AppError::Validation(
            "ISO 4217 list contains no currency entries".to_string(),
        ));
    }
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<ISO_4217 Pblshd="2024-06-25">
	<CcyTbl>
		<CcyNtry>
			<CtryNm>ANTARCTICA</CtryNm>
			<CcyNm>No universal currency</CcyNm>
		</CcyNtry>
		<CcyNtry>
			<CtryNm>BOLIVIA (PLURINATIONAL STATE OF)</CtryNm>
			<CcyNm IsFund="true">Mvdol</CcyNm>
			<Ccy>BOV</Ccy>
			<CcyNbr>984</CcyNbr>
			<CcyMnrUnts>2</CcyMnrUnts>
		</CcyNtry>
		<CcyNtry>
			<CtryNm>BRAZIL</CtryNm>
			<CcyNm>Brazilian Real</CcyNm>
			<Ccy>BRL</Ccy>
			<CcyNbr>986</CcyNbr>
			<CcyMnrUnts>2</CcyMnrUnts>
		</CcyNtry>
		<CcyNtry>
			<CtryNm>ZZ08_Gold</CtryNm>
			<CcyNm>Gold</CcyNm>
			<Ccy>XAU</Ccy>
			<CcyNbr>959</CcyNbr>
			<CcyMnrUnts>N.A.</CcyMnrUnts>
		</CcyNtry>
		<CcyNtry>
			<CtryNm>AUSTRIA</CtryNm>
			<CcyNm>Euro</CcyNm>
			<Ccy>EUR</Ccy>
			<CcyNbr>978</CcyNbr>
			<CcyMnrUnts>2</CcyMnrUnts>
		</CcyNtry>
		<CcyNtry>
			<CtryNm>BELGIUM</CtryNm>
			<CcyNm>Euro</CcyNm>
			<Ccy>EUR</Ccy>
			<CcyNbr>978</CcyNbr>
			<CcyMnrUnts>2</CcyMnrUnts>
		</CcyNtry>
	</CcyTbl>
</ISO_4217>
"#;

    #[test]
    fn test_parse_sample() {
        let list = parse_iso_list(SAMPLE).unwrap();
        assert_eq!(list.published, "2024-06-25");
        assert_eq!(
            list.published_on(),
            NaiveDate::from_ymd_opt(2024, 6, 25)
        );
        assert_eq!(list.entries().len(), 6);
    }

    #[test]
    fn test_placeholder_row() {
        let list = parse_iso_list(SAMPLE).unwrap();
        let antarctica = &list.entries()[0];
        assert!(antarctica.is_placeholder());
        assert_eq!(antarctica.currency_name.name, "No universal currency");
        assert_eq!(antarctica.numeric_code(), None);
        assert_eq!(antarctica.minor_units(), None);
    }

    #[test]
    fn test_fund_flag() {
        let list = parse_iso_list(SAMPLE).unwrap();
        let bov = &list.entries()[1];
        assert!(bov.currency_name.is_fund);
        assert_eq!(bov.currency_name.name, "Mvdol");
        assert!(!list.entries()[2].currency_name.is_fund);
    }

    #[test]
    fn test_currencies_deduplicated_and_sorted() {
        let list = parse_iso_list(SAMPLE).unwrap();
        let currencies = list.currencies();
        let codes: Vec<&str> = currencies.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["BOV", "BRL", "EUR", "XAU"]);
        assert_eq!(
            currencies[1],
            IsoCurrency {
                code: "BRL".to_string(),
                numeric_code: "986".to_string(),
                fraction: Some(2),
            }
        );
        assert_eq!(currencies[3].fraction, None);
    }

    #[test]
    fn test_parse_with_byte_order_mark() {
        let with_bom = format!("\u{feff}{SAMPLE}");
        assert!(parse_iso_list(&with_bom).is_ok());
    }

    #[rstest]
    #[case("<ISO_4217><CcyTbl><CcyNtry>")]
    #[case("not xml at all")]
    fn test_parse_malformed(#[case] xml: &str) {
        let err = parse_iso_list(xml).unwrap_err();
        assert!(matches!(err, AppError::Parse(_) | AppError::Validation(_)), "{err}");
    }

    #[test]
    fn test_parse_empty_table() {
        let err = parse_iso_list(r#"<ISO_4217 Pblshd="2024-06-25"><CcyTbl></CcyTbl></ISO_4217>"#)
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_unparseable_publication_date() {
        let list = IsoList {
            published: "June 2024".to_string(),
            table: CurrencyTable::default(),
        };
        assert_eq!(list.published_on(), None);
    }
}
