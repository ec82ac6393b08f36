//! Built-in ISO 4217 currency table.
//!
//! Every registry starts from this table. Codes marked "N.A." in the ISO list
//! (precious metals, bond units, testing codes) carry a fraction of 0.

use super::record::Currency;

/// One row of the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCurrency {
    /// Alphabetic code.
    pub code: &'static str,
    /// Numeric code.
    pub numeric_code: &'static str,
    /// Display symbol.
    pub grapheme: &'static str,
    /// Print template.
    pub template: &'static str,
    /// Decimal separator.
    pub decimal: &'static str,
    /// Thousands separator.
    pub thousand: &'static str,
    /// Minor-unit digits.
    pub fraction: u32,
}

impl SeedCurrency {
    /// Builds the owned record stored in a registry.
    #[must_use]
    pub fn to_currency(&self) -> Currency {
        Currency::new(
            self.code,
            self.numeric_code,
            self.grapheme,
            self.template,
            self.decimal,
            self.thousand,
            self.fraction,
        )
    }
}

const fn seed(
    code: &'static str,
    numeric_code: &'static str,
    grapheme: &'static str,
    template: &'static str,
    decimal: &'static str,
    thousand: &'static str,
    fraction: u32,
) -> SeedCurrency {
    SeedCurrency {
        code,
        numeric_code,
        grapheme,
        template,
        decimal,
        thousand,
        fraction,
    }
}

/// ISO 4217 currencies, sorted by code.
pub static ISO_CURRENCIES: &[SeedCurrency] = &[
    seed("AED", "784", ".\u{62f}.\u{625}", "1 $", ".", ",", 2),
    seed("AFN", "971", "\u{60b}", "1 $", ".", ",", 2),
    seed("ALL", "008", "L", "$1", ".", ",", 2),
    seed("AMD", "051", "\u{564}\u{580}.", "1 $", ".", ",", 2),
    seed("AOA", "973", "Kz", "1$", ".", ",", 2),
    seed("ARS", "032", "$", "$1", ",", ".", 2),
    seed("AUD", "036", "$", "$1", ".", ",", 2),
    seed("AWG", "533", "\u{192}", "$1", ".", ",", 2),
    seed("AZN", "944", "\u{20bc}", "$1", ".", ",", 2),
    seed("BAM", "977", "KM", "$1", ".", ",", 2),
    seed("BBD", "052", "$", "$1", ".", ",", 2),
    seed("BDT", "050", "\u{9f3}", "$1", ".", ",", 2),
    seed("BGN", "975", "\u{43b}\u{432}", "$1", ".", ",", 2),
    seed("BHD", "048", ".\u{62f}.\u{628}", "1 $", ".", ",", 3),
    seed("BIF", "108", "Fr", "1$", ".", ",", 0),
    seed("BMD", "060", "$", "$1", ".", ",", 2),
    seed("BND", "096", "$", "$1", ".", ",", 2),
    seed("BOB", "068", "Bs.", "$1", ".", ",", 2),
    seed("BOV", "984", "Bs.", "$1", ".", ",", 2),
    seed("BRL", "986", "R$", "$1", ",", ".", 2),
    seed("BSD", "044", "$", "$1", ".", ",", 2),
    seed("BTN", "064", "Nu.", "1$", ".", ",", 2),
    seed("BWP", "072", "P", "$1", ".", ",", 2),
    seed("BYN", "933", "p.", "1 $", ",", " ", 2),
    seed("BZD", "084", "BZ$", "$1", ".", ",", 2),
    seed("CAD", "124", "$", "$1", ".", ",", 2),
    seed("CDF", "976", "FC", "1$", ".", ",", 2),
    seed("CHE", "947", "CHE", "1 $", ".", ",", 2),
    seed("CHF", "756", "CHF", "1 $", ".", ",", 2),
    seed("CHW", "948", "CHW", "1 $", ".", ",", 2),
    seed("CLF", "990", "UF", "$1", ",", ".", 4),
    seed("CLP", "152", "$", "$1", ",", ".", 0),
    seed("CNY", "156", "\u{5143}", "1 $", ".", ",", 2),
    seed("COP", "170", "$", "$1", ",", ".", 2),
    seed("COU", "970", "COU", "$1", ",", ".", 2),
    seed("CRC", "188", "\u{20a1}", "$1", ",", ".", 2),
    seed("CUP", "192", "$MN", "$1", ".", ",", 2),
    seed("CVE", "132", "$", "$1", ".", ",", 2),
    seed("CZK", "203", "K\u{10d}", "1 $", ",", " ", 2),
    seed("DJF", "262", "Fdj", "1 $", ".", ",", 0),
    seed("DKK", "208", "kr", "$ 1", ",", ".", 2),
    seed("DOP", "214", "RD$", "$1", ".", ",", 2),
    seed("DZD", "012", ".\u{62f}.\u{62c}", "1 $", ".", ",", 2),
    seed("EGP", "818", "\u{a3}", "$1", ".", ",", 2),
    seed("ERN", "232", "Nfk", "1 $", ".", ",", 2),
    seed("ETB", "230", "Br", "1 $", ".", ",", 2),
    seed("EUR", "978", "\u{20ac}", "$1", ".", ",", 2),
    seed("FJD", "242", "$", "$1", ".", ",", 2),
    seed("FKP", "238", "\u{a3}", "$1", ".", ",", 2),
    seed("GBP", "826", "\u{a3}", "$1", ".", ",", 2),
    seed("GEL", "981", "\u{10da}", "1 $", ".", ",", 2),
    seed("GHS", "936", "\u{20b5}", "$1", ".", ",", 2),
    seed("GIP", "292", "\u{a3}", "$1", ".", ",", 2),
    seed("GMD", "270", "D", "1 $", ".", ",", 2),
    seed("GNF", "324", "FG", "1 $", ".", ",", 0),
    seed("GTQ", "320", "Q", "$1", ".", ",", 2),
    seed("GYD", "328", "$", "$1", ".", ",", 2),
    seed("HKD", "344", "$", "$1", ".", ",", 2),
    seed("HNL", "340", "L", "$1", ".", ",", 2),
    seed("HTG", "332", "G", "1 $", ".", ",", 2),
    seed("HUF", "348", "Ft", "1 $", ",", " ", 2),
    seed("IDR", "360", "Rp", "$1", ",", ".", 2),
    seed("ILS", "376", "\u{20aa}", "$1", ".", ",", 2),
    seed("INR", "356", "\u{20b9}", "$1", ".", ",", 2),
    seed("IQD", "368", ".\u{639}.\u{62f}", "1 $", ".", ",", 3),
    seed("IRR", "364", "\u{fdfc}", "1 $", ".", ",", 2),
    seed("ISK", "352", "kr", "1 $", ",", ".", 0),
    seed("JMD", "388", "J$", "$1", ".", ",", 2),
    seed("JOD", "400", ".\u{62f}.\u{625}", "1 $", ".", ",", 3),
    seed("JPY", "392", "\u{a5}", "$1", ".", ",", 0),
    seed("KES", "404", "KSh", "$1", ".", ",", 2),
    seed("KGS", "417", "\u{441}\u{43e}\u{43c}", "$1", ".", ",", 2),
    seed("KHR", "116", "\u{17db}", "$1", ".", ",", 2),
    seed("KMF", "174", "CF", "$1", ".", ",", 0),
    seed("KPW", "408", "\u{20a9}", "$1", ".", ",", 2),
    seed("KRW", "410", "\u{20a9}", "$1", ".", ",", 0),
    seed("KWD", "414", ".\u{62f}.\u{643}", "1 $", ".", ",", 3),
    seed("KYD", "136", "$", "$1", ".", ",", 2),
    seed("KZT", "398", "\u{20b8}", "$1", ".", ",", 2),
    seed("LAK", "418", "\u{20ad}", "1 $", ".", ",", 2),
    seed("LBP", "422", "\u{a3}", "$1", ".", ",", 2),
    seed("LKR", "144", "\u{20a8}", "$1", ".", ",", 2),
    seed("LRD", "430", "$", "$1", ".", ",", 2),
    seed("LSL", "426", "L", "$1", ".", ",", 2),
    seed("LYD", "434", ".\u{62f}.\u{644}", "1 $", ".", ",", 3),
    seed("MAD", "504", ".\u{62f}.\u{645}", "1 $", ".", ",", 2),
    seed("MDL", "498", "lei", "1 $", ".", ",", 2),
    seed("MGA", "969", "Ar", "$1", ".", ",", 2),
    seed("MKD", "807", "\u{434}\u{435}\u{43d}", "$1", ".", ",", 2),
    seed("MMK", "104", "K", "$1", ".", ",", 2),
    seed("MNT", "496", "\u{20ae}", "$1", ".", ",", 2),
    seed("MOP", "446", "P", "1 $", ".", ",", 2),
    seed("MRU", "929", "UM", "$1", ".", ",", 2),
    seed("MUR", "480", "\u{20a8}", "$1", ".", ",", 2),
    seed("MVR", "462", "MVR", "1 $", ".", ",", 2),
    seed("MWK", "454", "MK", "$1", ".", ",", 2),
    seed("MXN", "484", "$", "$1", ".", ",", 2),
    seed("MXV", "979", "UDI", "1 $", ".", ",", 2),
    seed("MYR", "458", "RM", "$1", ".", ",", 2),
    seed("MZN", "943", "MT", "$1", ".", ",", 2),
    seed("NAD", "516", "$", "$1", ".", ",", 2),
    seed("NGN", "566", "\u{20a6}", "$1", ".", ",", 2),
    seed("NIO", "558", "C$", "$1", ".", ",", 2),
    seed("NOK", "578", "kr", "1 $", ",", " ", 2),
    seed("NPR", "524", "\u{20a8}", "$1", ".", ",", 2),
    seed("NZD", "554", "$", "$1", ".", ",", 2),
    seed("OMR", "512", "\u{fdfc}", "1 $", ".", ",", 3),
    seed("PAB", "590", "B/.", "$1", ".", ",", 2),
    seed("PEN", "604", "S/", "$1", ".", ",", 2),
    seed("PGK", "598", "K", "1 $", ".", ",", 2),
    seed("PHP", "608", "\u{20b1}", "$1", ".", ",", 2),
    seed("PKR", "586", "\u{20a8}", "$1", ".", ",", 2),
    seed("PLN", "985", "z\u{142}", "1 $", ",", " ", 2),
    seed("PYG", "600", "Gs", "1$", ",", ".", 0),
    seed("QAR", "634", "\u{fdfc}", "1 $", ".", ",", 2),
    seed("RON", "946", "lei", "$1", ",", ".", 2),
    seed("RSD", "941", "\u{414}\u{438}\u{43d}.", "$1", ".", ",", 2),
    seed("RUB", "643", "\u{20bd}", "1 $", ",", " ", 2),
    seed("RWF", "646", "FRw", "1 $", ".", ",", 0),
    seed("SAR", "682", "\u{fdfc}", "1 $", ".", ",", 2),
    seed("SBD", "090", "$", "$1", ".", ",", 2),
    seed("SCR", "690", "\u{20a8}", "$1", ".", ",", 2),
    seed("SDG", "938", "\u{a3}", "$1", ".", ",", 2),
    seed("SEK", "752", "kr", "1 $", ",", " ", 2),
    seed("SGD", "702", "$", "$1", ".", ",", 2),
    seed("SHP", "654", "\u{a3}", "$1", ".", ",", 2),
    seed("SLE", "925", "Le", "1 $", ".", ",", 2),
    seed("SOS", "706", "Sh", "1 $", ".", ",", 2),
    seed("SRD", "968", "$", "$1", ".", ",", 2),
    seed("SSP", "728", "\u{a3}", "$1", ".", ",", 2),
    seed("STN", "930", "Db", "1 $", ".", ",", 2),
    seed("SVC", "222", "\u{20a1}", "$1", ".", ",", 2),
    seed("SYP", "760", "\u{a3}", "1 $", ".", ",", 2),
    seed("SZL", "748", "L", "$1", ".", ",", 2),
    seed("THB", "764", "\u{e3f}", "$1", ".", ",", 2),
    seed("TJS", "972", "SM", "$1", ".", ",", 2),
    seed("TMT", "934", "T", "1 $", ".", ",", 2),
    seed("TND", "788", ".\u{62f}.\u{62a}", "1 $", ".", ",", 3),
    seed("TOP", "776", "T$", "$1", ".", ",", 2),
    seed("TRY", "949", "\u{20ba}", "$1", ",", ".", 2),
    seed("TTD", "780", "TT$", "$1", ".", ",", 2),
    seed("TWD", "901", "NT$", "$1", ".", ",", 2),
    seed("TZS", "834", "TSh", "$1", ".", ",", 2),
    seed("UAH", "980", "\u{20b4}", "1 $", ",", " ", 2),
    seed("UGX", "800", "USh", "1 $", ".", ",", 0),
    seed("USD", "840", "$", "$1", ".", ",", 2),
    seed("USN", "997", "$", "$1", ".", ",", 2),
    seed("UYI", "940", "UYI", "$1", ",", ".", 0),
    seed("UYU", "858", "$U", "$1", ",", ".", 2),
    seed("UYW", "927", "UP", "$1", ",", ".", 4),
    seed("UZS", "860", "so\u{2bb}m", "$1", ".", ",", 2),
    seed("VED", "926", "Bs.D", "$1", ",", ".", 2),
    seed("VES", "928", "Bs.S", "$1", ",", ".", 2),
    seed("VND", "704", "\u{20ab}", "1 $", ",", ".", 0),
    seed("VUV", "548", "Vt", "$1", ".", ",", 0),
    seed("WST", "882", "T", "1 $", ".", ",", 2),
    seed("XAF", "950", "Fr", "1 $", ".", ",", 0),
    seed("XAG", "961", "XAG", "1 $", ".", ",", 0),
    seed("XAU", "959", "XAU", "1 $", ".", ",", 0),
    seed("XBA", "955", "XBA", "1 $", ".", ",", 0),
    seed("XBB", "956", "XBB", "1 $", ".", ",", 0),
    seed("XBC", "957", "XBC", "1 $", ".", ",", 0),
    seed("XBD", "958", "XBD", "1 $", ".", ",", 0),
    seed("XCD", "951", "$", "$1", ".", ",", 2),
    seed("XCG", "532", "Cg", "$1", ".", ",", 2),
    seed("XDR", "960", "SDR", "1 $", ".", ",", 0),
    seed("XOF", "952", "CFA", "1 $", ".", ",", 0),
    seed("XPD", "964", "XPD", "1 $", ".", ",", 0),
    seed("XPF", "953", "\u{20a3}", "1 $", ".", ",", 0),
    seed("XPT", "962", "XPT", "1 $", ".", ",", 0),
    seed("XSU", "994", "Sucre", "1 $", ".", ",", 0),
    seed("XTS", "963", "XTS", "1 $", ".", ",", 0),
    seed("XUA", "965", "XUA", "1 $", ".", ",", 0),
    seed("XXX", "999", "XXX", "1 $", ".", ",", 0),
    seed("YER", "886", "\u{fdfc}", "1 $", ".", ",", 2),
    seed("ZAR", "710", "R", "$1", ".", ",", 2),
    seed("ZMW", "967", "ZK", "$1", ".", ",", 2),
    seed("ZWG", "924", "ZiG", "$1", ".", ",", 2),
];
