//! Static currency catalog and amount formatting.
//!
//! The region table is a process-wide read-only constant; the CLI config
//! picks the active region. No runtime detection.

/// Display metadata for one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_CURRENCY: CurrencyInfo = CurrencyInfo {
    code: "USD",
    symbol: "$",
    name: "US Dollar",
};

/// Region code -> currency, in catalog order.
pub const CURRENCIES: &[(&str, CurrencyInfo)] = &[
    ("US", CurrencyInfo { code: "USD", symbol: "$", name: "US Dollar" }),
    ("IN", CurrencyInfo { code: "INR", symbol: "₹", name: "Indian Rupee" }),
    ("GB", CurrencyInfo { code: "GBP", symbol: "£", name: "British Pound" }),
    ("EU", CurrencyInfo { code: "EUR", symbol: "€", name: "Euro" }),
    ("JP", CurrencyInfo { code: "JPY", symbol: "¥", name: "Japanese Yen" }),
    ("CA", CurrencyInfo { code: "CAD", symbol: "C$", name: "Canadian Dollar" }),
    ("AU", CurrencyInfo { code: "AUD", symbol: "A$", name: "Australian Dollar" }),
    ("CN", CurrencyInfo { code: "CNY", symbol: "¥", name: "Chinese Yuan" }),
    ("KR", CurrencyInfo { code: "KRW", symbol: "₩", name: "South Korean Won" }),
    ("SG", CurrencyInfo { code: "SGD", symbol: "S$", name: "Singapore Dollar" }),
    ("HK", CurrencyInfo { code: "HKD", symbol: "HK$", name: "Hong Kong Dollar" }),
    ("CH", CurrencyInfo { code: "CHF", symbol: "CHF", name: "Swiss Franc" }),
    ("SE", CurrencyInfo { code: "SEK", symbol: "kr", name: "Swedish Krona" }),
    ("NO", CurrencyInfo { code: "NOK", symbol: "kr", name: "Norwegian Krone" }),
    ("DK", CurrencyInfo { code: "DKK", symbol: "kr", name: "Danish Krone" }),
    ("BR", CurrencyInfo { code: "BRL", symbol: "R$", name: "Brazilian Real" }),
    ("MX", CurrencyInfo { code: "MXN", symbol: "$", name: "Mexican Peso" }),
    ("RU", CurrencyInfo { code: "RUB", symbol: "₽", name: "Russian Ruble" }),
    ("ZA", CurrencyInfo { code: "ZAR", symbol: "R", name: "South African Rand" }),
    ("AE", CurrencyInfo { code: "AED", symbol: "د.إ", name: "UAE Dirham" }),
    ("SA", CurrencyInfo { code: "SAR", symbol: "﷼", name: "Saudi Riyal" }),
    ("TH", CurrencyInfo { code: "THB", symbol: "฿", name: "Thai Baht" }),
    ("MY", CurrencyInfo { code: "MYR", symbol: "RM", name: "Malaysian Ringgit" }),
    ("ID", CurrencyInfo { code: "IDR", symbol: "Rp", name: "Indonesian Rupiah" }),
    ("PH", CurrencyInfo { code: "PHP", symbol: "₱", name: "Philippine Peso" }),
    ("VN", CurrencyInfo { code: "VND", symbol: "₫", name: "Vietnamese Dong" }),
    ("BD", CurrencyInfo { code: "BDT", symbol: "৳", name: "Bangladeshi Taka" }),
    ("PK", CurrencyInfo { code: "PKR", symbol: "₨", name: "Pakistani Rupee" }),
    ("LK", CurrencyInfo { code: "LKR", symbol: "₨", name: "Sri Lankan Rupee" }),
    ("NP", CurrencyInfo { code: "NPR", symbol: "₨", name: "Nepalese Rupee" }),
    ("EG", CurrencyInfo { code: "EGP", symbol: "£", name: "Egyptian Pound" }),
    ("NG", CurrencyInfo { code: "NGN", symbol: "₦", name: "Nigerian Naira" }),
    ("KE", CurrencyInfo { code: "KES", symbol: "KSh", name: "Kenyan Shilling" }),
    ("GH", CurrencyInfo { code: "GHS", symbol: "₵", name: "Ghanaian Cedi" }),
    ("TZ", CurrencyInfo { code: "TZS", symbol: "TSh", name: "Tanzanian Shilling" }),
    ("UG", CurrencyInfo { code: "UGX", symbol: "USh", name: "Ugandan Shilling" }),
    ("ZM", CurrencyInfo { code: "ZMW", symbol: "ZK", name: "Zambian Kwacha" }),
    ("ZW", CurrencyInfo { code: "ZWL", symbol: "Z$", name: "Zimbabwean Dollar" }),
];

/// Look up a currency by region code ("IN", "US", ...).
pub fn currency_for_region(region: &str) -> Option<&'static CurrencyInfo> {
    let region = region.to_ascii_uppercase();
    CURRENCIES.iter().find(|(r, _)| *r == region).map(|(_, c)| c)
}

/// Resolve a BCP-47 tag like "en-IN" to a currency. Falls back from the
/// region subtag to a handful of bare-language defaults, then to USD.
pub fn currency_for_locale(locale: &str) -> &'static CurrencyInfo {
    if let Some(region) = locale.split(['-', '_']).nth(1) {
        if let Some(cur) = currency_for_region(region) {
            return cur;
        }
    }

    let lang = locale
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    let region = match lang.as_str() {
        "hi" => "IN",
        "ja" => "JP",
        "zh" => "CN",
        "ko" => "KR",
        "de" | "fr" | "es" | "it" => "EU",
        _ => return &DEFAULT_CURRENCY,
    };
    currency_for_region(region).unwrap_or(&DEFAULT_CURRENCY)
}

/// Format an amount with the currency symbol, thousands separators, and two
/// decimals: `format_amount(2500.0, &INR)` -> "₹2,500.00".
pub fn format_amount(amount: f64, currency: &CurrencyInfo) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{}{}.{}", currency.symbol, grouped, dec_part)
    } else {
        format!("{}{}.{}", currency.symbol, grouped, dec_part)
    }
}
