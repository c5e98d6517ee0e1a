/// Supported display currencies: (code, symbol, name).
pub const CURRENCIES: &[(&str, &str, &str)] = &[
    ("EUR", "\u{20AC}", "Euro"),
    ("USD", "$", "US Dollar"),
    ("GBP", "\u{00A3}", "British Pound"),
    ("JPY", "\u{00A5}", "Japanese Yen"),
    ("CAD", "C$", "Canadian Dollar"),
    ("AUD", "A$", "Australian Dollar"),
    ("CHF", "Fr", "Swiss Franc"),
];

pub const DEFAULT_CURRENCY: &str = "EUR";

pub fn symbol_for(code: &str) -> Option<&'static str> {
    CURRENCIES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, symbol, _)| *symbol)
}

/// Format a float as a currency amount with thousands separators: €1,234.56
pub fn money(val: f64, symbol: &str) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let parts: Vec<&str> = cents.split('.').collect();
    let int_part = parts[0];
    let dec_part = parts[1];

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative {
        format!("-{symbol}{with_commas}.{dec_part}")
    } else {
        format!("{symbol}{with_commas}.{dec_part}")
    }
}
