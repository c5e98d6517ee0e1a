//! Turns pasted bank-notification text ("YOUR CARD *4177 WAS AUTHORISED FOR
//! WWW RIDENOW TECH, €5,15 AT 14:42") into a candidate transaction. Every
//! field is best-effort; a field the text does not yield is simply absent.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::ParsedTransaction;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Amount patterns in priority order: symbol-prefixed first (€, $, £), then
/// symbol-suffixed. The first pattern that matches anywhere wins; later
/// patterns are not tried.
static AMOUNT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"€(\d+(?:,\d{2})?)",        // €5,15
        r"\$(\d+(?:\.\d{2})?)",      // $5.15
        r"£(\d+(?:\.\d{2})?)",       // £5.15
        r"(\d+(?:[.,]\d{2})?)\s*€",  // 5,15 €
        r"(\d+(?:[.,]\d{2})?)\s*\$", // 5.15 $
        r"(\d+(?:[.,]\d{2})?)\s*£",  // 5.15 £
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d{1,2}):(\d{2})").unwrap());

/// Phrase-anchored merchant patterns for known notification formats, plus a
/// generic FOR/TO fallback. Priority order, first match wins.
static DESCRIPTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)(?:AUTHORISED FOR|AUTHORIZED FOR)\s+([^,€$£]+)[,€$£]",
        r"(?i)PAYMENT TO\s+([^,€$£]+)[,€$£]",
        r"(?i)POS TRANSACTION\s+([^,€$£]+)[,€$£]",
        r"(?i)CARD PAYMENT\s+([^,€$£]+)[,€$£]",
        r"(?i)(?:FOR|TO)\s+([\w\s]+?)(?:\s*[,€$£]|\s+\d|$)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Noise stripped before trimming a merchant name out of the captured span.
static MERCHANT_TRIMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)^WWW\s+", r"(?i)\s+TECH$", r"(?i)\s+LTD$", r"(?i)\s+INC$"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

/// Tokens removed in the last-resort cleanup pass: card placeholders,
/// authorisation phrasing, currency amounts, and times.
static NOISE_TOKENS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)YOUR CARD \*\d+",
        r"(?i)WAS AUTHORISED FOR",
        r"(?i)WAS AUTHORIZED FOR",
        r"€\d+(?:,\d{2})?",
        r"\$\d+(?:\.\d{2})?",
        r"£\d+(?:\.\d{2})?",
        r"\d+(?:[.,]\d{2})?\s*[€$£]",
        r"(?i)AT \d{1,2}:\d{2}",
        r"\d{1,2}:\d{2}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Extract a candidate amount, description, and time from free text.
/// Pure and total: never fails, never does I/O.
pub fn parse(text: &str) -> ParsedTransaction {
    let mut parsed = ParsedTransaction::default();
    let normalized = WHITESPACE.replace_all(text.trim(), " ").into_owned();

    for pattern in AMOUNT_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&normalized) {
            // Comma decimal separator normalizes to a dot. A value that
            // still fails to convert falls through to the next pattern.
            let raw = caps[1].replace(',', ".");
            if let Ok(amount) = raw.parse::<f64>() {
                if amount.is_finite() {
                    parsed.amount = Some(amount);
                    break;
                }
            }
        }
    }

    if let Some(caps) = TIME_PATTERN.captures(&normalized) {
        parsed.time = Some(format!("{:0>2}:{}", &caps[1], &caps[2]));
    }

    let mut description = String::new();
    for pattern in DESCRIPTION_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&normalized) {
            description = caps[1].trim().to_string();
            for trim in MERCHANT_TRIMS.iter() {
                description = trim.replace(&description, "").into_owned();
            }
            description = description.trim().to_string();
            break;
        }
    }

    if description.is_empty() {
        let mut cleaned = normalized;
        for token in NOISE_TOKENS.iter() {
            cleaned = token.replace_all(&cleaned, "").into_owned();
        }
        let cleaned = cleaned.trim();
        if !cleaned.is_empty() {
            description = cleaned.chars().take(50).collect();
        }
    }

    if !description.is_empty() {
        parsed.description = Some(description);
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorised_notification() {
        let parsed = parse("YOUR CARD *4177 WAS AUTHORISED FOR WWW RIDENOW TECH, €5,15 AT 14:42");
        assert_eq!(parsed.amount, Some(5.15));
        assert_eq!(parsed.description.as_deref(), Some("RIDENOW"));
        assert_eq!(parsed.time.as_deref(), Some("14:42"));
    }

    #[test]
    fn test_authorized_us_spelling() {
        let parsed = parse("YOUR CARD *9001 WAS AUTHORIZED FOR ACME LTD, $20.00 AT 9:05");
        assert_eq!(parsed.amount, Some(20.0));
        assert_eq!(parsed.description.as_deref(), Some("ACME"));
        assert_eq!(parsed.time.as_deref(), Some("09:05"));
    }

    #[test]
    fn test_amount_before_symbol() {
        let parsed = parse("5.15 $ PAYMENT TO ACME CORP");
        assert_eq!(parsed.amount, Some(5.15));
        assert_eq!(parsed.description.as_deref(), Some("ACME CORP"));
    }

    #[test]
    fn test_payment_to_with_terminator() {
        let parsed = parse("PAYMENT TO GREEN GROCER, £12.40");
        assert_eq!(parsed.amount, Some(12.40));
        assert_eq!(parsed.description.as_deref(), Some("GREEN GROCER"));
    }

    #[test]
    fn test_pos_and_card_payment_phrasings() {
        let parsed = parse("POS TRANSACTION CORNER BAKERY, €3,20");
        assert_eq!(parsed.description.as_deref(), Some("CORNER BAKERY"));

        let parsed = parse("CARD PAYMENT CINEMA CITY INC, $15.50");
        assert_eq!(parsed.description.as_deref(), Some("CINEMA CITY"));
    }

    #[test]
    fn test_euro_prefix_beats_dollar_suffix() {
        // Pattern order is fixed; the euro-prefixed pattern wins even when
        // a dollar amount appears earlier in the text.
        let parsed = parse("charged 20.00 $ then €7,50 refunded");
        assert_eq!(parsed.amount, Some(7.50));
    }

    #[test]
    fn test_no_currency_marker_means_no_amount() {
        let parsed = parse("transfer of 500 received yesterday");
        assert_eq!(parsed.amount, None);
    }

    #[test]
    fn test_whole_amount_without_decimals() {
        let parsed = parse("CARD PAYMENT KIOSK, €4");
        assert_eq!(parsed.amount, Some(4.0));
    }

    #[test]
    fn test_time_hour_is_zero_padded() {
        let parsed = parse("debit at 7:45 this morning");
        assert_eq!(parsed.time.as_deref(), Some("07:45"));
    }

    #[test]
    fn test_first_time_match_wins() {
        let parsed = parse("between 08:15 and 17:30");
        assert_eq!(parsed.time.as_deref(), Some("08:15"));
    }

    #[test]
    fn test_whitespace_is_normalized() {
        let parsed = parse("  PAYMENT   TO\tGREEN   GROCER, €9,99  ");
        assert_eq!(parsed.description.as_deref(), Some("GREEN GROCER"));
        assert_eq!(parsed.amount, Some(9.99));
    }

    #[test]
    fn test_fallback_strips_noise() {
        let parsed = parse("YOUR CARD *4177 WAS AUTHORISED FOR €5,15 AT 14:42");
        // No merchant span before the amount, so the cleanup pass runs and
        // everything known is noise.
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.amount, Some(5.15));
        assert_eq!(parsed.time.as_deref(), Some("14:42"));
    }

    #[test]
    fn test_fallback_keeps_leftover_text() {
        let parsed = parse("GYM MEMBERSHIP RENEWAL 14:00");
        assert_eq!(parsed.description.as_deref(), Some("GYM MEMBERSHIP RENEWAL"));
        assert_eq!(parsed.time.as_deref(), Some("14:00"));
    }

    #[test]
    fn test_fallback_truncates_at_fifty_chars() {
        let long = "X".repeat(80);
        let parsed = parse(&long);
        assert_eq!(parsed.description.as_deref().map(|d| d.len()), Some(50));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), ParsedTransaction::default());
        assert_eq!(parse("   \n\t  "), ParsedTransaction::default());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "YOUR CARD *4177 WAS AUTHORISED FOR WWW RIDENOW TECH, €5,15 AT 14:42";
        assert_eq!(parse(text), parse(text));
    }
}
