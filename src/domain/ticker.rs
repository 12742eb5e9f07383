//! Price extraction from the exchange's raw market listing.
//!
//! The exchange returns one large JSON-ish body listing every market. We do
//! not parse it as JSON: the price is located by plain substring search so
//! the behavior stays byte-for-byte predictable against this one endpoint's
//! field ordering. Structural lookup failures return [`PRICE_NOT_FOUND`];
//! a body where the markers are present but the digits are garbage parses
//! to `0.0`, which is indistinguishable from a genuine zero price.

use chrono::Local;

/// Sentinel returned when the pair or its price field is absent from the body.
pub const PRICE_NOT_FOUND: f64 = -1.0;

const PRICE_MARKER: &str = "\"price\":\"";

/// One successful price observation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSample {
    pub pair: String,
    pub price: f64,
    pub timestamp: String,
}

impl PriceSample {
    /// Capture an observation stamped with the current local time.
    pub fn now(pair: &str, price: f64) -> Self {
        Self {
            pair: pair.to_string(),
            price,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Locate `pair` in the body, then the first `"price":"` after it, and parse
/// the decimal that follows. Returns [`PRICE_NOT_FOUND`] if either lookup
/// fails; otherwise whatever [`parse_leading_f64`] makes of the digits.
pub fn extract_price(body: &str, pair: &str) -> f64 {
    let Some(pair_pos) = body.find(pair) else {
        return PRICE_NOT_FOUND;
    };
    let tail = &body[pair_pos..];
    let Some(marker_pos) = tail.find(PRICE_MARKER) else {
        return PRICE_NOT_FOUND;
    };
    parse_leading_f64(&tail[marker_pos + PRICE_MARKER.len()..])
}

/// Parse the longest leading decimal number of `s`, stopping at the first
/// character that cannot extend it. Returns `0.0` when no conversion is
/// possible (C `atof` semantics, trailing garbage included).
pub fn parse_leading_f64(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut saw_digit = false;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        saw_digit = true;
    }

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        let mut saw_frac_digit = false;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
            saw_frac_digit = true;
        }
        // "1." and ".5" both convert; a bare "." does not.
        if saw_digit || saw_frac_digit {
            end = frac_end;
            saw_digit = true;
        }
    }

    if !saw_digit {
        return 0.0;
    }

    // Optional exponent, consumed only if it carries at least one digit.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let mut saw_exp_digit = false;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
            saw_exp_digit = true;
        }
        if saw_exp_digit {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = concat!(
        r#"{"BTC-USDT":{"initialprice":"67000.1","price":"67123.00000000","high":"68000"},"#,
        r#""XMR-USDT":{"initialprice":"160.0","price":"161.234500","high":"165.1","low":"158.2"}}"#,
    );

    #[test]
    fn test_extract_price_well_formed_body() {
        assert_eq!(extract_price(BODY, "XMR-USDT"), 161.2345);
        assert_eq!(extract_price(BODY, "BTC-USDT"), 67123.0);
    }

    #[test]
    fn test_extract_price_ignores_surrounding_noise() {
        let body = format!("garbage before {BODY} garbage after");
        assert_eq!(extract_price(&body, "XMR-USDT"), 161.2345);
    }

    #[test]
    fn test_extract_price_missing_pair_returns_sentinel() {
        assert_eq!(extract_price(BODY, "DOGE-USDT"), PRICE_NOT_FOUND);
        assert_eq!(extract_price("", "XMR-USDT"), PRICE_NOT_FOUND);
    }

    #[test]
    fn test_extract_price_missing_marker_returns_sentinel() {
        let body = r#"{"XMR-USDT":{"initialprice":"160.0","high":"165.1"}}"#;
        assert_eq!(extract_price(body, "XMR-USDT"), PRICE_NOT_FOUND);
    }

    #[test]
    fn test_extract_price_marker_before_pair_is_not_used() {
        // The marker search starts at the pair, so an earlier price field
        // belonging to another market must not be picked up.
        let body = r#"{"BTC-USDT":{"price":"67123.0"},"XMR-USDT":{"volume":"12"}}"#;
        assert_eq!(extract_price(body, "XMR-USDT"), PRICE_NOT_FOUND);
    }

    #[test]
    fn test_extract_price_garbage_digits_parse_to_zero() {
        // Markers found but no digits: parse failure collapses to 0.0 and is
        // indistinguishable from a real zero price.
        let body = r#"{"XMR-USDT":{"price":"oops"}}"#;
        assert_eq!(extract_price(body, "XMR-USDT"), 0.0);
    }

    #[test]
    fn test_parse_leading_f64_stops_at_trailing_garbage() {
        assert_eq!(parse_leading_f64("161.234500\",\"high\""), 161.2345);
        assert_eq!(parse_leading_f64("42abc"), 42.0);
        assert_eq!(parse_leading_f64("-0.5xyz"), -0.5);
    }

    #[test]
    fn test_parse_leading_f64_permissive_forms() {
        assert_eq!(parse_leading_f64("  3.25"), 3.25);
        assert_eq!(parse_leading_f64("1."), 1.0);
        assert_eq!(parse_leading_f64(".5"), 0.5);
        assert_eq!(parse_leading_f64("2e3"), 2000.0);
        assert_eq!(parse_leading_f64("2e"), 2.0);
        assert_eq!(parse_leading_f64("1.5E-2"), 0.015);
    }

    #[test]
    fn test_parse_leading_f64_no_conversion_is_zero() {
        assert_eq!(parse_leading_f64(""), 0.0);
        assert_eq!(parse_leading_f64("abc"), 0.0);
        assert_eq!(parse_leading_f64("."), 0.0);
        assert_eq!(parse_leading_f64("+"), 0.0);
        assert_eq!(parse_leading_f64("e5"), 0.0);
    }

    #[test]
    fn test_price_sample_timestamp_format() {
        let sample = PriceSample::now("XMR-USDT", 161.2345);
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(sample.timestamp.len(), 19);
        assert_eq!(&sample.timestamp[4..5], "-");
        assert_eq!(&sample.timestamp[10..11], " ");
        assert_eq!(&sample.timestamp[13..14], ":");
    }
}
