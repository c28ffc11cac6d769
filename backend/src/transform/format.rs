//! Field formatters.
//!
//! Pure string transformations applied to raw cell text. None of them fail:
//! empty input gives `""` (or `0`) and malformed input falls back to a
//! defined value.

use uuid::Uuid;

/// Trim, lowercase, then uppercase the first character only.
///
/// ```
/// use datacleaner::format_name;
/// assert_eq!(format_name(" jean DUPONT "), "Jean dupont");
/// ```
pub fn format_name(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Format a 10-digit phone number as `AAA-BBB-CCCC`.
///
/// Anything that does not contain exactly 10 digits is returned untouched.
pub fn format_phone(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        raw.to_string()
    }
}

/// Strip whitespace and uppercase; a 6-character code becomes `XXX XXX`.
pub fn format_postal_code(raw: &str) -> String {
    let compact: String = raw
        .chars()
        .filter(|&c| !c.is_whitespace() && c != '\u{feff}')
        .collect::<String>()
        .to_uppercase();

    let chars: Vec<char> = compact.chars().collect();
    if chars.len() == 6 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[3..].iter().collect();
        format!("{} {}", head, tail)
    } else {
        compact
    }
}

/// Keep a caller-supplied id, or generate a random one.
///
/// Blank input yields a fresh UUID v4 on every call.
pub fn ensure_id(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a price or rate.
///
/// Reads the leading decimal number of the trimmed text, so `"12.5 $"`
/// gives `12.5`. Empty, unreadable, non-finite or negative values give `0`.
pub fn parse_amount(raw: &str) -> f64 {
    let text = raw.trim();
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|_| is_plain_number(text))
        .or_else(|| leading_number(text).and_then(|n| n.parse::<f64>().ok()))
        .unwrap_or(0.0);

    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

/// True when `text` only uses decimal-number characters.
///
/// Rejects the `inf`/`NaN` spellings that `f64::from_str` accepts.
fn is_plain_number(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
}

/// Longest prefix of `text` that reads as a decimal number.
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if mantissa_digits > 0 || frac_end > frac_start {
            mantissa_digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when followed by digits.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}
