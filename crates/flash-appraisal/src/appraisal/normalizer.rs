//! Conversion between numbers and the form's locale text (`1.234,56`).

/// Parse a locale-formatted number, treating `.` as the thousands separator and `,` as the
/// decimal mark. Blank or unparseable input yields `0.0`.
pub fn parse_locale_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let canonical = trimmed.replace('.', "").replacen(',', ".", 1);
    canonical
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Format with exactly two decimals using the same separator convention.
pub fn format_locale_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let (integer, fraction) = fixed_half_up(value.abs(), 2);
    let is_zero = integer == "0" && fraction == "00";
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{sign}{},{fraction}", group_thousands(&integer))
}

/// Format a grouped amount with at most `max_fraction_digits` decimals, dropping trailing
/// zeros (`200.000`, `1.234,5`).
pub fn format_locale_grouped(value: f64, max_fraction_digits: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let (integer, fraction) = fixed_half_up(value.abs(), max_fraction_digits);
    let fraction = fraction.trim_end_matches('0');
    let is_zero = integer == "0" && fraction.is_empty();
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    if fraction.is_empty() {
        format!("{sign}{}", group_thousands(&integer))
    } else {
        format!("{sign}{},{fraction}", group_thousands(&integer))
    }
}

/// Input mask for currency-like fields: the digits typed so far are read as cents.
pub fn format_digits_as_currency(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    let cents = digits.parse::<f64>().unwrap_or(0.0);
    format_locale_number(cents / 100.0)
}

/// Split a non-negative value into integer and fraction digits, rounding ties away from zero
/// at the last kept digit (`0.125` -> `0`, `13`). `{:.N}` would round such ties to even.
fn fixed_half_up(value: f64, digits: usize) -> (String, String) {
    let scaled = (value * 10_f64.powi(digits as i32)).round();
    if !scaled.is_finite() {
        return (format!("{value:.0}"), "0".repeat(digits));
    }

    let mut integer = format!("{scaled:.0}");
    if integer.len() <= digits {
        integer = format!("{integer:0>width$}", width = digits + 1);
    }
    let fraction = integer.split_off(integer.len() - digits);
    (integer, fraction)
}

fn group_thousands(integer: &str) -> String {
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}
