//! Fixed-locale number formatting: `,` groups thousands and `.` separates
//! decimals. Whole values print without decimals, everything else with
//! exactly two.

use crate::Amount;

const GROUP_SEPARATOR: char = ',';

/// Formats an amount for printing. Literal text passes through unchanged.
pub fn format_number(amount: &Amount) -> String {
    match amount {
        Amount::Number(v) => format_f64(*v),
        Amount::Text(text) => text.clone(),
    }
}

/// Formats an item quantity as a grouped integer.
pub fn format_quantity(quantity: u64) -> String {
    group_digits(&quantity.to_string())
}

fn format_f64(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let raw = if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    };

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    out.push_str(sign);
    out.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}
