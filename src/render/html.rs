use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};

/// Escape text for interpolation into markup.
pub(crate) fn esc(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Format with exactly `dp` decimal places, commercial rounding.
pub(crate) fn fixed(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let s = rounded.to_string();
    match s.find('.') {
        Some(dot) => {
            let decimals = s.len() - dot - 1;
            if decimals < dp as usize {
                format!("{s}{}", "0".repeat(dp as usize - decimals))
            } else {
                s
            }
        }
        None => format!("{s}.{}", "0".repeat(dp as usize)),
    }
}

/// Currency figure — always two decimal places.
pub(crate) fn money(value: Decimal) -> String {
    fixed(value, 2)
}

/// Displayed CGST/SGST rate: half the GST percentage, one decimal place.
pub(crate) fn half_rate(gst_rate: Decimal) -> String {
    fixed(gst_rate / Decimal::from(2), 1)
}

/// Bare numeric display with trailing zeros stripped (the compact and
/// minimal layouts print rates and unit prices unformatted).
pub(crate) fn plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Indian digit grouping for unit prices: last three digits, then pairs
/// ("1,10,000").
pub(crate) fn inr(value: Decimal) -> String {
    let s = plain(value);
    match s.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{frac_part}", group_indian(int_part)),
        None => group_indian(&s),
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Invoice date in the Indian short form ("15/6/2024").
pub(crate) fn date_indian(ts: NaiveDateTime) -> String {
    ts.format("%-d/%-m/%Y").to_string()
}

/// Invoice time in the Indian 12-hour form ("2:30:05 pm").
pub(crate) fn time_indian(ts: NaiveDateTime) -> String {
    ts.format("%-I:%M:%S %P").to_string()
}

/// Wrap a rendered body in a complete HTML document with inline styling.
pub(crate) fn document(title: &str, style: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{}</title>\n<style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        esc(title),
        style,
        body
    )
}
