use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];
const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];
const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Render a non-negative amount as English words in the Indian numbering
/// system (crore/lakh/thousand).
///
/// Only the integer part is worded; any paisa fraction is discarded, not
/// rounded — the statutory line shows whole rupees. An amount of exactly
/// zero is worded "Zero"; a strictly fractional amount below one rupee
/// words to the empty string. The caller appends the currency suffix
/// ("Rupees Only").
pub fn amount_in_words(amount: Decimal) -> String {
    if amount.is_zero() {
        return "Zero".to_string();
    }
    let rupees = amount.trunc().to_u64().unwrap_or(0);
    integer_words(rupees)
}

fn integer_words(n: u64) -> String {
    let mut result = String::new();

    if n >= 10_000_000 {
        // Crore counts of 1000+ keep wording recursively (1 arab = 100 crore
        // has no unit of its own here).
        result.push_str(&integer_words(n / 10_000_000));
        result.push_str(" Crore ");
    }
    let n = n % 10_000_000;

    if n >= 100_000 {
        result.push_str(&group_words((n / 100_000) as u16));
        result.push_str(" Lakh ");
    }
    let n = n % 100_000;

    if n >= 1_000 {
        result.push_str(&group_words((n / 1_000) as u16));
        result.push_str(" Thousand ");
    }
    let n = n % 1_000;

    if n > 0 {
        result.push_str(&group_words(n as u16));
    }

    result.trim().to_string()
}

/// Word a group value in 0–999; 0 words to the empty string.
fn group_words(n: u16) -> String {
    let mut result = String::new();
    let mut n = n;

    if n >= 100 {
        result.push_str(ONES[(n / 100) as usize]);
        result.push_str(" Hundred");
        n %= 100;
        if n > 0 {
            result.push(' ');
        }
    }

    if n >= 20 {
        result.push_str(TENS[(n / 10) as usize]);
        n %= 10;
        if n > 0 {
            result.push(' ');
            result.push_str(ONES[n as usize]);
        }
    } else if n >= 10 {
        result.push_str(TEENS[(n - 10) as usize]);
    } else if n > 0 {
        result.push_str(ONES[n as usize]);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_is_worded() {
        assert_eq!(amount_in_words(dec!(0)), "Zero");
    }

    #[test]
    fn single_groups() {
        assert_eq!(amount_in_words(dec!(7)), "Seven");
        assert_eq!(amount_in_words(dec!(13)), "Thirteen");
        assert_eq!(amount_in_words(dec!(40)), "Forty");
        assert_eq!(amount_in_words(dec!(99)), "Ninety Nine");
        assert_eq!(amount_in_words(dec!(100)), "One Hundred");
        assert_eq!(amount_in_words(dec!(305)), "Three Hundred Five");
        assert_eq!(amount_in_words(dec!(999)), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn indian_groupings() {
        assert_eq!(amount_in_words(dec!(1000)), "One Thousand");
        assert_eq!(amount_in_words(dec!(100000)), "One Lakh");
        assert_eq!(amount_in_words(dec!(10000000)), "One Crore");
        assert_eq!(
            amount_in_words(dec!(1234567)),
            "Twelve Lakh Thirty Four Thousand Five Hundred Sixty Seven"
        );
        assert_eq!(
            amount_in_words(dec!(129800)),
            "One Lakh Twenty Nine Thousand Eight Hundred"
        );
    }

    #[test]
    fn absent_groups_are_skipped() {
        // No thousand group, no final group
        assert_eq!(amount_in_words(dec!(20000000)), "Two Crore");
        assert_eq!(amount_in_words(dec!(10000001)), "One Crore One");
        assert_eq!(amount_in_words(dec!(10100000)), "One Crore One Lakh");
    }

    #[test]
    fn large_crore_counts_word_recursively() {
        assert_eq!(
            amount_in_words(dec!(1230000000)),
            "One Hundred Twenty Three Crore"
        );
    }

    #[test]
    fn fraction_is_discarded_not_rounded() {
        assert_eq!(amount_in_words(dec!(19.99)), "Nineteen");
        assert_eq!(amount_in_words(dec!(19.99)), amount_in_words(dec!(19)));
    }
}
