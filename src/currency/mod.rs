//! Đồng display formatting for summaries and warning messages.
//!
//! Amounts are whole currency units; the tracker never deals in
//! sub-đồng precision.

/// Grouping separator used in Vietnamese number formatting.
const GROUPING_SEPARATOR: char = '.';

/// Currency symbol appended after the grouped digits.
const CURRENCY_SYMBOL: &str = "₫";

/// Formats an amount with thousands grouping and the currency symbol,
/// e.g. `1.900.000 ₫`. Fractional parts round to the nearest whole unit.
pub fn format_amount(amount: f64) -> String {
    let negative = amount < 0.0;
    let whole = amount.abs().round() as u64;
    let grouped = group_digits(whole);
    if negative {
        format!("-{grouped} {CURRENCY_SYMBOL}")
    } else {
        format!("{grouped} {CURRENCY_SYMBOL}")
    }
}

/// Compact rendering for chart axes: millions to one decimal, thousands
/// to whole numbers, small amounts as-is.
pub fn format_compact(amount: f64) -> String {
    if amount >= 1_000_000.0 {
        format!("{:.1}M", amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{:.0}K", amount / 1_000.0)
    } else {
        format!("{amount:.0}")
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_amount(1_900_000.0), "1.900.000 ₫");
        assert_eq!(format_amount(450.0), "450 ₫");
        assert_eq!(format_amount(0.0), "0 ₫");
    }

    #[test]
    fn keeps_the_sign_on_negative_balances() {
        assert_eq!(format_amount(-250_000.0), "-250.000 ₫");
    }

    #[test]
    fn compact_form_scales_to_millions_and_thousands() {
        assert_eq!(format_compact(1_500_000.0), "1.5M");
        assert_eq!(format_compact(250_000.0), "250K");
        assert_eq!(format_compact(999.0), "999");
    }
}
