//! Amount formatting for decision text
//!
//! Amounts reaching the triage engine are unit-less decimals. These helpers
//! render them the way adjusters read them: a currency symbol, thousands
//! separators, and cents only when there are cents to show.

use rust_decimal::Decimal;

/// Formats an amount with the given symbol and thousands separators
///
/// The amount is rounded to two decimal places. Whole amounts are rendered
/// without a fractional part.
///
/// # Examples
///
/// ```
/// use core_kernel::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::new(2500000, 2), "$"), "$25,000");
/// assert_eq!(format_amount(Decimal::new(2499999, 2), "$"), "$24,999.99");
/// ```
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let abs = rounded.abs();

    let whole = abs.trunc().normalize().to_string();
    let grouped = group_thousands(&whole);

    let fraction = abs.fract();
    if fraction.is_zero() {
        format!("{sign}{symbol}{grouped}")
    } else {
        // 0.05 must render as "05", not "5"
        let cents = (fraction * Decimal::ONE_HUNDRED).trunc().normalize().to_string();
        format!("{sign}{symbol}{grouped}.{cents:0>2}")
    }
}

/// Formats an amount in US dollars
pub fn format_usd(amount: Decimal) -> String {
    format_amount(amount, "$")
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
