//! Money formatting
//!
//! Renders amounts as `$1,234.56` with thousands grouping, rounding to
//! cents. Amounts are plain floats end to end; formatting is the only place
//! rounding happens.

/// Format an amount as a dollar string with thousands separators
pub fn fmt_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as i64;
    let dollars = cents / 100;
    let rem = cents % 100;

    let mut grouped = String::new();
    let digits = dollars.to_string();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}${}.{:02}",
        if negative { "-" } else { "" },
        grouped,
        rem
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(fmt_money(50.0), "$50.00");
        assert_eq!(fmt_money(12.5), "$12.50");
        assert_eq!(fmt_money(0.75), "$0.75");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(fmt_money(3000.0), "$3,000.00");
        assert_eq!(fmt_money(1234567.89), "$1,234,567.89");
        assert_eq!(fmt_money(999.99), "$999.99");
    }

    #[test]
    fn test_negative() {
        assert_eq!(fmt_money(-2100.0), "-$2,100.00");
        assert_eq!(fmt_money(-0.05), "-$0.05");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(fmt_money(95.454545), "$95.45");
        assert_eq!(fmt_money(95.455), "$95.46");
    }

    #[test]
    fn test_zero() {
        assert_eq!(fmt_money(0.0), "$0.00");
    }
}
