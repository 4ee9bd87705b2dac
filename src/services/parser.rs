//! Expense message parser
//!
//! Parses free-text messages of the form `<amount> <description>`, e.g.
//! "50 groceries" or "12.50 coffee with friends". The amount accepts
//! integers, decimals, and leading-dot decimals.

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Largest amount accepted for a single expense
pub const MAX_AMOUNT: f64 = 1_000_000.0;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 200;

lazy_static! {
    /// Amount at the start (integer, decimal, or leading-dot decimal),
    /// whitespace, then the description
    static ref EXPENSE_RE: Regex = Regex::new(r"^(\d+\.?\d*|\.\d+)\s+(.+)$").unwrap();
}

/// An expense extracted from user input
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedExpense {
    pub amount: f64,
    pub description: String,
}

/// Errors produced when expense parsing fails
///
/// Display messages are user-facing; the bot replies with them verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpenseParseError {
    #[error("Invalid format. Please use: <amount> <description>\nExample: 50 groceries")]
    InvalidFormat,

    #[error("Amount must be greater than 0")]
    NonPositiveAmount,

    #[error("Amount seems too large. Please check and try again.")]
    AmountTooLarge,

    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Description is too long (max {MAX_DESCRIPTION_LEN} characters)")]
    DescriptionTooLong,
}

/// Check whether a message looks like an expense entry
///
/// A cheap leading-digit heuristic used to decide whether to attempt a full
/// parse at all; a leading digit or decimal point qualifies.
pub fn is_expense_message(message: &str) -> bool {
    matches!(
        message.trim().chars().next(),
        Some(c) if c.is_ascii_digit() || c == '.'
    )
}

/// Parse an expense message into an amount and a trimmed description
pub fn parse_expense(message: &str) -> Result<ParsedExpense, ExpenseParseError> {
    let message = message.trim();

    let captures = EXPENSE_RE
        .captures(message)
        .ok_or(ExpenseParseError::InvalidFormat)?;

    let amount: f64 = captures[1]
        .parse()
        .map_err(|_| ExpenseParseError::InvalidFormat)?;

    if amount <= 0.0 {
        return Err(ExpenseParseError::NonPositiveAmount);
    }
    if amount > MAX_AMOUNT {
        return Err(ExpenseParseError::AmountTooLarge);
    }

    let description = captures[2].trim();
    if description.is_empty() {
        return Err(ExpenseParseError::EmptyDescription);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ExpenseParseError::DescriptionTooLong);
    }

    Ok(ParsedExpense {
        amount,
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_amount() {
        let parsed = parse_expense("50 groceries").unwrap();
        assert_eq!(parsed.amount, 50.0);
        assert_eq!(parsed.description, "groceries");
    }

    #[test]
    fn test_parse_decimal_amount() {
        let parsed = parse_expense("12.50 coffee with friends").unwrap();
        assert_eq!(parsed.amount, 12.5);
        assert_eq!(parsed.description, "coffee with friends");
    }

    #[test]
    fn test_parse_leading_dot() {
        let parsed = parse_expense(".75 gum").unwrap();
        assert_eq!(parsed.amount, 0.75);
        assert_eq!(parsed.description, "gum");
    }

    #[test]
    fn test_parse_trims_description() {
        let parsed = parse_expense("  5 lunch at work  ").unwrap();
        assert_eq!(parsed.description, "lunch at work");
    }

    #[test]
    fn test_reject_zero_amount() {
        assert_eq!(
            parse_expense("0 free"),
            Err(ExpenseParseError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_reject_negative_amount() {
        // The leading minus never matches the pattern
        assert_eq!(
            parse_expense("-5 refund"),
            Err(ExpenseParseError::InvalidFormat)
        );
    }

    #[test]
    fn test_reject_huge_amount() {
        assert_eq!(
            parse_expense("2000000 rent"),
            Err(ExpenseParseError::AmountTooLarge)
        );
    }

    #[test]
    fn test_reject_non_numeric() {
        assert_eq!(
            parse_expense("abc food"),
            Err(ExpenseParseError::InvalidFormat)
        );
    }

    #[test]
    fn test_reject_missing_description() {
        assert_eq!(parse_expense("50"), Err(ExpenseParseError::InvalidFormat));
    }

    #[test]
    fn test_reject_empty_message() {
        assert_eq!(parse_expense(""), Err(ExpenseParseError::InvalidFormat));
    }

    #[test]
    fn test_reject_long_description() {
        let message = format!("10 {}", "x".repeat(201));
        assert_eq!(
            parse_expense(&message),
            Err(ExpenseParseError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_accept_max_length_description() {
        let message = format!("10 {}", "x".repeat(200));
        assert!(parse_expense(&message).is_ok());
    }

    #[test]
    fn test_is_expense_message() {
        assert!(is_expense_message("5 lunch"));
        assert!(is_expense_message(".75 gum"));
        assert!(is_expense_message("  12.50 coffee"));
        assert!(!is_expense_message("hello"));
        assert!(!is_expense_message(""));
        assert!(!is_expense_message("   "));
    }
}
