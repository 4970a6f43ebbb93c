//! Subcommand implementations.

pub mod auth;
pub mod companies;
pub mod milestones;
pub mod projects;
pub mod salaries;
pub mod summary;
pub mod transactions;

use ledger_core::models::Amount;

/// Parse a decimal amount argument, keeping the text as typed.
pub(crate) fn parse_amount(s: &str) -> Result<Amount, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("'{}' must be a non-negative amount", s));
    }
    Ok(Amount::new(s.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_argument_keeps_text() {
        assert_eq!(parse_amount(" 1250.50 ").unwrap().as_str(), "1250.50");
        assert!(parse_amount("12,50").is_err());
        assert!(parse_amount("-3").is_err());
    }
}
