use rust_decimal::Decimal;

pub mod in_memory_engine;

/// Renders a balance in the fixed ledger format: two fraction digits,
/// integer part zero-padded to at least six digits. Wider balances are
/// never truncated.
pub fn format_balance(balance: Decimal) -> String {
    format!("{balance:09.2}")
}

/// The operations the menu exposes. Every call produces the status line
/// shown to the user; a rejected debit is a normal outcome, not an error.
pub trait TransactionEngine {
    /// Reports the current balance without changing it.
    fn view_balance(&self) -> String;

    /// Credits the amount in `raw_amount` to the account. There is no
    /// upper bound on credits.
    fn credit_account(&mut self, raw_amount: &str) -> String;

    /// Debits the amount in `raw_amount`, unless that would overdraw
    /// the account.
    fn debit_account(&mut self, raw_amount: &str) -> String;
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::format_balance;

    #[test]
    fn pads_to_six_integer_digits() {
        assert_eq!(format_balance(dec!(0)), "000000.00");
        assert_eq!(format_balance(dec!(1000)), "001000.00");
        assert_eq!(format_balance(dec!(12345.67)), "012345.67");
        assert_eq!(format_balance(dec!(999999.99)), "999999.99");
    }

    #[test]
    fn fraction_is_always_two_digits() {
        assert_eq!(format_balance(dec!(1000.5)), "001000.50");
    }

    #[test]
    fn wide_balances_are_not_truncated() {
        assert_eq!(format_balance(dec!(1234567.89)), "1234567.89");
    }
}
