use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Snap user input to cents: half-up at the midpoint, so `2.005`
/// becomes `2.01`.
const CENT_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewBalance,
    CreditAccount,
    DebitAccount,
    Exit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid choice, please select 1-4.")]
    InvalidChoice,
}

impl FromStr for MenuChoice {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "1" => Ok(MenuChoice::ViewBalance),
            "2" => Ok(MenuChoice::CreditAccount),
            "3" => Ok(MenuChoice::DebitAccount),
            "4" => Ok(MenuChoice::Exit),
            _ => Err(CommandError::InvalidChoice),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum TransactionAction {
    Credit,
    Debit,
}

#[derive(Debug, Clone, Copy)]
pub struct TransactionCommand {
    pub action: TransactionAction,
    pub amount: Decimal,
}

/// Interprets one raw input line as a monetary amount.
///
/// Input that does not parse as a decimal number normalizes to `0.00`;
/// valid input is rounded to the nearest cent. Negative numbers are
/// treated as invalid input, since applying one would break the
/// non-negative balance invariant.
pub fn parse_amount(raw: &str) -> Decimal {
    let amount = raw
        .trim()
        .parse::<Decimal>()
        .map(|value| value.round_dp_with_strategy(2, CENT_ROUNDING))
        .unwrap_or_default();
    if amount.is_sign_negative() {
        Decimal::ZERO
    } else {
        amount
    }
}
