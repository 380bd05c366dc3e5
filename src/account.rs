use rust_decimal::Decimal;
use thiserror::Error;

use crate::command::{TransactionAction, TransactionCommand};

/// Balance every account opens with.
pub fn opening_balance() -> Decimal {
    Decimal::new(100_000, 2)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AccountEventKind {
    Credited,
    Debited,
}

#[derive(Debug)]
pub struct AccountEvent {
    amount: Decimal,
    kind: AccountEventKind,
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Insufficient funds for this debit.")]
    InsufficientFunds,
}

/// The single account managed by this system. The stored balance never
/// goes negative; the guard lives in [`Account::handle_transaction`],
/// not in [`Account::apply`].
#[derive(Debug)]
pub struct Account {
    balance: Decimal,
}

impl Account {
    pub fn new() -> Self {
        Account {
            balance: opening_balance(),
        }
    }

    /// Current balance. Reading has no side effects.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Replaces the stored balance according to the event, with no
    /// validation of its own.
    pub fn apply(&mut self, event: &AccountEvent) {
        match event.kind {
            AccountEventKind::Credited => {
                self.balance += event.amount;
            }
            AccountEventKind::Debited => {
                self.balance -= event.amount;
            }
        }
    }

    /// Turns a command into an event without touching the balance.
    /// A credit always succeeds; a debit that would overdraw the
    /// account is rejected here.
    pub fn handle_transaction(
        &self,
        command: TransactionCommand,
    ) -> Result<AccountEvent, AccountError> {
        match command.action {
            TransactionAction::Credit => Ok(AccountEvent {
                amount: command.amount,
                kind: AccountEventKind::Credited,
            }),
            TransactionAction::Debit => {
                if self.balance >= command.amount {
                    Ok(AccountEvent {
                        amount: command.amount,
                        kind: AccountEventKind::Debited,
                    })
                } else {
                    Err(AccountError::InsufficientFunds)
                }
            }
        }
    }
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn opens_with_one_thousand() {
        let account = Account::new();
        assert_eq!(account.balance(), dec!(1000.00));
        // reads are idempotent
        assert_eq!(account.balance(), dec!(1000.00));
    }

    #[test]
    fn apply_events() {
        let mut account = Account::new();
        account.apply(&AccountEvent {
            amount: dec!(250.00),
            kind: AccountEventKind::Credited,
        });
        assert_eq!(account.balance(), dec!(1250.00));
        account.apply(&AccountEvent {
            amount: dec!(50.25),
            kind: AccountEventKind::Debited,
        });
        assert_eq!(account.balance(), dec!(1199.75));
    }

    #[test]
    fn handle_credit() {
        let account = Account::new();
        let event = account
            .handle_transaction(TransactionCommand {
                action: TransactionAction::Credit,
                amount: dec!(500.00),
            })
            .unwrap();
        assert_eq!(event.amount, dec!(500.00));
        assert_eq!(event.kind, AccountEventKind::Credited);
        // handling alone must not move the balance
        assert_eq!(account.balance(), dec!(1000.00));
    }

    #[test]
    fn handle_debit_down_to_zero() {
        let account = Account::new();
        let event = account
            .handle_transaction(TransactionCommand {
                action: TransactionAction::Debit,
                amount: dec!(1000.00),
            })
            .unwrap();
        assert_eq!(event.kind, AccountEventKind::Debited);
    }

    #[test]
    fn handle_debit_insufficient_funds() {
        let account = Account::new();
        let err = account
            .handle_transaction(TransactionCommand {
                action: TransactionAction::Debit,
                amount: dec!(1000.01),
            })
            .unwrap_err();
        assert!(matches!(err, AccountError::InsufficientFunds));
        assert_eq!(err.to_string(), "Insufficient funds for this debit.");
        assert_eq!(account.balance(), dec!(1000.00));
    }
}
