use crate::{
    account::Account,
    command::{self, TransactionAction, TransactionCommand},
};

use super::{TransactionEngine, format_balance};

/// Engine over a single in-memory account, opened with the standard
/// balance. Independent instances share no state.
#[derive(Debug, Default)]
pub struct InMemoryTransactionEngine {
    pub account: Account,
}

impl InMemoryTransactionEngine {
    fn process_transaction(&mut self, action: TransactionAction, raw_amount: &str) -> String {
        let amount = command::parse_amount(raw_amount);
        match self.account.handle_transaction(TransactionCommand { action, amount }) {
            Ok(event) => {
                self.account.apply(&event);
                let balance = self.account.balance();
                tracing::debug!(?action, %amount, %balance, "transaction applied");
                match action {
                    TransactionAction::Credit => {
                        format!("Amount credited. New balance: {}", format_balance(balance))
                    }
                    TransactionAction::Debit => {
                        format!("Amount debited. New balance: {}", format_balance(balance))
                    }
                }
            }
            Err(err) => {
                tracing::warn!(
                    ?action,
                    %amount,
                    balance = %self.account.balance(),
                    "transaction rejected"
                );
                err.to_string()
            }
        }
    }
}

impl TransactionEngine for InMemoryTransactionEngine {
    fn view_balance(&self) -> String {
        format!("Current balance: {}", format_balance(self.account.balance()))
    }

    fn credit_account(&mut self, raw_amount: &str) -> String {
        self.process_transaction(TransactionAction::Credit, raw_amount)
    }

    fn debit_account(&mut self, raw_amount: &str) -> String {
        self.process_transaction(TransactionAction::Debit, raw_amount)
    }
}
