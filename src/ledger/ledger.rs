use tracing::{debug, warn};

use crate::{
    config::Labels,
    errors::{EntryKind, LedgerError},
};

use super::transaction::Transaction;

/// Running balance over an append-only list of transactions.
///
/// `balance` is a cache of the sum of all stored amounts, folded in insertion
/// order. Every mutation validates before touching state, so a rejected
/// amount leaves both the history and the balance untouched.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    balance: f64,
    labels: Labels,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger whose default descriptions come from `labels`.
    pub fn with_labels(labels: Labels) -> Self {
        Self {
            labels,
            ..Self::default()
        }
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Records income of `amount`, which must be strictly positive.
    pub fn record_income(
        &mut self,
        amount: f64,
        description: Option<&str>,
    ) -> Result<(), LedgerError> {
        self.ensure_positive(EntryKind::Income, amount)?;
        let description = description.unwrap_or(&self.labels.income).to_string();
        self.push(Transaction::new(description, amount));
        Ok(())
    }

    /// Records an expense of `amount`, stored as `-amount`.
    pub fn record_expense(
        &mut self,
        amount: f64,
        description: Option<&str>,
    ) -> Result<(), LedgerError> {
        self.ensure_positive(EntryKind::Expense, amount)?;
        let description = description.unwrap_or(&self.labels.expense).to_string();
        self.push(Transaction::new(description, -amount));
        Ok(())
    }

    pub fn get_balance(&self) -> f64 {
        self.balance
    }

    /// Copies the history as `(description, amount)` pairs in insertion order.
    pub fn get_transactions(&self) -> Vec<(String, f64)> {
        self.transactions.iter().map(Transaction::to_pair).collect()
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // NaN fails the comparison as well.
    fn ensure_positive(&self, kind: EntryKind, amount: f64) -> Result<(), LedgerError> {
        if amount > 0.0 {
            Ok(())
        } else {
            warn!(%kind, amount, "rejected non-positive amount");
            Err(LedgerError::invalid_amount(kind, amount, self.labels.locale))
        }
    }

    fn push(&mut self, transaction: Transaction) {
        self.balance += transaction.amount();
        debug!(
            kind = %transaction.kind(),
            amount = transaction.amount(),
            balance = self.balance,
            "recorded transaction"
        );
        self.transactions.push(transaction);
    }
}
