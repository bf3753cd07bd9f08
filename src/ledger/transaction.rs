use crate::errors::EntryKind;

/// A recorded income or expense. The sign of `amount` encodes the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    description: String,
    amount: f64,
}

impl Transaction {
    pub(crate) fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Signed amount: positive for income, negative for expense.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn kind(&self) -> EntryKind {
        if self.amount < 0.0 {
            EntryKind::Expense
        } else {
            EntryKind::Income
        }
    }

    pub fn to_pair(&self) -> (String, f64) {
        (self.description.clone(), self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_follows_sign() {
        assert_eq!(Transaction::new("Salary", 1000.0).kind(), EntryKind::Income);
        assert_eq!(Transaction::new("Rent", -700.0).kind(), EntryKind::Expense);
    }

    #[test]
    fn to_pair_copies_fields() {
        let txn = Transaction::new("Groceries", -500.0);
        assert_eq!(txn.to_pair(), ("Groceries".to_string(), -500.0));
    }
}
