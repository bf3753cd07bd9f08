use std::fmt;

use thiserror::Error;

use crate::config::Locale;

/// Which recording operation a ledger entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Income => write!(f, "Income"),
            EntryKind::Expense => write!(f, "Expense"),
        }
    }
}

/// Error type returned by ledger recording operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LedgerError {
    #[error("{}", invalid_amount_message(.locale, .kind))]
    InvalidAmount {
        kind: EntryKind,
        amount: f64,
        locale: Locale,
    },
}

impl LedgerError {
    pub fn invalid_amount(kind: EntryKind, amount: f64, locale: Locale) -> Self {
        Self::InvalidAmount {
            kind,
            amount,
            locale,
        }
    }
}

fn invalid_amount_message(locale: &Locale, kind: &EntryKind) -> String {
    locale.invalid_amount_message(*kind)
}

/// Failures while loading label configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_names_the_operation() {
        let income = LedgerError::invalid_amount(EntryKind::Income, -100.0, Locale::En);
        assert_eq!(income.to_string(), "Income must be greater than 0.");

        let expense = LedgerError::invalid_amount(EntryKind::Expense, 0.0, Locale::En);
        assert_eq!(expense.to_string(), "Expense must be greater than 0.");
    }

    #[test]
    fn invalid_amount_follows_locale() {
        let income = LedgerError::invalid_amount(EntryKind::Income, 0.0, Locale::Ru);
        assert_eq!(income.to_string(), "Доход должен быть больше 0.");

        let expense = LedgerError::invalid_amount(EntryKind::Expense, -50.0, Locale::Ru);
        assert_eq!(expense.to_string(), "Расход должен быть больше 0.");
    }
}
