use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::errors::LedgerError;

use super::ledger::Ledger;

/// Cloneable handle that serializes every ledger operation behind one lock.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    pub fn record_income(&self, amount: f64, description: Option<&str>) -> Result<(), LedgerError> {
        self.lock().record_income(amount, description)
    }

    pub fn record_expense(&self, amount: f64, description: Option<&str>) -> Result<(), LedgerError> {
        self.lock().record_expense(amount, description)
    }

    pub fn get_balance(&self) -> f64 {
        self.lock().get_balance()
    }

    pub fn get_transactions(&self) -> Vec<(String, f64)> {
        self.lock().get_transactions()
    }

    /// Copies out the wrapped ledger.
    pub fn snapshot(&self) -> Ledger {
        self.lock().clone()
    }

    // Ledger mutations are all-or-nothing, so a poisoned lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}
