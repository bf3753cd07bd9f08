#![doc(test(attr(deny(warnings))))]

//! Finance Core keeps an in-memory ledger of income and expense entries and
//! the running balance they add up to.
//!
//! ```
//! use finance_core::ledger::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.record_income(1000.0, Some("Salary")).unwrap();
//! ledger.record_expense(250.0, None).unwrap();
//! assert_eq!(ledger.get_balance(), 750.0);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

pub use errors::{EntryKind, LedgerError};
pub use ledger::{Ledger, SharedLedger, Transaction};

static INIT_TRACING: Once = Once::new();

/// Installs the stderr log subscriber used by the CLI and integration tests.
///
/// Ledger operations emit `debug` events for recorded entries and `warn`
/// events for rejected amounts; set `RUST_LOG=finance_core=debug` to see them.
/// Only the first call has any effect.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "finance ledger logging ready");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_still_records() {
        init();
        init();
        let mut ledger = Ledger::new();
        ledger.record_income(1.0, None).unwrap();
        assert!(ledger.record_expense(0.0, None).is_err());
        assert_eq!(ledger.get_balance(), 1.0);
    }
}
