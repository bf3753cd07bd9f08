//! In-memory income/expense ledger and its transaction records.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod shared;
pub mod transaction;

pub use ledger::Ledger;
pub use shared::SharedLedger;
pub use transaction::Transaction;
