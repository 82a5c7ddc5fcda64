//! Ledger domain module (customer accounts and their statements).
//!
//! Pure domain logic only: no IO, no HTTP. The store is a plain value; callers
//! that share it across threads wrap it in a single lock.

pub mod account;
pub mod store;

pub use account::{Account, EntryKind, StatementEntry};
pub use store::LedgerStore;
