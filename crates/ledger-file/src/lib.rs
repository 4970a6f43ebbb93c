//! ledger-file - File-backed key-value storage for the ledger session.

mod store;

pub use store::FileStore;
