//! Typed operations on the ledger resources.
//!
//! Each operation is a thin method on [`Gateway`](crate::Gateway): build the
//! request, send it through the retrying gateway, decode the body. Non-2xx
//! answers become [`ProtocolError`](ledger_core::error::ProtocolError) with
//! the server's message, or the operation's fallback message.

mod admin;
mod companies;
mod milestones;
mod projects;
mod salaries;
mod summary;
mod transactions;

pub use transactions::TransactionFilter;
