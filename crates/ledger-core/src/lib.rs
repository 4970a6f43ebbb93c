//! ledger-core - Core types and traits for the ledger bookkeeping client.

pub mod credentials;
pub mod error;
pub mod memory;
pub mod models;
pub mod tokens;
pub mod traits;
pub mod types;

pub use credentials::{Credentials, Registration};
pub use error::Error;
pub use memory::MemoryStore;
pub use models::UserProfile;
pub use tokens::{AccessToken, RefreshToken};
pub use traits::KeyValueStore;
pub use types::ApiUrl;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
