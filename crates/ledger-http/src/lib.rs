//! ledger-http - HTTP access to the bookkeeping API.
//!
//! Every authenticated call goes through a [`Gateway`], which attaches the
//! stored access token and, when the server answers 401, exchanges the refresh
//! token once and replays the request. Credentials live in a [`SessionStore`]
//! over any [`KeyValueStore`](ledger_core::KeyValueStore).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use ledger_core::{ApiUrl, Credentials, MemoryStore};
//! use ledger_http::{ClientConfig, Gateway};
//!
//! # async fn example() -> Result<(), ledger_core::Error> {
//! let config = ClientConfig::new(ApiUrl::new("http://localhost:8000/api")?);
//! let gateway = Gateway::new(config, Arc::new(MemoryStore::new()))?;
//!
//! let user = gateway.login(&Credentials::new("alice", "s3cret")).await?;
//! println!("Logged in as {}", user.username);
//!
//! for project in gateway.list_projects(None).await? {
//!     println!("{}: {}", project.name, project.status);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod config;
pub mod endpoints;
mod gateway;
mod request;
mod session;

pub use api::TransactionFilter;
pub use config::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use gateway::Gateway;
pub use request::PendingRequest;
pub use session::SessionStore;
