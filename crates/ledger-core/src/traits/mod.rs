//! Core traits.

mod store;

pub use store::KeyValueStore;
