//! Infrastructure adapters for persistence backends.

pub mod store;

pub use store::MemoryStore;
pub use store::PostgresStore;
