//! Persistence Adapters
//!
//! Implementations of the `Storage` port.

pub mod in_memory;

pub use in_memory::InMemoryStore;
