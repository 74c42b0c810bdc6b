//! In-process storage backing local runs and HTTP tests.

pub mod memory_store;

pub use memory_store::MemoryStore;
