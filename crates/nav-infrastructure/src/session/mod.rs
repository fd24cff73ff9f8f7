//! Session module (in-process adapters)

pub mod memory_store;

pub use memory_store::MemorySessionStore;
