//! # Adapters Module
//!
//! Implementations of the `OrderedKeyValueStore` port.

mod memory;

pub use memory::InMemoryOrderedStore;
