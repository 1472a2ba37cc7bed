//! Storage implementations for the record store

pub mod in_memory;

pub use in_memory::InMemoryStudentStore;
