//! Adapters for the API Gateway ports.

pub mod memory;

pub use memory::InMemoryRepository;
