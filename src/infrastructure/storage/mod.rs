//! In-process storage backend

mod memory;

pub use memory::{InMemoryDriverRepository, InMemoryRepositoryProvider, InMemoryTripRepository};
