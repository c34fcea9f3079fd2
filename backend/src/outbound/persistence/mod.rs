//! Persistence adapters implementing the domain repository ports.
//!
//! Thin translators only; no business logic resides here. The sole adapter
//! in this service keeps records in process memory, which is the whole
//! persistence story: nothing survives a restart.

mod memory;

pub use memory::InMemoryUserRepository;
