//! Adapters for the domain's driven ports.

pub mod memory;

pub use self::memory::MemoryCredentialRepository;
