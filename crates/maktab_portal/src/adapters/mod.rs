//! crates/maktab_portal/src/adapters/mod.rs
//!
//! Concrete implementations of the core's ports. Both adapters here are
//! in-process mocks: `MemoryFlagStore` stands in for the browser's key-value
//! persistence and `FixtureDirectory` for the identity service a real
//! deployment would call over the network.

pub mod directory;
pub mod flags;
