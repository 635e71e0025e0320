//! Adapter implementations for credential storage and hashing.

pub mod argon2_hasher;
pub mod memory;
pub mod postgres;
