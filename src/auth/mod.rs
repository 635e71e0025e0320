//! User credentials and authentication.
//!
//! Users sign up with a unique username and a password that is stored as a
//! salted Argon2id digest. A successful password check yields an
//! [`AuthenticatedUser`](domain::AuthenticatedUser), the only accepted
//! source of task ownership. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
