//! In-memory adapters for credential storage.

mod user;

pub use user::InMemoryUserRepository;
