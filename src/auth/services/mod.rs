//! Application services for credential management.

mod credentials;

pub use credentials::{CredentialError, CredentialResult, CredentialService};
