//! Unit tests for the credential bounded context.
