//! Taskboard: owner-scoped task management with password authentication.
//!
//! This crate provides the storage-access core of a task-management
//! backend. Users sign up with a username and password; an authenticated
//! user creates, lists, filters, updates and deletes their own tasks and
//! never sees anyone else's.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`,
//!   Argon2)
//!
//! # Modules
//!
//! - [`auth`]: Credential store, sign-up and password verification
//! - [`task`]: Task records, status set and owner-scoped queries
//! - [`board`]: Access boundary keyed by the authenticated caller
//! - [`bootstrap`]: Composition of services over a storage backend
//! - [`config`]: TOML configuration with environment overrides
//! - [`telemetry`]: `tracing` subscriber setup

pub mod auth;
pub mod board;
pub mod bootstrap;
pub mod config;
pub mod task;
pub mod telemetry;
