//! Access boundary between authenticated callers and the task store.
//!
//! [`TaskBoard`] accepts an [`AuthenticatedUser`](crate::auth::domain::AuthenticatedUser)
//! on every call and derives the task owner from it. No operation takes an
//! owner identifier from the caller.

mod service;

pub use service::TaskBoard;
