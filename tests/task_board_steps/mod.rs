//! Step definitions for task board BDD scenarios.

pub mod given;
pub mod world;
