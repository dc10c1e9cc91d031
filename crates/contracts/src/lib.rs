//! Shared DTO types for the retail performance scenario API.
//!
//! Everything here crosses the HTTP boundary as JSON, so the types are
//! plain serde structs with no behavior beyond construction helpers.

pub mod domain;
pub mod simulation;
