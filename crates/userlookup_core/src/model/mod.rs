//! Domain model for user lookups.
//!
//! # Responsibility
//! - Define the user record returned by repository implementations.
//!
//! # Invariants
//! - Records are plain values; no mutation APIs are exposed by core.

pub mod user;
