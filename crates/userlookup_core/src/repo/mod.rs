//! Repository layer abstractions.
//!
//! # Responsibility
//! - Define the data access contract consumed by services.
//! - Keep storage details out of service/business orchestration.
//!
//! # Invariants
//! - A lookup yields either a populated record or an error, never both.
//! - Concrete storage-backed implementations live outside core.

pub mod user_repo;
