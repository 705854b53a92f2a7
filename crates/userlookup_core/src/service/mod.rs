//! Core use-case services.
//!
//! # Responsibility
//! - Turn repository lookups into use-case level answers.
//! - Keep callers decoupled from storage details.

pub mod user_service;
