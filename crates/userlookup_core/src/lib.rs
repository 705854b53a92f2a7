//! Core user lookup logic.
//!
//! Services depend on the `UserRepository` capability only; storage-backed
//! implementations are supplied by the embedding application.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod testing;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::user::{User, UserId};
pub use repo::user_repo::{RepoError, RepoResult, UserRepository};
pub use service::user_service::UserService;
