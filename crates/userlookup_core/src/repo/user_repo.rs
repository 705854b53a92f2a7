//! User repository contract.
//!
//! # Responsibility
//! - Provide the fetch-by-id capability services depend on.
//! - Define the error values repository implementations report.
//!
//! # Invariants
//! - `get_user` either returns the record for `id` or an error describing
//!   the failure.
//! - Errors are plain values so callers can compare them for equality.

use crate::model::user::{User, UserId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Error reported by user repository implementations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// No user exists for the requested id.
    NotFound(UserId),
    /// Any other lookup failure, described by an opaque message.
    Lookup(String),
}

impl RepoError {
    /// Creates an opaque lookup failure from a message.
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup(message.into())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "user not found: {id}"),
            Self::Lookup(message) => write!(f, "{message}"),
        }
    }
}

impl Error for RepoError {}

/// Repository interface for user lookups.
pub trait UserRepository {
    fn get_user(&self, id: UserId) -> RepoResult<User>;
}

impl<R: UserRepository + ?Sized> UserRepository for &R {
    fn get_user(&self, id: UserId) -> RepoResult<User> {
        (**self).get_user(id)
    }
}

impl<R: UserRepository + ?Sized> UserRepository for Box<R> {
    fn get_user(&self, id: UserId) -> RepoResult<User> {
        (**self).get_user(id)
    }
}
