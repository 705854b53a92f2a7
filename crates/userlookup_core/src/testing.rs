//! Scripted repository double for service-level tests.
//!
//! # Responsibility
//! - Stand in for a real `UserRepository` with canned responses.
//! - Fail the enclosing test when the call pattern deviates from the script.
//!
//! # Invariants
//! - Each configured expectation is consumed exactly once, in order.
//! - Deviations (wrong id, unexpected call, unmet expectation) panic; they are
//!   never reported as `RepoError` values.
//! - Unmet expectations are checked on drop unless the thread is already
//!   panicking.

use crate::model::user::{User, UserId};
use crate::repo::user_repo::{RepoResult, UserRepository};
use log::debug;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

#[derive(Debug)]
struct Expectation {
    id: UserId,
    response: RepoResult<User>,
}

/// `UserRepository` that replays scripted responses and asserts call patterns.
///
/// ```
/// use userlookup_core::testing::ScriptedUserRepository;
/// use userlookup_core::{User, UserService};
///
/// let repo = ScriptedUserRepository::new();
/// repo.expect_get_user(1, Ok(User::new(1, "Alice")));
///
/// let service = UserService::new(&repo);
/// assert_eq!(service.get_user_name(1).as_deref(), Ok("Alice"));
/// repo.verify();
/// ```
#[derive(Debug, Default)]
pub struct ScriptedUserRepository {
    expectations: RefCell<VecDeque<Expectation>>,
    calls: Cell<usize>,
}

impl ScriptedUserRepository {
    /// Creates a repository with no expected calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects one `get_user(id)` call answered with `response`.
    ///
    /// Expectations queue up and are matched in configuration order.
    pub fn expect_get_user(&self, id: UserId, response: RepoResult<User>) -> &Self {
        self.expectations
            .borrow_mut()
            .push_back(Expectation { id, response });
        self
    }

    /// Number of `get_user` calls observed so far.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }

    /// Number of configured calls not yet made.
    pub fn pending(&self) -> usize {
        self.expectations.borrow().len()
    }

    /// Panics when configured expectations were not consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.borrow();
        if let Some(next) = remaining.front() {
            panic!(
                "missing call(s) to get_user: {} expected call(s) not made, next expected id={} (observed {} call(s))",
                remaining.len(),
                next.id,
                self.calls.get()
            );
        }
    }
}

impl UserRepository for ScriptedUserRepository {
    fn get_user(&self, id: UserId) -> RepoResult<User> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        let expectation = self.expectations.borrow_mut().pop_front();
        let Some(expectation) = expectation else {
            panic!("unexpected call to get_user(id={id}): no call expected (call #{call})");
        };
        if expectation.id != id {
            panic!(
                "unexpected call to get_user(id={id}): expected id={} (call #{call})",
                expectation.id
            );
        }

        debug!(
            "event=scripted_call module=testing id={id} ok={}",
            expectation.response.is_ok()
        );
        expectation.response
    }
}

impl Drop for ScriptedUserRepository {
    fn drop(&mut self) {
        if !std::thread::panicking() {
            self.verify();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ScriptedUserRepository;
    use crate::model::user::User;
    use crate::repo::user_repo::{RepoError, UserRepository};

    #[test]
    fn replays_expectations_in_order() {
        let repo = ScriptedUserRepository::new();
        repo.expect_get_user(1, Ok(User::new(1, "Alice")))
            .expect_get_user(2, Err(RepoError::NotFound(2)));
        assert_eq!(repo.pending(), 2);

        assert_eq!(repo.get_user(1), Ok(User::new(1, "Alice")));
        assert_eq!(repo.get_user(2), Err(RepoError::NotFound(2)));
        assert_eq!(repo.call_count(), 2);
        assert_eq!(repo.pending(), 0);
        repo.verify();
    }

    #[test]
    fn unused_repository_verifies_clean() {
        let repo = ScriptedUserRepository::new();
        repo.verify();
        assert_eq!(repo.call_count(), 0);
    }

    #[test]
    #[should_panic(expected = "expected id=1")]
    fn mismatched_id_fails() {
        let repo = ScriptedUserRepository::new();
        repo.expect_get_user(1, Ok(User::new(1, "Alice")));
        let _ = repo.get_user(2);
    }

    #[test]
    #[should_panic(expected = "no call expected")]
    fn extra_call_fails() {
        let repo = ScriptedUserRepository::new();
        repo.expect_get_user(1, Ok(User::new(1, "Alice")));
        let _ = repo.get_user(1);
        let _ = repo.get_user(1);
    }

    #[test]
    #[should_panic(expected = "missing call(s) to get_user")]
    fn unmet_expectation_fails_on_verify() {
        let repo = ScriptedUserRepository::new();
        repo.expect_get_user(1, Ok(User::new(1, "Alice")));
        repo.verify();
    }

    #[test]
    #[should_panic(expected = "missing call(s) to get_user")]
    fn unmet_expectation_fails_on_drop() {
        let repo = ScriptedUserRepository::new();
        repo.expect_get_user(5, Err(RepoError::lookup("unreachable")));
        drop(repo);
    }
}
