//! User lookup service.
//!
//! # Responsibility
//! - Project user fields from records fetched through `UserRepository`.
//!
//! # Invariants
//! - Exactly one repository call per lookup, with the caller's id unchanged.
//! - Repository errors are returned as-is, never wrapped or replaced.
//! - Service layer remains storage-agnostic.

use crate::model::user::UserId;
use crate::repo::user_repo::{RepoResult, UserRepository};

/// Use-case service for user lookups.
pub struct UserService<R: UserRepository> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the name of the user identified by `id`.
    ///
    /// # Contract
    /// - `id` is forwarded without validation.
    /// - An empty name is a successful answer; only `Err` signals failure.
    ///
    /// # Errors
    /// Returns the repository error unchanged.
    pub fn get_user_name(&self, id: UserId) -> RepoResult<String> {
        let user = self.repo.get_user(id)?;
        Ok(user.name)
    }

    /// Returns the repository this service delegates to.
    pub fn repository(&self) -> &R {
        &self.repo
    }
}

#[cfg(test)]
mod tests {
    use super::UserService;
    use crate::model::user::{User, UserId};
    use crate::repo::user_repo::RepoError;
    use crate::testing::ScriptedUserRepository;

    struct Case {
        name: &'static str,
        user_id: UserId,
        response: Result<User, RepoError>,
        want: Result<&'static str, RepoError>,
    }

    #[test]
    fn get_user_name_cases() {
        let cases = [
            Case {
                name: "found user returns its name",
                user_id: 1,
                response: Ok(User::new(1, "Alice")),
                want: Ok("Alice"),
            },
            Case {
                name: "lookup failure is returned unchanged",
                user_id: 1,
                response: Err(RepoError::lookup("user not found")),
                want: Err(RepoError::lookup("user not found")),
            },
            Case {
                name: "empty name is still a success",
                user_id: 42,
                response: Ok(User::new(42, "")),
                want: Ok(""),
            },
        ];

        for case in cases {
            let repo = ScriptedUserRepository::new();
            repo.expect_get_user(case.user_id, case.response);
            let service = UserService::new(&repo);

            let got = service.get_user_name(case.user_id);

            assert_eq!(got, case.want.map(str::to_owned), "{}", case.name);
            assert_eq!(repo.call_count(), 1, "{}", case.name);
            repo.verify();
        }
    }

    #[test]
    fn repository_accessor_exposes_injected_repository() {
        let repo = ScriptedUserRepository::new();
        repo.expect_get_user(9, Err(RepoError::NotFound(9)));
        let service = UserService::new(repo);

        assert_eq!(service.get_user_name(9), Err(RepoError::NotFound(9)));
        assert_eq!(service.repository().call_count(), 1);
    }
}
