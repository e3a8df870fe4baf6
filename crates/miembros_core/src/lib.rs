//! Core domain logic for the member registry.
//! This crate is the single source of truth for member invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget,
};
pub use model::member::{Member, MemberId, MemberPatch, MemberValidationError, NewMember};
pub use repo::member_repo::{MemberRepository, RepoError, RepoResult, SqliteMemberRepository};
pub use service::member_service::{MemberService, MemberServiceError, MemberServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
