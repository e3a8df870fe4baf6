//! Member use-case service.
//!
//! # Responsibility
//! - Provide create/get/partial-update/delete entry points for callers.
//! - Enforce the partial-update contract before touching storage.
//!
//! # Invariants
//! - Patch validation runs before the lookup, so an empty patch is reported
//!   as a validation error even for unknown ids.
//! - Updates are merge-then-save on a single row; nothing is written when
//!   validation or lookup fails.
//! - Service layer remains storage-agnostic.

use crate::model::member::{Member, MemberId, MemberPatch, MemberValidationError, NewMember};
use crate::repo::member_repo::{MemberRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type MemberServiceResult<T> = Result<T, MemberServiceError>;

/// Service error for member use-cases.
#[derive(Debug)]
pub enum MemberServiceError {
    /// Patch carries no usable text field.
    Validation(MemberValidationError),
    /// Target member does not exist.
    MemberNotFound(MemberId),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for MemberServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::MemberNotFound(id) => write!(f, "member not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for MemberServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::MemberNotFound(_) => None,
        }
    }
}

impl From<RepoError> for MemberServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::MemberNotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<MemberValidationError> for MemberServiceError {
    fn from(value: MemberValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Use-case service wrapper for member operations.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new member unconditionally and returns it with its id.
    pub fn create_member(&self, member: &NewMember) -> MemberServiceResult<Member> {
        let created = self.repo.insert(member)?;
        info!(
            "event=member_create module=service status=ok member_id={}",
            created.id
        );
        Ok(created)
    }

    /// Gets one member by id.
    pub fn get_member(&self, id: MemberId) -> MemberServiceResult<Member> {
        self.repo
            .find_by_id(id)?
            .ok_or(MemberServiceError::MemberNotFound(id))
    }

    /// Applies a partial update to an existing member.
    ///
    /// # Contract
    /// - Fails with `Validation` when no text field is present and non-empty.
    /// - Fails with `MemberNotFound` when `id` is unknown.
    /// - Returns the stored record after the merge.
    pub fn update_member(&self, id: MemberId, patch: &MemberPatch) -> MemberServiceResult<Member> {
        patch.validate()?;

        let mut member = self.get_member(id)?;
        patch.apply_to(&mut member);
        let saved = self.repo.save(&member)?;

        info!(
            "event=member_update module=service status=ok member_id={} active={}",
            saved.id, saved.active
        );
        Ok(saved)
    }

    /// Physically deletes a member.
    pub fn delete_member(&self, id: MemberId) -> MemberServiceResult<()> {
        if !self.repo.exists_by_id(id)? {
            return Err(MemberServiceError::MemberNotFound(id));
        }

        self.repo.delete_by_id(id)?;
        info!("event=member_delete module=service status=ok member_id={id}");
        Ok(())
    }

    /// Lists all members ordered by id.
    pub fn list_members(&self) -> MemberServiceResult<Vec<Member>> {
        Ok(self.repo.find_all()?)
    }
}
