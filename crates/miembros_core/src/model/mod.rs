//! Member domain model.
//!
//! # Responsibility
//! - Define the canonical member record and its create/patch inputs.
//! - Own the partial-update merge policy so storage stays policy-free.
//!
//! # Invariants
//! - Every stored member is identified by a storage-assigned `MemberId`.
//! - Deletion is physical; there is no tombstone state.

pub mod member;
