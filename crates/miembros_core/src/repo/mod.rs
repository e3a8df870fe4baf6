//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the identifier-keyed storage contract for members.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod member_repo;
