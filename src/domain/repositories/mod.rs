//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User CRUD with eager contacts and cascade delete
//! - [`ContactRepository`] - Contact CRUD scoped by owning user
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod contact_repository;
pub mod user_repository;

pub use contact_repository::ContactRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use contact_repository::MockContactRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
