//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements over a shared connection pool.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User storage with eager contacts and cascade delete
//! - [`PgContactRepository`] - Contact storage scoped by owning user

mod rows;

pub mod pg_contact_repository;
pub mod pg_user_repository;

pub use pg_contact_repository::PgContactRepository;
pub use pg_user_repository::PgUserRepository;
