//! Domain layer containing business entities and logic.
//!
//! This module implements the core domain logic following Clean Architecture
//! principles. It defines entities and repository interfaces independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by the infrastructure layer
//! - Ownership rules are enforced by the auth service
//!   (see [`crate::application::services`]) before any mutation runs

pub mod entities;
pub mod repositories;
