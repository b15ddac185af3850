//! Data Transfer Objects for API requests and responses.
//!
//! Request bodies arrive as `application/x-www-form-urlencoded` with every
//! field optional at the wire level; each payload's `validate()` turns the
//! raw input into typed fields or an ordered, aggregated list of
//! [`crate::error::FieldError`] entries.

pub mod contact;
pub mod health;
pub mod pagination;
pub mod user;
