//! Application layer services implementing business logic.
//!
//! This layer sits between HTTP handlers and the domain: it consumes the
//! repository traits and enforces the rules that span a single request.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Credential verification and
//!   ownership checks, run before any mutation executes

pub mod services;
