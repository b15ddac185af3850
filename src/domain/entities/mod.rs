//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures of the contact book:
//! users and the contacts they own. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A contact-book user owned by a creator
//! - [`Contact`] - A phone or email entry belonging to a user
//! - [`ContactType`] - The home/work/other classification
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for writes:
//! - `NewUser`, `NewContact` - For creating new records
//! - `UserUpdate`, `ContactUpdate` - For updates
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod contact;
pub mod user;

pub use contact::{Contact, ContactType, ContactUpdate, NewContact};
pub use user::{NewUser, User, UserUpdate};
