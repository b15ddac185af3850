//! Credential verification and ownership checks.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use regex::Regex;
use serde::Deserialize;
use std::sync::{Arc, LazyLock};

use crate::domain::repositories::{ContactRepository, UserRepository};
use crate::error::{AppError, FieldError};

static BEARER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Bearer ([A-Za-z0-9.\-_=]+)$").unwrap());

/// The verified caller identity extracted from the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Creator {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
struct Claims {
    id: i64,
}

/// Service verifying bearer credentials and resource ownership.
///
/// Credentials are RS256-signed JWTs carrying a single numeric `id` claim
/// (the creator id). Tokens have no expiry claim, so expiry validation is
/// disabled. Ownership is always derived from the stored `creator_id` of
/// the target user (for contacts, the contact's owning user), never from
/// request data.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    contacts: Arc<dyn ContactRepository>,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Creates a new service around the repositories and the public key
    /// used to verify token signatures.
    pub fn new(
        users: Arc<dyn UserRepository>,
        contacts: Arc<dyn ContactRepository>,
        decoding_key: DecodingKey,
    ) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            users,
            contacts,
            decoding_key,
            validation,
        }
    }

    /// Extracts and verifies the bearer credential from request headers.
    ///
    /// Exactly one `Authorization` header is accepted. Header problems are
    /// validation failures addressed to the `Authorization` field (a bad
    /// request), never a 401: 401 is reserved for a verified caller failing
    /// an ownership check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the header is absent or repeated,
    /// does not match `Bearer <token>`, or the token fails signature or
    /// claim checks.
    pub fn verify_credentials(&self, headers: &HeaderMap) -> Result<Creator, AppError> {
        let mut values = headers.get_all(AUTHORIZATION).iter();
        let Some(value) = values.next() else {
            return Err(AppError::field(FieldError::missing("Authorization")));
        };
        if values.next().is_some() {
            return Err(Self::credential_error());
        }

        let token = value
            .to_str()
            .ok()
            .and_then(|v| BEARER_REGEX.captures(v))
            .and_then(|caps| caps.get(1))
            .ok_or_else(Self::credential_error)?;

        let data =
            jsonwebtoken::decode::<Claims>(token.as_str(), &self.decoding_key, &self.validation)
                .map_err(|_| Self::credential_error())?;

        Ok(Creator {
            id: data.claims.id,
        })
    }

    fn credential_error() -> AppError {
        AppError::field(FieldError::invalid(
            "Authorization",
            "Error while extracting creator id from JWT",
        ))
    }

    /// Checks that `creator` owns the user before a mutation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist; a caller
    /// cannot fail authorization against something that is not there.
    /// Returns [`AppError::Unauthorized`] if the stored `creator_id`
    /// differs from the caller's.
    pub async fn ensure_can_edit_user(
        &self,
        user_id: i64,
        creator: Creator,
    ) -> Result<(), AppError> {
        let user = self.users.get(user_id).await?;

        if user.creator_id != creator.id {
            return Err(AppError::unauthorized(format!(
                "Creator {} can't edit user {}",
                creator.id, user_id
            )));
        }

        Ok(())
    }

    /// Checks that `creator` owns the contact's owning user before a
    /// mutation.
    ///
    /// Ownership is resolved through the contact's `user_id`; the contact
    /// id itself carries no ownership information and is never compared
    /// against user ids.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the contact does not exist.
    /// Returns [`AppError::Unauthorized`] if the owning user's `creator_id`
    /// differs from the caller's.
    pub async fn ensure_can_edit_contact(
        &self,
        contact_id: i64,
        creator: Creator,
    ) -> Result<(), AppError> {
        let contact = self.contacts.get(contact_id).await?;
        let owner = self.users.get(contact.user_id).await?;

        if owner.creator_id != creator.id {
            return Err(AppError::unauthorized(format!(
                "Creator {} can't edit contact {}",
                creator.id, contact_id
            )));
        }

        Ok(())
    }
}
