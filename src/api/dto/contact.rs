//! Contact request payloads and response shapes.

use chrono::{DateTime, Utc};
use phonenumber::metadata::DATABASE;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use crate::domain::entities::{Contact, ContactType};
use crate::error::{AppError, FieldError};

const PHONE_MAX_LENGTH: usize = 30;
const EMAIL_MAX_LENGTH: usize = 128;

/// Raw form body for contact create and update requests.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    pub phone_no: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub contact_type: Option<String>,
}

/// Validated contact fields.
///
/// Exactly one of `phone_no`/`email` is non-empty once validation succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub phone_no: String,
    pub email: String,
    pub contact_type: ContactType,
}

impl ContactPayload {
    /// Validates the payload into typed fields.
    ///
    /// Field checks run in declaration order (`phone_no`, `email`, `type`),
    /// followed by the phone/email exclusivity rule, which is attributed to
    /// `email`. All failures are aggregated into one ordered list. A field
    /// that failed its own checks counts as empty for the exclusivity rule;
    /// the rule is skipped entirely when `email` itself failed.
    pub fn validate(&self) -> Result<ContactFields, AppError> {
        let mut errors = Vec::new();

        let phone_no = validate_phone(self.phone_no.as_deref()).unwrap_or_else(|e| {
            errors.push(e);
            String::new()
        });

        let email = match validate_email(self.email.as_deref()) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        let contact_type = match validate_type(self.contact_type.as_deref()) {
            Ok(value) => Some(value),
            Err(e) => {
                errors.push(e);
                None
            }
        };

        if let Some(email_value) = email.as_deref() {
            if phone_no.is_empty() && email_value.is_empty() {
                errors.push(FieldError::invalid(
                    "email",
                    "Either phone number or email must be provided",
                ));
            } else if !phone_no.is_empty() && !email_value.is_empty() {
                errors.push(FieldError::invalid(
                    "email",
                    "Only one of phone or email can be provided",
                ));
            }
        }

        match (errors.is_empty(), email, contact_type) {
            (true, Some(email), Some(contact_type)) => Ok(ContactFields {
                phone_no,
                email,
                contact_type,
            }),
            _ => Err(AppError::validation(errors)),
        }
    }
}

fn validate_phone(raw: Option<&str>) -> Result<String, FieldError> {
    let value = raw.unwrap_or("").trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    let parsed = phonenumber::parse(None, value)
        .map_err(|e| FieldError::invalid("phone_no", e.to_string()))?;

    if !has_possible_length(&parsed) {
        return Err(FieldError::invalid(
            "phone_no",
            "Such phone number is impossible.",
        ));
    }
    if value.chars().count() > PHONE_MAX_LENGTH {
        return Err(FieldError::too_long(
            "phone_no",
            format!("Maximum phone length is {PHONE_MAX_LENGTH}"),
        ));
    }

    Ok(value.to_string())
}

const PHONE_KINDS: [phonenumber::Type; 10] = [
    phonenumber::Type::FixedLine,
    phonenumber::Type::Mobile,
    phonenumber::Type::TollFree,
    phonenumber::Type::PremiumRate,
    phonenumber::Type::SharedCost,
    phonenumber::Type::PersonalNumber,
    phonenumber::Type::Voip,
    phonenumber::Type::Pager,
    phonenumber::Type::Uan,
    phonenumber::Type::Voicemail,
];

/// Length-only possibility check, deliberately weaker than full pattern
/// validity: `+380111111111` is nobody's number, but nine national digits
/// is a plausible Ukrainian length, so it passes. `+180111111111` does
/// not, since no NANP number has eleven.
///
/// The bundled metadata leaves the general descriptor without length
/// data, so the possible lengths are the union over the per-type
/// descriptors. A number whose region cannot be resolved from its
/// national digits falls back to the main country for its calling code.
fn has_possible_length(number: &phonenumber::PhoneNumber) -> bool {
    let meta = number.metadata(&DATABASE).or_else(|| {
        DATABASE
            .by_code(&number.country().code())
            .and_then(|all| all.into_iter().find(|m| m.is_main_country_for_code()))
    });
    let Some(meta) = meta else {
        return false;
    };

    let length = number.national().to_string().len() as u16;

    PHONE_KINDS
        .iter()
        .filter_map(|&kind| meta.descriptors().get(kind))
        .any(|desc| {
            desc.possible_length().contains(&length)
                || desc.possible_local_length().contains(&length)
        })
}

fn validate_email(raw: Option<&str>) -> Result<String, FieldError> {
    let value = raw.unwrap_or("").trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    if !value.validate_email() {
        return Err(FieldError::invalid("email", "Invalid email address"));
    }
    if value.chars().count() > EMAIL_MAX_LENGTH {
        return Err(FieldError::too_long(
            "email",
            format!("Maximum email length is {EMAIL_MAX_LENGTH}"),
        ));
    }

    Ok(value.to_string())
}

fn validate_type(raw: Option<&str>) -> Result<ContactType, FieldError> {
    let Some(name) = raw else {
        return Err(FieldError::missing("type"));
    };

    ContactType::from_name(name.trim())
        .ok_or_else(|| FieldError::invalid("type", "Value must be one of: home, work, other"))
}

/// A contact as serialized in responses.
///
/// `type` is always the name string, never the stored code; `user_id`
/// never leaves the service.
#[derive(Debug, Serialize)]
pub struct ContactItem {
    pub id: i64,
    pub phone_no: String,
    pub email: String,
    #[serde(rename = "type")]
    pub contact_type: &'static str,
    pub created_at: DateTime<Utc>,
}

impl From<Contact> for ContactItem {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            phone_no: contact.phone_no,
            email: contact.email,
            contact_type: contact.contact_type.as_str(),
            created_at: contact.created_at,
        }
    }
}

/// Response body for `GET /api/users/{id}/contacts`.
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub total: i64,
    pub result: Vec<ContactItem>,
}

/// Response body for `GET /api/contacts/{id}`.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub result: ContactItem,
}

/// Response body for `POST /api/users/{id}/contacts`.
#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub result: CreatedContact,
}

#[derive(Debug, Serialize)]
pub struct CreatedContact {
    pub contact_id: i64,
}
