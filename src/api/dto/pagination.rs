//! Pagination query parameters.

use serde::Deserialize;

use crate::error::{AppError, FieldError};

/// Upper bound for listing windows.
///
/// Carried in application state and passed into validation explicitly;
/// there is no ambient global to consult.
#[derive(Debug, Clone, Copy)]
pub struct PagingLimits {
    pub max_limit: i64,
}

/// Raw `limit`/`offset` query parameters.
///
/// Both arrive as untyped strings so that non-numeric input surfaces as a
/// field error on the offending parameter rather than a deserialization
/// rejection.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A validated paging window ready for SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub limit: i64,
    pub offset: i64,
}

impl PageParams {
    /// Validates both parameters against the configured ceiling.
    ///
    /// # Defaults
    ///
    /// - `limit`: the configured maximum
    /// - `offset`: 0 (no skip)
    ///
    /// # Validation
    ///
    /// - Both must parse as integers greater than zero when supplied
    /// - `limit` must not exceed the configured maximum
    ///
    /// Failures are aggregated: a request with a bad `limit` and a bad
    /// `offset` reports both at once, `limit` first.
    pub fn validate(&self, limits: PagingLimits) -> Result<PageWindow, AppError> {
        let mut errors = Vec::new();

        let mut limit = limits.max_limit;
        if let Some(raw) = self.limit.as_deref() {
            match parse_positive("limit", raw) {
                Ok(value) if value > limits.max_limit => errors.push(FieldError::out_of_range(
                    "limit",
                    format!("limit must not be greater than {}", limits.max_limit),
                )),
                Ok(value) => limit = value,
                Err(e) => errors.push(e),
            }
        }

        let mut offset = 0;
        if let Some(raw) = self.offset.as_deref() {
            match parse_positive("offset", raw) {
                Ok(value) => offset = value,
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok(PageWindow { limit, offset })
    }
}

fn parse_positive(location: &'static str, raw: &str) -> Result<i64, FieldError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| FieldError::invalid(location, "Must be an integer"))?;

    if value <= 0 {
        return Err(FieldError::out_of_range(location, "Must be greater than 0"));
    }

    Ok(value)
}
