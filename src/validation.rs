//! Boundary validation for raw path parameters.
//!
//! Handlers receive path segments as strings and run them through the
//! functions here before touching the registry. Each function returns a
//! typed value or the list of violated constraints, so domain code never
//! sees an out-of-range username, age, or id.
//!
//! ## Limits
//!
//! - `username`: 5 to 20 characters (Unicode scalar values, not bytes).
//! - `age`: integer in 18 to 120.
//! - `user_id`: integer, at least 1 on the update and delete routes.

use std::fmt;
use std::num::IntErrorKind;

use serde::Serialize;
use thiserror::Error;

use crate::models::{AGE_RANGE, MIN_USER_ID, USERNAME_LENGTH, UserId};

/// A single violated constraint on one field.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    /// The path parameter that failed validation.
    pub field: &'static str,
    /// Description of the violated constraint.
    pub constraint: String,
}

impl ValidationError {
    pub fn new(field: &'static str, constraint: impl Into<String>) -> Self {
        Self {
            field,
            constraint: constraint.into(),
        }
    }
}

/// Every constraint violated by one request, in path order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    /// Record the error side of `result` and pass the value through.
    fn collect<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(e);
                None
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self(vec![error])
    }
}

/// Validated input for creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub age: u8,
}

/// Validated input for updating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    /// `None` when the id is a valid integer too large to name any user.
    pub id: Option<UserId>,
    pub username: String,
    pub age: u8,
}

/// Validate the `POST /user/{username}/{age}` parameters.
pub fn validate_new_user(username: &str, age: &str) -> Result<NewUser, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let username = errors.collect(validate_username(username));
    let age = errors.collect(parse_age(age));

    match (username, age) {
        (Some(username), Some(age)) => Ok(NewUser { username, age }),
        _ => Err(errors),
    }
}

/// Validate the `PUT /user/{user_id}/{username}/{age}` parameters.
pub fn validate_user_update(
    user_id: &str,
    username: &str,
    age: &str,
) -> Result<UserUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let id = errors.collect(parse_user_id(user_id));
    let username = errors.collect(validate_username(username));
    let age = errors.collect(parse_age(age));

    match (id, username, age) {
        (Some(id), Some(username), Some(age)) => Ok(UserUpdate { id, username, age }),
        _ => Err(errors),
    }
}

/// Validate a user id that must be at least [`MIN_USER_ID`].
///
/// Returns `None` for integers above `i64::MAX`: they satisfy the bound but
/// can never name a user, so callers answer "not found".
pub fn parse_user_id(raw: &str) -> Result<Option<UserId>, ValidationError> {
    let below_minimum = |value: &str| {
        ValidationError::new(
            "user_id",
            format!("value {value} is below minimum {MIN_USER_ID}"),
        )
    };
    match parse_integer("user_id", raw)? {
        Integer::Value(value) if value >= MIN_USER_ID as i64 => Ok(Some(value as UserId)),
        Integer::Value(_) | Integer::BelowRange => Err(below_minimum(raw)),
        Integer::AboveRange => Ok(None),
    }
}

/// Parse a user id for lookup. Any integer is accepted.
///
/// Returns `None` for integers that cannot name a user (zero, negative, or
/// beyond `i64`), which callers treat as "not found" rather than a
/// validation failure.
pub fn parse_lookup_id(raw: &str) -> Result<Option<UserId>, ValidationError> {
    match parse_integer("user_id", raw)? {
        Integer::Value(value) => Ok(UserId::try_from(value).ok().filter(|id| *id >= MIN_USER_ID)),
        Integer::AboveRange | Integer::BelowRange => Ok(None),
    }
}

/// Check the username length, counted in characters.
pub fn validate_username(raw: &str) -> Result<String, ValidationError> {
    let len = raw.chars().count();
    if len < *USERNAME_LENGTH.start() {
        return Err(ValidationError::new(
            "username",
            format!(
                "length {len} is below minimum {} characters",
                USERNAME_LENGTH.start()
            ),
        ));
    }
    if len > *USERNAME_LENGTH.end() {
        return Err(ValidationError::new(
            "username",
            format!(
                "length {len} exceeds maximum {} characters",
                USERNAME_LENGTH.end()
            ),
        ));
    }
    Ok(raw.to_string())
}

/// Parse an age and check it against [`AGE_RANGE`].
pub fn parse_age(raw: &str) -> Result<u8, ValidationError> {
    let below = || {
        ValidationError::new(
            "age",
            format!("value {raw} is below minimum {}", AGE_RANGE.start()),
        )
    };
    let above = || {
        ValidationError::new(
            "age",
            format!("value {raw} exceeds maximum {}", AGE_RANGE.end()),
        )
    };
    match parse_integer("age", raw)? {
        Integer::Value(value) if value < i64::from(*AGE_RANGE.start()) => Err(below()),
        Integer::Value(value) if value > i64::from(*AGE_RANGE.end()) => Err(above()),
        Integer::Value(value) => Ok(value as u8),
        Integer::BelowRange => Err(below()),
        Integer::AboveRange => Err(above()),
    }
}

/// A syntactically valid integer segment. Values outside `i64` are kept
/// apart from non-numeric text so they can fail the range check instead.
enum Integer {
    Value(i64),
    AboveRange,
    BelowRange,
}

fn parse_integer(field: &'static str, raw: &str) -> Result<Integer, ValidationError> {
    match raw.parse::<i64>() {
        Ok(value) => Ok(Integer::Value(value)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Integer::AboveRange),
            IntErrorKind::NegOverflow => Ok(Integer::BelowRange),
            _ => Err(ValidationError::new(
                field,
                format!("{raw:?} is not a valid integer"),
            )),
        },
    }
}
