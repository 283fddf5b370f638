//! Shared types used across all modules.
//!
//! Defines the user record and the field limits enforced at the HTTP
//! boundary. Other modules import from here rather than reaching into
//! each other's internals.

pub mod user;

use std::ops::RangeInclusive;

pub use user::{User, UserId};

/// Allowed username length, counted in characters.
pub const USERNAME_LENGTH: RangeInclusive<usize> = 5..=20;

/// Allowed age in years.
pub const AGE_RANGE: RangeInclusive<u8> = 18..=120;

/// Smallest id accepted by the update and delete routes.
pub const MIN_USER_ID: UserId = 1;
