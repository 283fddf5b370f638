//! The user record stored in the registry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned user identifier. Always positive.
pub type UserId = u64;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique id, assigned by the registry on creation and never changed.
    pub id: UserId,
    /// Display name, 5 to 20 characters.
    pub username: String,
    /// Age in years, 18 to 120.
    pub age: u8,
}

impl User {
    pub fn new(id: UserId, username: impl Into<String>, age: u8) -> Self {
        Self {
            id,
            username: username.into(),
            age,
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.username, self.age)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_flat_json() {
        let user = User::new(1, "UrbanUser", 24);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "username": "UrbanUser", "age": 24})
        );
    }

    #[test]
    fn display_includes_all_fields() {
        let user = User::new(7, "UrbanProfi", 28);
        assert_eq!(user.to_string(), "#7 UrbanProfi (28)");
    }
}
