//! In-memory user store.
//!
//! An ordered `Vec<User>` in insertion order. Lookups are linear scans.

use crate::models::{User, UserId};

use super::RegistryError;

/// The registry's storage: every live user plus the id high-water mark.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: Vec<User>,
    /// Largest id ever issued. Ids above it are free; ids at or below it
    /// are never handed out again, even after deletion.
    last_issued: UserId,
}

impl UserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in insertion order.
    pub fn list(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Append a user with the next free id and return it.
    pub fn create(&mut self, username: impl Into<String>, age: u8) -> User {
        let user = User::new(self.next_id(), username, age);
        self.last_issued = user.id;
        self.users.push(user.clone());
        user
    }

    /// Find a user by id.
    pub fn get(&self, id: UserId) -> Result<&User, RegistryError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    /// Replace username and age of an existing user in place. The id and
    /// list position are unchanged.
    pub fn update(
        &mut self,
        id: UserId,
        username: impl Into<String>,
        age: u8,
    ) -> Result<&User, RegistryError> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        user.username = username.into();
        user.age = age;
        Ok(user)
    }

    /// Remove a user and return it.
    pub fn delete(&mut self, id: UserId) -> Result<User, RegistryError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.users.remove(index))
    }

    fn next_id(&self) -> UserId {
        let max_live = self.users.iter().map(|u| u.id).max().unwrap_or(0);
        max_live.max(self.last_issued) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_user_gets_id_one() {
        let mut registry = UserRegistry::new();
        let user = registry.create("UrbanUser", 24);
        assert_eq!(user, User::new(1, "UrbanUser", 24));
        assert_eq!(registry.list(), &[user]);
    }

    #[test]
    fn ids_increase_by_one() {
        let mut registry = UserRegistry::new();
        let ids: Vec<_> = ["alice", "bobby", "carol"]
            .iter()
            .map(|name| registry.create(*name, 30).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn ids_are_not_reused_after_deleting_the_newest() {
        let mut registry = UserRegistry::new();
        registry.create("alice", 30);
        registry.create("bobby", 31);
        registry.delete(2).unwrap();
        assert_eq!(registry.create("carol", 32).id, 3);
    }

    #[test]
    fn ids_are_not_reused_after_emptying() {
        let mut registry = UserRegistry::new();
        registry.create("alice", 30);
        registry.delete(1).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.create("bobby", 31).id, 2);
    }

    #[test]
    fn get_missing_is_not_found() {
        let registry = UserRegistry::new();
        assert_eq!(registry.get(999), Err(RegistryError::NotFound(999)));
    }

    #[test]
    fn update_preserves_id_and_position() {
        let mut registry = UserRegistry::new();
        registry.create("alice", 30);
        registry.create("bobby", 31);

        let updated = registry.update(1, "UrbanProfi", 28).unwrap().clone();
        assert_eq!(updated, User::new(1, "UrbanProfi", 28));
        assert_eq!(registry.list()[0], updated);
        assert_eq!(registry.list()[1].username, "bobby");
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut registry = UserRegistry::new();
        assert_eq!(
            registry.update(5, "UrbanProfi", 28).unwrap_err(),
            RegistryError::NotFound(5)
        );
    }

    #[test]
    fn delete_removes_from_list() {
        let mut registry = UserRegistry::new();
        registry.create("alice", 30);
        registry.create("bobby", 31);
        registry.create("carol", 32);

        let removed = registry.delete(2).unwrap();
        assert_eq!(removed.username, "bobby");
        let names: Vec<_> = registry.list().iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["alice", "carol"]);
    }

    #[test]
    fn delete_twice_is_not_found() {
        let mut registry = UserRegistry::new();
        registry.create("alice", 30);
        assert!(registry.delete(1).is_ok());
        assert_eq!(registry.delete(1), Err(RegistryError::NotFound(1)));
    }
}
