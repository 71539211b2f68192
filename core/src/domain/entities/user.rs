//! User entity representing a registered user in the marketplace.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user in the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    /// A regular marketplace user
    User,
    /// An administrator with full access to all resources
    Admin,
}

/// User entity representing a registered user
///
/// The email doubles as the token subject, so it is unique and immutable
/// once the account exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Unique email address, used as the token subject
    pub email: String,

    /// Role of the user (User or Admin)
    pub role: UserRole,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance with the regular user role
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: email.into(),
            role: UserRole::User,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a new administrator account
    pub fn new_admin(id: i64, email: impl Into<String>) -> Self {
        let mut user = Self::new(id, email);
        user.role = UserRole::Admin;
        user
    }

    /// Changes the user's role (administrative action)
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is an administrator
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let user = User::new(1, "alice@example.com");

        assert_eq!(user.id, 1);
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, UserRole::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_new_admin_creation() {
        let admin = User::new_admin(2, "admin@example.com");

        assert_eq!(admin.role, UserRole::Admin);
        assert!(admin.is_admin());
    }

    #[test]
    fn test_set_role() {
        let mut user = User::new(3, "bob@example.com");

        user.set_role(UserRole::Admin);
        assert!(user.is_admin());
        user.set_role(UserRole::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");

        let json = serde_json::to_string(&UserRole::User).unwrap();
        assert_eq!(json, "\"USER\"");
    }
}
