use serde::{Deserialize, Serialize};

use crate::security;

/// Registered user account
///
/// Only the salted hash of the password is ever stored; see
/// [`crate::security`] for the hash format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique id, assigned monotonically starting at 1
    pub id: u64,
    /// Unique username (case-sensitive)
    pub username: String,
    pub password_hash: String,
}

impl User {
    /// Next id for a new user: one past the current maximum, or 1 for an
    /// empty collection
    pub fn next_id(users: &[User]) -> u64 {
        users.iter().map(|u| u.id).max().unwrap_or(0) + 1
    }

    /// Verify a candidate password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        security::verify_password(&self.password_hash, password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::security::hash_password;

    #[test]
    fn test_next_id_empty() {
        assert_eq!(User::next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_from_max() {
        let users = vec![
            User {
                id: 4,
                username: "alice".to_string(),
                password_hash: hash_password("x"),
            },
            User {
                id: 2,
                username: "bob".to_string(),
                password_hash: hash_password("y"),
            },
        ];
        assert_eq!(User::next_id(&users), 5);
    }

    #[test]
    fn test_verify_password() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: hash_password("secret"),
        };

        assert!(user.verify_password("secret"));
        assert!(!user.verify_password("wrong"));
        assert!(!user.verify_password(""));
        assert!(!user.verify_password("Secret")); // Case sensitive
    }
}
