//! Cache key generators for consistent key naming.

use roster_core::UserId;

/// Cache key for the full user listing.
#[must_use]
pub fn users_all() -> String {
    "users:all".to_string()
}

/// Cache key for a single user by ID.
#[must_use]
pub fn user_by_id(id: UserId) -> String {
    format!("user:{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_all_key() {
        assert_eq!(users_all(), "users:all");
    }

    #[test]
    fn test_user_by_id_key() {
        assert_eq!(user_by_id(UserId::new(42)), "user:42");
    }
}
