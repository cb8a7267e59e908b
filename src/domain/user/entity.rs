//! User entity

use serde::{Deserialize, Serialize};

/// Display-ready user record held by the store.
///
/// Immutable once constructed; new values come only out of the formatting
/// pipeline or a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// External, caller-supplied identifier; the sole lookup/removal key.
    uid: String,
    first_name: String,
    last_name: String,
    username: String,
    /// Whole years elapsed since the birthdate.
    age: u32,
    /// Formatted currency string, synthesized at formatting time.
    salary: String,
}

impl User {
    pub fn new(
        uid: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        username: impl Into<String>,
        age: u32,
        salary: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: username.into(),
            age,
            salary: salary.into(),
        }
    }

    // Getters

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn salary(&self) -> &str {
        &self.salary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user() -> User {
        User::new("u-1", "Ada", "Lovelace", "ada.lovelace", 36, "R$ 1234,00")
    }

    #[test]
    fn test_user_creation() {
        let user = create_test_user();

        assert_eq!(user.uid(), "u-1");
        assert_eq!(user.first_name(), "Ada");
        assert_eq!(user.last_name(), "Lovelace");
        assert_eq!(user.username(), "ada.lovelace");
        assert_eq!(user.age(), 36);
        assert_eq!(user.salary(), "R$ 1234,00");
    }

    #[test]
    fn test_user_serialization_field_names() {
        let user = create_test_user();

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["uid"], "u-1");
        assert_eq!(json["first_name"], "Ada");
        assert_eq!(json["date_of_birth"], serde_json::Value::Null);
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = create_test_user();

        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }
}
