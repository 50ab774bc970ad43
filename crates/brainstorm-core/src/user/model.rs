//! User domain model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::idea::UserId;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Identity provider the account signed in with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginProvider {
    Local,
    Google,
    Kakao,
    Naver,
}

/// The authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub email: Option<String>,
    pub username: String,
    #[serde(default)]
    pub provider: Option<LoginProvider>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in page headers.
    pub fn display_name(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_auth_me_payload() {
        let json = r#"{
            "userId": 42,
            "email": "kim@example.com",
            "username": "kim",
            "provider": "KAKAO",
            "role": "ADMIN",
            "createdAt": "2025-01-02T03:04:05"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.provider, Some(LoginProvider::Kakao));
        assert!(user.is_admin());
    }

    #[test]
    fn test_missing_role_defaults_to_user() {
        let user: User = serde_json::from_str(r#"{"userId": 1, "username": "lee"}"#).unwrap();
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
        assert_eq!(user.display_name(), "lee");
    }
}
