//! Session data model shared between the API layer and the UI.
//!
//! Wire shapes match the OrthoWatch backend: users are camelCase JSON
//! objects, roles are SCREAMING_SNAKE_CASE strings.

use serde::{Deserialize, Serialize};

/// Clinical role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Surgeon,
    Nurse,
}

impl Role {
    /// Human-readable role label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "System Administrator",
            Role::Surgeon => "Surgeon",
            Role::Nurse => "Nurse",
        }
    }

    /// Role-specific greeting shown on the dashboard.
    pub fn greeting(self) -> &'static str {
        match self {
            Role::Admin => "Manage the system, users, and hospital settings.",
            Role::Surgeon => "Review your patients' recovery progress and risk alerts.",
            Role::Nurse => "Check outstanding alerts and respond to patient updates.",
        }
    }
}

/// An authenticated user as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub full_name: String,
}

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response body of both login and refresh.
///
/// The refresh token also travels in an HttpOnly cookie managed by the
/// transport; the body copy is never read by this client.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_wire_shape() {
        let json = r#"{
            "id": "u-17",
            "email": "n.okafor@stmarys.example",
            "role": "NURSE",
            "fullName": "Ngozi Okafor"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, Role::Nurse);
        assert_eq!(user.full_name, "Ngozi Okafor");
    }

    #[test]
    fn test_auth_result_without_refresh_token() {
        let json = r#"{
            "accessToken": "jwt-abc",
            "user": {
                "id": "u-1",
                "email": "admin@stmarys.example",
                "role": "ADMIN",
                "fullName": "Ada Admin"
            }
        }"#;

        let result: AuthResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.access_token, "jwt-abc");
        assert!(result.refresh_token.is_none());
        assert_eq!(result.user.role.label(), "System Administrator");
    }

    #[test]
    fn test_role_serializes_screaming_snake() {
        assert_eq!(serde_json::to_string(&Role::Surgeon).unwrap(), "\"SURGEON\"");
    }
}
