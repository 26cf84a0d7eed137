//! Admin endpoint: the user roster.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::ApiError;

/// One row of the user roster.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserRecord {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fetches all users. Admin-only on the server side; a non-admin session
/// gets a status error back.
pub async fn list_users() -> Result<Vec<UserRecord>, ApiError> {
    super::get_json("/api/users").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_row_parses() {
        let users: Vec<UserRecord> = serde_json::from_str(
            r#"[{
                "username": "admin",
                "full_name": null,
                "role": "admin",
                "is_active": true,
                "created_at": "2023-11-02T09:30:00Z"
            }]"#,
        )
        .unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
        assert!(users[0].full_name.is_none());
        assert!(users[0].is_active);
    }
}
