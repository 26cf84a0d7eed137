//! Session endpoints: sign-in, sign-out, and session restore.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Permission gating the sheet-archive search view.
pub const PERM_SHEET_SEARCH: &str = "sheet_search";
/// Permission gating the admin user roster.
pub const PERM_MANAGE_USERS: &str = "manage_users";

/// Sign-in form payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The signed-in identity as reported by the backend.
///
/// Permissions arrive as a flat list of names; roles are opaque labels
/// here, the backend owns the role-to-permission mapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionUser {
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl SessionUser {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Name shown in the app bar: full name when set, username otherwise.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Exchanges credentials for a session. The backend sets the session
/// cookie on success; the returned user drives the UI.
pub async fn login(credentials: &Credentials) -> Result<SessionUser, ApiError> {
    super::post_json("/api/auth/login", credentials).await
}

/// Ends the server-side session.
pub async fn logout() -> Result<(), ApiError> {
    super::post_no_content("/api/auth/logout").await
}

/// Returns the user behind the ambient session cookie, if any.
/// Used on startup to restore a session across page reloads.
pub async fn current_user() -> Result<SessionUser, ApiError> {
    super::get_json("/api/auth/me").await
}
