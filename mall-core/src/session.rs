use serde::{Deserialize, Serialize};

/// Authenticated user as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

impl User {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Client-held auth credentials plus the current user.
///
/// A session is always replaced wholesale; no field is ever mutated in
/// place. All fields decode with defaults so a blob persisted by an older
/// build still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Session {
    #[serde(default, rename = "accessToken")]
    pub access_token: String,
    #[serde(default, rename = "refreshToken")]
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new(access_token: String, refresh_token: String, user: Option<User>) -> Self {
        Self {
            access_token,
            refresh_token,
            user,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }

    /// Decode a persisted session blob. Missing or malformed input yields
    /// the logged-out session, never an error.
    #[must_use]
    pub fn from_json(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }

    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, User};

    #[test]
    fn malformed_blob_loads_as_logged_out() {
        assert_eq!(Session::from_json(""), Session::default());
        assert_eq!(Session::from_json("{not json"), Session::default());
        assert_eq!(Session::from_json("[1,2,3]"), Session::default());
    }

    #[test]
    fn partial_blob_fills_defaults() {
        let session = Session::from_json(r#"{"accessToken":"tok"}"#);
        assert_eq!(session.access_token, "tok");
        assert_eq!(session.refresh_token, "");
        assert!(session.user.is_none());
        assert!(session.is_authenticated());
    }

    #[test]
    fn round_trip_preserves_user() {
        let session = Session::new(
            "a".to_string(),
            "r".to_string(),
            Some(User {
                id: "U-1".to_string(),
                email: "buyer@example.com".to_string(),
                role: "buyer".to_string(),
            }),
        );
        let restored = Session::from_json(&session.to_json());
        assert_eq!(restored, session);
        assert_eq!(restored.role(), Some("buyer"));
    }

    #[test]
    fn blob_uses_camel_case_keys() {
        let json = Session::new("a".to_string(), "r".to_string(), None).to_json();
        assert!(json.contains("accessToken"));
        assert!(json.contains("refreshToken"));
    }

    #[test]
    fn admin_check_matches_role_exactly() {
        let admin = User {
            role: "admin".to_string(),
            ..User::default()
        };
        let buyer = User {
            role: "buyer".to_string(),
            ..User::default()
        };
        assert!(admin.is_admin());
        assert!(!buyer.is_admin());
    }
}
