use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Sign-in input. The hosted authentication provider performs the actual
/// credential check; this type only gates obviously malformed input.
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct Credentials {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl Credentials {
    pub fn validated(email: impl Into<String>, password: impl Into<String>) -> ApiResult<Self> {
        let credentials = Self {
            email: email.into(),
            password: password.into(),
        };
        credentials
            .validate()
            .map_err(|e| ApiError::ValidationError(e.to_string()))?;
        Ok(credentials)
    }
}

/// Snapshot of the authenticated user, passed explicitly to every operation
/// that records attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Uuid,
    pub email: String,
    pub display_name: Option<String>,
}

impl Session {
    pub fn attribution(&self) -> Attribution {
        let label = self
            .display_name
            .clone()
            .unwrap_or_else(|| self.email.clone());
        Attribution::User(label)
    }
}

/// Who performed an action. Unauthenticated callers are a typed variant
/// rather than a sentinel string; the "Unknown" rendering only exists at
/// the audit trail boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribution {
    User(String),
    Unknown,
}

impl Attribution {
    pub fn from_session(session: Option<&Session>) -> Self {
        session.map(Session::attribution).unwrap_or(Attribution::Unknown)
    }
}

impl std::fmt::Display for Attribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribution::User(label) => write!(f, "{label}"),
            Attribution::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(display_name: Option<&str>) -> Session {
        Session {
            user_id: Uuid::new_v4(),
            email: "tech@example.com".to_string(),
            display_name: display_name.map(str::to_string),
        }
    }

    #[test]
    fn attribution_prefers_display_name() {
        let s = session(Some("Dana"));
        assert_eq!(s.attribution(), Attribution::User("Dana".to_string()));
    }

    #[test]
    fn attribution_falls_back_to_email() {
        let s = session(None);
        assert_eq!(
            s.attribution(),
            Attribution::User("tech@example.com".to_string())
        );
    }

    #[test]
    fn missing_session_is_unknown() {
        assert_eq!(Attribution::from_session(None), Attribution::Unknown);
        assert_eq!(Attribution::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn credentials_require_well_formed_email() {
        assert!(Credentials::validated("not-an-email", "pw").is_err());
        assert!(Credentials::validated("tech@example.com", "").is_err());
        assert!(Credentials::validated("tech@example.com", "pw").is_ok());
    }
}
