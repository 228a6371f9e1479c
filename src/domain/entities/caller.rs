//! Authenticated callers, their roles and access tokens.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Role assigned to an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Administrator,
    Editor,
    Author,
    Contributor,
    Subscriber,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Administrator,
        Role::Editor,
        Role::Author,
        Role::Contributor,
        Role::Subscriber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Editor => "editor",
            Role::Author => "author",
            Role::Contributor => "contributor",
            Role::Subscriber => "subscriber",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// The identity a request runs as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

/// Stored access token. Only the HMAC hash of the raw token is kept.
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn is_revoked(&self) -> bool {
        self.revoked_at.is_some()
    }

    /// Identity of requests authenticated with this token.
    pub fn caller(&self) -> Caller {
        Caller {
            id: self.id,
            name: self.name.clone(),
            role: self.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_names() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert_eq!("Editor".parse::<Role>().unwrap(), Role::Editor);
    }

    #[test]
    fn test_unknown_role() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown role: superuser");
    }

    #[test]
    fn test_token_caller() {
        let token = AccessToken {
            id: 3,
            name: "Ops".to_string(),
            role: Role::Administrator,
            token_hash: "abc".to_string(),
            created_at: Utc::now(),
            last_used_at: None,
            revoked_at: None,
        };

        assert!(!token.is_revoked());
        let caller = token.caller();
        assert_eq!(caller.id, 3);
        assert_eq!(caller.role, Role::Administrator);
    }
}
