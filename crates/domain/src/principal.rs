//! Principal: the authenticated identity attached to a request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Role carried by a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "user" => Ok(Self::User),
            _ => Err(AuthError::InvalidToken),
        }
    }
}

/// Identity yielded by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl Principal {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Require `role`, admins pass every check.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Forbidden`] when the principal lacks the role.
    pub fn require(&self, role: Role) -> Result<(), AuthError> {
        if self.role == role || self.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Forbidden { required: role })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(role: Role) -> Principal {
        Principal {
            user_id: 1,
            username: "alice".to_string(),
            role,
        }
    }

    #[test]
    fn should_allow_admin_for_admin_role() {
        assert!(principal(Role::Admin).require(Role::Admin).is_ok());
    }

    #[test]
    fn should_forbid_user_for_admin_role() {
        let result = principal(Role::User).require(Role::Admin);
        assert_eq!(
            result,
            Err(AuthError::Forbidden {
                required: Role::Admin
            })
        );
    }

    #[test]
    fn should_reject_unknown_role_name() {
        assert!("root".parse::<Role>().is_err());
    }
}
