//! Access-gate stub
//!
//! Sign-in accepts any non-blank email and the access level is a plain flag
//! that selects which view variant is rendered. Nothing here authenticates
//! or authorizes anyone.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum AccessLevel {
    /// Card summaries only
    #[default]
    Restricted = 1,
    /// Long descriptions, materials, and code examples
    Full = 2,
}

impl AccessLevel {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AccessLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AccessLevel::Restricted),
            2 => Ok(AccessLevel::Full),
            other => Err(format!("access level must be 1 or 2, got {other}")),
        }
    }
}

impl From<AccessLevel> for u8 {
    fn from(level: AccessLevel) -> Self {
        level.as_u8()
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccessLevel::Restricted => f.write_str("restricted"),
            AccessLevel::Full => f.write_str("full"),
        }
    }
}

/// The signed-in user and their access flag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    email: String,
    access_level: AccessLevel,
}

impl Session {
    /// Sign in with any non-blank email. New sessions start restricted.
    pub fn sign_in(email: &str) -> Result<Self, AccessError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AccessError::BlankEmail);
        }
        tracing::debug!(email, "signed in");
        Ok(Self {
            email: email.to_string(),
            access_level: AccessLevel::Restricted,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    pub fn has_full_access(&self) -> bool {
        self.access_level == AccessLevel::Full
    }

    pub fn grant_full_access(&mut self) {
        self.access_level = AccessLevel::Full;
    }

    pub fn revoke_full_access(&mut self) {
        self.access_level = AccessLevel::Restricted;
    }

    pub fn with_access_level(mut self, level: AccessLevel) -> Self {
        self.access_level = level;
        self
    }
}
