//! Authentication types carried in access tokens.
//!
//! Tokens are issued by the identity service; this backend only verifies
//! them and reads who is acting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims for access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (profile ID).
    pub sub: Uuid,
    /// Display name of the profile.
    pub name: String,
    /// Job position, e.g. "Manager" or "ExpenseAuditer".
    pub position: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for a profile.
    #[must_use]
    pub fn new(profile_id: Uuid, name: &str, position: &str, expires_at: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            sub: profile_id,
            name: name.to_string(),
            position: position.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the profile ID from claims.
    #[must_use]
    pub const fn profile_id(&self) -> Uuid {
        self.sub
    }
}
