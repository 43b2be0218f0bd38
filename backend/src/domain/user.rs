//! User data model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::UserId;

/// Registered account as exposed to callers.
///
/// The password hash lives only in the repository layer and never appears
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Unique login name.
    #[schema(example = "Ada Lovelace")]
    pub username: String,
    /// Unique contact address.
    #[schema(example = "ada@example.com")]
    pub email: String,
}

/// Fields required to persist a new account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Validated username.
    pub username: String,
    /// Validated email address.
    pub email: String,
    /// Encoded password hash.
    pub password_hash: String,
}

/// Stored credential record used during authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    /// Account the hash belongs to.
    pub id: UserId,
    /// Encoded password hash.
    pub password_hash: String,
}
