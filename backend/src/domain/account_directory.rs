//! Account registration and authentication.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{AccountService, PasswordHasher, UserRepository, duplicate_account};
use crate::domain::{Error, LoginCredentials, NewUser, Registration, User, UserId};

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Account service backed by a user repository and a password hasher.
#[derive(Clone)]
pub struct AccountDirectory<U, H> {
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> AccountDirectory<U, H> {
    /// Create a new service with the given adapters.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }
}

#[async_trait]
impl<U, H> AccountService for AccountDirectory<U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        if self.users.email_exists(registration.email()).await? {
            return Err(duplicate_account("email"));
        }
        if self.users.username_exists(registration.username()).await? {
            return Err(duplicate_account("username"));
        }

        let password_hash = self.hasher.hash(registration.password())?;
        let user = self
            .users
            .create(&NewUser {
                username: registration.username().to_owned(),
                email: registration.email().to_owned(),
                password_hash,
            })
            .await?;
        info!(user_id = %user.id, "registered account");
        Ok(user)
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserId, Error> {
        let Some(stored) = self.users.find_credentials(credentials.username()).await? else {
            debug!("login for unknown username");
            return Err(Error::unauthorized(INVALID_CREDENTIALS));
        };
        if self
            .hasher
            .verify(credentials.password(), &stored.password_hash)?
        {
            Ok(stored.id)
        } else {
            debug!(user_id = %stored.id, "login with wrong password");
            Err(Error::unauthorized(INVALID_CREDENTIALS))
        }
    }
}

#[cfg(test)]
#[path = "account_directory_tests.rs"]
mod tests;
