//! Port abstraction for account persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserCredentials, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// A unique column (`username` or `email`) already holds the value.
        Duplicate { field: String } => "user {field} already exists",
    }
}

impl From<UserPersistenceError> for Error {
    fn from(error: UserPersistenceError) -> Self {
        match error {
            UserPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Self::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::Duplicate { field } => duplicate_account(&field),
        }
    }
}

/// Error returned when registration collides with an existing account.
pub(crate) fn duplicate_account(field: &str) -> Error {
    if field == "email" {
        Error::invalid_request("Email already exists")
    } else {
        Error::invalid_request("Username already exists")
    }
}

/// Storage for registered accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account, failing with `Duplicate` on a unique clash.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the stored hash for a username.
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, UserPersistenceError>;

    /// Whether the username is taken.
    async fn username_exists(&self, username: &str) -> Result<bool, UserPersistenceError>;

    /// Whether the email address is taken.
    async fn email_exists(&self, email: &str) -> Result<bool, UserPersistenceError>;
}
