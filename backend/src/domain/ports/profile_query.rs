//! Driving port returning the full user aggregate.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserProfile};

/// Read side for [`UserProfile`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Assemble the aggregate. A missing user is reported as
    /// `unauthorized` because the session points at nothing.
    async fn profile(&self, user_id: UserId) -> Result<UserProfile, Error>;
}
