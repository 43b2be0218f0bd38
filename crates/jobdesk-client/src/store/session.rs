//! The signed-in user's aggregate.

use tokio::sync::{OnceCell, watch};
use tracing::{debug, info};

use super::while_loading;
use crate::api::ApiClient;
use crate::error::ClientError;
use crate::model::UserProfile;

/// Snapshot of the session cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Aggregate of the signed-in user; `None` when signed out.
    pub profile: Option<UserProfile>,
    /// Calls that may replace the aggregate and have not yet settled.
    pub in_flight: usize,
    /// The startup session check has completed.
    pub bootstrapped: bool,
}

impl SessionState {
    /// Whether a user is signed in.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.profile.is_some()
    }

    /// Whether any call that may replace the aggregate is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

/// Holder of the [`UserProfile`] aggregate.
///
/// Every method that changes the aggregate replaces it wholesale with what
/// the backend returned.
#[derive(Debug)]
pub struct SessionStore {
    api: ApiClient,
    state: watch::Sender<SessionState>,
    bootstrap: OnceCell<()>,
}

impl SessionStore {
    /// Empty, signed-out store.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            api,
            state,
            bootstrap: OnceCell::new(),
        }
    }

    /// Current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Current aggregate.
    #[must_use]
    pub fn profile(&self) -> Option<UserProfile> {
        self.state.borrow().profile.clone()
    }

    /// Change notifications. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Check for an existing session once.
    ///
    /// Concurrent callers share the one check. Once it has succeeded later
    /// calls do nothing; after a failure the next call checks again.
    ///
    /// # Errors
    ///
    /// Propagates failures other than "not signed in".
    pub async fn bootstrap(&self) -> Result<(), ClientError> {
        self.bootstrap
            .get_or_try_init(|| async {
                self.refresh().await?;
                self.state.send_modify(|state| state.bootstrapped = true);
                Ok::<(), ClientError>(())
            })
            .await
            .map(drop)
    }

    /// Re-fetch the whole aggregate. A missing session clears it.
    ///
    /// # Errors
    ///
    /// Propagates transport and server failures; the cached aggregate is
    /// left as it was.
    pub async fn refresh(&self) -> Result<Option<UserProfile>, ClientError> {
        let profile = while_loading(
            &self.state,
            self.api.check_session(),
        )
        .await?;
        debug!(signed_in = profile.is_some(), "session refreshed");
        self.replace(profile.clone());
        Ok(profile)
    }

    /// Sign in and cache the returned aggregate.
    ///
    /// # Errors
    ///
    /// Fails with a 401 status on bad credentials; the cache is unchanged.
    pub async fn login(&self, username: &str, password: &str) -> Result<UserProfile, ClientError> {
        let profile = while_loading(
            &self.state,
            self.api.login(username, password),
        )
        .await?;
        info!(user_id = %profile.id, "signed in");
        self.replace(Some(profile.clone()));
        Ok(profile)
    }

    /// Register, which also signs in, and cache the returned aggregate.
    ///
    /// # Errors
    ///
    /// Fails with a 400 status and field errors on invalid details.
    pub async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, ClientError> {
        let profile = while_loading(
            &self.state,
            self.api.register(username, email, password),
        )
        .await?;
        info!(user_id = %profile.id, "registered");
        self.replace(Some(profile.clone()));
        Ok(profile)
    }

    /// Sign out and drop the aggregate.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; the aggregate is kept in that case.
    pub async fn logout(&self) -> Result<(), ClientError> {
        while_loading(&self.state, self.api.logout()).await?;
        info!("signed out");
        self.replace(None);
        Ok(())
    }

    fn replace(&self, profile: Option<UserProfile>) {
        self.state.send_modify(|state| state.profile = profile);
    }
}
