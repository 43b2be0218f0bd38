//! Startup seeding orchestration.
//!
//! Records go through the driving ports, so demo data obeys the same
//! validation and ownership rules as API traffic.

use mockable::Clock;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{Client, ErrorCode, Job, Registration, User};
use crate::example_data::config::ExampleDataSettings;
use crate::example_data::dataset::SeedDataset;
use crate::inbound::http::state::HttpState;

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// The bundled dataset could not be parsed.
    #[error("example data is malformed: {0}")]
    Dataset(#[from] serde_json::Error),
    /// A domain service rejected a record.
    #[error("example data seeding error: {0}")]
    Seeding(#[from] crate::domain::Error),
    /// The configured user count leaves nothing to seed.
    #[error("example data user count must be at least 1")]
    NoUsers,
}

/// Record counts from an applied seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
    pub users: usize,
    pub clients: usize,
    pub jobs: usize,
    pub orders: usize,
}

/// Apply example data on startup when enabled.
///
/// Returns `Ok(None)` when seeding is disabled or the demo accounts already
/// exist.
///
/// # Examples
///
/// ```rust,no_run
/// use jobdesk::example_data::{ExampleDataSettings, seed_example_data_on_startup};
/// use jobdesk::inbound::http::state::HttpState;
/// use mockable::DefaultClock;
///
/// # async fn run(state: HttpState) -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ExampleDataSettings { enabled: false, count: None };
/// let outcome = seed_example_data_on_startup(&settings, &state, &DefaultClock).await?;
/// assert!(outcome.is_none());
/// # Ok(())
/// # }
/// ```
pub async fn seed_example_data_on_startup<C>(
    settings: &ExampleDataSettings,
    state: &HttpState,
    clock: &C,
) -> Result<Option<SeedOutcome>, StartupSeedingError>
where
    C: Clock + ?Sized,
{
    if !settings.enabled {
        info!(reason = "disabled", "example data seeding skipped");
        return Ok(None);
    }

    let dataset = SeedDataset::bundled()?;
    let user_count = settings
        .count
        .map_or(dataset.users.len(), |count| count.min(dataset.users.len()));
    if user_count == 0 {
        return Err(StartupSeedingError::NoUsers);
    }

    let Some(users) = register_users(&dataset, user_count, state).await? else {
        info!(reason = "already seeded", "example data seeding skipped");
        return Ok(None);
    };

    let mut clients: Vec<Client> = Vec::with_capacity(dataset.clients.len());
    for (index, seed) in dataset.clients.iter().enumerate() {
        let owner = &users[index % users.len()];
        clients.push(state.clients.create(owner.id, seed.into()).await?);
    }

    let mut jobs: Vec<Job> = Vec::with_capacity(dataset.jobs.len());
    for seed in &dataset.jobs {
        jobs.push(state.jobs.create(seed.into()).await?);
    }

    let today = clock.utc().date_naive();
    let mut orders = 0;
    for (index, seed) in dataset.orders.iter().enumerate() {
        let (Some(client), Some(job)) = (
            clients.get(index % clients.len().max(1)),
            jobs.get((index * 3) % jobs.len().max(1)),
        ) else {
            warn!("example data has orders but no clients or jobs; skipping orders");
            break;
        };
        state
            .orders
            .create(client.user_id, seed.fields(client.id, job.id, today))
            .await?;
        orders += 1;
    }

    let outcome = SeedOutcome {
        users: users.len(),
        clients: clients.len(),
        jobs: jobs.len(),
        orders,
    };
    info!(
        users = outcome.users,
        clients = outcome.clients,
        jobs = outcome.jobs,
        orders = outcome.orders,
        "example data seeding applied"
    );
    Ok(Some(outcome))
}

/// Register the first `count` demo users. `None` means the first account is
/// already taken and the dataset was applied earlier.
async fn register_users(
    dataset: &SeedDataset,
    count: usize,
    state: &HttpState,
) -> Result<Option<Vec<User>>, StartupSeedingError> {
    let mut users = Vec::with_capacity(count);
    for (index, seed) in dataset.users.iter().take(count).enumerate() {
        let registration = Registration::try_new(
            Some(&seed.username),
            Some(&seed.email),
            Some(&dataset.password),
        )
        .map_err(crate::domain::Error::from)?;
        match state.accounts.register(registration).await {
            Ok(user) => users.push(user),
            Err(error) if index == 0 && error.code() == ErrorCode::InvalidRequest => {
                return Ok(None);
            }
            Err(error) => return Err(error.into()),
        }
    }
    Ok(Some(users))
}

#[cfg(test)]
#[path = "startup_tests.rs"]
mod tests;
