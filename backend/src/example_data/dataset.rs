//! Bundled demo records.
//!
//! The dataset ships with the binary as JSON. Order dates are stored as day
//! offsets so a fresh seed always has work in the past, present and future.

use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::domain::{ClientFields, ClientId, JobFields, JobId, OrderFields};

const BUNDLED: &str = include_str!("../../fixtures/example-data/seed.json");

/// Demo account without a password; every account shares
/// [`SeedDataset::password`].
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
}

/// Demo client.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedClient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub notes: String,
}

/// Demo catalogue job.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedJob {
    pub title: String,
    pub category: String,
    pub description: String,
    pub duration: String,
}

/// Demo order, dated relative to the seeding day.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedOrder {
    pub description: String,
    pub location: String,
    pub start_offset_days: i64,
    pub due_offset_days: i64,
    pub status: String,
    pub rate: String,
}

/// Complete demo dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedDataset {
    /// Password shared by every demo account.
    pub password: String,
    pub users: Vec<SeedUser>,
    pub clients: Vec<SeedClient>,
    pub jobs: Vec<SeedJob>,
    pub orders: Vec<SeedOrder>,
}

impl SeedDataset {
    /// Parse the dataset compiled into the binary.
    ///
    /// # Errors
    /// Fails only if the bundled JSON is malformed.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED)
    }
}

impl From<&SeedClient> for ClientFields {
    fn from(client: &SeedClient) -> Self {
        Self {
            name: Some(client.name.clone()),
            email: Some(client.email.clone()),
            phone: Some(client.phone.clone()),
            company: client.company.clone(),
            address: client.address.clone(),
            notes: Some(client.notes.clone()),
        }
    }
}

impl From<&SeedJob> for JobFields {
    fn from(job: &SeedJob) -> Self {
        Self {
            title: Some(job.title.clone()),
            description: Some(job.description.clone()),
            category: Some(job.category.clone()),
            duration: Some(job.duration.clone()),
        }
    }
}

impl SeedOrder {
    /// Order fields for `client_id` and `job_id`, dated from `today`.
    #[must_use]
    pub fn fields(&self, client_id: ClientId, job_id: JobId, today: NaiveDate) -> OrderFields {
        OrderFields {
            client_id: Some(client_id),
            job_id: Some(job_id),
            description: Some(self.description.clone()),
            rate: Some(self.rate.clone()),
            location: Some(self.location.clone()),
            start_date: offset(today, self.start_offset_days),
            due_date: offset(today, self.due_offset_days),
            status: Some(self.status.clone()),
        }
    }
}

fn offset(day: NaiveDate, by: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(by.unsigned_abs());
    if by >= 0 {
        day.checked_add_days(magnitude)
    } else {
        day.checked_sub_days(magnitude)
    }
}
