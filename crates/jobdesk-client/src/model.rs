//! Wire types shared with the backend.
//!
//! Nested records arrive flattened: an order inside the aggregate carries
//! its own fields plus `client` and `job` objects.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw identifier.
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Raw identifier.
            #[must_use]
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(
    /// User identifier.
    UserId
);
define_id!(
    /// Client identifier.
    ClientId
);
define_id!(
    /// Job identifier.
    JobId
);
define_id!(
    /// Order identifier.
    OrderId
);

/// Progress of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Not yet started.
    #[serde(rename = "pending")]
    Pending,
    /// Work under way.
    #[serde(rename = "in progress")]
    InProgress,
    /// Finished.
    #[serde(rename = "completed")]
    Completed,
    /// Abandoned.
    #[serde(rename = "canceled")]
    Canceled,
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Canceled,
    ];

    /// Lowercase wire label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Canceled => "canceled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalogue job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Identifier.
    pub id: JobId,
    /// Short title.
    pub title: String,
    /// What the job involves.
    pub description: String,
    /// Free-text category.
    pub category: String,
    /// Expected duration, free text.
    pub duration: String,
}

/// Client owned by the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Identifier.
    pub id: ClientId,
    /// Owning user.
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Phone number, `###-###-####`.
    pub phone: String,
    /// Company, if any.
    pub company: Option<String>,
    /// Postal address, if any.
    pub address: Option<String>,
    /// Free-form notes.
    pub notes: String,
}

/// Order linking a client to a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Identifier.
    pub id: OrderId,
    /// Owning user.
    pub user_id: UserId,
    /// Client the work is for.
    pub client_id: ClientId,
    /// Job being performed.
    pub job_id: JobId,
    /// What the order covers.
    pub description: String,
    /// Agreed rate, free text.
    pub rate: String,
    /// Where the work happens.
    pub location: String,
    /// First working day.
    pub start_date: NaiveDate,
    /// Due date, never before `start_date`.
    pub due_date: NaiveDate,
    /// Current progress.
    pub status: OrderStatus,
}

/// Minimal client reference nested under jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    /// Identifier.
    pub id: ClientId,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
}

/// Job plus the distinct clients that ordered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobWithClients {
    /// The job.
    #[serde(flatten)]
    pub job: Job,
    /// Clients, by id.
    pub clients: Vec<ClientSummary>,
}

/// Client plus the distinct jobs ordered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientWithJobs {
    /// The client.
    #[serde(flatten)]
    pub client: Client,
    /// Jobs, by id.
    pub jobs: Vec<Job>,
}

/// Order with both referenced records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// The order.
    #[serde(flatten)]
    pub order: Order,
    /// Referenced client.
    pub client: Client,
    /// Referenced job.
    pub job: Job,
}

/// Order with its job, listed under a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWithJob {
    /// The order.
    #[serde(flatten)]
    pub order: Order,
    /// Referenced job.
    pub job: Job,
}

/// Order with its client, listed under a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderWithClient {
    /// The order.
    #[serde(flatten)]
    pub order: Order,
    /// Referenced client.
    pub client: Client,
}

/// `GET /clients/{id}/orders` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOrders {
    /// The client.
    pub client: Client,
    /// Its orders, by id.
    pub orders: Vec<OrderWithJob>,
}

/// `GET /jobs/{id}/orders` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOrders {
    /// The job.
    pub job: Job,
    /// The caller's orders for it, by id.
    pub orders: Vec<OrderWithClient>,
}

/// The signed-in user's aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Jobs with at least one order, by id.
    pub jobs: Vec<JobWithClients>,
    /// Every owned client, by id.
    pub clients: Vec<ClientWithJobs>,
    /// Every owned order, by id.
    pub orders: Vec<OrderDetails>,
}

/// Client fields for create and PATCH. `None` fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientPayload {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contact address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Job fields for create and PATCH. `None` fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JobPayload {
    /// Title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

/// Order fields for create and PATCH. `None` fields are left out.
///
/// Dates are sent as entered (`YYYY-MM-DD`); the backend reports malformed
/// ones field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    /// Client reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    /// Job reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    /// Location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Status label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ClientPayload {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl JobPayload {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl OrderPayload {
    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Serialize)]
pub(crate) struct Credentials<'a> {
    pub(crate) username: &'a str,
    pub(crate) password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct NewAccount<'a> {
    pub(crate) username: &'a str,
    pub(crate) email: &'a str,
    pub(crate) password: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct DeletedClient {
    pub(crate) deleted_client: Client,
}

#[derive(Deserialize)]
pub(crate) struct RemovedJob {
    pub(crate) removed_job: Job,
}

#[derive(Deserialize)]
pub(crate) struct DeletedOrder {
    pub(crate) deleted_order: Order,
}

#[cfg(test)]
mod tests {
    //! Wire compatibility with the backend's JSON.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_flattened_aggregate() {
        let job = json!({
            "id": 3, "title": "Photography", "description": "Product shots",
            "category": "Media", "duration": "2-8 hours"
        });
        let client = json!({
            "id": 2, "user_id": 1, "name": "Fitness Center", "email": "hi@fit.com",
            "phone": "555-010-1008", "company": null, "address": null,
            "notes": "Gym looking for promotional content"
        });
        let profile = json!({
            "id": 1, "username": "john_doe", "email": "john@example.com",
            "jobs": [{
                "id": 3, "title": "Photography", "description": "Product shots",
                "category": "Media", "duration": "2-8 hours",
                "clients": [{"id": 2, "name": "Fitness Center", "email": "hi@fit.com"}]
            }],
            "clients": [{
                "id": 2, "user_id": 1, "name": "Fitness Center", "email": "hi@fit.com",
                "phone": "555-010-1008", "company": null, "address": null,
                "notes": "Gym looking for promotional content", "jobs": [job.clone()]
            }],
            "orders": [{
                "id": 9, "user_id": 1, "client_id": 2, "job_id": 3,
                "description": "Shoot the new studio", "rate": "$55 per hour",
                "location": "Los Angeles, CA", "start_date": "2024-06-01",
                "due_date": "2024-06-03", "status": "in progress",
                "client": client, "job": job
            }]
        });

        let decoded: UserProfile = serde_json::from_value(profile).expect("decodes");
        let order = decoded.orders.first().expect("one order");
        assert_eq!(order.order.status, OrderStatus::InProgress);
        assert_eq!(order.client.id, ClientId::new(2));
        assert_eq!(
            decoded.jobs.first().map(|job| job.clients.len()),
            Some(1)
        );
    }

    #[test]
    fn payloads_omit_unset_fields() {
        let payload = OrderPayload {
            status: Some("completed".to_owned()),
            ..OrderPayload::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).expect("encodes"),
            json!({ "status": "completed" })
        );
        assert!(OrderPayload::default().is_empty());
        assert!(!payload.is_empty());
    }
}
