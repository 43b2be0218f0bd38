//! Orders linking a client to a job.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{ClientId, JobId, OrderId, UserId, ValidationErrors};

/// Progress of an order.
///
/// Parsing is case-insensitive; the canonical form is lowercase.
///
/// # Examples
/// ```
/// use jobdesk::domain::OrderStatus;
///
/// let status: OrderStatus = "In Progress".parse().expect("known status");
/// assert_eq!(status, OrderStatus::InProgress);
/// assert_eq!(status.as_str(), "in progress");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    /// Not yet started.
    #[default]
    #[serde(rename = "pending")]
    Pending,
    /// Work under way. Blocks job removal.
    #[serde(rename = "in progress")]
    InProgress,
    /// Finished.
    #[serde(rename = "completed")]
    Completed,
    /// Abandoned.
    #[serde(rename = "canceled")]
    Canceled,
}

/// Every status in display order.
pub const ORDER_STATUSES: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::InProgress,
    OrderStatus::Completed,
    OrderStatus::Canceled,
];

impl OrderStatus {
    /// Canonical lowercase label.
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

/// Raised when a status label is not one of [`ORDER_STATUSES`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ORDER_STATUSES
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// Work order for one client and one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Stable identifier.
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
    #[schema(example = "$45 per hour, billed weekly")]
    pub rate: String,
    /// Where the work happens.
    pub location: String,
    /// First working day.
    #[schema(value_type = String, format = Date, example = "2024-03-01")]
    pub start_date: NaiveDate,
    /// Due date, never before `start_date`.
    #[schema(value_type = String, format = Date, example = "2024-03-15")]
    pub due_date: NaiveDate,
    /// Current progress.
    pub status: OrderStatus,
}

impl Order {
    /// Attach identity and owner to validated content.
    #[must_use]
    pub fn from_draft(id: OrderId, user_id: UserId, draft: OrderDraft) -> Self {
        let OrderDraft {
            client_id,
            job_id,
            description,
            rate,
            location,
            start_date,
            due_date,
            status,
        } = draft;
        Self {
            id,
            user_id,
            client_id,
            job_id,
            description,
            rate,
            location,
            start_date,
            due_date,
            status,
        }
    }
}

/// Validated order content ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// Referenced client.
    pub client_id: ClientId,
    /// Referenced job.
    pub job_id: JobId,
    /// At least five characters once trimmed.
    pub description: String,
    /// At least ten characters.
    pub rate: String,
    /// At least ten characters once trimmed.
    pub location: String,
    /// Start of the work.
    pub start_date: NaiveDate,
    /// Never before `start_date`.
    pub due_date: NaiveDate,
    /// Defaults to pending.
    pub status: OrderStatus,
}

/// Raw order fields as submitted. Absent fields are `None`.
///
/// Dates arrive already parsed; the HTTP adapter rejects malformed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFields {
    /// Submitted client reference.
    pub client_id: Option<ClientId>,
    /// Submitted job reference.
    pub job_id: Option<JobId>,
    /// Submitted description.
    pub description: Option<String>,
    /// Submitted rate.
    pub rate: Option<String>,
    /// Submitted location.
    pub location: Option<String>,
    /// Submitted start date.
    pub start_date: Option<NaiveDate>,
    /// Submitted due date.
    pub due_date: Option<NaiveDate>,
    /// Submitted status label.
    pub status: Option<String>,
}

impl OrderFields {
    /// Validate a complete submission. A missing status means pending.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use jobdesk::domain::{ClientId, JobId, OrderFields, OrderStatus};
    ///
    /// let draft = OrderFields {
    ///     client_id: Some(ClientId::new(1)),
    ///     job_id: Some(JobId::new(2)),
    ///     description: Some("Paint fence".into()),
    ///     rate: Some("$30 per hour".into()),
    ///     location: Some("14 Birch Road".into()),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
    ///     due_date: NaiveDate::from_ymd_opt(2024, 5, 3),
    ///     status: None,
    /// }
    /// .into_draft()
    /// .expect("valid order");
    /// assert_eq!(draft.status, OrderStatus::Pending);
    /// ```
    pub fn into_draft(self) -> Result<OrderDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.client_id.is_none() {
            errors.add("client_id", "Client id is required");
        }
        if self.job_id.is_none() {
            errors.add("job_id", "Job id is required");
        }

        let description = errors
            .required("description", self.description.as_deref())
            .map(str::trim);
        if let Some(text) = description {
            errors.min_chars(
                "description",
                text,
                5,
                "Order description must be at least 5 characters long",
            );
        }
        let rate = errors.required("rate", self.rate.as_deref());
        if let Some(text) = rate {
            errors.min_chars("rate", text, 10, "Job rate must be at least 10 characters long");
        }
        let location = errors.required("location", self.location.as_deref()).map(str::trim);
        if let Some(text) = location {
            errors.min_chars(
                "location",
                text,
                10,
                "Order location must be at least 10 characters long",
            );
        }

        if self.start_date.is_none() {
            errors.add("start_date", "Start date is required");
        }
        if self.due_date.is_none() {
            errors.add("due_date", "Due date is required");
        }
        if let (Some(start), Some(due)) = (self.start_date, self.due_date)
            && due < start
        {
            errors.add("due_date", "Due date must be on or after the start date");
        }

        let status = match self.status.as_deref() {
            None => Some(OrderStatus::default()),
            Some(label) => label.parse::<OrderStatus>().map_or_else(
                |_| {
                    errors.add(
                        "status",
                        "Status must be one of: pending, in progress, completed, canceled",
                    );
                    None
                },
                Some,
            ),
        };

        match (
            self.client_id,
            self.job_id,
            description,
            rate,
            location,
            self.start_date,
            self.due_date,
            status,
        ) {
            (
                Some(client_id),
                Some(job_id),
                Some(description),
                Some(rate),
                Some(location),
                Some(start_date),
                Some(due_date),
                Some(status),
            ) => errors.finish(OrderDraft {
                client_id,
                job_id,
                description: description.to_owned(),
                rate: rate.to_owned(),
                location: location.to_owned(),
                start_date,
                due_date,
                status,
            }),
            _ => Err(errors),
        }
    }

    /// Merge the supplied fields over `order` and validate the result.
    pub fn merge_over(self, order: &Order) -> Result<OrderDraft, ValidationErrors> {
        Self {
            client_id: self.client_id.or(Some(order.client_id)),
            job_id: self.job_id.or(Some(order.job_id)),
            description: self.description.or_else(|| Some(order.description.clone())),
            rate: self.rate.or_else(|| Some(order.rate.clone())),
            location: self.location.or_else(|| Some(order.location.clone())),
            start_date: self.start_date.or(Some(order.start_date)),
            due_date: self.due_date.or(Some(order.due_date)),
            status: self.status.or_else(|| Some(order.status.as_str().to_owned())),
        }
        .into_draft()
    }
}

#[cfg(test)]
mod tests {
    //! Order field rules and status parsing.
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn complete() -> OrderFields {
        OrderFields {
            client_id: Some(ClientId::new(1)),
            job_id: Some(JobId::new(1)),
            description: Some("Replace gutters".to_owned()),
            rate: Some("$400 flat fee".to_owned()),
            location: Some("221B Baker Street".to_owned()),
            start_date: Some(date(2024, 4, 1)),
            due_date: Some(date(2024, 4, 5)),
            status: Some("Completed".to_owned()),
        }
    }

    #[rstest]
    #[case("pending", OrderStatus::Pending)]
    #[case("IN PROGRESS", OrderStatus::InProgress)]
    #[case(" completed ", OrderStatus::Completed)]
    #[case("Canceled", OrderStatus::Canceled)]
    fn parses_status_case_insensitively(#[case] label: &str, #[case] expected: OrderStatus) {
        assert_eq!(label.parse::<OrderStatus>(), Ok(expected));
    }

    #[test]
    fn status_serialises_lowercase() {
        let value = serde_json::to_value(OrderStatus::InProgress).expect("serialise");
        assert_eq!(value, serde_json::json!("in progress"));
    }

    #[test]
    fn accepts_complete_fields() {
        let draft = complete().into_draft().expect("valid order");
        assert_eq!(draft.status, OrderStatus::Completed);
    }

    #[test]
    fn rejects_due_date_before_start_date() {
        let fields = OrderFields {
            due_date: Some(date(2024, 3, 31)),
            ..complete()
        };
        let errors = fields.into_draft().expect_err("due before start");
        assert_eq!(
            errors.get("due_date"),
            Some("Due date must be on or after the start date")
        );
    }

    #[rstest]
    #[case::padded_to_ten("   $30/hr   ")]
    #[case::exactly_ten("$30 hourly")]
    fn rate_length_is_measured_as_submitted(#[case] rate: &str) {
        let draft = OrderFields {
            rate: Some(rate.to_owned()),
            ..complete()
        }
        .into_draft()
        .expect("rate long enough");
        assert_eq!(draft.rate, rate);
    }

    #[test]
    fn short_rate_is_rejected() {
        let errors = OrderFields {
            rate: Some("$30/hr".to_owned()),
            ..complete()
        }
        .into_draft()
        .expect_err("rate too short");
        assert_eq!(errors.get("rate"), Some("Job rate must be at least 10 characters long"));
    }

    #[test]
    fn description_length_ignores_surrounding_whitespace() {
        let errors = OrderFields {
            description: Some("   Fix    ".to_owned()),
            ..complete()
        }
        .into_draft()
        .expect_err("description trims to three characters");
        assert!(errors.get("description").is_some());
    }

    #[test]
    fn accepts_same_day_orders() {
        let fields = OrderFields {
            due_date: Some(date(2024, 4, 1)),
            ..complete()
        };
        assert!(fields.into_draft().is_ok());
    }

    #[test]
    fn rejects_unknown_status() {
        let fields = OrderFields {
            status: Some("paused".to_owned()),
            ..complete()
        };
        let errors = fields.into_draft().expect_err("unknown status");
        assert!(errors.get("status").is_some());
    }

    #[test]
    fn merge_revalidates_dates_against_stored_order() {
        let stored = Order::from_draft(
            OrderId::new(9),
            UserId::new(1),
            complete().into_draft().expect("valid order"),
        );
        let errors = OrderFields {
            start_date: Some(date(2024, 4, 10)),
            ..OrderFields::default()
        }
        .merge_over(&stored)
        .expect_err("start after stored due date");
        assert!(errors.get("due_date").is_some());
    }

    #[test]
    fn empty_submission_reports_all_required_fields() {
        let errors = OrderFields::default().into_draft().expect_err("empty order");
        for field in [
            "client_id",
            "job_id",
            "description",
            "rate",
            "location",
            "start_date",
            "due_date",
        ] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
        assert!(errors.get("status").is_none());
    }
}
