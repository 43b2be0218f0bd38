//! Edit-form values.
//!
//! A form is prefilled from the aggregate, edited as plain strings, and
//! turned back into a payload. For updates only the fields that differ from
//! the prefill are sent, so an untouched form produces an empty PATCH.

use crate::model::{
    Client, ClientId, ClientPayload, Job, JobId, JobPayload, OrderDetails, OrderId,
    OrderPayload, OrderStatus, UserProfile,
};
use crate::views;

/// Wire date format used by date inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

fn changed(edited: &str, original: &str) -> Option<String> {
    (edited != original).then(|| edited.to_owned())
}

/// Editable order values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderForm {
    /// Selected client.
    pub client_id: ClientId,
    /// Selected job.
    pub job_id: JobId,
    /// Description text.
    pub description: String,
    /// Rate text.
    pub rate: String,
    /// Location text.
    pub location: String,
    /// Start date as `YYYY-MM-DD`.
    pub start_date: String,
    /// Due date as `YYYY-MM-DD`.
    pub due_date: String,
    /// Selected status.
    pub status: OrderStatus,
}

impl OrderForm {
    /// Values of an existing order.
    #[must_use]
    pub fn prefill(details: &OrderDetails) -> Self {
        let order = &details.order;
        Self {
            client_id: order.client_id,
            job_id: order.job_id,
            description: order.description.clone(),
            rate: order.rate.clone(),
            location: order.location.clone(),
            start_date: order.start_date.format(DATE_FORMAT).to_string(),
            due_date: order.due_date.format(DATE_FORMAT).to_string(),
            status: order.status,
        }
    }

    /// Prefill for the order `id`, if the user owns it.
    #[must_use]
    pub fn for_order(profile: &UserProfile, id: OrderId) -> Option<Self> {
        views::find_order(profile, id).map(Self::prefill)
    }

    /// Every field, for creating an order.
    #[must_use]
    pub fn to_create_payload(&self) -> OrderPayload {
        OrderPayload {
            client_id: Some(self.client_id),
            job_id: Some(self.job_id),
            description: Some(self.description.clone()),
            rate: Some(self.rate.clone()),
            location: Some(self.location.clone()),
            start_date: Some(self.start_date.clone()),
            due_date: Some(self.due_date.clone()),
            status: Some(self.status.as_str().to_owned()),
        }
    }

    /// Fields that differ from `original`.
    ///
    /// # Examples
    /// ```
    /// use jobdesk_client::forms::OrderForm;
    /// use jobdesk_client::{ClientId, JobId, OrderStatus};
    ///
    /// let original = OrderForm {
    ///     client_id: ClientId::new(1),
    ///     job_id: JobId::new(2),
    ///     description: "Paint fence".into(),
    ///     rate: "$30 per hour".into(),
    ///     location: "14 Birch Road".into(),
    ///     start_date: "2024-05-01".into(),
    ///     due_date: "2024-05-03".into(),
    ///     status: OrderStatus::Pending,
    /// };
    /// let edited = OrderForm { status: OrderStatus::Completed, ..original.clone() };
    ///
    /// let payload = edited.changes_from(&original);
    /// assert_eq!(payload.status.as_deref(), Some("completed"));
    /// assert!(payload.description.is_none());
    /// ```
    #[must_use]
    pub fn changes_from(&self, original: &Self) -> OrderPayload {
        OrderPayload {
            client_id: (self.client_id != original.client_id).then_some(self.client_id),
            job_id: (self.job_id != original.job_id).then_some(self.job_id),
            description: changed(&self.description, &original.description),
            rate: changed(&self.rate, &original.rate),
            location: changed(&self.location, &original.location),
            start_date: changed(&self.start_date, &original.start_date),
            due_date: changed(&self.due_date, &original.due_date),
            status: (self.status != original.status).then(|| self.status.as_str().to_owned()),
        }
    }
}

/// Editable job values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobForm {
    /// Title text.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Category text.
    pub category: String,
    /// Duration text.
    pub duration: String,
}

impl JobForm {
    /// Values of an existing job.
    #[must_use]
    pub fn prefill(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            description: job.description.clone(),
            category: job.category.clone(),
            duration: job.duration.clone(),
        }
    }

    /// Prefill for the job `id`, if the user has ordered it.
    #[must_use]
    pub fn for_job(profile: &UserProfile, id: JobId) -> Option<Self> {
        views::find_job(profile, id).map(|entry| Self::prefill(&entry.job))
    }

    /// Every field, for creating a job.
    #[must_use]
    pub fn to_create_payload(&self) -> JobPayload {
        JobPayload {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            duration: Some(self.duration.clone()),
        }
    }

    /// Fields that differ from `original`.
    #[must_use]
    pub fn changes_from(&self, original: &Self) -> JobPayload {
        JobPayload {
            title: changed(&self.title, &original.title),
            description: changed(&self.description, &original.description),
            category: changed(&self.category, &original.category),
            duration: changed(&self.duration, &original.duration),
        }
    }
}

/// Editable client values. Blank company or address means none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    /// Name text.
    pub name: String,
    /// Email text.
    pub email: String,
    /// Phone text.
    pub phone: String,
    /// Company text.
    pub company: String,
    /// Address text.
    pub address: String,
    /// Notes text.
    pub notes: String,
}

impl ClientForm {
    /// Values of an existing client.
    #[must_use]
    pub fn prefill(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            company: client.company.clone().unwrap_or_default(),
            address: client.address.clone().unwrap_or_default(),
            notes: client.notes.clone(),
        }
    }

    /// Prefill for the client `id`, if the user owns it.
    #[must_use]
    pub fn for_client(profile: &UserProfile, id: ClientId) -> Option<Self> {
        views::find_client(profile, id).map(|entry| Self::prefill(&entry.client))
    }

    /// Every field, for creating a client. Blank optional fields are left out.
    #[must_use]
    pub fn to_create_payload(&self) -> ClientPayload {
        let optional = |value: &str| (!value.trim().is_empty()).then(|| value.to_owned());
        ClientPayload {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            phone: Some(self.phone.clone()),
            company: optional(&self.company),
            address: optional(&self.address),
            notes: Some(self.notes.clone()),
        }
    }

    /// Fields that differ from `original`.
    #[must_use]
    pub fn changes_from(&self, original: &Self) -> ClientPayload {
        ClientPayload {
            name: changed(&self.name, &original.name),
            email: changed(&self.email, &original.email),
            phone: changed(&self.phone, &original.phone),
            company: changed(&self.company, &original.company),
            address: changed(&self.address, &original.address),
            notes: changed(&self.notes, &original.notes),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Prefill and change detection.
    #![expect(
        clippy::expect_used,
        reason = "test code uses expect for clear failure messages"
    )]

    use super::*;
    use crate::views::fixtures::profile;

    #[test]
    fn order_prefill_formats_dates() {
        let form = OrderForm::for_order(&profile(), OrderId::new(2)).expect("owned order");
        assert_eq!(form.start_date, "2024-06-05");
        assert_eq!(form.due_date, "2024-06-05");
        assert_eq!(form.status, OrderStatus::Completed);
    }

    #[test]
    fn untouched_forms_produce_empty_patches() {
        let profile = profile();
        let order = OrderForm::for_order(&profile, OrderId::new(1)).expect("owned order");
        let job = JobForm::for_job(&profile, JobId::new(10)).expect("ordered job");
        let client = ClientForm::for_client(&profile, ClientId::new(1)).expect("owned client");

        assert!(order.changes_from(&order).is_empty());
        assert!(job.changes_from(&job).is_empty());
        assert!(client.changes_from(&client).is_empty());
    }

    #[test]
    fn order_patch_carries_only_edits() {
        let original = OrderForm::for_order(&profile(), OrderId::new(1)).expect("owned order");
        let edited = OrderForm {
            job_id: JobId::new(20),
            due_date: "2024-06-30".to_owned(),
            ..original.clone()
        };

        let payload = edited.changes_from(&original);
        assert_eq!(payload.job_id, Some(JobId::new(20)));
        assert_eq!(payload.due_date.as_deref(), Some("2024-06-30"));
        assert_eq!(payload.client_id, None);
        assert_eq!(payload.start_date, None);

        let body = serde_json::to_value(&payload).expect("serialise");
        assert_eq!(body, serde_json::json!({"job_id": 20, "due_date": "2024-06-30"}));
    }

    #[test]
    fn client_prefill_blanks_missing_optionals() {
        let form = ClientForm::for_client(&profile(), ClientId::new(2)).expect("owned client");
        assert_eq!(form.company, "");
        assert_eq!(form.address, "1 Long Road, Springfield");

        let payload = form.to_create_payload();
        assert_eq!(payload.company, None);
        assert_eq!(payload.address.as_deref(), Some("1 Long Road, Springfield"));
    }

    #[test]
    fn lookups_outside_the_profile_return_none() {
        let profile = profile();
        assert!(OrderForm::for_order(&profile, OrderId::new(42)).is_none());
        assert!(JobForm::for_job(&profile, JobId::new(42)).is_none());
        assert!(ClientForm::for_client(&profile, ClientId::new(42)).is_none());
    }

    #[test]
    fn create_payload_sends_every_order_field() {
        let form = OrderForm::for_order(&profile(), OrderId::new(3)).expect("owned order");
        let payload = form.to_create_payload();
        assert_eq!(payload.client_id, Some(ClientId::new(2)));
        assert_eq!(payload.status.as_deref(), Some("pending"));
        assert!(payload.rate.is_some() && payload.location.is_some());
    }
}
