//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain records before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::{
    Client, ClientDraft, ClientId, Job, JobDraft, JobId, Order, OrderDraft, OrderId, OrderStatus,
    UnknownStatus, User, UserCredentials, UserId,
};

use super::schema::{clients, jobs, orders, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub username: String,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::new(row.id),
            username: row.username,
            email: row.email,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CredentialsRow {
    pub id: i32,
    pub password_hash: String,
}

impl From<CredentialsRow> for UserCredentials {
    fn from(row: CredentialsRow) -> Self {
        Self {
            id: UserId::new(row.id),
            password_hash: row.password_hash,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
}

impl From<JobRow> for Job {
    fn from(row: JobRow) -> Self {
        Self {
            id: JobId::new(row.id),
            title: row.title,
            description: row.description,
            category: row.category,
            duration: row.duration,
        }
    }
}

/// Insert and update payload for jobs.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = jobs)]
pub(crate) struct JobValues<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub duration: &'a str,
}

impl<'a> From<&'a JobDraft> for JobValues<'a> {
    fn from(draft: &'a JobDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            category: &draft.category,
            duration: &draft.duration,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClientRow {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub address: Option<String>,
    pub notes: String,
}

impl From<ClientRow> for Client {
    fn from(row: ClientRow) -> Self {
        Self {
            id: ClientId::new(row.id),
            user_id: UserId::new(row.user_id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            address: row.address,
            notes: row.notes,
        }
    }
}

/// Insert and update payload for clients. `None` clears the nullable
/// columns on update.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = clients)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ClientValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub company: Option<&'a str>,
    pub address: Option<&'a str>,
    pub notes: &'a str,
}

impl<'a> From<&'a ClientDraft> for ClientValues<'a> {
    fn from(draft: &'a ClientDraft) -> Self {
        Self {
            name: &draft.name,
            email: &draft.email,
            phone: &draft.phone,
            company: draft.company.as_deref(),
            address: draft.address.as_deref(),
            notes: &draft.notes,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = clients)]
pub(crate) struct NewClientRow<'a> {
    pub user_id: i32,
    #[diesel(embed)]
    pub values: ClientValues<'a>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct OrderRow {
    pub id: i32,
    pub user_id: i32,
    pub client_id: i32,
    pub job_id: i32,
    pub description: String,
    pub rate: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = UnknownStatus;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: OrderId::new(row.id),
            user_id: UserId::new(row.user_id),
            client_id: ClientId::new(row.client_id),
            job_id: JobId::new(row.job_id),
            description: row.description,
            rate: row.rate,
            location: row.location,
            start_date: row.start_date,
            due_date: row.due_date,
            status: row.status.parse::<OrderStatus>()?,
        })
    }
}

/// Insert and update payload for orders.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = orders)]
pub(crate) struct OrderValues<'a> {
    pub client_id: i32,
    pub job_id: i32,
    pub description: &'a str,
    pub rate: &'a str,
    pub location: &'a str,
    pub start_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: &'static str,
}

impl<'a> From<&'a OrderDraft> for OrderValues<'a> {
    fn from(draft: &'a OrderDraft) -> Self {
        Self {
            client_id: draft.client_id.get(),
            job_id: draft.job_id.get(),
            description: &draft.description,
            rate: &draft.rate,
            location: &draft.location,
            start_date: draft.start_date,
            due_date: draft.due_date,
            status: draft.status.as_str(),
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub(crate) struct NewOrderRow<'a> {
    pub user_id: i32,
    #[diesel(embed)]
    pub values: OrderValues<'a>,
}
