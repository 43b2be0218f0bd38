//! Sample records shared by the domain service tests.

use chrono::NaiveDate;

use crate::domain::{
    Client, ClientId, Job, JobId, Order, OrderId, OrderStatus, UserId,
};

pub(crate) fn sample_job(id: i32) -> Job {
    Job {
        id: JobId::new(id),
        title: format!("Sample job {id}"),
        description: "Work described in enough detail".to_owned(),
        category: "General".to_owned(),
        duration: "2 days".to_owned(),
    }
}

pub(crate) fn sample_client(id: i32, owner: i32) -> Client {
    Client {
        id: ClientId::new(id),
        user_id: UserId::new(owner),
        name: format!("Client {id}"),
        email: format!("client{id}@example.com"),
        phone: "555-123-4567".to_owned(),
        company: None,
        address: None,
        notes: "Notes that easily pass twenty characters".to_owned(),
    }
}

pub(crate) fn sample_order(
    id: i32,
    owner: i32,
    client: i32,
    job: i32,
    status: OrderStatus,
) -> Order {
    let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
    let due = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap_or_default();
    Order {
        id: OrderId::new(id),
        user_id: UserId::new(owner),
        client_id: ClientId::new(client),
        job_id: JobId::new(job),
        description: "Sample order".to_owned(),
        rate: "$50 per hour".to_owned(),
        location: "10 Downing Street".to_owned(),
        start_date: start,
        due_date: due,
        status,
    }
}
