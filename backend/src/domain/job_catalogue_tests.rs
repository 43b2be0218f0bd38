//! Tests for the jobs service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{MockClientRepository, MockJobRepository, MockOrderRepository};
use crate::domain::service_test_helpers::{sample_client, sample_job, sample_order};
use crate::domain::{ClientId, ErrorCode, Order, OrderId};

fn catalogue(
    jobs: MockJobRepository,
    orders: MockOrderRepository,
    clients: MockClientRepository,
) -> JobCatalogue<MockJobRepository, MockOrderRepository, MockClientRepository> {
    JobCatalogue::new(Arc::new(jobs), Arc::new(orders), Arc::new(clients))
}

fn jobs_with(job: Option<Job>) -> MockJobRepository {
    let mut jobs = MockJobRepository::new();
    jobs.expect_find().return_once(move |_| Ok(job));
    jobs
}

#[tokio::test]
async fn get_missing_job_is_not_found() {
    let error = catalogue(
        jobs_with(None),
        MockOrderRepository::new(),
        MockClientRepository::new(),
    )
    .get(JobId::new(5))
    .await
    .expect_err("missing job");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "Job not found");
}

#[tokio::test]
async fn get_lists_distinct_clients_across_users() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_for_job()
        .with(eq(JobId::new(5)), eq(None))
        .return_once(|_, _| {
            Ok(vec![
                sample_order(1, 1, 2, 5, OrderStatus::Pending),
                sample_order(2, 3, 4, 5, OrderStatus::Pending),
                sample_order(3, 1, 2, 5, OrderStatus::Completed),
            ])
        });
    let mut clients = MockClientRepository::new();
    clients
        .expect_find_many()
        .withf(|ids| ids == [ClientId::new(2), ClientId::new(4)])
        .return_once(|_| Ok(vec![sample_client(2, 1), sample_client(4, 3)]));

    let details = catalogue(jobs_with(Some(sample_job(5))), orders, clients)
        .get(JobId::new(5))
        .await
        .expect("job loads");
    let ids: Vec<_> = details.clients.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![ClientId::new(2), ClientId::new(4)]);
}

#[rstest]
#[case(Vec::new(), ErrorCode::NotFound, "No orders found for this job")]
#[case(
    vec![
        sample_order(1, 1, 1, 5, OrderStatus::Completed),
        sample_order(2, 1, 1, 5, OrderStatus::InProgress),
    ],
    ErrorCode::InvalidRequest,
    "Cannot remove job with active orders!"
)]
#[tokio::test]
async fn remove_for_user_refusals(
    #[case] stored: Vec<Order>,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_for_job()
        .with(eq(JobId::new(5)), eq(Some(UserId::new(1))))
        .return_once(move |_, _| Ok(stored));
    orders.expect_delete_many().never();

    let error = catalogue(
        jobs_with(Some(sample_job(5))),
        orders,
        MockClientRepository::new(),
    )
    .remove_for_user(UserId::new(1), JobId::new(5))
    .await
    .expect_err("removal refused");
    assert_eq!(error.code(), code);
    assert_eq!(error.message(), message);
}

#[tokio::test]
async fn remove_for_user_deletes_only_callers_orders() {
    let mut orders = MockOrderRepository::new();
    orders.expect_list_for_job().return_once(|_, _| {
        Ok(vec![
            sample_order(4, 1, 1, 5, OrderStatus::Pending),
            sample_order(9, 1, 2, 5, OrderStatus::Canceled),
        ])
    });
    orders
        .expect_delete_many()
        .withf(|ids| ids == [OrderId::new(4), OrderId::new(9)])
        .return_once(|ids| Ok(ids.len()));

    let job = catalogue(
        jobs_with(Some(sample_job(5))),
        orders,
        MockClientRepository::new(),
    )
    .remove_for_user(UserId::new(1), JobId::new(5))
    .await
    .expect("removal succeeds");
    assert_eq!(job.id, JobId::new(5));
}

#[tokio::test]
async fn update_validates_merged_job() {
    let mut jobs = jobs_with(Some(sample_job(2)));
    jobs.expect_update().never();
    let error = catalogue(jobs, MockOrderRepository::new(), MockClientRepository::new())
        .update(
            JobId::new(2),
            JobFields {
                title: Some("abc".to_owned()),
                ..JobFields::default()
            },
        )
        .await
        .expect_err("title too short");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn orders_are_restricted_to_the_caller() {
    let mut orders = MockOrderRepository::new();
    orders
        .expect_list_for_job()
        .with(eq(JobId::new(5)), eq(Some(UserId::new(1))))
        .return_once(|_, _| Ok(vec![sample_order(1, 1, 3, 5, OrderStatus::Pending)]));
    let mut clients = MockClientRepository::new();
    clients
        .expect_find_many()
        .return_once(|_| Ok(vec![sample_client(3, 1)]));

    let listing = catalogue(jobs_with(Some(sample_job(5))), orders, clients)
        .orders(UserId::new(1), JobId::new(5))
        .await
        .expect("orders load");
    assert_eq!(listing.orders.len(), 1);
    assert_eq!(listing.orders[0].client.id, ClientId::new(3));
}
