//! Lifecycle tests for the worker pool.

use curbside::server::worker::{
    handler::WorkerJobHandler,
    pool::{WorkerPool, WorkerPoolConfig},
};
use curbside_test_utils::prelude::*;
use entity::notification::{NotificationKind, NotificationStatus};

use crate::util::redis::RedisTest;

async fn test_pool(redis: &RedisTest, test: &TestSetup) -> WorkerPool {
    let mut config = WorkerPoolConfig::new(2);
    config.poll_interval_ms = 10;
    config.shutdown_timeout_seconds = 1;

    WorkerPool::new(
        config,
        redis.queue(),
        WorkerJobHandler::new(test.state.db.clone()),
    )
}

#[tokio::test]
async fn start_and_stop() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let test = test_setup_with_shop_tables!().expect("Failed to create test setup");
    let pool = test_pool(&redis, &test).await;

    assert!(!pool.is_running().await);

    pool.start().await.expect("Pool should start");
    assert!(pool.is_running().await);
    assert_eq!(pool.dispatcher_count().await, 1);

    pool.stop().await.expect("Pool should stop");
    assert!(!pool.is_running().await);

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn start_is_idempotent() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let test = test_setup_with_shop_tables!().expect("Failed to create test setup");
    let pool = test_pool(&redis, &test).await;

    pool.start().await.expect("Pool should start");
    pool.start().await.expect("Second start should be a no-op");
    assert_eq!(pool.dispatcher_count().await, 1);

    pool.stop().await.expect("Pool should stop");
    pool.stop().await.expect("Second stop should be a no-op");

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn processes_queued_job() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let test = test_setup_with_shop_tables!().expect("Failed to create test setup");
    let pool = test_pool(&redis, &test).await;
    let queue = redis.queue();

    // A pending notification the dispatch job will deliver
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await
        .unwrap();
    let vehicle = test
        .shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await
        .unwrap();
    let appointment = test
        .shop()
        .insert_appointment(
            customer.id,
            vehicle.id,
            chrono::Utc::now().naive_utc(),
            60,
            entity::appointment::AppointmentStatus::Scheduled,
        )
        .await
        .unwrap();
    let notification = test
        .shop()
        .insert_notification(
            appointment.id,
            customer.id,
            NotificationKind::Reminder,
            NotificationStatus::Pending,
            chrono::Utc::now().naive_utc(),
        )
        .await
        .unwrap();

    queue
        .push(curbside::server::model::worker::WorkerJob::DispatchNotification {
            notification_id: notification.id,
        })
        .await
        .unwrap();

    pool.start().await.expect("Pool should start");

    // Give the dispatcher a few poll cycles to pick the job up
    let mut delivered = false;
    for _ in 0..50 {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        let stored = curbside::server::data::notification::NotificationRepository::new(
            &test.state.db,
        )
        .find_by_id(notification.id)
        .await
        .unwrap()
        .unwrap();

        if stored.status == NotificationStatus::Sent {
            delivered = true;
            break;
        }
    }

    pool.stop().await.expect("Pool should stop");

    assert!(delivered, "Queued dispatch job should mark the notification sent");
    assert!(queue.is_empty().await.unwrap());

    redis.cleanup().await.expect("Failed to cleanup Redis");
}
