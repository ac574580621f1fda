//! Tests for WorkerQueue push, schedule, pop, and cleanup behavior.

use chrono::{Duration, Utc};
use curbside::server::{
    error::{worker::WorkerError, Error},
    model::worker::WorkerJob,
};

use crate::util::redis::RedisTest;

#[tokio::test]
async fn push_adds_new_job() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    let job = WorkerJob::SendAppointmentReminder { appointment_id: 42 };

    let added = queue.push(job).await.expect("Push should succeed");
    assert!(added, "Job should be added");
    assert_eq!(queue.len().await.unwrap(), 1);

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn push_suppresses_duplicate() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    let job = WorkerJob::SendAppointmentReminder { appointment_id: 42 };

    let first = queue.push(job.clone()).await.expect("Push should succeed");
    assert!(first, "First job should be added");

    let second = queue.push(job).await.expect("Duplicate push should succeed");
    assert!(!second, "Duplicate job should not be added");

    assert_eq!(queue.len().await.unwrap(), 1);

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn push_distinguishes_job_identities() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    assert!(queue
        .push(WorkerJob::SendAppointmentReminder { appointment_id: 1 })
        .await
        .unwrap());
    assert!(queue
        .push(WorkerJob::SendAppointmentReminder { appointment_id: 2 })
        .await
        .unwrap());
    assert!(queue
        .push(WorkerJob::DispatchNotification { notification_id: 1 })
        .await
        .unwrap());

    assert_eq!(queue.len().await.unwrap(), 3);

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn pop_returns_due_job() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    let job = WorkerJob::DispatchNotification { notification_id: 7 };
    queue.push(job.clone()).await.unwrap();

    let popped = queue.pop().await.expect("Pop should succeed");
    assert_eq!(popped, Some(job));

    // The queue is drained after the pop
    assert!(queue.is_empty().await.unwrap());
    assert_eq!(queue.pop().await.unwrap(), None);

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn pop_skips_future_jobs() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    let job = WorkerJob::SendAppointmentReminder { appointment_id: 9 };
    queue
        .schedule(job, Utc::now() + Duration::minutes(10))
        .await
        .unwrap();

    let popped = queue.pop().await.expect("Pop should succeed");
    assert_eq!(popped, None, "Future job must not be popped early");
    assert_eq!(queue.len().await.unwrap(), 1, "Job stays queued");

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn schedule_rejects_far_past_time() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    let job = WorkerJob::SendAppointmentReminder { appointment_id: 9 };
    let result = queue.schedule(job, Utc::now() - Duration::hours(1)).await;

    assert!(matches!(
        result,
        Err(Error::WorkerError(WorkerError::ScheduledInPast(_)))
    ));

    redis.cleanup().await.expect("Failed to cleanup Redis");
}

#[tokio::test]
async fn cleanup_removes_only_stale_jobs() {
    let redis = RedisTest::new().await.expect("Failed to create Redis test");
    let queue = redis.queue();

    queue
        .push(WorkerJob::SendAppointmentReminder { appointment_id: 1 })
        .await
        .unwrap();

    // Nothing is older than the TTL yet
    let removed = queue.cleanup_stale_jobs().await.unwrap();
    assert_eq!(removed, 0);
    assert_eq!(queue.len().await.unwrap(), 1);

    redis.cleanup().await.expect("Failed to cleanup Redis");
}
