//! Redis-backed queue for the notification worker.
//!
//! Jobs live in a single sorted set: the member is the job's serialized
//! identity and the score is the time it should run, so `push` and `schedule`
//! are the same operation at different scores and duplicate jobs are
//! impossible by construction. [`WorkerQueue::pop`] only returns jobs whose
//! scheduled time has passed, which is what lets the reminder scheduler
//! stagger a batch across its window.
//!
//! ## Duplicate guardrails
//!
//! [`WorkerQueue::push`] and [`WorkerQueue::schedule`] atomically refuse a
//! job whose identity is already queued. Callers that also need cross-run
//! dedup (e.g. "has a reminder ever been recorded for this appointment")
//! check the database before queueing.
//!
//! ## TTL and cleanup
//!
//! Jobs that sit in the queue past their TTL are orphans (the scheduler
//! re-creates anything still relevant on its next pass) and are removed by
//! [`WorkerQueue::cleanup_stale_jobs`], either manually or via the periodic
//! cleanup task the worker pool starts.

mod config;
mod lua;

pub use config::WorkerQueueConfig;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use dioxus_logger::tracing;
use fred::prelude::*;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use lua::{CLEANUP_STALE_JOBS_SCRIPT, POP_DUE_JOB_SCRIPT, PUSH_JOB_SCRIPT};

use crate::server::{
    error::{worker::WorkerError, Error},
    model::worker::WorkerJob,
};

/// How far in the past a `schedule` target may lie before it is rejected.
/// Covers clock skew and the gap between computing a schedule and pushing it.
const SCHEDULE_PAST_TOLERANCE_MINUTES: i64 = 5;

/// Handle to the shared job queue. Cheap to clone; all clones operate on the
/// same Redis sorted set.
#[derive(Clone)]
pub struct WorkerQueue {
    inner: Arc<WorkerQueueRef>,
}

struct WorkerQueueRef {
    pool: Pool,
    config: WorkerQueueConfig,
    cleanup_handle: RwLock<Option<JoinHandle<()>>>,
}

impl WorkerQueue {
    pub fn new(pool: Pool) -> Self {
        Self::with_config(pool, WorkerQueueConfig::default())
    }

    pub fn with_config(pool: Pool, config: WorkerQueueConfig) -> Self {
        Self {
            inner: Arc::new(WorkerQueueRef {
                pool,
                config,
                cleanup_handle: RwLock::new(None),
            }),
        }
    }

    pub fn queue_name(&self) -> &str {
        &self.inner.config.queue_name
    }

    /// Push a job to be executed as soon as a worker is free.
    ///
    /// Returns `Ok(true)` if the job was added, `Ok(false)` if an identical
    /// job is already queued.
    pub async fn push(&self, job: WorkerJob) -> Result<bool, Error> {
        self.add(job, Utc::now()).await
    }

    /// Schedule a job for a future execution time.
    ///
    /// Times slightly in the past are tolerated (the job runs immediately);
    /// anything older than the tolerance is a scheduling bug and rejected.
    pub async fn schedule(&self, job: WorkerJob, time: DateTime<Utc>) -> Result<bool, Error> {
        let tolerance = Duration::minutes(SCHEDULE_PAST_TOLERANCE_MINUTES);
        if time < Utc::now() - tolerance {
            return Err(WorkerError::ScheduledInPast(time.naive_utc()).into());
        }

        self.add(job, time).await
    }

    async fn add(&self, job: WorkerJob, time: DateTime<Utc>) -> Result<bool, Error> {
        let identity = job.identity()?;
        let score = time.timestamp_millis() as f64;

        let result: i64 = self
            .inner
            .pool
            .eval(
                PUSH_JOB_SCRIPT,
                vec![self.queue_name()],
                vec![identity, score.to_string()],
            )
            .await?;

        Ok(result == 1)
    }

    /// Remove and return the earliest job whose scheduled time has passed.
    ///
    /// Returns `Ok(None)` when the queue is empty or every queued job is
    /// still in the future.
    pub async fn pop(&self) -> Result<Option<WorkerJob>, Error> {
        let now = Utc::now().timestamp_millis();

        let identity: Option<String> = self
            .inner
            .pool
            .eval(
                POP_DUE_JOB_SCRIPT,
                vec![self.queue_name()],
                vec![now.to_string()],
            )
            .await?;

        match identity {
            Some(identity) => Ok(Some(WorkerJob::from_identity(&identity)?)),
            None => Ok(None),
        }
    }

    /// Number of jobs in the queue, due or not.
    pub async fn len(&self) -> Result<u64, Error> {
        let count: u64 = self.inner.pool.zcard(self.queue_name()).await?;

        Ok(count)
    }

    pub async fn is_empty(&self) -> Result<bool, Error> {
        Ok(self.len().await? == 0)
    }

    /// Remove all jobs older than the configured TTL.
    ///
    /// Returns the number of stale jobs removed.
    pub async fn cleanup_stale_jobs(&self) -> Result<u64, Error> {
        Self::cleanup_stale_jobs_internal(&self.inner.pool, &self.inner.config).await
    }

    async fn cleanup_stale_jobs_internal(
        pool: &Pool,
        config: &WorkerQueueConfig,
    ) -> Result<u64, Error> {
        let cutoff = Utc::now().timestamp_millis() - config.job_ttl.as_millis() as i64;

        let removed: i64 = pool
            .eval(
                CLEANUP_STALE_JOBS_SCRIPT,
                vec![config.queue_name.as_str()],
                vec![cutoff.to_string()],
            )
            .await?;

        if removed > 0 {
            tracing::info!("Cleaned up {} stale job(s) from queue", removed);
        }

        Ok(removed as u64)
    }

    /// Start the periodic cleanup task. Idempotent; a second call while the
    /// task is running is a logged no-op.
    pub async fn start_cleanup(&self) {
        let mut handle = self.inner.cleanup_handle.write().await;

        if handle.is_some() {
            tracing::warn!("Queue cleanup task is already running");
            return;
        }

        let pool = self.inner.pool.clone();
        let config = self.inner.config.clone();

        *handle = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(config.cleanup_interval);
            // The first tick fires immediately; skip it so startup isn't a
            // cleanup burst.
            interval.tick().await;

            loop {
                interval.tick().await;

                if let Err(e) = Self::cleanup_stale_jobs_internal(&pool, &config).await {
                    tracing::warn!("Failed to cleanup stale jobs: {:?}", e);
                }
            }
        }));
    }

    /// Stop the periodic cleanup task if it is running.
    pub async fn stop_cleanup(&self) {
        let mut handle = self.inner.cleanup_handle.write().await;

        if let Some(task) = handle.take() {
            task.abort();
        }
    }
}
