//! Worker queue configuration for naming, TTL, and cleanup settings.

use std::time::Duration;

const DEFAULT_QUEUE_NAME: &str = "curbside:worker:queue";

/// Jobs older than this are considered stale and removed by cleanup.
///
/// Reminder jobs are staggered across at most the scheduling window, so a
/// job still sitting in the queue a full day later has been orphaned.
const DEFAULT_JOB_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// How often the cleanup task scans for stale jobs.
const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(300);

/// Configuration for the worker queue.
#[derive(Clone)]
pub struct WorkerQueueConfig {
    /// Redis key name for the job queue sorted set.
    pub queue_name: String,
    /// Maximum age for jobs before considered stale and removed by cleanup.
    pub job_ttl: Duration,
    /// How often the cleanup task runs to remove stale jobs.
    pub cleanup_interval: Duration,
}

impl WorkerQueueConfig {
    fn new() -> Self {
        Self {
            queue_name: DEFAULT_QUEUE_NAME.to_string(),
            job_ttl: DEFAULT_JOB_TTL,
            cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
        }
    }

    /// Configuration with a custom queue name; used by tests to isolate
    /// parallel runs against the same Redis instance.
    pub fn with_queue_name(queue_name: String) -> Self {
        Self {
            queue_name,
            ..Self::new()
        }
    }
}

impl Default for WorkerQueueConfig {
    fn default() -> Self {
        Self::new()
    }
}
