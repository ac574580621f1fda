//! Utilities for distributing queued work across a time window.
//!
//! A reminder scan can surface a burst of appointments at once; these
//! helpers bound how many jobs one pass schedules and stagger their
//! execution times evenly so the worker and any downstream delivery channel
//! see a steady trickle instead of a spike.

use chrono::{DateTime, Duration, Utc};

use crate::server::{error::Error, model::worker::WorkerJob};

/// Floor on the per-pass batch size, so tiny tables don't get sliced into
/// single-job batches.
static MIN_BATCH_LIMIT: i64 = 25;

/// Maximum number of jobs one scheduling pass should queue.
///
/// Spreads the candidate set across the passes that fit in the lead window:
/// with 480 candidates, a 24-hour window, and 30-minute passes, each pass
/// takes 480 / 48 = 10, raised to the minimum batch limit.
pub fn calculate_batch_limit(
    table_entries: u64,
    window: Duration,
    schedule_interval: Duration,
) -> u64 {
    if table_entries == 0 {
        return 0;
    }

    let batches_per_window = window.num_minutes() / schedule_interval.num_minutes();

    if batches_per_window > 0 {
        (table_entries / batches_per_window as u64).max(MIN_BATCH_LIMIT as u64)
    } else {
        table_entries
    }
}

/// Pair each job with an execution time, staggered evenly across the window
/// starting now.
///
/// Offsets are computed as `(index * window) / total`, so any number of jobs
/// fits inside the window regardless of its length.
pub async fn create_job_schedule(
    jobs: Vec<WorkerJob>,
    schedule_interval: Duration,
) -> Result<Vec<(WorkerJob, DateTime<Utc>)>, Error> {
    if jobs.is_empty() {
        return Ok(vec![]);
    }

    let num_jobs = jobs.len() as i64;
    let window_seconds = schedule_interval.num_seconds();
    let base_time = Utc::now();

    let mut scheduled_jobs = Vec::new();

    for (index, job) in jobs.into_iter().enumerate() {
        let offset_seconds = (index as i64 * window_seconds) / num_jobs;
        let scheduled_time = base_time + Duration::seconds(offset_seconds);

        scheduled_jobs.push((job, scheduled_time))
    }

    Ok(scheduled_jobs)
}
