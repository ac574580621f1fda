//! Cron pass bodies: reminder scheduling, notification dispatch, and queue
//! cleanup.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{appointment::AppointmentRepository, notification::NotificationRepository},
    error::Error,
    model::worker::WorkerJob,
    scheduler::{
        config::reminder::{LEAD_WINDOW, SCHEDULE_INTERVAL},
        schedule::{calculate_batch_limit, create_job_schedule},
    },
    worker::WorkerQueue,
};

/// Find appointments entering the reminder lead window and queue a reminder
/// job for each, staggered across the scheduling window.
///
/// Appointments that already have a reminder notification are skipped here;
/// an identical job already in the queue is suppressed by the queue itself.
/// Returns the number of jobs newly queued.
pub async fn schedule_appointment_reminders(
    db: DatabaseConnection,
    queue: WorkerQueue,
) -> Result<usize, Error> {
    let appointment_repository = AppointmentRepository::new(&db);
    let notification_repository = NotificationRepository::new(&db);

    let now = Utc::now().naive_utc();
    let window_end = now + LEAD_WINDOW;

    let upcoming = appointment_repository
        .get_scheduled_in_range(now, window_end)
        .await?;

    let mut candidates = Vec::new();
    for appointment in upcoming {
        if !notification_repository.reminder_exists(appointment.id).await? {
            candidates.push(appointment);
        }
    }

    if candidates.is_empty() {
        return Ok(0);
    }

    let batch_limit = calculate_batch_limit(candidates.len() as u64, LEAD_WINDOW, SCHEDULE_INTERVAL);
    candidates.truncate(batch_limit as usize);

    let jobs: Vec<WorkerJob> = candidates
        .into_iter()
        .map(|appointment| WorkerJob::SendAppointmentReminder {
            appointment_id: appointment.id,
        })
        .collect();

    let schedule = create_job_schedule(jobs, SCHEDULE_INTERVAL).await?;

    let mut queued = 0;
    for (job, scheduled_at) in schedule {
        if queue.schedule(job, scheduled_at).await? {
            queued += 1;
        }
    }

    Ok(queued)
}

/// Queue a dispatch job for every pending notification whose scheduled time
/// has passed. Returns the number of jobs newly queued.
pub async fn dispatch_pending_notifications(
    db: DatabaseConnection,
    queue: WorkerQueue,
) -> Result<usize, Error> {
    let notification_repository = NotificationRepository::new(&db);

    let pending = notification_repository
        .get_pending_due(Utc::now().naive_utc())
        .await?;

    let mut queued = 0;
    for notification in pending {
        let job = WorkerJob::DispatchNotification {
            notification_id: notification.id,
        };

        if queue.push(job).await? {
            queued += 1;
        }
    }

    Ok(queued)
}

/// Sweep stale entries out of the worker queue.
pub async fn cleanup_stale_jobs(
    _db: DatabaseConnection,
    queue: WorkerQueue,
) -> Result<usize, Error> {
    let removed = queue.cleanup_stale_jobs().await?;

    Ok(removed as usize)
}
