use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::Error,
    scheduler::{
        config::{cleanup, dispatch, reminder},
        reminder::{
            cleanup_stale_jobs, dispatch_pending_notifications, schedule_appointment_reminders,
        },
    },
    worker::WorkerQueue,
};

macro_rules! add_cron_job {
    ($sched:expr, $cron:expr, $db:expr, $queue:expr, $fn:expr, $name:expr) => {{
        let db_clone = $db.clone();
        let queue_clone = $queue.clone();

        $sched
            .add(Job::new_async($cron, move |_, _| {
                let db = db_clone.clone();
                let queue = queue_clone.clone();

                Box::pin(async move {
                    match $fn(db, queue).await {
                        Ok(count) => {
                            if count > 0 {
                                tracing::info!("Queued {} {} job(s)", count, $name)
                            }
                        }
                        Err(e) => tracing::error!("Error running {} pass: {:?}", $name, e),
                    }
                })
            })?)
            .await?;
    }};
}

/// Initialize and start the cron job scheduler.
///
/// Three recurring passes: the reminder scan (appointments entering the lead
/// window), the notification dispatcher (pending rows whose time has come),
/// and the stale-queue sweep.
pub async fn start_scheduler(
    db: &DatabaseConnection,
    queue: &WorkerQueue,
) -> Result<JobScheduler, Error> {
    let sched = JobScheduler::new().await?;

    add_cron_job!(
        sched,
        reminder::CRON_EXPRESSION,
        db,
        queue,
        schedule_appointment_reminders,
        "appointment reminder"
    );

    add_cron_job!(
        sched,
        dispatch::CRON_EXPRESSION,
        db,
        queue,
        dispatch_pending_notifications,
        "notification dispatch"
    );

    add_cron_job!(
        sched,
        cleanup::CRON_EXPRESSION,
        db,
        queue,
        cleanup_stale_jobs,
        "queue cleanup"
    );

    sched.start().await?;

    Ok(sched)
}
