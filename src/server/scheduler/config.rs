use chrono::Duration;

pub mod reminder {
    use super::*;

    /// How far before the appointment the reminder goes out.
    pub const LEAD_WINDOW: Duration = Duration::hours(24);

    /// Interval the reminder scan cron runs at; reminder jobs found in a
    /// pass are staggered across this window.
    pub const SCHEDULE_INTERVAL: Duration = Duration::minutes(30);

    /// Runs every 30 minutes at the top and bottom of the hour.
    pub const CRON_EXPRESSION: &str = "0 */30 * * * *";
}

pub mod dispatch {
    /// Re-queues pending notifications every 5 minutes, picking up rows
    /// whose dispatch job was lost (e.g. across a restart).
    pub const CRON_EXPRESSION: &str = "0 */5 * * * *";
}

pub mod cleanup {
    /// Hourly sweep of stale queue entries, on top of the worker pool's own
    /// periodic cleanup task.
    pub const CRON_EXPRESSION: &str = "0 10 * * * *";
}
