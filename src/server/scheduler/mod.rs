//! Cron scheduler for the appointment reminder pipeline.
//!
//! Periodically scans for appointments entering the reminder lead window and
//! queues staggered reminder jobs for them, re-queues pending notifications
//! whose dispatch was lost, and sweeps stale entries out of the worker
//! queue. All real work happens in the worker; the scheduler only decides
//! what to queue and when.

pub mod config;
pub mod cron;
pub mod reminder;
pub mod schedule;
