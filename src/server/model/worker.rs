//! Worker job definitions for background task processing.
//!
//! Jobs are serialized to JSON for Redis storage; the serialized form doubles
//! as the job's identity in the queue, so two identical jobs can never be
//! queued at once.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::server::error::{worker::WorkerError, Error};

/// Background job types for the notification pipeline.
///
/// # Job Types
/// - `SendAppointmentReminder` - Render the reminder template for an upcoming
///   appointment and record a pending notification for it
/// - `DispatchNotification` - Deliver a pending notification and mark it
///   sent or failed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum WorkerJob {
    /// Create and dispatch the reminder notification for an appointment
    /// entering the reminder lead window.
    SendAppointmentReminder {
        /// Appointment record ID the reminder is for.
        appointment_id: i32,
    },

    /// Deliver a previously recorded notification that is still pending.
    DispatchNotification {
        /// Notification record ID to deliver.
        notification_id: i32,
    },
}

impl WorkerJob {
    /// Serialized identity used for queue membership and duplicate detection.
    pub fn identity(&self) -> Result<String, Error> {
        serde_json::to_string(self)
            .map_err(|e| WorkerError::SerializationFailed(e.to_string()).into())
    }

    /// Parse a job back from its queue identity.
    pub fn from_identity(identity: &str) -> Result<Self, Error> {
        serde_json::from_str(identity)
            .map_err(|e| WorkerError::DeserializationFailed(e.to_string()).into())
    }
}

impl fmt::Display for WorkerJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
