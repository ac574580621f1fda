use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Failed to serialize worker job: {0}")]
    SerializationFailed(String),
    #[error("Failed to deserialize worker job payload: {0}")]
    DeserializationFailed(String),
    #[error("Job was scheduled in the past by more than the allowed tolerance: {0}")]
    ScheduledInPast(chrono::NaiveDateTime),
}

impl IntoResponse for WorkerError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
