use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Requested slot at {0} conflicts with existing appointments")]
    SlotConflict(chrono::NaiveDateTime),
    #[error("Requested time is outside business hours or off the slot grid")]
    OutsideBookingWindow,
    #[error("Unknown or inactive service operation ID {0}")]
    UnknownService(i32),
    #[error("No services selected for appointment")]
    NoServicesSelected,
    #[error("Appointment {0} not found")]
    AppointmentNotFound(i32),
    #[error("Customer {0} not found")]
    CustomerNotFound(i32),
    #[error("Vehicle {0} not found")]
    VehicleNotFound(i32),
    #[error("Invoice {0} not found")]
    InvoiceNotFound(i32),
    #[error("Template {0} not found")]
    TemplateNotFound(i32),
    #[error("Invalid status value {0:?}")]
    InvalidStatus(String),
    #[error("Cannot transition appointment from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },
    #[error("Invoice {0} is void and cannot accept payments")]
    InvoiceVoid(i32),
    #[error("Missing customer details for quick-add: {0}")]
    IncompleteQuickAdd(&'static str),
}

impl BookingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::SlotConflict(_) | Self::InvalidStatusTransition { .. } | Self::InvoiceVoid(_) => {
                StatusCode::CONFLICT
            }
            Self::AppointmentNotFound(_)
            | Self::CustomerNotFound(_)
            | Self::VehicleNotFound(_)
            | Self::InvoiceNotFound(_)
            | Self::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
