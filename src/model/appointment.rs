use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::{customer::VehicleDto, service::ServiceOperationDto};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AppointmentDto {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub vehicle: VehicleDto,
    pub scheduled_at: NaiveDateTime,
    pub duration_minutes: i32,
    /// Status string, e.g. "SCHEDULED".
    pub status: String,
    /// Statuses this appointment may transition to next; drives the
    /// dashboard dropdown.
    pub allowed_transitions: Vec<String>,
    pub service_address: String,
    pub emergency: bool,
    pub services: Vec<ServiceOperationDto>,
    pub notes: Option<String>,
}

/// Public booking flow request: customer + vehicle details arrive inline and
/// are matched or created server-side.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BookingRequestDto {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub vehicle_year: i16,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub service_address: String,
    pub scheduled_at: NaiveDateTime,
    pub service_ids: Vec<i32>,
    pub emergency: bool,
    pub notes: Option<String>,
}

/// Dashboard quick-add request. `customer_id`/`vehicle_id` are set when the
/// phone lookup resolved an existing record, otherwise the inline fields are
/// used to create one.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct QuickAddRequestDto {
    pub customer_id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: String,
    pub vehicle_id: Option<i32>,
    pub vehicle_year: Option<i16>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub service_address: String,
    pub scheduled_at: NaiveDateTime,
    pub service_ids: Vec<i32>,
    pub emergency: bool,
    pub notes: Option<String>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateStatusDto {
    /// Target status string, e.g. "IN_PROGRESS".
    pub status: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AvailabilityDto {
    pub date: NaiveDate,
    pub slots: Vec<SlotDto>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SlotDto {
    pub starts_at: NaiveDateTime,
    pub available: bool,
}
