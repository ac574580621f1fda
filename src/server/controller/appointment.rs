use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{AppointmentDto, AvailabilityDto, BookingRequestDto, SlotDto},
    },
    server::{
        controller::util::dto::appointment_dto,
        error::Error,
        model::{app::AppState, session::customer::SessionCustomerId},
        service::booking::BookingService,
    },
};

pub static APPOINTMENT_TAG: &str = "appointment";

#[derive(Deserialize)]
pub struct AvailabilityParams {
    pub date: NaiveDate,
}

/// Open slots on the booking grid for a date
#[utoipa::path(
    get,
    path = "/api/availability",
    tag = APPOINTMENT_TAG,
    params(
        ("date" = String, Query, description = "Date to check, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Slot availability for the date", body = AvailabilityDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    params: Query<AvailabilityParams>,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db, state.config.tech_count);

    let slots = booking_service.availability(params.date).await?;

    let dto = AvailabilityDto {
        date: params.date,
        slots: slots
            .into_iter()
            .map(|(starts_at, available)| SlotDto {
                starts_at,
                available,
            })
            .collect(),
    };

    Ok((StatusCode::OK, Json(dto)))
}

/// Book an appointment from the public booking flow
///
/// Matches or creates the customer and vehicle, verifies the requested slot,
/// then creates the appointment with its service lines. The customer ID is
/// stored in the session so the confirmation and profile pages can load it.
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = APPOINTMENT_TAG,
    request_body = BookingRequestDto,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentDto),
        (status = 400, description = "Invalid booking request", body = ErrorDto),
        (status = 409, description = "Requested slot conflicts with existing work", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<BookingRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let booking_service = BookingService::new(&state.db, state.config.tech_count);

    let appointment = booking_service.create_booking(&request).await?;

    SessionCustomerId::insert(&session, appointment.customer_id).await?;

    let dto = appointment_dto(&state.db, &appointment).await?;

    Ok((StatusCode::CREATED, Json(dto)))
}
