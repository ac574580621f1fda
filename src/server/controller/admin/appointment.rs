use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use futures::future::try_join_all;
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        appointment::{AppointmentDto, QuickAddRequestDto, UpdateStatusDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::auth::require_admin, util::dto::appointment_dto},
        data::appointment::AppointmentRepository,
        error::Error,
        model::app::AppState,
        service::booking::{parse_status, BookingService},
    },
};

#[derive(Deserialize)]
pub struct ListParams {
    pub date: NaiveDate,
    pub status: Option<String>,
}

/// List the day's appointments for the dashboard
#[utoipa::path(
    get,
    path = "/api/admin/appointments",
    tag = ADMIN_TAG,
    params(
        ("date" = String, Query, description = "Date to list, YYYY-MM-DD"),
        ("status" = Option<String>, Query, description = "Optional status filter, e.g. SCHEDULED")
    ),
    responses(
        (status = 200, description = "Appointments for the date", body = Vec<AppointmentDto>),
        (status = 400, description = "Unknown status filter", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let appointment_repository = AppointmentRepository::new(&state.db);

    let status_filter = params.status.as_deref().map(parse_status).transpose()?;

    let day_start = params
        .date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::InternalError("invalid date".to_string()))?;
    let day_end = day_start + chrono::Duration::days(1);

    let appointments = appointment_repository
        .get_in_range(day_start, day_end)
        .await?;

    let matching: Vec<_> = appointments
        .into_iter()
        .filter(|appointment| match &status_filter {
            Some(status) => appointment.status == *status,
            None => true,
        })
        .collect();

    let dtos: Vec<AppointmentDto> = try_join_all(
        matching
            .iter()
            .map(|appointment| appointment_dto(&state.db, appointment)),
    )
    .await?;

    Ok((StatusCode::OK, Json(dtos)))
}

/// Quick-add an appointment from the dashboard
///
/// Resolves the customer from the phone lookup result or the inline fields,
/// derives the vehicle the same way, conflict-checks the slot, and creates
/// the appointment with its service lines in one call.
#[utoipa::path(
    post,
    path = "/api/admin/appointments/quick-add",
    tag = ADMIN_TAG,
    request_body = QuickAddRequestDto,
    responses(
        (status = 201, description = "Appointment created", body = AppointmentDto),
        (status = 400, description = "Incomplete or invalid quick-add request", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Referenced customer or vehicle not found", body = ErrorDto),
        (status = 409, description = "Requested slot conflicts with existing work", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn quick_add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<QuickAddRequestDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let booking_service = BookingService::new(&state.db, state.config.tech_count);

    let appointment = booking_service.quick_add(&request).await?;

    let dto = appointment_dto(&state.db, &appointment).await?;

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Move an appointment to its next status
///
/// The transition table is enforced server-side; a target the current status
/// does not allow is rejected with a 409.
#[utoipa::path(
    patch,
    path = "/api/admin/appointments/{id}/status",
    tag = ADMIN_TAG,
    request_body = UpdateStatusDto,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Appointment updated", body = AppointmentDto),
        (status = 400, description = "Unknown status value", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed from current status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(request): Json<UpdateStatusDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let booking_service = BookingService::new(&state.db, state.config.tech_count);

    let appointment = booking_service.transition_status(id, &request.status).await?;

    let dto = appointment_dto(&state.db, &appointment).await?;

    Ok((StatusCode::OK, Json(dto)))
}
