use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, template::NotificationDto},
    server::{
        controller::{admin::ADMIN_TAG, util::auth::require_admin, util::dto::notification_dto},
        data::notification::NotificationRepository,
        error::Error,
        model::app::AppState,
    },
};

#[derive(Deserialize)]
pub struct NotificationParams {
    pub appointment_id: i32,
}

/// List the notifications recorded for an appointment
///
/// Powers the tracking view: what went out (or failed to), when, and over
/// which channel.
#[utoipa::path(
    get,
    path = "/api/admin/notifications",
    tag = ADMIN_TAG,
    params(
        ("appointment_id" = i32, Query, description = "Appointment ID")
    ),
    responses(
        (status = 200, description = "Notifications for the appointment", body = Vec<NotificationDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Query<NotificationParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let notification_repository = NotificationRepository::new(&state.db);

    let notifications = notification_repository
        .get_by_appointment_id(params.appointment_id)
        .await?;

    let dtos: Vec<NotificationDto> = notifications.iter().map(notification_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
