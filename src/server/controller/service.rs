use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, service::ServiceOperationDto},
    server::{
        data::service_operation::ServiceOperationRepository, error::Error, model::app::AppState,
    },
};

pub static SERVICE_TAG: &str = "service";

/// Get the active service catalog shown on the booking page
#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Active service catalog", body = Vec<ServiceOperationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_services(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let operation_repository = ServiceOperationRepository::new(&state.db);

    let operations = operation_repository.get_active().await?;

    let dtos: Vec<ServiceOperationDto> = operations
        .into_iter()
        .map(|op| ServiceOperationDto {
            id: op.id,
            name: op.name,
            category: op.category,
            description: op.description,
            price_cents: op.price_cents,
            duration_minutes: op.duration_minutes,
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
