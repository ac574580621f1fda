use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        template::{MessageTemplateDto, UpsertTemplateDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::auth::require_admin, util::dto::template_dto},
        data::template::TemplateRepository,
        error::Error,
        model::app::AppState,
        service::template::TemplateService,
    },
};

/// List all message templates
#[utoipa::path(
    get,
    path = "/api/admin/templates",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Message templates", body = Vec<MessageTemplateDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_templates(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let template_repository = TemplateRepository::new(&state.db);

    let templates = template_repository.get_all().await?;

    let dtos: Vec<MessageTemplateDto> = templates.iter().map(template_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a message template
#[utoipa::path(
    post,
    path = "/api/admin/templates",
    tag = ADMIN_TAG,
    request_body = UpsertTemplateDto,
    responses(
        (status = 201, description = "Template created", body = MessageTemplateDto),
        (status = 400, description = "Unknown channel value", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<UpsertTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let template_service = TemplateService::new(&state.db);

    let template = template_service.create(&request).await?;

    Ok((StatusCode::CREATED, Json(template_dto(&template))))
}

/// Update a message template
#[utoipa::path(
    put,
    path = "/api/admin/templates/{id}",
    tag = ADMIN_TAG,
    request_body = UpsertTemplateDto,
    params(
        ("id" = i32, Path, description = "Template ID")
    ),
    responses(
        (status = 200, description = "Template updated", body = MessageTemplateDto),
        (status = 400, description = "Unknown channel value", body = ErrorDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(request): Json<UpsertTemplateDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let template_service = TemplateService::new(&state.db);

    let template = template_service.update(id, &request).await?;

    Ok((StatusCode::OK, Json(template_dto(&template))))
}

/// Delete a message template
#[utoipa::path(
    delete,
    path = "/api/admin/templates/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Template ID")
    ),
    responses(
        (status = 204, description = "Template deleted"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Template not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_template(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let template_service = TemplateService::new(&state.db);

    template_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
