use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminLoginDto, TokenDto},
    },
    server::{controller::admin::ADMIN_TAG, error::Error, model::app::AppState,
        service::auth::AuthService},
};

/// Admin login: verify credentials and issue a bearer token
#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = ADMIN_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Token issued", body = TokenDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let token = auth_service
        .login(&request.username, &request.password, &state.config.jwt_secret)
        .await?;

    Ok((StatusCode::OK, Json(token)))
}
