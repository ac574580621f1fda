use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Missing or malformed bearer token")]
    MissingToken,
    #[error("Bearer token failed validation")]
    InvalidToken,
    #[error("Customer ID is not present in session")]
    CustomerNotInSession,
    #[error("Customer ID {0:?} not found in database despite having an active session")]
    CustomerNotInDatabase(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid username or password".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken | Self::InvalidToken => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CustomerNotInSession => {
                tracing::debug!("{}", Self::CustomerNotInSession);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Customer not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::CustomerNotInDatabase(_) => InternalServerError(self).into_response(),
        }
    }
}
