//! Error types for the Curbside server application.
//!
//! Domain-specific error enums (authentication, booking, configuration,
//! worker queue) are aggregated into a single [`Error`] type via `thiserror`.
//! All of them implement `IntoResponse` so handlers can bubble errors with `?`
//! and still produce a sensible HTTP response.

pub mod auth;
pub mod booking;
pub mod config;
pub mod worker;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, booking::BookingError, config::ConfigError, worker::WorkerError,
    },
};

/// Main error type for the Curbside server application.
///
/// Aggregates the domain-specific error types and external library errors.
/// `#[from]` conversions let the `?` operator lift underlying errors, and the
/// `IntoResponse` implementation maps each to an HTTP response.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (bad credentials, missing/expired token, session).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Booking error (slot conflicts, unknown records, bad transitions).
    #[error(transparent)]
    BookingError(#[from] BookingError),
    /// Worker queue error (job validation, serialization, scheduling).
    #[error(transparent)]
    WorkerError(#[from] WorkerError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Curbside's code.
    #[error("Internal error with Curbside's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis error (connection, command execution).
    #[error(transparent)]
    RedisError(#[from] fred::prelude::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// JWT signing/validation error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Password hashing error.
    #[error(transparent)]
    BcryptError(#[from] bcrypt::BcryptError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::BookingError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic message to
/// the client so internal details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
