//! HTTP controller endpoints for the Curbside web API.
//!
//! Axum handlers for the public booking surface, the session-authenticated
//! customer profile area, and the JWT-protected admin dashboard. Controllers
//! validate inputs, call into services, and shape responses; utoipa
//! annotations feed the OpenAPI document served at `/api/docs`.

pub mod admin;
pub mod appointment;
pub mod customer;
pub mod profile;
pub mod service;
pub mod util;
