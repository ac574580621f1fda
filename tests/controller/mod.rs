//! Integration tests for the HTTP controllers.
//!
//! Handlers are invoked directly with extractors built from the sqlite test
//! setup; request routing and serialization are covered by the utoipa
//! annotations and the router registration.

mod admin;
mod appointment;
mod customer;
mod profile;

use axum::http::{header, HeaderMap, HeaderValue};
use curbside::server::model::auth::AdminClaims;
use curbside_test_utils::constant::TEST_JWT_SECRET;

/// Headers carrying a valid admin bearer token.
pub fn admin_headers() -> HeaderMap {
    let token = AdminClaims::new(1, "Test Admin")
        .encode(TEST_JWT_SECRET)
        .expect("failed to sign test token");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("valid header value"),
    );

    headers
}
