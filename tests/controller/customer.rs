//! Tests for the admin phone lookup endpoint.

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use curbside::{
    model::customer::CustomerMatchDto,
    server::{
        controller::customer::{lookup_customers, LookupParams},
        model::app::AppState,
    },
};
use curbside_test_utils::prelude::*;

use super::admin_headers;

async fn lookup(test: &TestSetup, phone: &str) -> (StatusCode, Vec<CustomerMatchDto>) {
    let result = lookup_customers(
        State(test.state::<AppState>()),
        admin_headers(),
        Query(LookupParams {
            phone: phone.to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let matches = serde_json::from_slice(&body).unwrap_or_default();

    (status, matches)
}

#[tokio::test]
/// Expect an exact match regardless of the phone formatting used
async fn lookup_normalizes_phone_formats() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "(555) 867-5309")
        .await?;
    test.shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await?;

    let (status, matches) = lookup(&test, "555.867.5309").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].customer.id, customer.id);
    assert_eq!(matches[0].vehicles.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect every match returned when two customers share a number
async fn lookup_returns_all_matches() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    test.shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    test.shop()
        .insert_customer("Marco", "Delgado", "5558675309")
        .await?;

    let (status, matches) = lookup(&test, "5558675309").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(matches.len(), 2);

    Ok(())
}

#[tokio::test]
/// Expect an empty list, not an error, for an unknown number
async fn lookup_unknown_number_returns_empty() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let (status, matches) = lookup(&test, "5550000000").await;

    assert_eq!(status, StatusCode::OK);
    assert!(matches.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect 401 without a bearer token
async fn lookup_requires_token() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = lookup_customers(
        State(test.state::<AppState>()),
        HeaderMap::new(),
        Query(LookupParams {
            phone: "5558675309".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
