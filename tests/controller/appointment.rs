//! Tests for the public booking endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use curbside::{
    model::appointment::BookingRequestDto,
    server::{
        controller::appointment::{create_appointment, get_availability, AvailabilityParams},
        model::{app::AppState, session::customer::SessionCustomerId},
    },
};
use curbside_test_utils::prelude::*;

fn slot(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn booking_request(scheduled_at: chrono::NaiveDateTime, service_ids: Vec<i32>) -> BookingRequestDto {
    BookingRequestDto {
        first_name: "Rosa".to_string(),
        last_name: "Delgado".to_string(),
        email: None,
        phone: "(555) 867-5309".to_string(),
        vehicle_year: 2017,
        vehicle_make: "Honda".to_string(),
        vehicle_model: "Civic".to_string(),
        service_address: "42 Driveway Ln".to_string(),
        scheduled_at,
        service_ids,
        emergency: false,
        notes: None,
    }
}

#[tokio::test]
/// Expect 200 with the day's slot grid
async fn availability_returns_ok() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = get_availability(
        State(test.state::<AppState>()),
        Query(AvailabilityParams {
            date: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 201 and the customer ID stored in the session
async fn booking_creates_appointment_and_session() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let operation = test.shop().insert_service_operation("Oil Change", 8900, 60).await?;

    let result = create_appointment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(booking_request(slot(9, 0), vec![operation.id])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let customer_id = SessionCustomerId::get(&test.session).await.unwrap();
    assert!(customer_id.is_some());

    Ok(())
}

#[tokio::test]
/// Expect 409 when the slot is already taken
async fn booking_rejects_conflicting_slot() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let operation = test.shop().insert_service_operation("Oil Change", 8900, 60).await?;

    let first = create_appointment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(booking_request(slot(9, 0), vec![operation.id])),
    )
    .await;
    assert!(first.is_ok());

    let second = create_appointment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(booking_request(slot(9, 0), vec![operation.id])),
    )
    .await;

    let resp = second.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 when the requested time is off the booking grid
async fn booking_rejects_off_grid_time() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let operation = test.shop().insert_service_operation("Oil Change", 8900, 60).await?;

    let result = create_appointment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(booking_request(slot(9, 17), vec![operation.id])),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 400 when no services are selected
async fn booking_rejects_empty_service_list() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = create_appointment(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(booking_request(slot(9, 0), vec![])),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
