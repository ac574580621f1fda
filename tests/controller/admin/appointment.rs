//! Tests for the dashboard quick-add and status endpoints.

use axum::{
    body::to_bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use curbside::{
    model::appointment::{AppointmentDto, QuickAddRequestDto, UpdateStatusDto},
    server::{
        controller::admin::appointment::{list_appointments, quick_add, update_status, ListParams},
        model::app::AppState,
    },
};
use curbside_test_utils::prelude::*;
use entity::appointment::AppointmentStatus;

use crate::controller::admin_headers;

fn slot(hour: u32, minute: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn quick_add_request(
    customer_id: Option<i32>,
    vehicle_id: Option<i32>,
    service_ids: Vec<i32>,
) -> QuickAddRequestDto {
    QuickAddRequestDto {
        customer_id,
        first_name: Some("Rosa".to_string()),
        last_name: Some("Delgado".to_string()),
        phone: "5558675309".to_string(),
        vehicle_id,
        vehicle_year: Some(2017),
        vehicle_make: Some("Honda".to_string()),
        vehicle_model: Some("Civic".to_string()),
        service_address: "42 Driveway Ln".to_string(),
        scheduled_at: slot(10, 0),
        service_ids,
        emergency: false,
        notes: None,
    }
}

#[tokio::test]
/// Expect quick-add with a resolved customer to reuse that record
async fn quick_add_with_existing_customer() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    let vehicle = test
        .shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await?;
    let operation = test.shop().insert_service_operation("Brake Pads", 24900, 90).await?;

    let result = quick_add(
        State(test.state::<AppState>()),
        admin_headers(),
        Json(quick_add_request(
            Some(customer.id),
            Some(vehicle.id),
            vec![operation.id],
        )),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: AppointmentDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.customer_id, customer.id);
    assert_eq!(dto.vehicle.id, vehicle.id);
    assert_eq!(dto.services.len(), 1);

    Ok(())
}

#[tokio::test]
/// Expect quick-add with inline fields to create customer and vehicle
async fn quick_add_creates_new_records() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let operation = test.shop().insert_service_operation("Brake Pads", 24900, 90).await?;

    let result = quick_add(
        State(test.state::<AppState>()),
        admin_headers(),
        Json(quick_add_request(None, None, vec![operation.id])),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: AppointmentDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.customer_name, "Rosa Delgado");
    assert_eq!(dto.vehicle.label, "2017 Honda Civic");

    Ok(())
}

#[tokio::test]
/// Expect 400 when the inline fields are incomplete
async fn quick_add_rejects_missing_fields() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let operation = test.shop().insert_service_operation("Brake Pads", 24900, 90).await?;

    let mut request = quick_add_request(None, None, vec![operation.id]);
    request.first_name = None;

    let result = quick_add(
        State(test.state::<AppState>()),
        admin_headers(),
        Json(request),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect the day's appointments with an optional status filter
async fn list_filters_by_status() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    let vehicle = test
        .shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await?;
    test.shop()
        .insert_appointment(customer.id, vehicle.id, slot(9, 0), 60, AppointmentStatus::Scheduled)
        .await?;
    test.shop()
        .insert_appointment(customer.id, vehicle.id, slot(11, 0), 60, AppointmentStatus::Canceled)
        .await?;

    let result = list_appointments(
        State(test.state::<AppState>()),
        admin_headers(),
        Query(ListParams {
            date: NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
            status: Some("SCHEDULED".to_string()),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dtos: Vec<AppointmentDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dtos.len(), 1);
    assert_eq!(dtos[0].status, "SCHEDULED");

    Ok(())
}

#[tokio::test]
/// Expect a valid transition to update the appointment
async fn status_transition_applies() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    let vehicle = test
        .shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await?;
    let appointment = test
        .shop()
        .insert_appointment(customer.id, vehicle.id, slot(9, 0), 60, AppointmentStatus::Scheduled)
        .await?;

    let result = update_status(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(appointment.id),
        Json(UpdateStatusDto {
            status: "IN_PROGRESS".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: AppointmentDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.status, "IN_PROGRESS");
    assert_eq!(dto.allowed_transitions, vec!["READY".to_string()]);

    Ok(())
}

#[tokio::test]
/// Expect 409 for a transition the table does not allow
async fn status_transition_rejects_invalid() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    let vehicle = test
        .shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await?;
    let appointment = test
        .shop()
        .insert_appointment(customer.id, vehicle.id, slot(9, 0), 60, AppointmentStatus::Scheduled)
        .await?;

    let result = update_status(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(appointment.id),
        Json(UpdateStatusDto {
            status: "COMPLETED".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
