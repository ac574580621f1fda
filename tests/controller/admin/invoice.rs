//! Tests for invoice generation and payment recording.

use axum::{
    body::to_bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use curbside::{
    model::invoice::{InvoiceDto, RecordPaymentDto},
    server::{
        controller::admin::invoice::{generate_invoice, get_invoice, record_payment},
        model::app::AppState,
    },
};
use curbside_test_utils::prelude::*;
use entity::{appointment::AppointmentStatus, invoice::InvoiceStatus};

use crate::controller::admin_headers;

async fn setup_appointment_with_service(
    test: &TestSetup,
) -> Result<entity::appointment::Model, TestError> {
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
        .insert_appointment(
            customer.id,
            vehicle.id,
            Utc::now().naive_utc(),
            60,
            AppointmentStatus::Completed,
        )
        .await?;
    let operation = test.shop().insert_service_operation("Oil Change", 8900, 60).await?;
    test.shop()
        .insert_appointment_service(appointment.id, operation.id, 8900, 60)
        .await?;

    Ok(appointment)
}

#[tokio::test]
/// Expect the invoice to snapshot the appointment's service lines
async fn generate_creates_line_items() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let appointment = setup_appointment_with_service(&test).await?;

    let result = generate_invoice(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(appointment.id),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: InvoiceDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.line_items.len(), 1);
    assert_eq!(dto.subtotal_cents, 8900);
    assert_eq!(dto.balance_cents, 8900);
    assert_eq!(dto.status, "ISSUED");

    Ok(())
}

#[tokio::test]
/// Expect regenerating to return the same invoice, not a duplicate
async fn generate_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let appointment = setup_appointment_with_service(&test).await?;

    let first = generate_invoice(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(appointment.id),
    )
    .await
    .unwrap()
    .into_response();
    let first_body = to_bytes(first.into_body(), usize::MAX).await.unwrap();
    let first_dto: InvoiceDto = serde_json::from_slice(&first_body).unwrap();

    let second = generate_invoice(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(appointment.id),
    )
    .await
    .unwrap()
    .into_response();
    let second_body = to_bytes(second.into_body(), usize::MAX).await.unwrap();
    let second_dto: InvoiceDto = serde_json::from_slice(&second_body).unwrap();

    assert_eq!(first_dto.id, second_dto.id);

    Ok(())
}

#[tokio::test]
/// Expect a full payment to transition the invoice to PAID
async fn full_payment_marks_paid() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let appointment = setup_appointment_with_service(&test).await?;
    let invoice = test
        .shop()
        .insert_invoice(appointment.id, appointment.customer_id, InvoiceStatus::Issued)
        .await?;
    test.shop()
        .insert_line_item(invoice.id, "Oil Change", 1, 8900)
        .await?;

    let result = record_payment(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(invoice.id),
        Json(RecordPaymentDto {
            amount_cents: 8900,
            method: "card".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: InvoiceDto = serde_json::from_slice(&body).unwrap();
    assert_eq!(dto.status, "PAID");
    assert_eq!(dto.balance_cents, 0);

    Ok(())
}

#[tokio::test]
/// Expect 409 when paying a void invoice
async fn void_invoice_rejects_payment() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let appointment = setup_appointment_with_service(&test).await?;
    let invoice = test
        .shop()
        .insert_invoice(appointment.id, appointment.customer_id, InvoiceStatus::Void)
        .await?;

    let result = record_payment(
        State(test.state::<AppState>()),
        admin_headers(),
        Path(invoice.id),
        Json(RecordPaymentDto {
            amount_cents: 100,
            method: "card".to_string(),
        }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 404 for a missing invoice
async fn get_missing_invoice_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = get_invoice(State(test.state::<AppState>()), admin_headers(), Path(9999)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
