//! Tests for the notification tracking endpoint.

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use curbside::{
    model::template::NotificationDto,
    server::{
        controller::admin::notification::{list_notifications, NotificationParams},
        model::app::AppState,
    },
};
use curbside_test_utils::prelude::*;
use entity::{
    appointment::AppointmentStatus,
    notification::{NotificationKind, NotificationStatus},
};

use crate::controller::admin_headers;

#[tokio::test]
/// Expect only the requested appointment's notifications
async fn list_scopes_to_appointment() -> Result<(), TestError> {
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
        .insert_appointment(
            customer.id,
            vehicle.id,
            Utc::now().naive_utc(),
            60,
            AppointmentStatus::Scheduled,
        )
        .await?;
    let other = test
        .shop()
        .insert_appointment(
            customer.id,
            vehicle.id,
            Utc::now().naive_utc(),
            60,
            AppointmentStatus::Scheduled,
        )
        .await?;

    test.shop()
        .insert_notification(
            appointment.id,
            customer.id,
            NotificationKind::Confirmation,
            NotificationStatus::Sent,
            Utc::now().naive_utc(),
        )
        .await?;
    test.shop()
        .insert_notification(
            other.id,
            customer.id,
            NotificationKind::Confirmation,
            NotificationStatus::Pending,
            Utc::now().naive_utc(),
        )
        .await?;

    let result = list_notifications(
        State(test.state::<AppState>()),
        admin_headers(),
        Query(NotificationParams {
            appointment_id: appointment.id,
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dtos: Vec<NotificationDto> = serde_json::from_slice(&body).unwrap();
    assert_eq!(dtos.len(), 1);
    assert_eq!(dtos[0].appointment_id, appointment.id);
    assert_eq!(dtos[0].status, "SENT");

    Ok(())
}
