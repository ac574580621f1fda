//! Tests for the analytics summary endpoint.

use axum::{
    body::to_bytes,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use curbside::{
    model::analytics::AnalyticsSummaryDto,
    server::{
        controller::admin::analytics::{get_summary, AnalyticsParams},
        model::app::AppState,
    },
};
use curbside_test_utils::prelude::*;
use entity::appointment::AppointmentStatus;

use crate::controller::admin_headers;

#[tokio::test]
/// Expect status counts and revenue aggregated over the range
async fn summary_aggregates_range() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    let vehicle = test
        .shop()
        .insert_vehicle(customer.id, 2017, "Honda", "Civic")
        .await?;

    let in_range = NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();
    let out_of_range = NaiveDate::from_ymd_opt(2026, 4, 1)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap();

    test.shop()
        .insert_appointment(customer.id, vehicle.id, in_range, 60, AppointmentStatus::Completed)
        .await?;
    test.shop()
        .insert_appointment(
            customer.id,
            vehicle.id,
            out_of_range,
            60,
            AppointmentStatus::Scheduled,
        )
        .await?;

    let result = get_summary(
        State(test.state::<AppState>()),
        admin_headers(),
        Query(AnalyticsParams {
            from: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let dto: AnalyticsSummaryDto = serde_json::from_slice(&body).unwrap();

    assert_eq!(dto.appointments_by_status.len(), 1);
    assert_eq!(dto.appointments_by_status[0].status, "COMPLETED");
    assert_eq!(dto.appointments_by_status[0].count, 1);

    Ok(())
}
