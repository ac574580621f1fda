//! Tests for the session-authenticated profile endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use curbside::{
    model::customer::NewVehicleDto,
    server::{
        controller::profile::{add_vehicle, delete_vehicle, get_profile, logout},
        model::{app::AppState, session::customer::SessionCustomerId},
    },
};
use curbside_test_utils::prelude::*;

fn vehicle_request() -> NewVehicleDto {
    NewVehicleDto {
        year: 2019,
        make: "Subaru".to_string(),
        model: "Outback".to_string(),
        license_plate: Some("CRB-123".to_string()),
        vin: None,
        notes: None,
    }
}

#[tokio::test]
/// Expect 404 when nobody is signed in
async fn profile_without_session_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = get_profile(State(test.state::<AppState>()), test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 200 with the customer's profile when signed in
async fn profile_returns_customer() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    SessionCustomerId::insert(&test.session, customer.id)
        .await
        .unwrap();

    let result = get_profile(State(test.state::<AppState>()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 201 when adding a vehicle to the signed-in customer
async fn add_vehicle_creates_record() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    SessionCustomerId::insert(&test.session, customer.id)
        .await
        .unwrap();

    let result = add_vehicle(
        State(test.state::<AppState>()),
        test.session.clone(),
        Json(vehicle_request()),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 404 when deleting a vehicle that belongs to someone else
async fn delete_vehicle_checks_ownership() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let owner = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    let vehicle = test
        .shop()
        .insert_vehicle(owner.id, 2017, "Honda", "Civic")
        .await?;

    let other = test
        .shop()
        .insert_customer("Marco", "Vega", "5551112222")
        .await?;
    SessionCustomerId::insert(&test.session, other.id)
        .await
        .unwrap();

    let result = delete_vehicle(
        State(test.state::<AppState>()),
        test.session.clone(),
        Path(vehicle.id),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 204 and a cleared session on logout
async fn logout_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;
    let customer = test
        .shop()
        .insert_customer("Rosa", "Delgado", "5558675309")
        .await?;
    SessionCustomerId::insert(&test.session, customer.id)
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let remaining = SessionCustomerId::get(&test.session).await.unwrap();
    assert!(remaining.is_none());

    Ok(())
}

#[tokio::test]
/// Expect logout without a session to succeed rather than 500
async fn logout_without_session_is_no_content() -> Result<(), TestError> {
    let test = test_setup_with_shop_tables!()?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}
