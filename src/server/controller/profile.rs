use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CustomerMatchDto, NewVehicleDto, UpdateProfileDto, VehicleDto},
    },
    server::{
        controller::util::dto::{customer_dto, vehicle_dto},
        data::{customer::CustomerRepository, vehicle::VehicleRepository},
        error::Error,
        model::{app::AppState, session::customer::SessionCustomerId},
        util::{phone::normalize_phone, vehicle::normalize_vin},
    },
};

pub static PROFILE_TAG: &str = "profile";

fn customer_not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Customer not found".to_string(),
        }),
    )
        .into_response()
}

/// Resolve the session's customer, clearing the session when the record has
/// been removed from under it.
async fn session_customer(
    state: &AppState,
    session: &Session,
) -> Result<Option<entity::customer::Model>, Error> {
    let customer_repository = CustomerRepository::new(&state.db);

    let customer_id = match SessionCustomerId::get(session).await? {
        Some(customer_id) => customer_id,
        None => return Ok(None),
    };

    match customer_repository.find_by_id(customer_id).await? {
        Some(customer) if customer.archived_at.is_none() => Ok(Some(customer)),
        _ => {
            // Clear session for customer no longer in the database
            session.clear().await;

            tracing::warn!(
                "Failed to find customer ID {} in database despite having an active session;
                cleared session, they will need to book again to sign in",
                customer_id
            );

            Ok(None)
        }
    }
}

/// Get the logged-in customer's profile and vehicles
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile with vehicles", body = CustomerMatchDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let customer = match session_customer(&state, &session).await? {
        Some(customer) => customer,
        None => return Ok(customer_not_found()),
    };

    let vehicles = vehicle_repository.get_by_customer_id(customer.id).await?;

    let dto = CustomerMatchDto {
        customer: customer_dto(&customer),
        vehicles: vehicles.iter().map(vehicle_dto).collect(),
    };

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Update the logged-in customer's contact details
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = CustomerMatchDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let customer_repository = CustomerRepository::new(&state.db);
    let vehicle_repository = VehicleRepository::new(&state.db);

    let customer = match session_customer(&state, &session).await? {
        Some(customer) => customer,
        None => return Ok(customer_not_found()),
    };

    let normalized = normalize_phone(&request.phone);
    let updated = customer_repository
        .update_profile(
            customer,
            &request.first_name,
            &request.last_name,
            request.email.clone(),
            &request.phone,
            &normalized,
        )
        .await?;

    let vehicles = vehicle_repository.get_by_customer_id(updated.id).await?;

    let dto = CustomerMatchDto {
        customer: customer_dto(&updated),
        vehicles: vehicles.iter().map(vehicle_dto).collect(),
    };

    Ok((StatusCode::OK, Json(dto)).into_response())
}

/// Add a vehicle to the logged-in customer's garage
#[utoipa::path(
    post,
    path = "/api/profile/vehicles",
    tag = PROFILE_TAG,
    request_body = NewVehicleDto,
    responses(
        (status = 201, description = "Vehicle created", body = VehicleDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_vehicle(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<NewVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let customer = match session_customer(&state, &session).await? {
        Some(customer) => customer,
        None => return Ok(customer_not_found()),
    };

    let vehicle = vehicle_repository
        .create(
            customer.id,
            request.year,
            request.make.trim(),
            request.model.trim(),
            request.license_plate.clone(),
            request.vin.as_deref().map(normalize_vin),
            request.notes.clone(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(vehicle_dto(&vehicle))).into_response())
}

/// Update one of the logged-in customer's vehicles
#[utoipa::path(
    put,
    path = "/api/profile/vehicles/{id}",
    tag = PROFILE_TAG,
    request_body = NewVehicleDto,
    responses(
        (status = 200, description = "Vehicle updated", body = VehicleDto),
        (status = 404, description = "Customer or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<NewVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let customer = match session_customer(&state, &session).await? {
        Some(customer) => customer,
        None => return Ok(customer_not_found()),
    };

    let vehicle = match vehicle_repository.find_by_id(id).await? {
        Some(vehicle) if vehicle.customer_id == customer.id => vehicle,
        _ => return Ok(customer_not_found()),
    };

    let updated = vehicle_repository
        .update(
            vehicle,
            request.year,
            request.make.trim(),
            request.model.trim(),
            request.license_plate.clone(),
            request.vin.as_deref().map(normalize_vin),
            request.notes.clone(),
        )
        .await?;

    Ok((StatusCode::OK, Json(vehicle_dto(&updated))).into_response())
}

/// Remove a vehicle from the logged-in customer's garage
///
/// The vehicle is archived rather than deleted so past appointments keep
/// their reference.
#[utoipa::path(
    delete,
    path = "/api/profile/vehicles/{id}",
    tag = PROFILE_TAG,
    responses(
        (status = 204, description = "Vehicle archived"),
        (status = 404, description = "Customer or vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle_repository = VehicleRepository::new(&state.db);

    let customer = match session_customer(&state, &session).await? {
        Some(customer) => customer,
        None => return Ok(customer_not_found()),
    };

    let vehicle = match vehicle_repository.find_by_id(id).await? {
        Some(vehicle) if vehicle.customer_id == customer.id => vehicle,
        _ => return Ok(customer_not_found()),
    };

    vehicle_repository.archive(vehicle).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Log the customer out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = PROFILE_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_customer_id = SessionCustomerId::get(&session).await?;

    // Only clear the session if a customer is actually signed in; clearing a
    // session that doesn't exist returns a 500 from the store
    if maybe_customer_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::NO_CONTENT)
}
