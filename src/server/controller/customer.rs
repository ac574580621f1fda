use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, customer::CustomerMatchDto},
    server::{
        controller::util::{
            auth::require_admin,
            dto::{customer_dto, vehicle_dto},
        },
        error::Error,
        model::app::AppState,
        service::customer::CustomerService,
    },
};

pub static CUSTOMER_TAG: &str = "customer";

#[derive(Deserialize)]
pub struct LookupParams {
    pub phone: String,
}

/// Look up customers by phone number for the quick-add form
///
/// The input is normalized to digits before matching. Every match is
/// returned so the dashboard can disambiguate; an empty list means a new
/// customer record will be created on booking.
#[utoipa::path(
    get,
    path = "/api/customers/lookup",
    tag = CUSTOMER_TAG,
    params(
        ("phone" = String, Query, description = "Phone number in any common format")
    ),
    responses(
        (status = 200, description = "Matching customers with their vehicles", body = Vec<CustomerMatchDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn lookup_customers(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Query<LookupParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let customer_service = CustomerService::new(&state.db);

    let matches = customer_service.lookup_by_phone(&params.phone).await?;

    let dtos: Vec<CustomerMatchDto> = matches
        .into_iter()
        .map(|m| CustomerMatchDto {
            customer: customer_dto(&m.customer),
            vehicles: m.vehicles.iter().map(vehicle_dto).collect(),
        })
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}
