//! Browser-side REST calls against the Curbside API.
//!
//! Only compiled for the web target; server-side rendering never issues
//! these requests. Errors are flattened to display strings for toasts.

#![cfg(feature = "web")]

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{
    api::ErrorDto,
    appointment::{AppointmentDto, AvailabilityDto, BookingRequestDto},
    auth::{AdminLoginDto, TokenDto},
    customer::{CustomerMatchDto, NewVehicleDto, VehicleDto},
    service::ServiceOperationDto,
};

/// Extract a readable error message from a non-2xx response.
async fn error_message(response: Response) -> String {
    let status = response.status();

    if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        format!("Request failed with status {}", status)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if (200..300).contains(&response.status()) {
        response
            .json::<T>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    } else {
        Err(error_message(response).await)
    }
}

async fn get_json<T: DeserializeOwned>(url: &str, token: Option<&str>) -> Result<T, String> {
    let mut request = Request::get(url).credentials(reqwasm::http::RequestCredentials::Include);

    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}

async fn send_json<T: DeserializeOwned, B: Serialize>(
    method: &str,
    url: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, String> {
    let payload =
        serde_json::to_string(body).map_err(|e| format!("Failed to encode request: {}", e))?;

    let mut request = Request::new(url)
        .method(match method {
            "POST" => reqwasm::http::Method::POST,
            "PUT" => reqwasm::http::Method::PUT,
            _ => reqwasm::http::Method::PATCH,
        })
        .credentials(reqwasm::http::RequestCredentials::Include)
        .header("Content-Type", "application/json")
        .body(payload);

    if let Some(token) = token {
        request = request.header("Authorization", &format!("Bearer {}", token));
    }

    let response = request
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    read_json(response).await
}

pub async fn get_services() -> Result<Vec<ServiceOperationDto>, String> {
    get_json("/api/services", None).await
}

pub async fn get_availability(date: &str) -> Result<AvailabilityDto, String> {
    get_json(&format!("/api/availability?date={}", date), None).await
}

pub async fn create_booking(request: &BookingRequestDto) -> Result<AppointmentDto, String> {
    send_json("POST", "/api/appointments", None, request).await
}

/// `None` means nobody is signed in; the profile page shows the booking
/// prompt instead of an error.
pub async fn get_profile() -> Result<Option<CustomerMatchDto>, String> {
    let response = Request::get("/api/profile")
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        404 => Ok(None),
        _ => read_json(response).await.map(Some),
    }
}

pub async fn add_vehicle(request: &NewVehicleDto) -> Result<VehicleDto, String> {
    send_json("POST", "/api/profile/vehicles", None, request).await
}

pub async fn delete_vehicle(vehicle_id: i32) -> Result<(), String> {
    let response = Request::new(&format!("/api/profile/vehicles/{}", vehicle_id))
        .method(reqwasm::http::Method::DELETE)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if (200..300).contains(&response.status()) {
        Ok(())
    } else {
        Err(error_message(response).await)
    }
}

pub async fn admin_login(request: &AdminLoginDto) -> Result<TokenDto, String> {
    send_json("POST", "/api/admin/login", None, request).await
}

pub async fn get_admin_appointments(
    token: &str,
    date: &str,
) -> Result<Vec<AppointmentDto>, String> {
    get_json(
        &format!("/api/admin/appointments?date={}", date),
        Some(token),
    )
    .await
}

pub async fn update_appointment_status(
    token: &str,
    appointment_id: i32,
    status: &str,
) -> Result<AppointmentDto, String> {
    let body = crate::model::appointment::UpdateStatusDto {
        status: status.to_string(),
    };

    send_json(
        "PATCH",
        &format!("/api/admin/appointments/{}/status", appointment_id),
        Some(token),
        &body,
    )
    .await
}
