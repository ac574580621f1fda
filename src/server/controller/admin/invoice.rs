use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        invoice::{InvoiceDto, RecordPaymentDto},
    },
    server::{
        controller::{admin::ADMIN_TAG, util::auth::require_admin, util::dto::invoice_dto},
        data::invoice::InvoiceRepository,
        error::{booking::BookingError, Error},
        model::app::AppState,
        service::invoice::InvoiceService,
    },
};

/// Generate an invoice from an appointment's service lines
///
/// Idempotent: re-posting for an appointment that already has an invoice
/// returns the existing invoice.
#[utoipa::path(
    post,
    path = "/api/admin/appointments/{id}/invoice",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Appointment ID")
    ),
    responses(
        (status = 201, description = "Invoice for the appointment", body = InvoiceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Appointment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn generate_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let invoice_service = InvoiceService::new(&state.db);

    let invoice = invoice_service.generate_for_appointment(id).await?;

    let dto = invoice_dto(&state.db, &invoice).await?;

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Get an invoice with its line items, payments, and totals
#[utoipa::path(
    get,
    path = "/api/admin/invoices/{id}",
    tag = ADMIN_TAG,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice detail", body = InvoiceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let invoice_repository = InvoiceRepository::new(&state.db);

    let invoice = invoice_repository
        .find_by_id(id)
        .await?
        .ok_or(BookingError::InvoiceNotFound(id))?;

    let dto = invoice_dto(&state.db, &invoice).await?;

    Ok((StatusCode::OK, Json(dto)))
}

/// Record a payment against an invoice
///
/// An invoice whose balance reaches zero transitions to PAID automatically;
/// void invoices accept no payments.
#[utoipa::path(
    post,
    path = "/api/admin/invoices/{id}/payments",
    tag = ADMIN_TAG,
    request_body = RecordPaymentDto,
    params(
        ("id" = i32, Path, description = "Invoice ID")
    ),
    responses(
        (status = 200, description = "Invoice after the payment", body = InvoiceDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 404, description = "Invoice not found", body = ErrorDto),
        (status = 409, description = "Invoice is void", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(request): Json<RecordPaymentDto>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let invoice_service = InvoiceService::new(&state.db);

    let invoice = invoice_service
        .record_payment(id, request.amount_cents, &request.method)
        .await?;

    let dto = invoice_dto(&state.db, &invoice).await?;

    Ok((StatusCode::OK, Json(dto)))
}
