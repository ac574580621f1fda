use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    model::{analytics::AnalyticsSummaryDto, api::ErrorDto},
    server::{
        controller::{admin::ADMIN_TAG, util::auth::require_admin},
        error::Error,
        model::app::AppState,
        service::analytics::AnalyticsService,
    },
};

#[derive(Deserialize)]
pub struct AnalyticsParams {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Dashboard analytics summary for a date range
///
/// Appointment counts by status, revenue per day from recorded payments, and
/// the most frequently booked services.
#[utoipa::path(
    get,
    path = "/api/admin/analytics",
    tag = ADMIN_TAG,
    params(
        ("from" = String, Query, description = "Range start, YYYY-MM-DD (inclusive)"),
        ("to" = String, Query, description = "Range end, YYYY-MM-DD (inclusive)")
    ),
    responses(
        (status = 200, description = "Analytics summary", body = AnalyticsSummaryDto),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_summary(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Query<AnalyticsParams>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&headers, &state.config)?;

    let analytics_service = AnalyticsService::new(&state.db);

    let summary = analytics_service.summary(params.from, params.to).await?;

    Ok((StatusCode::OK, Json(summary)))
}
