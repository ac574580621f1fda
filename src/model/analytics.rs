use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct AnalyticsSummaryDto {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub appointments_by_status: Vec<StatusCountDto>,
    pub revenue_by_day: Vec<RevenuePointDto>,
    pub top_services: Vec<ServiceCountDto>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct StatusCountDto {
    pub status: String,
    pub count: u64,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RevenuePointDto {
    pub date: NaiveDate,
    pub revenue_cents: i64,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ServiceCountDto {
    pub service_id: i32,
    pub name: String,
    pub count: u64,
}
