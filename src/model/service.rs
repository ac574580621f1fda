use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ServiceOperationDto {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub duration_minutes: i32,
}
