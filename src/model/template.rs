use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MessageTemplateDto {
    pub id: i32,
    pub name: String,
    /// Channel string: "SMS" or "EMAIL".
    pub channel: String,
    pub subject: Option<String>,
    pub body: String,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpsertTemplateDto {
    pub name: String,
    pub channel: String,
    pub subject: Option<String>,
    pub body: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NotificationDto {
    pub id: i32,
    pub appointment_id: i32,
    pub customer_id: i32,
    pub kind: String,
    pub channel: String,
    pub status: String,
    pub body: String,
    pub scheduled_at: NaiveDateTime,
    pub sent_at: Option<NaiveDateTime>,
    pub error: Option<String>,
}
