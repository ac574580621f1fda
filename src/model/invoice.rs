use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InvoiceDto {
    pub id: i32,
    pub appointment_id: i32,
    pub customer_id: i32,
    /// Status string, e.g. "ISSUED".
    pub status: String,
    pub line_items: Vec<LineItemDto>,
    pub payments: Vec<PaymentDto>,
    pub subtotal_cents: i64,
    pub paid_cents: i64,
    pub balance_cents: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LineItemDto {
    pub id: i32,
    pub description: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PaymentDto {
    pub id: i32,
    pub amount_cents: i64,
    pub method: String,
    pub paid_at: NaiveDateTime,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RecordPaymentDto {
    pub amount_cents: i64,
    pub method: String,
}
