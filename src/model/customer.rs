use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct VehicleDto {
    pub id: i32,
    pub year: i16,
    pub make: String,
    pub model: String,
    /// Display label derived from year/make/model, e.g. "2019 Subaru Outback".
    pub label: String,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
}

/// A single hit from the phone lookup. Multiple hits mean the dashboard has
/// to disambiguate before filling the quick-add form.
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CustomerMatchDto {
    pub customer: CustomerDto,
    pub vehicles: Vec<VehicleDto>,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateProfileDto {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NewVehicleDto {
    pub year: i16,
    pub make: String,
    pub model: String,
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub notes: Option<String>,
}
