use serde::{Deserialize, Serialize};

/// JSON body returned for any failed API request.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// Human-readable error message.
    pub error: String,
}
