use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_CUSTOMER_ID_KEY: &str = "curbside:customer:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCustomerId(pub String);

impl SessionCustomerId {
    /// Insert customer ID into session
    pub async fn insert(session: &Session, customer_id: i32) -> Result<(), Error> {
        session
            .insert(
                SESSION_CUSTOMER_ID_KEY,
                SessionCustomerId(customer_id.to_string()),
            )
            .await?;

        Ok(())
    }

    /// Get customer ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionCustomerId>(SESSION_CUSTOMER_ID_KEY)
            .await?
            .map(|SessionCustomerId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session customer id: {}", e))
                })
            })
            .transpose()
    }
}
